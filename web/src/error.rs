use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No global window")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("No element with id {0:?}")]
    MissingElement(String),
    #[error("Element {0:?} is not a canvas")]
    NotACanvas(String),
    #[error("2d rendering context is not available")]
    NoContext,
    #[error("Canvas {name} {value} is outside {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("Could not load image {0:?}")]
    ImageLoad(String),
    #[error("Invalid game setup: {0}")]
    Game(#[from] mastermind_core::GameError),
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}

pub type Result<T> = core::result::Result<T, AppError>;
