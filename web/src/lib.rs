use clap::Parser;
use wasm_bindgen::prelude::*;

pub use error::*;

mod app;
mod assets;
mod clock;
mod error;
mod layout;
mod renderer;
mod settings;
mod utils;
mod view;

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = utils::window()
        .and_then(|window| Ok(window.location().hash()?))
        .unwrap_or_default();

    let args = settings::Args::try_parse_from(location_hash.split(['#', '&']))
        .expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    wasm_bindgen_futures::spawn_local(async move {
        match app::App::start(args).await {
            Ok(()) => log::debug!("App started"),
            Err(err) => log::error!("App failed to start: {}", err),
        }
    });
}
