use web_sys::{Document, Window};

use crate::{AppError, Result};

/// Helper function to seed from JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;

    let high = (random() * f64::from(u32::MAX)) as u64;
    let low = (random() * f64::from(u32::MAX)) as u64;
    (high << 32) | low
}

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or(AppError::NoWindow)
}

pub(crate) fn document() -> Result<Document> {
    window()?.document().ok_or(AppError::NoDocument)
}

/// Pixel scale that fits the logical width into the window, as a whole number.
pub(crate) fn window_scale(logical_width: u32, max_scale: u32) -> Result<u32> {
    let window_width = window()?
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::from(logical_width));
    Ok(fit_scale(window_width, logical_width, max_scale))
}

pub(crate) fn fit_scale(window_width: f64, logical_width: u32, max_scale: u32) -> u32 {
    let scale = (window_width / f64::from(logical_width.max(1))).ceil();
    (scale as u32).clamp(1, max_scale)
}
