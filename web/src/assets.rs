use std::cell::RefCell;
use std::rc::Rc;

use futures_channel::oneshot;
use gloo::events::EventListener;
use web_sys::HtmlImageElement;

use crate::{AppError, Result};

/// Loads an image and resolves once the browser has decoded it.
pub(crate) async fn load_image(url: &str) -> Result<HtmlImageElement> {
    let image = HtmlImageElement::new()?;
    let (sender, receiver) = oneshot::channel::<bool>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let notify = |loaded: bool| {
        let sender = sender.clone();
        move |_: &web_sys::Event| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(loaded);
            }
        }
    };
    let _on_load = EventListener::once(&image, "load", notify(true));
    let _on_error = EventListener::once(&image, "error", notify(false));

    image.set_src(url);
    log::debug!("loading image {}", url);

    match receiver.await {
        Ok(true) => {
            log::debug!(
                "loaded image {} ({}x{})",
                url,
                image.natural_width(),
                image.natural_height()
            );
            Ok(image)
        }
        Ok(false) | Err(_) => Err(AppError::ImageLoad(url.to_string())),
    }
}
