use std::cell::Cell;
use std::rc::Rc;

use bitflags::bitflags;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent};

use crate::{AppError, Result};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    pub(crate) const fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub(crate) struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

/// Last known pointer position in logical pixels and the buttons held at that time.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct PointerState {
    pub x: f64,
    pub y: f64,
    pub buttons: MouseButtons,
}

impl PointerState {
    pub(crate) fn primary_pressed(&self) -> bool {
        self.buttons.contains(MouseButtons::LEFT)
    }
}

/// Drawing and pointer queries the board view needs from its host.
pub(crate) trait Renderer {
    type Atlas;

    /// Copies a `width` x `height` region at `(source_x, source_y)` of `atlas` to `(dest_x, dest_y)`.
    #[allow(clippy::too_many_arguments)]
    fn draw_region(
        &mut self,
        atlas: &Self::Atlas,
        dest_x: f64,
        dest_y: f64,
        width: f64,
        height: f64,
        source_x: f64,
        source_y: f64,
    );

    fn pointer_x(&self) -> f64;

    fn pointer_y(&self) -> f64;

    fn pointer_primary_pressed(&self) -> bool;

    fn set_pointer_cursor(&mut self, cursor: Cursor);
}

/// Draws into an unscaled offscreen canvas and blits it, scaled up, to the visible canvas on [`present`].
///
/// [`present`]: CanvasRenderer::present
pub(crate) struct CanvasRenderer {
    width: u32,
    height: u32,
    scale: Rc<Cell<u32>>,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    offscreen_ctx: CanvasRenderingContext2d,
    offscreen: HtmlCanvasElement,
    pointer: Rc<Cell<PointerState>>,
    cursor: Cursor,
    applied_cursor: Option<Cursor>,
    _listeners: Vec<EventListener>,
}

impl CanvasRenderer {
    pub(crate) const MAX_WIDTH: u32 = 1920;
    pub(crate) const MAX_HEIGHT: u32 = 1080;
    pub(crate) const MAX_SCALE: u32 = 12;

    pub(crate) fn new(canvas_id: &str, width: u32, height: u32, scale: u32) -> Result<Self> {
        let width = check_range("width", width, 1, Self::MAX_WIDTH)?;
        let height = check_range("height", height, 1, Self::MAX_HEIGHT)?;
        let scale = check_range("scale", scale, 1, Self::MAX_SCALE)?;

        let document = crate::utils::document()?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| AppError::MissingElement(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::NotACanvas(canvas_id.to_string()))?;
        let offscreen = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::NotACanvas("offscreen".to_string()))?;
        offscreen.set_width(width);
        offscreen.set_height(height);

        let ctx = context_2d(&canvas)?;
        let offscreen_ctx = context_2d(&offscreen)?;
        offscreen_ctx.set_image_smoothing_enabled(false);

        let pointer = Rc::new(Cell::new(PointerState::default()));
        let scale = Rc::new(Cell::new(scale));
        let listeners = pointer_listeners(&canvas, &pointer, &scale);

        let renderer = Self {
            width,
            height,
            scale,
            canvas,
            ctx,
            offscreen_ctx,
            offscreen,
            pointer,
            cursor: Cursor::Default,
            applied_cursor: None,
            _listeners: listeners,
        };
        renderer.apply_scale();
        log::debug!(
            "canvas {}x{} at scale {}",
            width,
            height,
            renderer.scale.get()
        );
        Ok(renderer)
    }

    pub(crate) fn scale(&self) -> u32 {
        self.scale.get()
    }

    pub(crate) fn set_scale(&mut self, scale: u32) -> Result<()> {
        let scale = check_range("scale", scale, 1, Self::MAX_SCALE)?;
        if scale != self.scale.get() {
            self.scale.set(scale);
            self.apply_scale();
            log::debug!("canvas scale: {}", scale);
        }
        Ok(())
    }

    fn apply_scale(&self) {
        let scale = self.scale.get();
        self.canvas.set_width(self.width * scale);
        self.canvas.set_height(self.height * scale);
    }

    pub(crate) fn clear(&self, color: &str) {
        self.offscreen_ctx.set_fill_style_str(color);
        self.offscreen_ctx
            .fill_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
    }

    /// Copies the offscreen frame to the visible canvas and applies the requested cursor.
    pub(crate) fn present(&mut self) -> Result<()> {
        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let scale = f64::from(self.scale.get());

        // resizing the canvas resets the context state
        self.ctx.set_image_smoothing_enabled(false);
        self.ctx
            .draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &self.offscreen,
                0.0,
                0.0,
                width,
                height,
                0.0,
                0.0,
                width * scale,
                height * scale,
            )?;

        if self.applied_cursor != Some(self.cursor) {
            self.canvas
                .style()
                .set_property("cursor", self.cursor.css())?;
            self.applied_cursor = Some(self.cursor);
        }
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    type Atlas = HtmlImageElement;

    fn draw_region(
        &mut self,
        atlas: &Self::Atlas,
        dest_x: f64,
        dest_y: f64,
        width: f64,
        height: f64,
        source_x: f64,
        source_y: f64,
    ) {
        if let Err(err) = self
            .offscreen_ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                atlas,
                source_x,
                source_y,
                width,
                height,
                dest_x.floor(),
                dest_y.floor(),
                width,
                height,
            )
        {
            log::warn!("draw_region failed: {:?}", err);
        }
    }

    fn pointer_x(&self) -> f64 {
        self.pointer.get().x
    }

    fn pointer_y(&self) -> f64 {
        self.pointer.get().y
    }

    fn pointer_primary_pressed(&self) -> bool {
        self.pointer.get().primary_pressed()
    }

    fn set_pointer_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}

fn check_range(name: &'static str, value: u32, min: u32, max: u32) -> Result<u32> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")?
        .ok_or(AppError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| AppError::NoContext)
}

/// Mirrors mouse events on `canvas` into `pointer`, converted to logical pixels.
fn pointer_listeners(
    canvas: &HtmlCanvasElement,
    pointer: &Rc<Cell<PointerState>>,
    scale: &Rc<Cell<u32>>,
) -> Vec<EventListener> {
    let mut listeners: Vec<EventListener> = ["mousemove", "mousedown", "mouseup"]
        .into_iter()
        .map(|event_type| {
            let pointer = pointer.clone();
            let scale = scale.clone();
            EventListener::new(canvas, event_type, move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let scale = f64::from(scale.get().max(1));
                let state = PointerState {
                    x: f64::from(event.offset_x()) / scale,
                    y: f64::from(event.offset_y()) / scale,
                    buttons: MouseButtons::from_bits_truncate(event.buttons()),
                };
                log::trace!("pointer {}: {:?}", event_type, state);
                pointer.set(state);
            })
        })
        .collect();

    let pointer = pointer.clone();
    listeners.push(EventListener::new(canvas, "mouseleave", move |_| {
        log::trace!("pointer left canvas");
        pointer.set(PointerState {
            x: -1.0,
            y: -1.0,
            buttons: MouseButtons::empty(),
        });
    }));
    listeners
}
