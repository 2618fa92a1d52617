use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use mastermind_core::{BoardConfig, BoardEngine};
use web_sys::HtmlImageElement;

use crate::assets;
use crate::clock::DeltaTime;
use crate::layout;
use crate::renderer::CanvasRenderer;
use crate::settings::Args;
use crate::utils::{self, js_random_seed, window_scale};
use crate::view::BoardView;
use crate::Result;

type FrameHandle = Rc<RefCell<Option<AnimationFrame>>>;

/// Everything one running game owns: the canvas, the sprite atlas, the engine and the frame clock.
pub(crate) struct App {
    renderer: CanvasRenderer,
    atlas: HtmlImageElement,
    engine: BoardEngine,
    view: BoardView,
    clock: DeltaTime,
    fixed_scale: bool,
    _listeners: Vec<EventListener>,
}

impl App {
    const CANVAS_ID: &'static str = "game_canvas";
    const CLEAR_COLOR: &'static str = "#050";

    pub(crate) async fn start(args: Args) -> Result<()> {
        let scale = match args.scale {
            Some(scale) => scale,
            None => window_scale(layout::WIDTH, CanvasRenderer::MAX_SCALE)?,
        };
        let renderer = CanvasRenderer::new(Self::CANVAS_ID, layout::WIDTH, layout::HEIGHT, scale)?;
        let atlas = assets::load_image(&args.atlas).await?;

        let seed = args.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);
        let config = BoardConfig::CLASSIC;
        let engine = BoardEngine::new(config, args.code_source(), seed)?;

        let app = Rc::new(RefCell::new(Self {
            renderer,
            atlas,
            engine,
            view: BoardView::new(config),
            clock: DeltaTime::new(),
            fixed_scale: args.scale.is_some(),
            _listeners: Vec::new(),
        }));
        let listeners = Self::window_listeners(Rc::downgrade(&app))?;
        app.borrow_mut()._listeners = listeners;

        schedule_frame(app, Rc::new(RefCell::new(None)));
        Ok(())
    }

    /// One animation frame: a logic tick followed by a draw.
    fn frame(&mut self, timestamp: f64) {
        let dt = self.clock.update(timestamp);
        log::trace!("frame at {:.1}ms, dt {:.4}s", timestamp, dt);

        self.engine.update();

        self.renderer.clear(Self::CLEAR_COLOR);
        self.view.draw(&mut self.engine, &mut self.renderer, &self.atlas);
        if let Err(err) = self.renderer.present() {
            log::warn!("present failed: {}", err);
        }
    }

    fn on_resize(&mut self) {
        if self.fixed_scale {
            return;
        }
        let rescaled = window_scale(layout::WIDTH, CanvasRenderer::MAX_SCALE).and_then(|scale| {
            if scale == self.renderer.scale() {
                return Ok(());
            }
            self.renderer.set_scale(scale)
        });
        if let Err(err) = rescaled {
            log::warn!("could not rescale canvas: {}", err);
        }
    }

    fn on_visibility_change(&mut self) {
        log::debug!(
            "visibility changed, clock reset after dt {:.4}s",
            self.clock.dt()
        );
        self.clock.reset();
    }

    fn window_listeners(app: Weak<RefCell<Self>>) -> Result<Vec<EventListener>> {
        let window = utils::window()?;
        let document = utils::document()?;

        let resize = {
            let app = app.clone();
            EventListener::new(&window, "resize", move |_| {
                if let Some(app) = app.upgrade() {
                    app.borrow_mut().on_resize();
                }
            })
        };
        let visibility = EventListener::new(&document, "visibilitychange", move |_| {
            if let Some(app) = app.upgrade() {
                app.borrow_mut().on_visibility_change();
            }
        });
        Ok(vec![resize, visibility])
    }
}

/// Runs `App::frame` on every animation frame for as long as the page lives.
fn schedule_frame(app: Rc<RefCell<App>>, handle: FrameHandle) {
    let next_handle = handle.clone();
    let frame = request_animation_frame(move |timestamp| {
        app.borrow_mut().frame(timestamp);
        schedule_frame(app, next_handle);
    });
    *handle.borrow_mut() = Some(frame);
}
