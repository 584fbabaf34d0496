//! Browser driver for the particle field.
//!
//! `ParticleBackground` owns the canvas, the field and the DOM listeners.
//! Nothing starts until `run()` is called, and `dispose()` stops the frame
//! loop and unregisters everything again.

use crate::dom_helpers::{self, Listener};
use crate::events::{EventQueue, FieldEvent};
use crate::field::ParticleField;
use crate::renderer::Renderer;
use crate::settings::Settings;
use rand::rngs::ThreadRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

pub const DEFAULT_SURFACE_ID: &str = "frameiq-particles";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

// Everything a frame touches, behind one RefCell
struct Stage {
    field: ParticleField,
    renderer: Renderer<CanvasRenderingContext2d>,
    canvas: HtmlCanvasElement,
    events: EventQueue,
    rng: ThreadRng,
}

impl Stage {
    fn tick(&mut self) {
        #[cfg(feature = "timing")]
        let _timer = crate::Timer::new("ParticleBackground::tick");

        for event in self.events.drain() {
            if let FieldEvent::Resized { width, height } = event {
                self.canvas.set_width(width as u32);
                self.canvas.set_height(height as u32);
            }
            self.field.handle_event(event, &mut self.rng);
        }
        self.field.frame(&mut self.renderer);
    }
}

type Listeners = Rc<RefCell<Vec<Listener>>>;

#[wasm_bindgen]
pub struct ParticleBackground {
    window: Window,
    stage: Rc<RefCell<Stage>>,
    events: EventQueue,
    listeners: Listeners,
    frame: FrameCallback,
    handle: Rc<Cell<Option<i32>>>,
}

// Requests the next frame. `handle` is left empty if the request fails, so a
// loop that could not re-arm no longer counts as running.
fn schedule(
    window: &Window,
    frame: &FrameCallback,
    handle: &Cell<Option<i32>>,
) -> Result<(), JsValue> {
    handle.set(None);
    if let Some(callback) = frame.borrow().as_ref() {
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        handle.set(Some(id));
    }
    Ok(())
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Finds (or creates) the canvas with `surface_id`, sizes it to the
    /// viewport and seeds the particles. Does not start animating.
    #[wasm_bindgen(constructor)]
    pub fn new(surface_id: &str) -> Result<ParticleBackground, JsValue> {
        let window = dom_helpers::window()?;
        let document = dom_helpers::document(&window)?;
        let canvas = dom_helpers::find_or_create_canvas(&document, surface_id)?;
        let (width, height) = dom_helpers::viewport_size(&window)?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let context = dom_helpers::context_2d(&canvas)?;

        let mut rng = rand::thread_rng();
        let field = ParticleField::new(width, height, Settings::default(), &mut rng);
        let events = EventQueue::new();
        let stage = Stage {
            field,
            renderer: Renderer::new(context),
            canvas,
            events: events.clone(),
            rng,
        };

        Ok(ParticleBackground {
            window,
            stage: Rc::new(RefCell::new(stage)),
            events,
            listeners: Rc::new(RefCell::new(Vec::new())),
            frame: Rc::new(RefCell::new(None)),
            handle: Rc::new(Cell::new(None)),
        })
    }

    /// Subscribes to viewport and pointer events and starts the frame loop.
    ///
    /// On failure nothing stays attached and a later `run()` starts over.
    pub fn run(&mut self) -> Result<(), JsValue> {
        if self.is_running() {
            return Ok(());
        }
        // Leftovers from a loop that stopped on its own
        self.dispose();

        if let Err(err) = self.start() {
            self.dispose();
            return Err(err);
        }
        info!("particle background running");
        Ok(())
    }

    /// Stops the frame loop and removes every listener. Safe to call twice.
    pub fn dispose(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                error!(?err, "failed to cancel frame");
            }
        }
        self.listeners.borrow_mut().clear();
        if self.frame.borrow_mut().take().is_some() {
            info!("particle background disposed");
        }
    }

    /// Replaces the particle set on the next frame.
    pub fn reseed(&self) {
        self.events.push(FieldEvent::Reseed);
    }

    /// True while a frame is pending or being drawn.
    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }

    pub fn particle_count(&self) -> usize {
        self.stage.borrow().field.particles().len()
    }
}

impl ParticleBackground {
    fn start(&mut self) -> Result<(), JsValue> {
        self.listen()?;

        let stage = self.stage.clone();
        let window = self.window.clone();
        let frame = self.frame.clone();
        let handle = self.handle.clone();
        let listeners = self.listeners.clone();
        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            stage.borrow_mut().tick();
            if let Err(err) = schedule(&window, &frame, &handle) {
                error!(?err, "failed to schedule frame, stopping");
                listeners.borrow_mut().clear();
            }
        }) as Box<dyn FnMut()>));

        schedule(&self.window, &self.frame, &self.handle)
    }

    fn listen(&self) -> Result<(), JsValue> {
        let mut listeners = self.listeners.borrow_mut();
        listeners.clear();

        let events = self.events.clone();
        let window = self.window.clone();
        listeners.push(Listener::attach(&self.window, "resize", move |_| {
            match dom_helpers::viewport_size(&window) {
                Ok((width, height)) => events.push(FieldEvent::Resized { width, height }),
                Err(err) => error!(?err, "failed to read viewport size"),
            }
        })?);

        let events = self.events.clone();
        listeners.push(Listener::attach(&self.window, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                events.push(FieldEvent::PointerMoved {
                    x: mouse.client_x() as f64,
                    y: mouse.client_y() as f64,
                });
            }
        })?);

        let events = self.events.clone();
        listeners.push(Listener::attach(&self.window, "mouseout", move |_| {
            events.push(FieldEvent::PointerLeft);
        })?);
        Ok(())
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.dispose();
    }
}
