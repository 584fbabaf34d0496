//! Animated network background for the FrameIQ site.
//!
//! A fixed set of glowing particles drifts across a full-viewport canvas,
//! joined by faint lines when close and pushed away by the pointer. The page
//! also gets a logo hover tilt and a fade-in for cards as they scroll into
//! view.
//!
//! Everything under `field`, `particle`, `renderer` and friends is
//! host-independent and draws through [`surface::Surface`]. The browser side
//! lives in `app`, `effects` and `dom_helpers`.

mod utils;

pub mod app;
pub mod color;
pub mod dom_helpers;
pub mod effects;
pub mod events;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod renderer;
pub mod settings;
pub mod surface;

pub use app::{ParticleBackground, DEFAULT_SURFACE_ID};
pub use color::Color;
pub use events::{EventQueue, FieldEvent};
pub use field::ParticleField;
pub use particle::Particle;
pub use pointer::Pointer;
pub use renderer::{Connection, Renderer};
pub use settings::Settings;
pub use surface::Surface;

use effects::{LogoHover, ScrollReveal};
use wasm_bindgen::prelude::*;
use web_sys::console;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Installs the panic hook and the console log subscriber. Safe to call more
/// than once.
#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::try_set_as_global_default().ok();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

/// Every effect on the page, started together once the document is ready.
#[wasm_bindgen]
pub struct FrameIqEffects {
    background: ParticleBackground,
    logo: LogoHover,
    reveal: ScrollReveal,
}

#[wasm_bindgen]
impl FrameIqEffects {
    /// Call from a `DOMContentLoaded` handler. `surface_id` defaults to
    /// `frameiq-particles`.
    pub fn start(surface_id: Option<String>) -> Result<FrameIqEffects, JsValue> {
        initialize();
        let surface_id = surface_id.unwrap_or_else(|| DEFAULT_SURFACE_ID.to_owned());

        let window = dom_helpers::window()?;
        let document = dom_helpers::document(&window)?;
        let mut background = ParticleBackground::new(&surface_id)?;
        background.run()?;

        Ok(FrameIqEffects {
            background,
            logo: LogoHover::attach(&document)?,
            reveal: ScrollReveal::attach(&document)?,
        })
    }

    pub fn dispose(&mut self) {
        self.background.dispose();
        self.logo.dispose();
        self.reveal.dispose();
    }
}
