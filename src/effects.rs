//! Small page effects that sit next to the particle background: the logo
//! icon tilting on hover and content cards fading in as they scroll into
//! view.

use crate::dom_helpers::{self, Listener};
use js_sys::Array;
use tracing::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

pub const LOGO_SELECTOR: &str = ".frameiq-logo";
pub const LOGO_ICON_SELECTOR: &str = ".frameiq-logo-icon";
pub const ICON_HOVER_TRANSFORM: &str = "scale(1.2) rotate(10deg)";
pub const ICON_REST_TRANSFORM: &str = "scale(1) rotate(0deg)";

pub const REVEAL_SELECTOR: &str = ".frameiq-card, .frameiq-hover-lift";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];
pub const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

fn set_icon_transform(logo: &Element, transform: &str) -> Result<(), JsValue> {
    let icon = match logo.query_selector(LOGO_ICON_SELECTOR)? {
        Some(icon) => icon,
        None => return Ok(()),
    };
    if let Some(icon) = icon.dyn_ref::<HtmlElement>() {
        icon.style().set_property("transform", transform)?;
    }
    Ok(())
}

fn on_logo(logo: HtmlElement, transform: &'static str) -> impl FnMut(web_sys::Event) {
    move |_| {
        if let Err(err) = set_icon_transform(&logo, transform) {
            error!(?err, "failed to transform logo icon");
        }
    }
}

pub struct LogoHover {
    listeners: Vec<Listener>,
}

impl LogoHover {
    pub fn attach(document: &Document) -> Result<LogoHover, JsValue> {
        let mut listeners = Vec::new();
        for logo in dom_helpers::select_all(document, LOGO_SELECTOR)? {
            listeners.push(Listener::attach(
                &logo,
                "mouseenter",
                on_logo(logo.clone(), ICON_HOVER_TRANSFORM),
            )?);
            listeners.push(Listener::attach(
                &logo,
                "mouseleave",
                on_logo(logo.clone(), ICON_REST_TRANSFORM),
            )?);
        }
        debug!(logos = listeners.len() / 2, "logo hover attached");
        Ok(LogoHover { listeners })
    }

    pub fn dispose(&mut self) {
        self.listeners.clear();
    }
}

pub struct ScrollReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ScrollReveal {
    pub fn attach(document: &Document) -> Result<ScrollReveal, JsValue> {
        let callback = Closure::wrap(Box::new(|entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(card) = entry.target().dyn_ref::<HtmlElement>() {
                    if let Err(err) = dom_helpers::apply_style(card, &REVEALED_STYLE) {
                        error!(?err, "failed to reveal card");
                    }
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let cards = dom_helpers::select_all(document, REVEAL_SELECTOR)?;
        for card in &cards {
            dom_helpers::apply_style(card, &HIDDEN_STYLE)?;
            observer.observe(card);
        }
        debug!(cards = cards.len(), "scroll reveal attached");

        Ok(ScrollReveal {
            observer,
            _callback: callback,
        })
    }

    pub fn dispose(&mut self) {
        self.observer.disconnect();
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.dispose();
    }
}
