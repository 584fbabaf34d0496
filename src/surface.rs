//! Immediate-mode 2D drawing surface.
//!
//! The renderer only ever talks to this trait. In the browser it is backed by
//! `CanvasRenderingContext2d`; tests use a recorder that captures calls.

use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn set_fill_color(&mut self, color: &str);
    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_shadow(&mut self, blur: f64, color: &str);
    fn fill(&mut self);
    fn stroke(&mut self);
}

impl Surface for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        if let Err(err) = CanvasRenderingContext2d::arc(self, x, y, radius, start_angle, end_angle) {
            warn!(?err, radius, "canvas rejected arc");
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.set_fill_style(&JsValue::from_str(color));
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.set_stroke_style(&JsValue::from_str(color));
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_shadow(&mut self, blur: f64, color: &str) {
        self.set_shadow_blur(blur);
        self.set_shadow_color(color);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }
}

#[cfg(test)]
pub(crate) mod recorder {
    use super::Surface;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Call {
        ClearRect(f64, f64, f64, f64),
        BeginPath,
        Arc(f64, f64, f64),
        MoveTo(f64, f64),
        LineTo(f64, f64),
        FillColor(String),
        StrokeColor(String),
        LineWidth(f64),
        Shadow(f64, String),
        Fill,
        Stroke,
    }

    #[derive(Default)]
    pub struct Recorder {
        pub calls: Vec<Call>,
    }

    impl Recorder {
        pub fn count(&self, call: &Call) -> usize {
            self.calls.iter().filter(|c| *c == call).count()
        }

        pub fn stroke_colors(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::StrokeColor(color) => Some(color.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for Recorder {
        fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.calls.push(Call::ClearRect(x, y, width, height));
        }
        fn begin_path(&mut self) {
            self.calls.push(Call::BeginPath);
        }
        fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64) {
            self.calls.push(Call::Arc(x, y, radius));
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::MoveTo(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::LineTo(x, y));
        }
        fn set_fill_color(&mut self, color: &str) {
            self.calls.push(Call::FillColor(color.to_owned()));
        }
        fn set_stroke_color(&mut self, color: &str) {
            self.calls.push(Call::StrokeColor(color.to_owned()));
        }
        fn set_line_width(&mut self, width: f64) {
            self.calls.push(Call::LineWidth(width));
        }
        fn set_shadow(&mut self, blur: f64, color: &str) {
            self.calls.push(Call::Shadow(blur, color.to_owned()));
        }
        fn fill(&mut self) {
            self.calls.push(Call::Fill);
        }
        fn stroke(&mut self) {
            self.calls.push(Call::Stroke);
        }
    }
}
