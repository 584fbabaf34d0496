//! Host events, queued for the frame loop.
//!
//! DOM callbacks never touch the field directly. They push a `FieldEvent`
//! and the next frame drains the queue before simulating, which keeps the
//! frame loop the only writer of pointer and surface state.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldEvent {
    PointerMoved { x: f64, y: f64 },
    PointerLeft,
    Resized { width: f64, height: f64 },
    Reseed,
}

/// Shared event buffer: DOM callbacks push, the frame loop drains.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    inner: Rc<RefCell<VecDeque<FieldEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: FieldEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Takes everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<FieldEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}
