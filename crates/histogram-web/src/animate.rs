// File: crates/histogram-web/src/animate.rs
// Summary: requestAnimationFrame loop that drives the transitions of one mounted graphic.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use histogram_core::geometry::fmt_num;
use histogram_core::Transition;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

/// Maps requestAnimationFrame timestamps onto time since the first frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    start: Option<f64>,
    end_ms: f64,
}

impl FrameClock {
    pub fn new(end_ms: f64) -> Self {
        Self { start: None, end_ms }
    }

    /// Elapsed milliseconds at `timestamp` and whether another frame is needed.
    /// The first call fixes the start, so it always reports 0 elapsed.
    pub fn tick(&mut self, timestamp: f64) -> (f64, bool) {
        let start = *self.start.get_or_insert(timestamp);
        let elapsed = (timestamp - start).max(0.0);
        (elapsed, elapsed < self.end_ms)
    }
}

/// Elements with pending transitions plus the frame callback animating them.
/// Dropping (or cancelling) it stops the loop.
pub struct Animation {
    window: Window,
    targets: Vec<(Element, Vec<Transition>)>,
    clock: Cell<FrameClock>,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Animation {
    /// Start animating `targets`. Returns `None` when there is nothing to animate.
    pub fn start(window: &Window, targets: Vec<(Element, Vec<Transition>)>) -> Option<Rc<Self>> {
        if targets.is_empty() {
            return None;
        }
        let end_ms = targets
            .iter()
            .flat_map(|(_, ts)| ts.iter().map(Transition::end_ms))
            .fold(0.0, f64::max);
        let anim = Rc::new(Self {
            window: window.clone(),
            targets,
            clock: Cell::new(FrameClock::new(end_ms)),
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });

        // The callback only holds a weak reference; the mount owns the animation.
        let weak: Weak<Self> = Rc::downgrade(&anim);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(anim) = weak.upgrade() {
                anim.frame(timestamp);
            }
        }) as Box<dyn FnMut(f64)>);
        *anim.callback.borrow_mut() = Some(closure);
        anim.request();
        Some(anim)
    }

    /// Stop the loop; attributes keep whatever value the last frame wrote.
    pub fn cancel(&self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = self.window.cancel_animation_frame(handle) {
                tracing::warn!(?e, "cancelAnimationFrame failed");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }

    fn frame(&self, timestamp: f64) {
        self.handle.set(None);
        let mut clock = self.clock.get();
        let (elapsed, more) = clock.tick(timestamp);
        self.clock.set(clock);
        for (element, transitions) in &self.targets {
            for t in transitions {
                // Ignore failures on nodes removed mid-flight.
                let _ = element.set_attribute(t.attr, &fmt_num(t.value_at(elapsed)));
            }
        }
        if more {
            self.request();
        }
    }

    fn request(&self) {
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else { return };
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(e) => tracing::warn!(?e, "requestAnimationFrame failed"),
        }
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        self.cancel();
    }
}
