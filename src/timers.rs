//! Timer plumbing shared by the page widgets.
//!
//! Every widget schedules its work through a [`TimerHost`] and keeps the
//! returned handles in a [`Disposer`]. Dropping a handle cancels its task, so
//! disposing the widget's disposer on unmount guarantees none of its
//! callbacks run against a torn-down component.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[cfg(test)]
pub mod manual;

/// Source of timeouts, intervals and animation frames.
///
/// Handles cancel their task when dropped.
pub trait TimerHost: Clone + 'static {
    type Handle: 'static;

    fn timeout(&self, millis: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    fn interval(&self, millis: u32, task: Box<dyn FnMut()>) -> Self::Handle;

    /// Runs `task` before the next repaint with the frame timestamp in ms.
    fn animation_frame(&self, task: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

/// The browser event loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserHost;

/// Scheduled browser work. The payloads are only held for their `Drop`.
pub enum BrowserTimer {
    Timeout { _handle: Timeout },
    Interval { _handle: Interval },
    Frame { _handle: AnimationFrame },
    /// Nothing was scheduled, the browser refused the request.
    Inert,
}

pub struct AnimationFrame {
    id: i32,
    _closure: Closure<dyn FnMut(f64)>,
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

impl TimerHost for BrowserHost {
    type Handle = BrowserTimer;

    fn timeout(&self, millis: u32, task: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Timeout {
            _handle: Timeout::new(millis, task),
        }
    }

    fn interval(&self, millis: u32, task: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Interval {
            _handle: Interval::new(millis, task),
        }
    }

    fn animation_frame(&self, task: Box<dyn FnOnce(f64)>) -> BrowserTimer {
        let Some(window) = web_sys::window() else {
            log::warn!("No window available, animation frame skipped");
            return BrowserTimer::Inert;
        };
        let closure = Closure::once(move |timestamp: f64| task(timestamp));
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => BrowserTimer::Frame {
                _handle: AnimationFrame {
                    id,
                    _closure: closure,
                },
            },
            Err(err) => {
                log::error!("requestAnimationFrame failed: {:?}", err);
                BrowserTimer::Inert
            }
        }
    }
}

struct Slots<T> {
    held: Vec<(&'static str, T)>,
    disposed: bool,
}

impl<T> Slots<T> {
    fn take(&mut self, slot: &str) -> Option<T> {
        let index = self.held.iter().position(|(name, _)| *name == slot)?;
        Some(self.held.swap_remove(index).1)
    }
}

/// Cleanup list owning a widget's pending timer handles.
///
/// Handles are always dropped outside the inner borrow, since dropping one
/// may run host code that schedules or cancels other work.
pub struct Disposer<T> {
    slots: Rc<RefCell<Slots<T>>>,
}

impl<T> Clone for Disposer<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<T> Default for Disposer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Disposer<T> {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                held: Vec::new(),
                disposed: false,
            })),
        }
    }

    /// Keeps `handle` alive under `slot`, cancelling whatever held it before.
    /// Once disposed, the handle is cancelled straight away.
    pub fn hold(&self, slot: &'static str, handle: T) {
        let stale = {
            let mut slots = self.slots.borrow_mut();
            if slots.disposed {
                Some(handle)
            } else {
                let previous = slots.take(slot);
                slots.held.push((slot, handle));
                previous
            }
        };
        drop(stale);
    }

    /// Cancels the handle held under `slot`, if any.
    pub fn release(&self, slot: &str) {
        let released = self.slots.borrow_mut().take(slot);
        drop(released);
    }

    /// Cancels everything and refuses further handles.
    pub fn dispose(&self) {
        let held = {
            let mut slots = self.slots.borrow_mut();
            slots.disposed = true;
            std::mem::take(&mut slots.held)
        };
        drop(held);
    }

    pub fn is_disposed(&self) -> bool {
        self.slots.borrow().disposed
    }

    #[cfg(test)]
    pub fn holds(&self, slot: &str) -> bool {
        self.slots.borrow().held.iter().any(|(name, _)| *name == slot)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots.borrow().held.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Callbacks capture the disposer weakly: the handles it owns own those
    /// callbacks.
    pub fn downgrade(&self) -> WeakDisposer<T> {
        WeakDisposer {
            slots: Rc::downgrade(&self.slots),
        }
    }
}

pub struct WeakDisposer<T> {
    slots: Weak<RefCell<Slots<T>>>,
}

impl<T> Clone for WeakDisposer<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Weak::clone(&self.slots),
        }
    }
}

impl<T> WeakDisposer<T> {
    /// `None` once the widget is gone or disposed.
    pub fn upgrade(&self) -> Option<Disposer<T>> {
        let disposer = Disposer {
            slots: self.slots.upgrade()?,
        };
        (!disposer.is_disposed()).then_some(disposer)
    }
}
