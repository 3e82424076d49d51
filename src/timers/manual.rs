//! Deterministic [`TimerHost`] with a virtual clock, for tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::{Rc, Weak};

use super::TimerHost;

enum Task {
    Once(Box<dyn FnOnce()>),
    Every(u64, Box<dyn FnMut()>),
}

struct Timer {
    due: u64,
    task: Task,
}

#[derive(Default)]
struct Queue {
    now: u64,
    next_id: u64,
    timers: BTreeMap<u64, Timer>,
    frames: Vec<(u64, Box<dyn FnOnce(f64)>)>,
    cancelled: HashSet<u64>,
    frame_requests: usize,
}

impl Queue {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub struct ManualHost {
    queue: Rc<RefCell<Queue>>,
}

pub struct ManualHandle {
    id: u64,
    queue: Weak<RefCell<Queue>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        let Some(queue) = self.queue.upgrade() else {
            return;
        };
        let removed = {
            let mut queue = queue.borrow_mut();
            queue.cancelled.insert(self.id);
            let timer = queue.timers.remove(&self.id);
            let frame = queue
                .frames
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| queue.frames.remove(index));
            (timer, frame)
        };
        drop(removed);
    }
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.queue.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.queue.borrow().timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.queue.borrow().frames.len()
    }

    /// Total animation frames ever requested.
    pub fn frame_requests(&self) -> usize {
        self.queue.borrow().frame_requests
    }

    pub fn advance(&self, millis: u64) {
        let target = self.now() + millis;
        self.advance_to(target);
    }

    /// Fires every timer due at or before `target`, in deadline order.
    pub fn advance_to(&self, target: u64) {
        loop {
            let next = {
                let queue = self.queue.borrow();
                queue
                    .timers
                    .iter()
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(id, timer)| (timer.due, **id))
                    .map(|(id, _)| *id)
            };
            let Some(id) = next else { break };

            let timer = {
                let mut queue = self.queue.borrow_mut();
                let timer = queue.timers.remove(&id).expect("timer selected above");
                queue.now = timer.due;
                timer
            };
            match timer.task {
                Task::Once(task) => task(),
                Task::Every(period, mut task) => {
                    task();
                    let mut queue = self.queue.borrow_mut();
                    if !queue.cancelled.contains(&id) {
                        queue.timers.insert(
                            id,
                            Timer {
                                due: timer.due + period,
                                task: Task::Every(period, task),
                            },
                        );
                    }
                }
            }
        }
        let mut queue = self.queue.borrow_mut();
        queue.now = queue.now.max(target);
    }

    /// Runs the frame callbacks requested so far. Frames requested while
    /// these run wait for the next call.
    pub fn frame(&self, timestamp: f64) {
        let frames = std::mem::take(&mut self.queue.borrow_mut().frames);
        for (id, task) in frames {
            if self.queue.borrow().cancelled.contains(&id) {
                continue;
            }
            task(timestamp);
        }
    }

    fn schedule(&self, due_in: u64, task: Task) -> ManualHandle {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id();
        let due = queue.now + due_in;
        queue.timers.insert(id, Timer { due, task });
        ManualHandle {
            id,
            queue: Rc::downgrade(&self.queue),
        }
    }
}

impl TimerHost for ManualHost {
    type Handle = ManualHandle;

    fn timeout(&self, millis: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        self.schedule(u64::from(millis), Task::Once(task))
    }

    fn interval(&self, millis: u32, task: Box<dyn FnMut()>) -> ManualHandle {
        let period = u64::from(millis.max(1));
        self.schedule(period, Task::Every(period, task))
    }

    fn animation_frame(&self, task: Box<dyn FnOnce(f64)>) -> ManualHandle {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id();
        queue.frames.push((id, task));
        queue.frame_requests += 1;
        ManualHandle {
            id,
            queue: Rc::downgrade(&self.queue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_in_deadline_order() {
        let host = ManualHost::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut handles = Vec::new();
        for (label, delay) in [("late", 300), ("early", 100), ("middle", 200)] {
            let log = log.clone();
            handles.push(host.timeout(delay, Box::new(move || log.borrow_mut().push(label))));
        }

        host.advance_to(1_000);
        assert_eq!(*log.borrow(), vec!["early", "middle", "late"]);
        assert_eq!(host.now(), 1_000);
    }

    #[test]
    fn interval_repeats_until_its_handle_drops() {
        let host = ManualHost::new();
        let ticks = Rc::new(RefCell::new(Vec::new()));
        let handle = {
            let ticks = ticks.clone();
            let clock = host.clone();
            host.interval(100, Box::new(move || ticks.borrow_mut().push(clock.now())))
        };

        host.advance_to(350);
        assert_eq!(*ticks.borrow(), vec![100, 200, 300]);

        drop(handle);
        host.advance_to(1_000);
        assert_eq!(ticks.borrow().len(), 3);
    }

    #[test]
    fn dropped_frame_request_never_runs() {
        let host = ManualHost::new();
        let ran = Rc::new(RefCell::new(false));
        let handle = {
            let ran = ran.clone();
            host.animation_frame(Box::new(move |_| *ran.borrow_mut() = true))
        };
        assert_eq!(host.pending_frames(), 1);

        drop(handle);
        host.frame(16.0);
        assert!(!*ran.borrow());
        assert_eq!(host.frame_requests(), 1);
    }
}
