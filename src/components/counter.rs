use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::error::ConfigError;
use crate::timers::{BrowserHost, Disposer, TimerHost, WeakDisposer};

const FRAME_SLOT: &str = "frame";

/// Outcome of one animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Running(u64),
    Finished(u64),
}

impl Frame {
    pub fn value(self) -> u64 {
        match self {
            Frame::Running(value) | Frame::Finished(value) => value,
        }
    }
}

/// Count-up from zero to `target` over `duration_ms`, timed by frame
/// timestamps. The clock starts at the first frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
    started_at: Option<f64>,
    displayed: u64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32) -> Result<Self, ConfigError> {
        if duration_ms == 0 {
            return Err(ConfigError::NotPositive {
                widget: "counter",
                field: "duration",
            });
        }
        Ok(Self {
            target,
            duration_ms: f64::from(duration_ms),
            started_at: None,
            displayed: 0,
        })
    }

    #[cfg(test)]
    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn advance(&mut self, timestamp: f64) -> Frame {
        let started_at = *self.started_at.get_or_insert(timestamp);
        let progress = ((timestamp - started_at) / self.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.displayed = self.target;
            return Frame::Finished(self.target);
        }
        // A frame stamped earlier than its predecessor must not count down.
        let value = (progress * self.target as f64).floor() as u64;
        self.displayed = self.displayed.max(value);
        Frame::Running(self.displayed)
    }
}

/// `10000` -> `10.000`, pt-BR digit grouping.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// Drives `animation` one frame at a time, reporting every displayed value.
pub fn start<H: TimerHost>(
    host: &H,
    animation: CounterAnimation,
    on_change: impl Fn(u64) + 'static,
) -> Disposer<H::Handle> {
    let disposer = Disposer::new();
    request_frame(
        host.clone(),
        Rc::new(RefCell::new(animation)),
        disposer.downgrade(),
        Rc::new(on_change),
    );
    disposer
}

fn request_frame<H: TimerHost>(
    host: H,
    animation: Rc<RefCell<CounterAnimation>>,
    owner: WeakDisposer<H::Handle>,
    on_change: Rc<dyn Fn(u64)>,
) {
    let Some(disposer) = owner.upgrade() else {
        return;
    };
    let next_host = host.clone();
    let handle = host.animation_frame(Box::new(move |timestamp| {
        let frame = animation.borrow_mut().advance(timestamp);
        on_change(frame.value());
        if let Frame::Running(_) = frame {
            request_frame(next_host, animation, owner, on_change);
        }
    }));
    disposer.hold(FRAME_SLOT, handle);
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    #[prop_or(config::CUSTOMER_COUNT)]
    pub target: u64,
    #[prop_or(config::CUSTOMER_COUNT_DURATION_MS)]
    pub duration_ms: u32,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let count = use_state(|| 0u64);

    {
        let count = count.clone();
        use_effect_with_deps(
            move |(target, duration_ms): &(u64, u32)| {
                let disposer = match CounterAnimation::new(*target, *duration_ms) {
                    Ok(animation) => {
                        count.set(0);
                        start(&BrowserHost, animation, move |value| count.set(value))
                    }
                    Err(err) => {
                        log::error!("Counter not animated: {}", err);
                        count.set(*target);
                        Disposer::new()
                    }
                };
                move || disposer.dispose()
            },
            (props.target, props.duration_ms),
        );
    }

    html! { <span>{format_thousands(*count)}</span> }
}
