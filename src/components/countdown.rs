use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::timers::{BrowserHost, Disposer, TimerHost};

const TICK_MILLIS: u32 = 1_000;
const TICK_SLOT: &str = "tick";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    #[cfg(test)]
    pub fn remaining(self) -> u32 {
        self.remaining
    }

    pub fn is_expired(self) -> bool {
        self.remaining == 0
    }

    /// One second later. Stays at zero once expired.
    pub fn tick(self) -> Self {
        Self {
            remaining: self.remaining.saturating_sub(1),
        }
    }

    pub fn label(self) -> String {
        format_clock(self.remaining)
    }
}

/// `MM:SS`, both parts zero padded.
pub fn format_clock(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Ticks once per second from `initial_seconds` down to zero, reporting every
/// new value. The tick is cancelled when zero is reached.
pub fn start<H: TimerHost>(
    host: &H,
    initial_seconds: u32,
    on_change: impl Fn(Countdown) + 'static,
) -> Disposer<H::Handle> {
    let disposer = Disposer::new();
    let countdown = Countdown::new(initial_seconds);
    if countdown.is_expired() {
        return disposer;
    }

    let current = Rc::new(Cell::new(countdown));
    let owner = disposer.downgrade();
    let tick = host.interval(
        TICK_MILLIS,
        Box::new(move || {
            let next = current.get().tick();
            current.set(next);
            on_change(next);
            if next.is_expired() {
                if let Some(disposer) = owner.upgrade() {
                    disposer.release(TICK_SLOT);
                }
            }
        }),
    );
    disposer.hold(TICK_SLOT, tick);
    disposer
}

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    #[prop_or(config::COUNTDOWN_SECONDS)]
    pub initial_seconds: u32,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let countdown = use_state(|| Countdown::new(props.initial_seconds));

    {
        let countdown = countdown.clone();
        use_effect_with_deps(
            move |initial_seconds: &u32| {
                countdown.set(Countdown::new(*initial_seconds));
                log::debug!("Countdown started at {}s", initial_seconds);
                let disposer = start(&BrowserHost, *initial_seconds, move |next| {
                    countdown.set(next);
                });
                move || {
                    log::debug!("Countdown torn down");
                    disposer.dispose();
                }
            },
            props.initial_seconds,
        );
    }

    html! {
        <div class="bg-pink-100 text-pink-700 font-black px-4 py-2 rounded-xl inline-flex items-center space-x-2 text-sm md:text-base border border-pink-200">
            <svg class="w-5 h-5 animate-pulse" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z" />
            </svg>
            <span>{format!("EXPIRA EM: {}", countdown.label())}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::manual::{ManualHandle, ManualHost};
    use proptest::prelude::*;
    use std::cell::RefCell;

    fn recorded(host: &ManualHost, initial: u32) -> (Disposer<ManualHandle>, Rc<RefCell<Vec<u32>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let disposer = start(host, initial, move |next| sink.borrow_mut().push(next.remaining()));
        (disposer, seen)
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(900), "15:00");
        assert_eq!(format_clock(59), "00:59");
    }

    #[test]
    fn ticks_once_per_second() {
        let host = ManualHost::new();
        let (_disposer, seen) = recorded(&host, 900);

        host.advance_to(999);
        assert!(seen.borrow().is_empty());
        host.advance_to(3_000);
        assert_eq!(*seen.borrow(), vec![899, 898, 897]);
    }

    #[test]
    fn stops_scheduling_at_zero() {
        let host = ManualHost::new();
        let (disposer, seen) = recorded(&host, 3);

        host.advance_to(10_000);
        assert_eq!(*seen.borrow(), vec![2, 1, 0]);
        assert_eq!(host.pending_timers(), 0);
        assert!(!disposer.holds(TICK_SLOT));
    }

    #[test]
    fn zero_initial_value_schedules_nothing() {
        let host = ManualHost::new();
        let (disposer, seen) = recorded(&host, 0);

        assert!(disposer.is_empty());
        assert_eq!(host.pending_timers(), 0);
        host.advance_to(5_000);
        assert!(seen.borrow().is_empty());
        assert_eq!(Countdown::new(0).label(), "00:00");
    }

    #[test]
    fn restart_begins_from_the_configured_value() {
        let host = ManualHost::new();
        let (first, _) = recorded(&host, 900);
        host.advance_to(5_000);
        first.dispose();

        let (_second, seen) = recorded(&host, 900);
        host.advance(1_000);
        assert_eq!(*seen.borrow(), vec![899]);
    }

    #[test]
    fn teardown_mid_countdown_stops_all_updates() {
        let host = ManualHost::new();
        let (disposer, seen) = recorded(&host, 900);

        host.advance_to(2_500);
        disposer.dispose();
        let before = seen.borrow().len();

        host.advance_to(60_000);
        assert_eq!(seen.borrow().len(), before);
        assert_eq!(host.pending_timers(), 0);
    }

    proptest! {
        #[test]
        fn tick_is_saturating_decrement(remaining in 0u32..10_000, steps in 0usize..200) {
            let mut countdown = Countdown::new(remaining);
            for _ in 0..steps {
                let next = countdown.tick();
                prop_assert_eq!(next.remaining(), countdown.remaining().saturating_sub(1));
                countdown = next;
            }
            prop_assert_eq!(countdown.remaining(), remaining.saturating_sub(steps as u32));
        }
    }
}
