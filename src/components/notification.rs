use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stylist::css;
use yew::prelude::*;

use crate::config;
use crate::error::ConfigError;
use crate::timers::{BrowserHost, Disposer, TimerHost};

const FIRST_SLOT: &str = "first";
const CADENCE_SLOT: &str = "cadence";
const HIDE_SLOT: &str = "hide";

/// Uniform choice of an index in `0..len`.
pub trait Pick {
    fn pick(&mut self, len: usize) -> usize;
}

impl Pick for StdRng {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Candidate names and cities for the fake purchase toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    names: &'static [&'static str],
    cities: &'static [&'static str],
}

impl Roster {
    pub fn new(
        names: &'static [&'static str],
        cities: &'static [&'static str],
    ) -> Result<Self, ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::EmptyRoster("names"));
        }
        if cities.is_empty() {
            return Err(ConfigError::EmptyRoster("cities"));
        }
        Ok(Self { names, cities })
    }

    #[cfg(test)]
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    #[cfg(test)]
    pub fn cities(&self) -> &'static [&'static str] {
        self.cities
    }

    /// Name and city are drawn independently.
    pub fn draw(&self, picker: &mut dyn Pick) -> ToastState {
        let name = self.names[picker.pick(self.names.len())];
        let city = self.cities[picker.pick(self.cities.len())];
        ToastState {
            visible: true,
            name,
            city,
        }
    }
}

/// Timing of the toast loop, all in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastSchedule {
    initial_delay_ms: u32,
    display_ms: u32,
    period_ms: u32,
}

impl ToastSchedule {
    pub fn new(initial_delay_ms: u32, display_ms: u32, period_ms: u32) -> Result<Self, ConfigError> {
        let positive = |value: u32, field| {
            if value == 0 {
                Err(ConfigError::NotPositive {
                    widget: "toast",
                    field,
                })
            } else {
                Ok(())
            }
        };
        positive(display_ms, "display duration")?;
        positive(period_ms, "trigger period")?;
        if display_ms >= period_ms {
            // Allowed: later triggers overwrite the visible toast.
            log::warn!(
                "Toast display ({}ms) is not shorter than its period ({}ms)",
                display_ms,
                period_ms
            );
        }
        Ok(Self {
            initial_delay_ms,
            display_ms,
            period_ms,
        })
    }

    /// The page's shipped timings, checked like any other schedule.
    pub fn from_config() -> Result<Self, ConfigError> {
        Self::new(
            config::TOAST_INITIAL_DELAY_MS,
            config::TOAST_DISPLAY_MS,
            config::TOAST_PERIOD_MS,
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub visible: bool,
    pub name: &'static str,
    pub city: &'static str,
}

/// Shows a toast after the initial delay and then once per period, each one
/// hidden again after the display duration. The period is anchored at the
/// first trigger, not at the hides.
pub fn start<H: TimerHost, P: Pick + 'static>(
    host: &H,
    schedule: ToastSchedule,
    roster: Roster,
    picker: P,
    on_change: impl Fn(ToastState) + 'static,
) -> Disposer<H::Handle> {
    let disposer = Disposer::new();
    let on_change: Rc<dyn Fn(ToastState)> = Rc::new(on_change);
    let picker = RefCell::new(picker);

    let trigger: Rc<dyn Fn()> = {
        let host = host.clone();
        let owner = disposer.downgrade();
        Rc::new(move || {
            let Some(disposer) = owner.upgrade() else {
                return;
            };
            let shown = roster.draw(&mut *picker.borrow_mut());
            log::debug!("Toast: {} de {}", shown.name, shown.city);
            on_change(shown);

            let on_change = on_change.clone();
            let hide = host.timeout(
                schedule.display_ms,
                Box::new(move || {
                    on_change(ToastState {
                        visible: false,
                        ..shown
                    })
                }),
            );
            disposer.hold(HIDE_SLOT, hide);
        })
    };

    let first = {
        let host = host.clone();
        let owner = disposer.downgrade();
        Box::new(move || {
            trigger();
            let Some(disposer) = owner.upgrade() else {
                return;
            };
            let cadence = host.interval(schedule.period_ms, Box::new(move || trigger()));
            disposer.hold(CADENCE_SLOT, cadence);
        })
    };
    disposer.hold(FIRST_SLOT, host.timeout(schedule.initial_delay_ms, first));
    disposer
}

#[function_component(SocialProofToast)]
pub fn social_proof_toast() -> Html {
    let toast = use_state(ToastState::default);

    {
        let toast = toast.clone();
        use_effect_with_deps(
            move |_| {
                let setup = ToastSchedule::from_config().and_then(|schedule| {
                    Ok((schedule, Roster::new(config::TOAST_NAMES, config::TOAST_CITIES)?))
                });
                let disposer = match setup {
                    Ok((schedule, roster)) => {
                        log::debug!("Toast scheduler started");
                        start(
                            &BrowserHost,
                            schedule,
                            roster,
                            StdRng::from_entropy(),
                            move |next| toast.set(next),
                        )
                    }
                    Err(err) => {
                        log::error!("Toast scheduler disabled: {}", err);
                        Disposer::new()
                    }
                };
                move || {
                    log::debug!("Toast scheduler torn down");
                    disposer.dispose();
                }
            },
            (),
        );
    }

    if !toast.visible {
        return html! {};
    }

    let position = css!(
        r#"
        position: fixed;
        bottom: 1rem;
        left: 1rem;
        z-index: 50;
    "#
    );

    html! {
        <div class={classes!(position, "animate-bounce")}>
            <div class="bg-white border-l-4 border-pink-500 shadow-xl rounded-lg p-4 flex items-center space-x-3 max-w-xs md:max-w-sm">
                <div class="bg-pink-100 p-2 rounded-full">
                    <svg class="w-6 h-6 text-pink-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />
                    </svg>
                </div>
                <div>
                    <p class="text-sm font-bold text-slate-800">{format!("{} de {}", toast.name, toast.city)}</p>
                    <p class="text-xs text-slate-500">{"Acabou de adquirir o Protocolo!"}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::manual::{ManualHandle, ManualHost};
    use std::collections::{HashSet, VecDeque};

    /// Replays a fixed list of indices.
    struct Scripted(VecDeque<usize>);

    impl Pick for Scripted {
        fn pick(&mut self, len: usize) -> usize {
            self.0.pop_front().expect("script exhausted") % len
        }
    }

    fn shipped() -> ToastSchedule {
        ToastSchedule::from_config().unwrap()
    }

    fn roster() -> Roster {
        Roster::new(config::TOAST_NAMES, config::TOAST_CITIES).unwrap()
    }

    fn recorded(
        host: &ManualHost,
        schedule: ToastSchedule,
        picker: impl Pick + 'static,
    ) -> (Disposer<ManualHandle>, Rc<RefCell<Vec<(u64, ToastState)>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let clock = host.clone();
        let disposer = start(host, schedule, roster(), picker, move |state| {
            sink.borrow_mut().push((clock.now(), state))
        });
        (disposer, seen)
    }

    fn shown_at(seen: &[(u64, ToastState)]) -> Vec<u64> {
        seen.iter()
            .filter(|(_, state)| state.visible)
            .map(|(at, _)| *at)
            .collect()
    }

    #[test]
    fn draws_the_scripted_name_and_city() {
        let mut picker = Scripted(VecDeque::from(vec![3, 6]));
        let state = roster().draw(&mut picker);
        assert_eq!(
            state,
            ToastState {
                visible: true,
                name: "Beatriz",
                city: "Fortaleza",
            }
        );
    }

    #[test]
    fn every_name_and_city_shows_up_eventually() {
        let roster = roster();
        let mut rng = StdRng::seed_from_u64(7);
        let mut names = HashSet::new();
        let mut cities = HashSet::new();
        for _ in 0..1_000 {
            let state = roster.draw(&mut rng);
            assert!(roster.names().contains(&state.name));
            assert!(roster.cities().contains(&state.city));
            names.insert(state.name);
            cities.insert(state.city);
        }
        assert_eq!(names.len(), roster.names().len());
        assert_eq!(cities.len(), roster.cities().len());
    }

    #[test]
    fn toast_is_visible_for_exactly_the_display_duration() {
        let host = ManualHost::new();
        let (_disposer, seen) = recorded(&host, shipped(), StdRng::seed_from_u64(1));

        host.advance_to(4_999);
        assert!(seen.borrow().is_empty());

        host.advance_to(9_999);
        assert_eq!(seen.borrow().len(), 1);
        assert!(seen.borrow()[0].1.visible);
        assert_eq!(seen.borrow()[0].0, 5_000);

        host.advance_to(10_000);
        let last = seen.borrow().last().copied().unwrap();
        assert_eq!(last.0, 10_000);
        assert!(!last.1.visible);
    }

    #[test]
    fn triggers_follow_a_fixed_period_from_the_first_one() {
        let host = ManualHost::new();
        let (_disposer, seen) = recorded(&host, shipped(), StdRng::seed_from_u64(2));

        host.advance_to(70_000);
        assert_eq!(shown_at(&seen.borrow()), vec![5_000, 25_000, 45_000, 65_000]);

        let hidden: Vec<u64> = seen
            .borrow()
            .iter()
            .filter(|(_, state)| !state.visible)
            .map(|(at, _)| *at)
            .collect();
        assert_eq!(hidden, vec![10_000, 30_000, 50_000, 70_000]);
    }

    #[test]
    fn overlapping_trigger_replaces_content_and_restarts_hide() {
        let host = ManualHost::new();
        let schedule = ToastSchedule::new(5_000, 30_000, 20_000).unwrap();
        let picker = Scripted(VecDeque::from(vec![0, 0, 1, 1, 2, 2]));
        let (_disposer, seen) = recorded(&host, schedule, picker);

        host.advance_to(60_000);
        let seen = seen.borrow();
        assert_eq!(shown_at(&seen), vec![5_000, 25_000, 45_000]);
        // The hides due at 35s and 55s were superseded by the next trigger.
        assert!(seen.iter().all(|(_, state)| state.visible));
        assert_eq!(
            seen[2].1,
            ToastState {
                visible: true,
                name: "Carla",
                city: "Belo Horizonte",
            }
        );
        // Cadence plus a single live hide.
        assert_eq!(host.pending_timers(), 2);
    }

    #[test]
    fn teardown_before_first_trigger_cancels_everything() {
        let host = ManualHost::new();
        let (disposer, seen) = recorded(&host, shipped(), StdRng::seed_from_u64(3));

        host.advance_to(4_000);
        disposer.dispose();
        host.advance_to(120_000);
        assert!(seen.borrow().is_empty());
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn teardown_while_visible_skips_the_pending_hide() {
        let host = ManualHost::new();
        let (disposer, seen) = recorded(&host, shipped(), StdRng::seed_from_u64(4));

        host.advance_to(7_000);
        assert_eq!(seen.borrow().len(), 1);
        disposer.dispose();

        host.advance_to(120_000);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn rejects_empty_rosters_and_zero_periods() {
        assert_eq!(
            Roster::new(&[], config::TOAST_CITIES),
            Err(ConfigError::EmptyRoster("names"))
        );
        assert_eq!(
            Roster::new(config::TOAST_NAMES, &[]),
            Err(ConfigError::EmptyRoster("cities"))
        );
        assert!(matches!(
            ToastSchedule::new(5_000, 5_000, 0),
            Err(ConfigError::NotPositive { field: "trigger period", .. })
        ));
        assert!(ToastSchedule::new(0, 5_000, 20_000).is_ok());
    }

    #[test]
    fn shipped_timings_pass_validation() {
        assert_eq!(
            ToastSchedule::from_config(),
            ToastSchedule::new(5_000, 5_000, 20_000)
        );
        assert!(ToastSchedule::from_config().is_ok());
        assert!(matches!(
            ToastSchedule::new(5_000, 0, 20_000),
            Err(ConfigError::NotPositive { field: "display duration", .. })
        ));
    }
}
