use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::components::reveal::use_in_view;
use crate::AppLoaded;

/// Tick length for the tween; close to one animation frame.
const TICK_MS: u32 = 16;
/// How long the completion pulse holds the scaled-up state.
const PULSE_MS: u32 = 200;

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Displayed value at progress `t` of a 0→`target` tween.
pub fn tween_value(target: u32, t: f64) -> u32 {
    (f64::from(target) * ease_out_cubic(t.clamp(0.0, 1.0))).floor() as u32
}

/// Values from a thousand up render as a "K" abbreviation, rounding half
/// away from zero: 2500 becomes "3K".
pub fn format_stat(value: u32) -> String {
    if value >= 1000 {
        format!("{}K", (f64::from(value) / 1000.0).round() as u32)
    } else {
        value.to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u32,
    #[prop_or(2000)]
    pub duration_ms: u32,
    /// Extra start delay, used to stagger the hero counters.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub suffix: &'static str,
}

/// Numeric stat that tweens from 0 to its target the first time it scrolls
/// into view, once the loading overlay is gone. Dropping the component drops
/// the ticker, so a navigation away cancels the tween.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let loaded = use_context::<AppLoaded>().map(|l| l.0).unwrap_or(true);

    let text = use_state_eq(|| "0".to_string());
    let pulsing = use_state_eq(|| false);
    let started = use_mut_ref(|| false);
    let ticker = use_mut_ref(|| None::<Interval>);
    let start_timer = use_mut_ref(|| None::<Timeout>);
    let pulse_timer = use_mut_ref(|| None::<Timeout>);

    {
        let text = text.clone();
        let pulsing = pulsing.clone();
        let target = props.target;
        let duration = props.duration_ms.max(1);
        let delay = props.delay_ms;

        use_effect_with_deps(
            move |&(in_view, loaded)| {
                if in_view && loaded && !*started.borrow() {
                    *started.borrow_mut() = true;

                    let ticker_slot = ticker.clone();
                    let start = Timeout::new(delay, move || {
                        let ticks = Rc::new(Cell::new(0u32));
                        let done = Rc::new(Cell::new(false));
                        let drop_slot = ticker_slot.clone();
                        let interval = Interval::new(TICK_MS, move || {
                            if done.get() {
                                return;
                            }
                            ticks.set(ticks.get() + 1);
                            let t = f64::from(ticks.get() * TICK_MS) / f64::from(duration);
                            if t < 1.0 {
                                text.set(format_stat(tween_value(target, t)));
                            } else {
                                done.set(true);
                                text.set(format_stat(target));
                                pulsing.set(true);
                                let pulsing = pulsing.clone();
                                *pulse_timer.borrow_mut() =
                                    Some(Timeout::new(PULSE_MS, move || pulsing.set(false)));
                                // Dropping the interval from inside its own
                                // callback is not allowed; defer it a tick.
                                let drop_slot = drop_slot.clone();
                                Timeout::new(0, move || {
                                    drop_slot.borrow_mut().take();
                                })
                                .forget();
                            }
                        });
                        *ticker_slot.borrow_mut() = Some(interval);
                    });
                    *start_timer.borrow_mut() = Some(start);
                }
                || ()
            },
            (in_view, loaded),
        );
    }

    html! {
        <span
            ref={node}
            class={classes!("stat-number", (*pulsing).then_some("stat-pulse"))}
        >
            { (*text).clone() }{ props.suffix }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_anchored_and_monotonic() {
        assert!(ease_out_cubic(0.0).abs() < 1e-9);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < 1e-9);
        assert!(ease_out_cubic(0.25) < ease_out_cubic(0.5));
        // Ease-out: front-loaded progress.
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn large_targets_abbreviate_with_k() {
        assert_eq!(format_stat(2500), "3K");
        assert_eq!(format_stat(5000), "5K");
        assert_eq!(format_stat(1000), "1K");
    }

    #[test]
    fn small_targets_render_plain() {
        assert_eq!(format_stat(42), "42");
        assert_eq!(format_stat(999), "999");
        assert_eq!(format_stat(0), "0");
    }

    #[test]
    fn tween_ends_exactly_on_target() {
        assert_eq!(tween_value(2500, 1.0), 2500);
        assert_eq!(tween_value(2500, 2.0), 2500);
        assert_eq!(tween_value(42, 0.0), 0);
        assert!(tween_value(42, 0.5) <= 42);
    }
}
