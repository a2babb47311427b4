use std::time::Duration;

use leptos::prelude::*;

/// Timings and thresholds for the decorative effects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSettings {
    /// Vertical scroll offset (px) past which the navbar turns solid
    pub nav_scroll_threshold: f64,
    pub counter_duration: Duration,
    /// Fraction of a counter that must be visible before it starts
    pub counter_visibility: f64,
    /// Delay of the simulated form submission
    pub submit_delay: Duration,
    pub tooltip_fade_in: Duration,
    pub tooltip_fade_out: Duration,
    pub reveal_duration: Duration,
    pub reveal_easing: &'static str,
    /// Reveal elements once instead of every time they enter the viewport
    pub reveal_once: bool,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            nav_scroll_threshold: 50.0,
            counter_duration: Duration::from_millis(2000),
            counter_visibility: 0.5,
            submit_delay: Duration::from_millis(1500),
            tooltip_fade_in: Duration::from_millis(50),
            tooltip_fade_out: Duration::from_millis(200),
            reveal_duration: Duration::from_millis(800),
            reveal_easing: "ease-out",
            reveal_once: true,
        }
    }
}

/// Settings provided by `App`, or the defaults when rendered outside it
pub fn use_settings() -> EffectSettings {
    use_context::<EffectSettings>().unwrap_or_default()
}
