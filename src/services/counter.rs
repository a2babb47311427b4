/// Fraction of the animation elapsed, clamped to `0.0..=1.0`
pub fn animation_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Value at `progress` between `start` and `end`, floored. Computed in `f64`,
/// so the full `i64` range is accepted and the result saturates.
pub fn counter_value(start: i64, end: i64, progress: f64) -> i64 {
    let (start, end) = (start as f64, end as f64);
    (progress * (end - start) + start).floor() as i64
}

/// Formats with `,` between thousands groups
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Reads a `data-target` value the way a browser's integer parsing does:
/// leading whitespace and a sign are allowed, trailing junk is ignored.
/// Anything without leading digits counts as zero; values past `i64`
/// saturate at `±i64::MAX`.
pub fn parse_target(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Counts from zero to `target` over `duration`, calling `on_frame` every
/// animation frame with the value to display
#[cfg(feature = "hydrate")]
pub fn run_counter(target: i64, duration: std::time::Duration, on_frame: impl Fn(i64) + 'static) {
    let started = js_sys::Date::now();
    step(
        std::rc::Rc::new(on_frame),
        started,
        target,
        duration.as_secs_f64() * 1000.0,
    );
}

#[cfg(feature = "hydrate")]
fn step(on_frame: std::rc::Rc<dyn Fn(i64)>, started: f64, target: i64, duration_ms: f64) {
    leptos::prelude::request_animation_frame(move || {
        let progress = animation_progress(js_sys::Date::now() - started, duration_ms);
        on_frame(counter_value(0, target, progress));
        if progress < 1.0 {
            step(on_frame, started, target, duration_ms);
        }
    });
}

/// Animates every `.stat-counter` under `root` the first time it is half visible
#[cfg(feature = "hydrate")]
pub fn animate_counters(root: &web_sys::Element, settings: &crate::config::EffectSettings) {
    use crate::services::scroll::watch_visibility;

    let Ok(counters) = root.query_selector_all(".stat-counter") else {
        return;
    };
    if counters.length() == 0 {
        return;
    }

    let duration = settings.counter_duration;
    let Some(observer) = watch_visibility(settings.counter_visibility, move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let counter = entry.target();
        observer.unobserve(&counter);
        let target = parse_target(&counter.get_attribute("data-target").unwrap_or_default());
        run_counter(target, duration, move |value| {
            counter.set_text_content(Some(&format_grouped(value)));
        });
    }) else {
        return;
    };

    for i in 0..counters.length() {
        if let Some(counter) = counters.item(i) {
            use wasm_bindgen::JsCast;
            if let Ok(counter) = counter.dyn_into::<web_sys::Element>() {
                observer.observe(&counter);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(animation_progress(0.0, 2000.0), 0.0);
        assert_eq!(animation_progress(1000.0, 2000.0), 0.5);
        assert_eq!(animation_progress(5000.0, 2000.0), 1.0);
        assert_eq!(animation_progress(-10.0, 2000.0), 0.0);
        assert_eq!(animation_progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn value_is_floored() {
        assert_eq!(counter_value(0, 1500, 0.0), 0);
        assert_eq!(counter_value(0, 1500, 0.3333), 499);
        assert_eq!(counter_value(0, 1500, 1.0), 1500);
        assert_eq!(counter_value(10, 20, 0.55), 15);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(1234567), "1,234,567");
        assert_eq!(format_grouped(-25000), "-25,000");
    }

    #[test]
    fn parses_targets_leniently() {
        assert_eq!(parse_target("250"), 250);
        assert_eq!(parse_target("  98%"), 98);
        assert_eq!(parse_target("-12"), -12);
        assert_eq!(parse_target("abc"), 0);
        assert_eq!(parse_target(""), 0);
    }

    #[test]
    fn oversized_targets_saturate() {
        assert_eq!(parse_target("99999999999999999999"), i64::MAX);
        assert_eq!(parse_target("-123456789012345678901234"), -i64::MAX);
        assert_eq!(parse_target("9223372036854775807"), i64::MAX);
    }

    #[test]
    fn extreme_ranges_do_not_overflow() {
        assert_eq!(counter_value(i64::MIN, i64::MAX, 0.0), i64::MIN);
        assert_eq!(counter_value(i64::MIN, i64::MAX, 1.0), i64::MAX);
        assert_eq!(counter_value(0, parse_target("99999999999999999999"), 1.0), i64::MAX);
        assert!(counter_value(i64::MAX, i64::MIN, 0.5).abs() < 1 << 12);
    }
}
