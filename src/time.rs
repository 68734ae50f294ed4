//! Client-Side Timestamps
//!
//! Row timestamps are ISO-8601 strings assigned at write time by the
//! client; the "x ago" labels are derived from the same clock.

/// Current instant as an ISO-8601 string
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default()
}

/// Human "x ago" label for an ISO-8601 timestamp
pub fn time_ago(iso: &str) -> String {
    let then = js_sys::Date::new(&iso.into()).get_time();
    if then.is_nan() {
        return "unknown".to_string();
    }
    let delta = js_sys::Date::now() - then;
    humanize_millis(delta)
}

fn humanize_millis(delta: f64) -> String {
    let seconds = (delta / 1000.0).max(0.0) as u64;
    match seconds {
        0..=59 => "less than a minute".to_string(),
        60..=3599 => {
            let minutes = seconds / 60;
            if minutes == 1 { "1 minute".to_string() } else { format!("{} minutes", minutes) }
        }
        3600..=86_399 => {
            let hours = seconds / 3600;
            if hours == 1 { "1 hour".to_string() } else { format!("{} hours", hours) }
        }
        _ => {
            let days = seconds / 86_400;
            if days == 1 { "1 day".to_string() } else { format!("{} days", days) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_millis() {
        assert_eq!(humanize_millis(30.0 * 1000.0), "less than a minute");
        assert_eq!(humanize_millis(90.0 * 1000.0), "1 minute");
        assert_eq!(humanize_millis(45.0 * 60.0 * 1000.0), "45 minutes");
        assert_eq!(humanize_millis(2.5 * 3600.0 * 1000.0), "2 hours");
        assert_eq!(humanize_millis(3.0 * 86_400.0 * 1000.0), "3 days");
        assert_eq!(humanize_millis(-5000.0), "less than a minute");
    }
}
