use chrono::{Local, TimeZone};

const SECOND: u64 = 1;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Current unix timestamp, in seconds.
pub fn now() -> u64 {
    Local::now().timestamp() as u64
}

pub fn format_since(time: u64) -> String {
    if time == 0 {
        return String::from("never");
    }
    let now = now();
    let duration = now.saturating_sub(time);

    let unit: &str;
    let value: u64;
    if duration < MINUTE {
        unit = "second";
        if duration < 30 {
            return String::from("now");
        }
        value = duration;
    } else if duration < HOUR {
        unit = "minute";
        value = duration / MINUTE;
    } else if duration < DAY {
        unit = "hour";
        value = duration / HOUR;
    } else {
        unit = "day";
        value = duration / DAY;
    }

    if value > 1 {
        format!("{value} {unit}s ago")
    } else {
        format!("last {unit}")
    }
}

/// Render a timestamp as local wall-clock time, for log entries.
pub fn format_timestamp(time: u64) -> String {
    match Local.timestamp_opt(time as i64, 0).single() {
        Some(local) => local.format("%H:%M:%S").to_string(),
        None => String::from("unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_since() {
        assert_eq!(format_since(0), "never");
        assert_eq!(format_since(now()), "now");
        assert_eq!(format_since(now() - 2 * MINUTE), "2 minutes ago");
        assert_eq!(format_since(now() - HOUR), "last hour");
        assert_eq!(format_since(now() - 3 * DAY), "3 days ago");
    }
}
