/// Human readable "time ago" strings for the popup

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Format how long ago `timestamp` (epoch ms) was, relative to `now` (epoch ms)
///
/// Seconds are never singularized ("1 seconds ago"); minutes, hours and days
/// are. A missing timestamp reads as "just now".
pub fn time_ago(timestamp: Option<i64>, now: i64) -> String {
    let Some(timestamp) = timestamp else {
        return "just now".to_string();
    };

    let seconds_ago = (now - timestamp).max(0) / 1000;

    if seconds_ago < MINUTE {
        format!("{} seconds ago", seconds_ago)
    } else if seconds_ago < HOUR {
        plural(seconds_ago / MINUTE, "minute")
    } else if seconds_ago < DAY {
        plural(seconds_ago / HOUR, "hour")
    } else {
        plural(seconds_ago / DAY, "day")
    }
}

fn plural(n: i64, unit: &str) -> String {
    format!("{} {}{} ago", n, unit, if n != 1 { "s" } else { "" })
}
