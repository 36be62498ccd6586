//! Plain-language summaries of hour/minute patterns, used to group recurring
//! jobs. Every branch has a verbatim-text fallback; nothing here returns an
//! error.

/// Render an (hour, minute) pair on a 12-hour clock, "9:05 AM" style.
/// The AM/PM suffix is decided on the 24-hour value before conversion.
pub fn format_time_12hour(hour: u32, minute: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    };
    format!("{}:{:02} {}", display_hour, minute, suffix)
}

/// One sentence fragment describing when a job with these hour/minute fields
/// runs, e.g. "Once every five minutes from 9:00 AM to 5:59 PM".
pub fn describe_pattern(hours: &str, minutes: &str) -> String {
    let hour_part = hour_clause(hours);
    let minute_part = minute_clause(minutes);

    if hour_part == "all day" {
        if minute_part.starts_with("once a minute") {
            return "Once a minute".to_string();
        }
        if minute_part.starts_with("once every") {
            // "all day" is redundant for an interval phrase.
            return capitalize(&minute_part);
        }
        return format!("{} all day", capitalize(&minute_part));
    }

    if minute_part.starts_with("once a minute") {
        return format!("Once a minute {}", hour_part);
    }
    format!("{} {}", capitalize(&minute_part), hour_part)
}

fn hour_clause(hours: &str) -> String {
    let hours = hours.trim();

    if hours == "*" || hours == "0-23" {
        return "all day".to_string();
    }

    if hours.contains('-') {
        // A trailing step does not change the hour window.
        let range = hours.split('/').next().unwrap_or(hours);
        if let Some((start, end)) = range.split_once('-') {
            if let (Ok(start), Ok(end)) =
                (start.trim().parse::<u32>(), end.trim().parse::<u32>())
            {
                return format!(
                    "from {} to {}",
                    format_time_12hour(start, 0),
                    format_time_12hour(end, 59)
                );
            }
        }
        return format!("during hours {}", hours);
    }

    if let Ok(hour) = hours.parse::<u32>() {
        return format!("at {} o'clock", hour);
    }

    format!("during hours {}", hours)
}

fn minute_clause(minutes: &str) -> String {
    let minutes = minutes.trim();

    if minutes == "*" {
        return "every minute".to_string();
    }

    if minutes.contains('/') {
        let interval = minutes
            .split('/')
            .nth(1)
            .and_then(|step| step.trim().parse::<u32>().ok());
        return match interval {
            Some(1) => "once a minute".to_string(),
            Some(2) => "once every two minutes".to_string(),
            Some(5) => "once every five minutes".to_string(),
            Some(10) => "once every ten minutes".to_string(),
            Some(15) => "once every fifteen minutes".to_string(),
            Some(30) => "once every thirty minutes".to_string(),
            Some(60) => "once an hour".to_string(),
            Some(n) => format!("once every {} minutes", n),
            None => format!("with pattern {}", minutes),
        };
    }

    if minutes.contains('-') {
        return format!("every minute during {}", minutes);
    }

    if minutes.contains(',') {
        let count = minutes.split(',').count();
        return if count <= 3 {
            format!("at minutes {}", minutes)
        } else {
            format!("at {} specific times", count)
        };
    }

    if let Ok(minute) = minutes.parse::<u32>() {
        return format!("at minute {}", minute);
    }

    format!("with minute pattern {}", minutes)
}

/// Ranking weight for recurring-group display; tighter intervals sort first.
pub fn frequency_score(description: &str) -> f64 {
    let description = description.to_ascii_lowercase();

    if description.starts_with("once a minute") {
        return 1000.0;
    }
    if description.starts_with("once an hour") {
        return 10.0;
    }
    if let Some(rest) = description.strip_prefix("once every ") {
        if rest.contains("hour") {
            return 10.0;
        }
        if rest.contains("minute") {
            let token = rest.split_whitespace().next().unwrap_or("");
            if let Some(interval) = interval_from_token(token) {
                return 1000.0 / interval as f64;
            }
        }
    }
    1.0
}

fn interval_from_token(token: &str) -> Option<u32> {
    let interval = match token {
        "two" => 2,
        "five" => 5,
        "ten" => 10,
        "fifteen" => 15,
        "thirty" => 30,
        _ => token.parse().ok().filter(|&n| n > 0)?,
    };
    Some(interval)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
