//! HTML Templates
//!
//! Askama templates compiled into the binary at build time, plus the
//! elapsed-time helper exposed to templates as the `since` filter.
//!
//! Askama HTML-escapes interpolated values by default, so user-supplied
//! author and message text cannot inject markup into the rendered page.

use askama::Template;
use chrono::{DateTime, Utc};

use crate::backend::GuestbookEntry;

/// The home page: the submission form and the list of messages.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub messages: Vec<GuestbookEntry>,
}

/// Human-friendly elapsed time since `date`, truncated to whole seconds
/// (e.g. `"1h2m3s"`). Dates in the future render with a leading `-`.
pub fn format_elapsed(date: &DateTime<Utc>) -> String {
    format_seconds(Utc::now().signed_duration_since(*date).num_seconds())
}

fn format_seconds(total: i64) -> String {
    if total == 0 {
        return "0s".to_string();
    }

    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut out = String::from(sign);
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if minutes > 0 || hours > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&format!("{}s", seconds));
    out
}

/// Custom askama filters available inside templates
pub mod filters {
    use chrono::{DateTime, Utc};

    /// `{{ entry.date|since }}` renders the elapsed time since the entry
    /// was written.
    pub fn since(date: &DateTime<Utc>) -> askama::Result<String> {
        Ok(super::format_elapsed(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_seconds_zero() {
        assert_eq!(format_seconds(0), "0s");
    }

    #[test]
    fn test_format_seconds_only() {
        assert_eq!(format_seconds(59), "59s");
    }

    #[test]
    fn test_format_seconds_minutes() {
        assert_eq!(format_seconds(61), "1m1s");
        assert_eq!(format_seconds(120), "2m0s");
    }

    #[test]
    fn test_format_seconds_hours() {
        assert_eq!(format_seconds(3661), "1h1m1s");
        assert_eq!(format_seconds(7200), "2h0m0s");
    }

    #[test]
    fn test_format_seconds_future_date() {
        assert_eq!(format_seconds(-5), "-5s");
    }

    #[test]
    fn test_format_elapsed_truncates_to_seconds() {
        let date = Utc::now() - Duration::milliseconds(90_500);
        assert_eq!(format_elapsed(&date), "1m30s");
    }

    #[test]
    fn test_home_template_renders_entries() {
        let tpl = HomeTemplate {
            messages: vec![GuestbookEntry {
                author: "a".to_string(),
                message: "hi".to_string(),
                date: Utc::now(),
            }],
        };
        let html = tpl.render().unwrap();
        assert!(html.contains("a"));
        assert!(html.contains("hi"));
    }

    #[test]
    fn test_home_template_renders_empty_list() {
        let tpl = HomeTemplate { messages: vec![] };
        let html = tpl.render().unwrap();
        assert!(html.contains("guestbook"));
    }

    #[test]
    fn test_home_template_escapes_user_input() {
        let tpl = HomeTemplate {
            messages: vec![GuestbookEntry {
                author: "<script>alert(1)</script>".to_string(),
                message: "<b>bold</b>".to_string(),
                date: Utc::now(),
            }],
        };
        let html = tpl.render().unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }
}
