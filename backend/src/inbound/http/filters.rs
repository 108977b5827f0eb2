//! Presentation filters invoked by the page templates.
//!
//! Pure, stateless formatting helpers. Askama resolves these by name from
//! the `filters` module in scope at each template's derive site.

use chrono::{DateTime, Utc};
use url::Url;

/// Format a timestamp as `MM/DD/YY`.
pub fn format_date(date: &DateTime<Utc>) -> askama::Result<String> {
    Ok(date.format("%m/%d/%y").to_string())
}

/// Reduce a URL to its bare hostname: scheme and `www.` prefix stripped,
/// path and query discarded.
pub fn format_url(url: &str) -> askama::Result<String> {
    // Absolute URLs parse cleanly; scheme-less input falls back to string
    // stripping, matching the loose values users actually submit.
    if let Ok(parsed) = Url::parse(url) {
        if let Some(host) = parsed.host_str() {
            return Ok(host.trim_start_matches("www.").to_owned());
        }
    }
    let trimmed = url.trim_start_matches("www.");
    Ok(trimmed
        .split(['/', '?'])
        .next()
        .unwrap_or_default()
        .to_owned())
}

/// Append an `s` to `word` unless `count` is exactly 1. No irregular-plural
/// handling.
pub fn format_plural(count: &i64, word: &str) -> askama::Result<String> {
    if *count == 1 {
        Ok(word.to_owned())
    } else {
        Ok(format!("{word}s"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn format_date_is_month_day_year() {
        let date = Utc.with_ymd_and_hms(2026, 3, 9, 18, 30, 0).single();
        let date = date.expect("valid timestamp");
        assert_eq!(format_date(&date).expect("formats"), "03/09/26");
    }

    #[rstest]
    #[case("http://example.com", "example.com")]
    #[case("http://google.com/test/", "google.com")]
    #[case("https://www.google.com?q=test", "google.com")]
    #[case("www.coolstuff.com/trending", "coolstuff.com")]
    #[case("example.com", "example.com")]
    fn format_url_strips_to_hostname(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_url(input).expect("formats"), expected);
    }

    #[rstest]
    #[case(1, "point", "point")]
    #[case(0, "point", "points")]
    #[case(2, "cat", "cats")]
    #[case(-1, "point", "points")]
    fn format_plural_appends_s_unless_exactly_one(
        #[case] count: i64,
        #[case] word: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(format_plural(&count, word).expect("formats"), expected);
    }
}
