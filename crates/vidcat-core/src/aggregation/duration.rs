//! ISO-8601 duration parsing for the minimum-length filter.

use regex::Regex;
use std::sync::LazyLock;

/// `PT[h]H[m]M[s]S` with every component optional.
static ISO_DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").unwrap());

/// Parse a `PT#H#M#S` duration into seconds.
///
/// Missing components count as zero. Returns `None` for anything else,
/// including day-based durations like `P1DT2H`.
///
/// # Examples
///
/// ```
/// use vidcat_core::aggregation::parse_duration_secs;
///
/// assert_eq!(parse_duration_secs("PT1H2M3S"), Some(3723));
/// assert_eq!(parse_duration_secs("PT45S"), Some(45));
/// assert_eq!(parse_duration_secs("live"), None);
/// ```
pub fn parse_duration_secs(iso: &str) -> Option<u64> {
    let caps = ISO_DURATION.captures(iso.trim())?;
    let component = |i: usize| -> Option<u64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// Whether a video of this duration is long enough to keep.
///
/// Unparseable durations are kept.
pub fn meets_min_duration(iso: &str, min_secs: u64) -> bool {
    parse_duration_secs(iso).map_or(true, |secs| secs >= min_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_components() {
        assert_eq!(parse_duration_secs("PT0M45S"), Some(45));
        assert_eq!(parse_duration_secs("PT1M0S"), Some(60));
        assert_eq!(parse_duration_secs("PT2H"), Some(7200));
        assert_eq!(parse_duration_secs("PT10M"), Some(600));
        assert_eq!(parse_duration_secs("PT"), Some(0));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert_eq!(parse_duration_secs(""), None);
        assert_eq!(parse_duration_secs("P0D"), None);
        assert_eq!(parse_duration_secs("P1DT2H"), None);
        assert_eq!(parse_duration_secs("PT1.5S"), None);
        assert_eq!(parse_duration_secs("4:13"), None);
    }

    #[test]
    fn test_parse_overflow_is_unparseable() {
        assert_eq!(parse_duration_secs("PT99999999999999999999H"), None);
    }

    #[test]
    fn test_min_duration_filter() {
        assert!(!meets_min_duration("PT0M45S", 60));
        assert!(meets_min_duration("PT1M0S", 60));
        assert!(meets_min_duration("not a duration", 60));
        assert!(!meets_min_duration("PT", 60));
    }
}
