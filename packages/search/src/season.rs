//! Best-time month-window parsing.
//!
//! Catalog records tag their visiting season with free-form month ranges
//! like `"Oct-Mar"` or `"Nov-Feb"`. This module parses those tags into
//! wrap-around-aware month windows so that suitability can be derived
//! deterministically from a reference date instead of drawn at random.

use kerala_guide_destination_models::WeatherSuitability;

/// An inclusive month range, wrap-around aware (`Oct-Mar` spans the year
/// boundary). Months are 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    start: u32,
    end: u32,
}

impl MonthWindow {
    /// Parses a `"Oct-Mar"`-style tag. Returns `None` for anything that
    /// is not two recognizable month abbreviations joined by a dash
    /// (e.g. `"Year-round"`).
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let (start, end) = tag.trim().split_once('-')?;
        Some(Self {
            start: parse_month(start)?,
            end: parse_month(end)?,
        })
    }

    /// Whether `month` (1-12) falls inside the window.
    #[must_use]
    pub const fn contains(self, month: u32) -> bool {
        if self.start <= self.end {
            month >= self.start && month <= self.end
        } else {
            month >= self.start || month <= self.end
        }
    }

    /// Whether `month` is the month immediately before the window opens
    /// or immediately after it closes (shoulder season).
    #[must_use]
    pub const fn is_shoulder(self, month: u32) -> bool {
        month == month_offset(self.start, -1) || month == month_offset(self.end, 1)
    }
}

/// Derives visit suitability for a reference month from a record's
/// best-time tag.
///
/// In-window months are `Excellent`, shoulder months `Good`, everything
/// else `Fair`. Records without a parseable window (absent tag, or a
/// year-round label) are always `Good`.
#[must_use]
pub fn suitability(best_time: Option<&str>, month: u32) -> WeatherSuitability {
    let Some(window) = best_time.and_then(MonthWindow::parse) else {
        return WeatherSuitability::Good;
    };

    if window.contains(month) {
        WeatherSuitability::Excellent
    } else if window.is_shoulder(month) {
        WeatherSuitability::Good
    } else {
        WeatherSuitability::Fair
    }
}

/// Adds `delta` months to `month` (1-12), wrapping across the year.
const fn month_offset(month: u32, delta: i32) -> u32 {
    #[allow(clippy::cast_possible_wrap)]
    let zero_based = month as i32 - 1 + delta;
    #[allow(clippy::cast_sign_loss)]
    let wrapped = zero_based.rem_euclid(12) as u32;
    wrapped + 1
}

fn parse_month(abbr: &str) -> Option<u32> {
    let month = match abbr.trim().to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_range() {
        let window = MonthWindow::parse("Apr-Jun").unwrap();
        assert!(window.contains(4));
        assert!(window.contains(6));
        assert!(!window.contains(7));
        assert!(!window.contains(3));
    }

    #[test]
    fn parses_wrapping_range() {
        let window = MonthWindow::parse("Oct-Mar").unwrap();
        assert!(window.contains(10));
        assert!(window.contains(12));
        assert!(window.contains(1));
        assert!(window.contains(3));
        assert!(!window.contains(6));
    }

    #[test]
    fn shoulder_months() {
        let window = MonthWindow::parse("Oct-Mar").unwrap();
        assert!(window.is_shoulder(9));
        assert!(window.is_shoulder(4));
        assert!(!window.is_shoulder(6));
        assert!(!window.is_shoulder(10));
    }

    #[test]
    fn rejects_non_month_tags() {
        assert_eq!(MonthWindow::parse("Year-round"), None);
        assert_eq!(MonthWindow::parse("Flexible"), None);
        assert_eq!(MonthWindow::parse(""), None);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(
            MonthWindow::parse("nov-feb"),
            MonthWindow::parse("Nov-Feb")
        );
    }

    #[test]
    fn suitability_tiers() {
        assert_eq!(
            suitability(Some("Oct-Mar"), 12),
            WeatherSuitability::Excellent
        );
        assert_eq!(suitability(Some("Oct-Mar"), 9), WeatherSuitability::Good);
        assert_eq!(suitability(Some("Oct-Mar"), 6), WeatherSuitability::Fair);
        assert_eq!(suitability(None, 6), WeatherSuitability::Good);
        assert_eq!(suitability(Some("Year-round"), 6), WeatherSuitability::Good);
    }
}
