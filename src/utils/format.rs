//! Display formatting helpers
//!
//! Skill-level indicators and date labels shared by anything rendering
//! event data (the demo CLI, downstream UIs).

use chrono::{DateTime, Utc};

/// Number of slots in a skill-level indicator
pub const SKILL_SLOTS: u8 = 5;

/// Render a skill level as a 5-slot star indicator.
///
/// The backend contract keeps skill levels in 1..=5 but does not enforce it,
/// so out-of-range values are clamped instead of producing negative or
/// excess slots.
pub fn skill_indicator(level: u8) -> String {
    let filled = level.min(SKILL_SLOTS);
    let mut out = String::with_capacity(SKILL_SLOTS as usize * '★'.len_utf8());
    for _ in 0..filled {
        out.push('★');
    }
    for _ in filled..SKILL_SLOTS {
        out.push('☆');
    }
    out
}

/// Format an event timestamp as a stable, English-locale label.
///
/// Example: `Fri, 7 Jun 2024, 15:00 UTC`
pub fn format_event_date(date: &DateTime<Utc>) -> String {
    date.format("%a, %-d %b %Y, %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_skill_indicator_mid_level() {
        assert_eq!(skill_indicator(3), "★★★☆☆");
    }

    #[test]
    fn test_skill_indicator_bounds() {
        assert_eq!(skill_indicator(0), "☆☆☆☆☆");
        assert_eq!(skill_indicator(5), "★★★★★");
        // Out-of-range values clamp rather than overflow the indicator
        assert_eq!(skill_indicator(9), "★★★★★");
    }

    #[test]
    fn test_format_event_date_is_stable() {
        let date = Utc.with_ymd_and_hms(2024, 6, 7, 15, 0, 0).unwrap();
        assert_eq!(format_event_date(&date), "Fri, 7 Jun 2024, 15:00 UTC");
    }
}
