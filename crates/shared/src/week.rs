use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{Date, Duration, OffsetDateTime, Weekday};

use crate::{Error, Result};

/// An ISO-8601 week identifier, rendered as e.g. `2026-W08`.
///
/// Weeks start on Monday; week 1 is the week containing the year's first
/// Thursday, so the ISO week-year can differ from the calendar year around
/// New Year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekId {
    year: i32,
    week: u8,
}

impl WeekId {
    /// Builds an identifier from its components, rejecting weeks that do not
    /// exist in the given ISO year (e.g. week 53 of a 52-week year).
    pub fn new(year: i32, week: u8) -> Result<Self> {
        Date::from_iso_week_date(year, week, Weekday::Monday)
            .map_err(|_| Error::MalformedIdentifier(format!("{year}-W{week:02}")))?;

        Ok(Self { year, week })
    }

    /// The identifier of the ISO week containing `date`.
    pub fn for_date(date: Date) -> Self {
        let (year, week, _) = date.to_iso_week_date();

        Self { year, week }
    }

    /// The identifier of the current week, in UTC. Reads the wall clock, so
    /// tests should go through [`WeekId::for_date`] instead.
    pub fn current() -> Self {
        Self::for_date(OffsetDateTime::now_utc().date())
    }

    /// ISO week-year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Numeric week component (1..=53).
    pub fn week(&self) -> u8 {
        self.week
    }

    /// The Monday this week starts on.
    pub fn monday(&self) -> Date {
        // Week validity is checked on construction, so this cannot fail.
        Date::from_iso_week_date(self.year, self.week, Weekday::Monday)
            .expect("week validated on construction")
    }

    /// The identifier `delta_weeks` whole weeks after this one (before, when
    /// negative). Goes through a concrete calendar date so week-52/53 and
    /// year-boundary rollover follow the same ISO rules as [`WeekId::for_date`].
    pub fn offset(&self, delta_weeks: i64) -> Self {
        Self::for_date(self.monday() + Duration::weeks(delta_weeks))
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl FromStr for WeekId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (year, week) = s
            .split_once("-W")
            .ok_or_else(|| Error::MalformedIdentifier(s.to_owned()))?;
        let year = year
            .parse()
            .map_err(|_| Error::MalformedIdentifier(s.to_owned()))?;
        let week = week
            .parse()
            .map_err(|_| Error::MalformedIdentifier(s.to_owned()))?;

        Self::new(year, week)
    }
}

impl Serialize for WeekId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WeekId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The first `num_slots` Monday-start day names, clamped to the 7-day week.
pub fn day_labels(num_slots: usize) -> Vec<String> {
    let mut day = Weekday::Monday;
    let mut labels = Vec::with_capacity(num_slots.min(7));

    for _ in 0..num_slots.min(7) {
        labels.push(day.to_string());
        day = day.next();
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_week_id_for_date() {
        assert_eq!(
            WeekId::for_date(date!(2026 - 02 - 18)).to_string(),
            "2026-W08"
        );
        assert_eq!(
            WeekId::for_date(date!(2025 - 06 - 30)).to_string(),
            "2025-W27"
        );
    }

    #[test]
    fn test_year_boundary_belongs_to_previous_iso_year() {
        // Jan 1 2021 is a Friday and still part of the last ISO week of 2020.
        assert_eq!(
            WeekId::for_date(date!(2021 - 01 - 01)).to_string(),
            "2020-W53"
        );
        // Dec 29 2025 is a Monday that already belongs to week 1 of 2026.
        assert_eq!(
            WeekId::for_date(date!(2025 - 12 - 29)).to_string(),
            "2026-W01"
        );
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let id: WeekId = "2026-W08".parse().unwrap();
        assert_eq!(id.year(), 2026);
        assert_eq!(id.week(), 8);
        assert_eq!(id.to_string(), "2026-W08");
    }

    #[test]
    fn test_parse_rejects_malformed_identifiers() {
        for raw in ["", "2026", "2026-08", "2026-W", "xxxx-W08", "2026-Wxx"] {
            assert!(
                matches!(raw.parse::<WeekId>(), Err(Error::MalformedIdentifier(_))),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_rejects_nonexistent_week() {
        // 2021 has 52 ISO weeks.
        assert!(matches!(
            "2021-W53".parse::<WeekId>(),
            Err(Error::MalformedIdentifier(_))
        ));
        assert!("2020-W53".parse::<WeekId>().is_ok());
        assert!(matches!(
            "2026-W00".parse::<WeekId>(),
            Err(Error::MalformedIdentifier(_))
        ));
    }

    #[test]
    fn test_monday_round_trip() {
        for date in [
            date!(2021 - 01 - 01),
            date!(2024 - 12 - 31),
            date!(2026 - 02 - 18),
            date!(2026 - 07 - 05),
        ] {
            let id = WeekId::for_date(date);
            assert_eq!(WeekId::for_date(id.monday()), id);
            assert_eq!(id.offset(0), id);
        }
    }

    #[test]
    fn test_offset_crosses_year_boundary() {
        let last: WeekId = "2020-W53".parse().unwrap();
        assert_eq!(last.offset(1).to_string(), "2021-W01");
        assert_eq!(last.offset(1).offset(-1), last);

        let first: WeekId = "2026-W01".parse().unwrap();
        assert_eq!(first.offset(-1).to_string(), "2025-W52");
    }

    #[test]
    fn test_offset_inverse() {
        let id: WeekId = "2025-W27".parse().unwrap();
        for k in [-120, -53, -1, 0, 1, 26, 53, 120] {
            assert_eq!(id.offset(k).offset(-k), id, "k={k}");
        }
    }

    #[test]
    fn test_day_labels_clamp() {
        assert_eq!(day_labels(3), vec!["Monday", "Tuesday", "Wednesday"]);
        assert_eq!(day_labels(0), Vec::<String>::new());
        assert_eq!(
            day_labels(7),
            vec![
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
        assert_eq!(day_labels(12), day_labels(7));
    }

    #[test]
    fn test_serde_as_string() {
        let id: WeekId = "2026-W08".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"2026-W08\"");
        assert_eq!(serde_json::from_str::<WeekId>(&json).unwrap(), id);
        assert!(serde_json::from_str::<WeekId>("\"not-a-week\"").is_err());
    }
}
