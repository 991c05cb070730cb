use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Weekday
// ---------------------------------------------------------------------------

/// Day of the week. The ordinal is Sunday = 0 through Saturday = 6, matching
/// the Hebrew naming where Sunday is "יום א'" (the first day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub fn all() -> &'static [Weekday] {
        &[
            Weekday::Sunday,
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Weekday for a given ordinal (Sunday = 0). Wraps modulo 7.
    pub fn from_index(i: usize) -> Weekday {
        Weekday::all()[i % 7]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(w: chrono::Weekday) -> Self {
        Weekday::from_index(w.num_days_from_sunday() as usize)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HebrewMonth
// ---------------------------------------------------------------------------

/// The thirteen named Hebrew months, in civil-year order starting at Tishrei.
///
/// A common year has a single Adar, represented as [`HebrewMonth::AdarII`]
/// so that Purim always falls on Adar II 14. [`HebrewMonth::AdarI`] exists
/// only in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HebrewMonth {
    Tishrei,
    Cheshvan,
    Kislev,
    Tevet,
    Shevat,
    AdarI,
    AdarII,
    Nisan,
    Iyar,
    Sivan,
    Tamuz,
    Av,
    Elul,
}

impl HebrewMonth {
    pub fn all() -> &'static [HebrewMonth] {
        &[
            HebrewMonth::Tishrei,
            HebrewMonth::Cheshvan,
            HebrewMonth::Kislev,
            HebrewMonth::Tevet,
            HebrewMonth::Shevat,
            HebrewMonth::AdarI,
            HebrewMonth::AdarII,
            HebrewMonth::Nisan,
            HebrewMonth::Iyar,
            HebrewMonth::Sivan,
            HebrewMonth::Tamuz,
            HebrewMonth::Av,
            HebrewMonth::Elul,
        ]
    }

    /// Months of `year` in order, skipping Adar I in a common year.
    pub fn in_year(leap: bool) -> impl Iterator<Item = HebrewMonth> {
        HebrewMonth::all()
            .iter()
            .copied()
            .filter(move |m| leap || *m != HebrewMonth::AdarI)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HebrewMonth::Tishrei => "tishrei",
            HebrewMonth::Cheshvan => "cheshvan",
            HebrewMonth::Kislev => "kislev",
            HebrewMonth::Tevet => "tevet",
            HebrewMonth::Shevat => "shevat",
            HebrewMonth::AdarI => "adar_i",
            HebrewMonth::AdarII => "adar_ii",
            HebrewMonth::Nisan => "nisan",
            HebrewMonth::Iyar => "iyar",
            HebrewMonth::Sivan => "sivan",
            HebrewMonth::Tamuz => "tamuz",
            HebrewMonth::Av => "av",
            HebrewMonth::Elul => "elul",
        }
    }
}

impl fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_ordinal_is_sunday_first() {
        assert_eq!(Weekday::Sunday.index(), 0);
        assert_eq!(Weekday::Saturday.index(), 6);
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
    }

    #[test]
    fn weekday_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(Weekday::from(chrono::Weekday::Sat), Weekday::Saturday);
    }

    #[test]
    fn common_year_skips_adar_i() {
        assert_eq!(HebrewMonth::in_year(false).count(), 12);
        assert_eq!(HebrewMonth::in_year(true).count(), 13);
        assert!(!HebrewMonth::in_year(false).any(|m| m == HebrewMonth::AdarI));
    }
}
