//! Bilingual display strings for a Hebrew date.
//!
//! Every table here is an exhaustive `match` over [`HebrewMonth`] or
//! [`Weekday`], so adding a variant without a name fails to compile.

use crate::hebrew::HebrewDate;
use crate::types::{HebrewMonth, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateDisplay {
    pub en: String,
    pub he: String,
}

/// English month name. A common year's single Adar is plain "Adar".
pub fn english_month_name(month: HebrewMonth, leap: bool) -> &'static str {
    match month {
        HebrewMonth::Tishrei => "Tishrei",
        HebrewMonth::Cheshvan => "Cheshvan",
        HebrewMonth::Kislev => "Kislev",
        HebrewMonth::Tevet => "Tevet",
        HebrewMonth::Shevat => "Shevat",
        HebrewMonth::AdarI => "Adar I",
        HebrewMonth::AdarII if leap => "Adar II",
        HebrewMonth::AdarII => "Adar",
        HebrewMonth::Nisan => "Nisan",
        HebrewMonth::Iyar => "Iyar",
        HebrewMonth::Sivan => "Sivan",
        HebrewMonth::Tamuz => "Tamuz",
        HebrewMonth::Av => "Av",
        HebrewMonth::Elul => "Elul",
    }
}

/// Hebrew month name. Adar II is "אדר ב'" only in a leap year.
pub fn hebrew_month_name(month: HebrewMonth, leap: bool) -> &'static str {
    match month {
        HebrewMonth::Tishrei => "תשרי",
        HebrewMonth::Cheshvan => "חשון",
        HebrewMonth::Kislev => "כסלו",
        HebrewMonth::Tevet => "טבת",
        HebrewMonth::Shevat => "שבט",
        HebrewMonth::AdarI => "אדר א'",
        HebrewMonth::AdarII if leap => "אדר ב'",
        HebrewMonth::AdarII => "אדר",
        HebrewMonth::Nisan => "ניסן",
        HebrewMonth::Iyar => "אייר",
        HebrewMonth::Sivan => "סיוון",
        HebrewMonth::Tamuz => "תמוז",
        HebrewMonth::Av => "אב",
        HebrewMonth::Elul => "אלול",
    }
}

/// Hebrew weekday name: days are numbered from Sunday, Saturday is Shabbat.
pub fn hebrew_weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "יום א'",
        Weekday::Monday => "יום ב'",
        Weekday::Tuesday => "יום ג'",
        Weekday::Wednesday => "יום ד'",
        Weekday::Thursday => "יום ה'",
        Weekday::Friday => "יום ו'",
        Weekday::Saturday => "יום שבת",
    }
}

pub fn format_date(date: &HebrewDate, weekday: Weekday) -> DateDisplay {
    let leap = date.is_leap_year();
    DateDisplay {
        en: format!(
            "{} {} {} {}",
            weekday.as_str(),
            date.day,
            english_month_name(date.month, leap),
            date.year
        ),
        he: format!(
            "{} {} {} {}",
            hebrew_weekday_name(weekday),
            date.day,
            hebrew_month_name(date.month, leap),
            date.year
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adar_ii_named_by_leap_year() {
        assert_eq!(hebrew_month_name(HebrewMonth::AdarII, true), "אדר ב'");
        assert_eq!(hebrew_month_name(HebrewMonth::AdarII, false), "אדר");
        assert_eq!(hebrew_month_name(HebrewMonth::AdarI, true), "אדר א'");
        assert_eq!(english_month_name(HebrewMonth::AdarII, true), "Adar II");
        assert_eq!(english_month_name(HebrewMonth::AdarII, false), "Adar");
    }

    #[test]
    fn every_weekday_has_a_distinct_hebrew_name() {
        let names: std::collections::HashSet<_> =
            Weekday::all().iter().map(|w| hebrew_weekday_name(*w)).collect();
        assert_eq!(names.len(), 7);
        assert_eq!(hebrew_weekday_name(Weekday::Sunday), "יום א'");
        assert_eq!(hebrew_weekday_name(Weekday::Monday), "יום ב'");
        assert_eq!(hebrew_weekday_name(Weekday::Saturday), "יום שבת");
    }

    #[test]
    fn every_month_has_names() {
        for &m in HebrewMonth::all() {
            assert!(!english_month_name(m, true).is_empty());
            assert!(!hebrew_month_name(m, false).is_empty());
        }
    }

    #[test]
    fn formats_leap_year_purim() {
        let date = HebrewDate::new(5784, HebrewMonth::AdarII, 14).unwrap();
        let display = format_date(&date, Weekday::Sunday);
        assert_eq!(display.en, "Sunday 14 Adar II 5784");
        assert_eq!(display.he, "יום א' 14 אדר ב' 5784");
    }

    #[test]
    fn formats_common_year_shabbat() {
        let date = HebrewDate::new(5785, HebrewMonth::AdarII, 15).unwrap();
        let display = format_date(&date, Weekday::Saturday);
        assert_eq!(display.en, "Saturday 15 Adar 5785");
        assert_eq!(display.he, "יום שבת 15 אדר 5785");
    }
}
