use crate::classifier::{Classifier, DayContext, Verdict};
use crate::error::{Result, TachanunError};
use crate::format::format_date;
use crate::hebrew::HebrewDate;
use crate::types::Weekday;
use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DayReport
// ---------------------------------------------------------------------------

/// The record handed to the display layer for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    pub tachanun_en: String,
    pub tachanun_he: String,
    pub reason_en: String,
    pub reason_he: String,
    pub date_en: String,
    pub date_he: String,
}

impl DayReport {
    pub fn new(date: &HebrewDate, weekday: Weekday, verdict: &Verdict) -> Self {
        let display = format_date(date, weekday);
        let (tachanun_en, tachanun_he) = if verdict.recite {
            ("Yes", "כן")
        } else {
            ("No", "לא")
        };
        Self {
            tachanun_en: tachanun_en.to_string(),
            tachanun_he: tachanun_he.to_string(),
            reason_en: verdict.reason_en.clone(),
            reason_he: verdict.reason_he.clone(),
            date_en: display.en,
            date_he: display.he,
        }
    }

    pub fn for_civil_date(date: NaiveDate) -> Result<Self> {
        Self::classify(&Classifier::default(), date)
    }

    /// Report for `date` using an explicit rule set.
    pub fn classify(classifier: &Classifier, date: NaiveDate) -> Result<Self> {
        let hebrew = HebrewDate::from_civil(date)?;
        let weekday = Weekday::from(date.weekday());
        let verdict = classifier.classify(&DayContext {
            date: &hebrew,
            weekday,
        });
        Ok(Self::new(&hebrew, weekday, &verdict))
    }

    /// Report for the host's local date.
    pub fn today() -> Result<Self> {
        Self::for_civil_date(Local::now().date_naive())
    }

    pub fn recite(&self) -> bool {
        self.tachanun_en == "Yes"
    }
}

/// Longest span `upcoming` will evaluate: ten years of days.
pub const MAX_UPCOMING_DAYS: u32 = 3660;

/// Reports for `days` consecutive civil dates starting at `from`. Stops early
/// at the last date `chrono` can represent.
pub fn upcoming(from: NaiveDate, days: u32) -> Result<Vec<(NaiveDate, DayReport)>> {
    if days > MAX_UPCOMING_DAYS {
        return Err(TachanunError::TooManyDays {
            requested: days,
            max: MAX_UPCOMING_DAYS,
        });
    }
    let classifier = Classifier::default();
    let mut out = Vec::new();
    for offset in 0..days {
        let Some(date) = from.checked_add_days(Days::new(u64::from(offset))) else {
            break;
        };
        out.push((date, DayReport::classify(&classifier, date)?));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civil(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn purim_meshulash_report() {
        let r = DayReport::for_civil_date(civil(2025, 3, 16)).unwrap();
        assert_eq!(r.tachanun_en, "No");
        assert_eq!(r.tachanun_he, "לא");
        assert_eq!(r.reason_en, "Purim Meshulash");
        assert_eq!(r.reason_he, "פורים משולש");
        assert_eq!(r.date_en, "Sunday 16 Adar 5785");
        assert_eq!(r.date_he, "יום א' 16 אדר 5785");
        assert!(!r.recite());
    }

    #[test]
    fn ordinary_day_report() {
        let r = DayReport::for_civil_date(civil(2026, 10, 16)).unwrap();
        assert_eq!(r.tachanun_en, "Yes");
        assert_eq!(r.tachanun_he, "כן");
        assert_eq!(r.reason_en, "");
        assert_eq!(r.reason_he, "");
        assert_eq!(r.date_en, "Friday 5 Cheshvan 5787");
        assert!(r.recite());
    }

    #[test]
    fn report_json_has_template_fields() {
        let r = DayReport::for_civil_date(civil(2023, 9, 16)).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        for key in [
            "tachanun_en",
            "tachanun_he",
            "reason_en",
            "reason_he",
            "date_en",
            "date_he",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["reason_en"], "Rosh Hashannah");
    }

    #[test]
    fn today_evaluates_local_date() {
        let r = DayReport::today().unwrap();
        assert!(r.tachanun_en == "Yes" || r.tachanun_en == "No");
        assert!(!r.date_en.is_empty());
    }

    #[test]
    fn dates_before_epoch_are_rejected() {
        let err = DayReport::for_civil_date(civil(-3762, 1, 1)).unwrap_err();
        assert!(matches!(err, TachanunError::DateOutOfRange(_)));
        assert!(err.to_string().contains("is before 1 Tishrei AM 1"));
    }

    #[test]
    fn upcoming_covers_consecutive_days() {
        let days = upcoming(civil(2024, 12, 24), 11).unwrap();
        assert_eq!(days.len(), 11);
        assert_eq!(days[0].0, civil(2024, 12, 24));
        assert_eq!(days[10].0, civil(2025, 1, 3));
        // 25 Kislev 5785 through 2 Tevet
        let chanukah = days
            .iter()
            .filter(|(_, r)| r.reason_en == "Chanukah")
            .count();
        assert_eq!(chanukah, 8);
    }

    #[test]
    fn upcoming_rejects_huge_spans() {
        let err = upcoming(civil(2024, 1, 1), u32::MAX).unwrap_err();
        assert!(matches!(
            err,
            TachanunError::TooManyDays {
                requested: u32::MAX,
                max: MAX_UPCOMING_DAYS
            }
        ));
        assert_eq!(
            upcoming(civil(2024, 1, 1), MAX_UPCOMING_DAYS).unwrap().len(),
            MAX_UPCOMING_DAYS as usize
        );
    }

    #[test]
    fn upcoming_stops_at_last_civil_date() {
        let days = upcoming(NaiveDate::MAX, 5).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].0, NaiveDate::MAX);
    }

    #[test]
    fn upcoming_zero_days_is_empty() {
        assert!(upcoming(civil(2024, 1, 1), 0).unwrap().is_empty());
    }
}
