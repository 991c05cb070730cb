//! Civil ⇄ Hebrew date conversion.
//!
//! Dates are exchanged through a sequential day number (R.D.), where
//! 0001-01-01 in the proleptic Gregorian calendar is day 1. This is the same
//! count `chrono` exposes as `num_days_from_ce` and the one
//! `calendrical_calculations` calls `RataDie`, so the two meet without any
//! offset.
//!
//! The calendar itself lives in `calendrical_calculations`. Its "book"
//! numbering counts months from Nisan (1) with Adar at 12 and the leap
//! month Adar II at 13; this module maps that onto [`HebrewMonth`].

use crate::error::{Result, TachanunError};
use crate::types::{HebrewMonth, Weekday};
use calendrical_calculations::hebrew::BookHebrew;
use calendrical_calculations::rata_die::RataDie;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Month numbering
// ---------------------------------------------------------------------------

fn book_month(month: HebrewMonth, leap: bool) -> u8 {
    match month {
        HebrewMonth::Nisan => 1,
        HebrewMonth::Iyar => 2,
        HebrewMonth::Sivan => 3,
        HebrewMonth::Tamuz => 4,
        HebrewMonth::Av => 5,
        HebrewMonth::Elul => 6,
        HebrewMonth::Tishrei => 7,
        HebrewMonth::Cheshvan => 8,
        HebrewMonth::Kislev => 9,
        HebrewMonth::Tevet => 10,
        HebrewMonth::Shevat => 11,
        HebrewMonth::AdarI => 12,
        // A common year's only Adar is the book's month 12.
        HebrewMonth::AdarII if leap => 13,
        HebrewMonth::AdarII => 12,
    }
}

fn from_book_month(month: u8, leap: bool) -> Option<HebrewMonth> {
    Some(match month {
        1 => HebrewMonth::Nisan,
        2 => HebrewMonth::Iyar,
        3 => HebrewMonth::Sivan,
        4 => HebrewMonth::Tamuz,
        5 => HebrewMonth::Av,
        6 => HebrewMonth::Elul,
        7 => HebrewMonth::Tishrei,
        8 => HebrewMonth::Cheshvan,
        9 => HebrewMonth::Kislev,
        10 => HebrewMonth::Tevet,
        11 => HebrewMonth::Shevat,
        12 if leap => HebrewMonth::AdarI,
        12 => HebrewMonth::AdarII,
        13 if leap => HebrewMonth::AdarII,
        _ => return None,
    })
}

// ---------------------------------------------------------------------------
// Year and month lengths
// ---------------------------------------------------------------------------

fn fixed(year: i32, month: u8, day: u8) -> i64 {
    BookHebrew::fixed_from_book_hebrew(BookHebrew { year, month, day }).to_i64_date()
}

/// Day number of 1 Tishrei of `year`.
fn new_year(year: i32) -> i64 {
    fixed(year, 7, 1)
}

/// Day number of 1 Tishrei AM 1.
fn epoch() -> i64 {
    new_year(1)
}

/// Last day number `chrono` can turn back into a civil date.
fn last_day_number() -> i64 {
    i64::from(NaiveDate::MAX.num_days_from_ce())
}

pub fn days_in_year(year: i32) -> i64 {
    new_year(year + 1) - new_year(year)
}

/// Leap years carry a thirteenth month and run 383-385 days.
pub fn is_leap_year(year: i32) -> bool {
    days_in_year(year) > 355
}

/// Day number of `day` of `month` in `year`, without validation.
fn day_number_of(year: i32, month: HebrewMonth, day: u8) -> i64 {
    fixed(year, book_month(month, is_leap_year(year)), day)
}

/// Length of `month` in `year`. Adar I has no days in a common year.
pub fn days_in_month(year: i32, month: HebrewMonth) -> u8 {
    let leap = is_leap_year(year);
    if month == HebrewMonth::AdarI && !leap {
        return 0;
    }
    let mut months = HebrewMonth::in_year(leap).skip_while(|m| *m != month).skip(1);
    let next = match months.next() {
        Some(next) => day_number_of(year, next, 1),
        None => new_year(year + 1),
    };
    (next - day_number_of(year, month, 1)) as u8
}

/// Length of Kislev in `year` (29 or 30), measured as the distance between
/// the first of Kislev and the first of Tevet.
pub fn days_in_kislev(year: i32) -> i64 {
    day_number_of(year, HebrewMonth::Tevet, 1) - day_number_of(year, HebrewMonth::Kislev, 1)
}

// ---------------------------------------------------------------------------
// HebrewDate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HebrewDate {
    pub year: i32,
    pub month: HebrewMonth,
    pub day: u8,
}

impl HebrewDate {
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> Result<Self> {
        if year < 1 {
            return Err(TachanunError::DateOutOfRange(format!(
                "year {year} is before AM 1"
            )));
        }
        if month == HebrewMonth::AdarI && !is_leap_year(year) {
            return Err(TachanunError::InvalidDate(format!(
                "{year} is not a leap year and has no Adar I"
            )));
        }
        let len = days_in_month(year, month);
        if day == 0 || day > len {
            return Err(TachanunError::InvalidDate(format!(
                "day {day} of {month} {year} (month has {len} days)"
            )));
        }
        Ok(Self { year, month, day })
    }

    pub fn from_civil(date: NaiveDate) -> Result<Self> {
        Self::from_day_number(i64::from(date.num_days_from_ce())).map_err(|_| {
            TachanunError::DateOutOfRange(format!("{date} is before 1 Tishrei AM 1"))
        })
    }

    pub fn from_day_number(n: i64) -> Result<Self> {
        if n < epoch() {
            return Err(TachanunError::DateOutOfRange(format!(
                "day number {n} is before 1 Tishrei AM 1"
            )));
        }
        if n > last_day_number() {
            return Err(TachanunError::DateOutOfRange(format!(
                "day number {n} is past the last representable civil date"
            )));
        }

        let book = BookHebrew::book_hebrew_from_fixed(RataDie::new(n));
        let month = from_book_month(book.month, is_leap_year(book.year)).ok_or_else(|| {
            TachanunError::DateOutOfRange(format!(
                "day number {n} maps to unknown month {}",
                book.month
            ))
        })?;
        Ok(Self {
            year: book.year,
            month,
            day: book.day,
        })
    }

    pub fn day_number(&self) -> i64 {
        day_number_of(self.year, self.month, self.day)
    }

    pub fn to_civil(&self) -> Result<NaiveDate> {
        i32::try_from(self.day_number())
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| {
                TachanunError::DateOutOfRange(format!("{self} has no representable civil date"))
            })
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_index(self.day_number().rem_euclid(7) as usize)
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.day,
            crate::format::english_month_name(self.month, self.is_leap_year()),
            self.year
        )
    }
}
