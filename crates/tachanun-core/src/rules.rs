use crate::classifier::{DayContext, Rule};
use crate::hebrew::days_in_kislev;
use crate::types::{HebrewMonth, Weekday};

// ---------------------------------------------------------------------------
// Helper macro for concise rule definitions
// ---------------------------------------------------------------------------

macro_rules! rule {
    (
        id: $id:expr,
        condition: $cond:expr,
        reason_en: $en:expr,
        reason_he: $he:expr
    ) => {
        Rule {
            id: $id,
            condition: $cond,
            reason_en: $en,
            reason_he: $he,
        }
    };
}

// ---------------------------------------------------------------------------
// Condition helpers
// ---------------------------------------------------------------------------

fn in_month(ctx: &DayContext, m: HebrewMonth) -> bool {
    ctx.date.month == m
}

fn on(ctx: &DayContext, m: HebrewMonth, day: u8) -> bool {
    in_month(ctx, m) && ctx.date.day == day
}

/// Chanukah runs eight days from 25 Kislev, so it ends on Tevet 2 or 3
/// depending on whether Kislev has 30 or 29 days.
fn is_chanukah(ctx: &DayContext) -> bool {
    let last_tevet_day = 25 + 7 - days_in_kislev(ctx.date.year);
    (in_month(ctx, HebrewMonth::Kislev) && ctx.date.day >= 25)
        || (in_month(ctx, HebrewMonth::Tevet) && i64::from(ctx.date.day) <= last_tevet_day)
}

/// Yom Ha'atzmaut is 5 Iyar, moved earlier when it would fall next to
/// Shabbat.
fn is_yom_haatzmaut(ctx: &DayContext) -> bool {
    in_month(ctx, HebrewMonth::Iyar)
        && matches!(
            (ctx.date.day, ctx.weekday),
            (3, Weekday::Thursday)
                | (4, Weekday::Thursday)
                | (5, Weekday::Wednesday)
                | (6, Weekday::Tuesday)
        )
}

// ---------------------------------------------------------------------------
// Default rules (priority-ordered)
// ---------------------------------------------------------------------------

pub fn default_rules() -> Vec<Rule> {
    vec![
        // 1. The whole month of Nisan
        rule! {
            id: "nissan",
            condition: |ctx| in_month(ctx, HebrewMonth::Nisan),
            reason_en: "All of Nissan",
            reason_he: "כל חודש ניסן"
        },
        // 2. Tishrei
        rule! {
            id: "rosh_hashannah",
            condition: |ctx| in_month(ctx, HebrewMonth::Tishrei) && matches!(ctx.date.day, 1 | 2),
            reason_en: "Rosh Hashannah",
            reason_he: "ראש השנה"
        },
        rule! {
            id: "erev_yom_kippur",
            condition: |ctx| on(ctx, HebrewMonth::Tishrei, 9),
            reason_en: "Erev Yom Kippur",
            reason_he: "ערב יום כיפור"
        },
        rule! {
            id: "after_yom_kippur",
            condition: |ctx| in_month(ctx, HebrewMonth::Tishrei) && ctx.date.day >= 11,
            reason_en: "After Yom Kippur until month end",
            reason_he: "ממוצאי יום כיפור עד סוף חודש תשרי"
        },
        // 5. Chanukah, takes priority over Rosh Chodesh Tevet
        rule! {
            id: "chanukah",
            condition: is_chanukah,
            reason_en: "Chanukah",
            reason_he: "חנוכה שמח"
        },
        rule! {
            id: "tu_bshvat",
            condition: |ctx| on(ctx, HebrewMonth::Shevat, 15),
            reason_en: "Tu B'Shvat",
            reason_he: "ט\"ו בשבט"
        },
        // 7. Adar. A common year's only Adar is Adar II.
        rule! {
            id: "purim_katan",
            condition: |ctx| in_month(ctx, HebrewMonth::AdarI) && matches!(ctx.date.day, 14 | 15),
            reason_en: "Purim Katan",
            reason_he: "פורים קטן"
        },
        rule! {
            id: "purim",
            condition: |ctx| on(ctx, HebrewMonth::AdarII, 14),
            reason_en: "Purim",
            reason_he: "פורים"
        },
        rule! {
            id: "shushan_purim",
            condition: |ctx| on(ctx, HebrewMonth::AdarII, 15),
            reason_en: "Shushan Purim",
            reason_he: "שושן פורים"
        },
        rule! {
            id: "purim_meshulash",
            condition: |ctx| on(ctx, HebrewMonth::AdarII, 16) && ctx.weekday == Weekday::Sunday,
            reason_en: "Purim Meshulash",
            reason_he: "פורים משולש"
        },
        // 11. Iyar
        rule! {
            id: "yom_haatzmaut",
            condition: is_yom_haatzmaut,
            reason_en: "Yom Ha'atzmaut",
            reason_he: "יום העצמאות"
        },
        rule! {
            id: "pesach_sheni",
            condition: |ctx| on(ctx, HebrewMonth::Iyar, 14),
            reason_en: "Pesach Sheni",
            reason_he: "פסח שני"
        },
        rule! {
            id: "lag_baomer",
            condition: |ctx| on(ctx, HebrewMonth::Iyar, 18),
            reason_en: "Lag B'Omer",
            reason_he: "ל\"ג בעומר"
        },
        rule! {
            id: "yom_yerushalayim",
            condition: |ctx| on(ctx, HebrewMonth::Iyar, 28),
            reason_en: "Yom Yerushalayim",
            reason_he: "יום שחרור ירושלים"
        },
        // 15. Rosh Chodesh Sivan through the end of the Shavuot make-up days
        rule! {
            id: "sivan",
            condition: |ctx| in_month(ctx, HebrewMonth::Sivan) && ctx.date.day <= 12,
            reason_en: "First 12 days of Sivan",
            reason_he: "מר\"ח עד י\"ב סיוון"
        },
        rule! {
            id: "tisha_bav",
            condition: |ctx| on(ctx, HebrewMonth::Av, 9),
            reason_en: "Tisha B'Av",
            reason_he: "תשעה באב"
        },
        rule! {
            id: "tu_bav",
            condition: |ctx| on(ctx, HebrewMonth::Av, 15),
            reason_en: "Tu B'Av",
            reason_he: "ט\"ו באב"
        },
        rule! {
            id: "erev_rosh_hashannah",
            condition: |ctx| on(ctx, HebrewMonth::Elul, 29),
            reason_en: "Erev Rosh Hashannah",
            reason_he: "ערב ראש השנה"
        },
        // 19. Any month
        rule! {
            id: "rosh_chodesh",
            condition: |ctx| matches!(ctx.date.day, 1 | 30),
            reason_en: "Rosh Chodesh",
            reason_he: "ראש חודש"
        },
        rule! {
            id: "shabbat",
            condition: |ctx| ctx.weekday == Weekday::Saturday,
            reason_en: "Shabbat shalom!",
            reason_he: "שבת שלום!"
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
