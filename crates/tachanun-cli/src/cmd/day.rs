use crate::output::print_json;
use anyhow::Context;
use chrono::{Local, NaiveDate};
use tachanun_core::DayReport;

pub fn today(json: bool) -> anyhow::Result<()> {
    show(Local::now().date_naive(), json)
}

pub fn check(date: &str, json: bool) -> anyhow::Result<()> {
    show(super::parse_date(date)?, json)
}

fn show(date: NaiveDate, json: bool) -> anyhow::Result<()> {
    let report = DayReport::for_civil_date(date)
        .with_context(|| format!("cannot evaluate {date}"))?;
    tracing::debug!(%date, recite = report.recite(), "evaluated day");

    if json {
        print_json(&report)?;
    } else {
        println!("{}", report.date_en);
        println!("{}", report.date_he);
        println!("Tachanun: {} / {}", report.tachanun_en, report.tachanun_he);
        if !report.reason_en.is_empty() {
            println!("Reason:   {} / {}", report.reason_en, report.reason_he);
        }
    }
    Ok(())
}
