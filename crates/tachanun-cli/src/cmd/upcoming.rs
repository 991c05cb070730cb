use crate::output::{print_json, print_table};
use anyhow::{bail, Context};
use chrono::Local;
use std::path::Path;
use tachanun_core::{config::Config, report};

pub fn run(
    config_path: &Path,
    from: Option<&str>,
    days: Option<u32>,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load(config_path).context("failed to load config")?;
    let from = match from {
        Some(raw) => super::parse_date(raw)?,
        None => Local::now().date_naive(),
    };
    let days = days.unwrap_or(config.upcoming.days);
    if days > report::MAX_UPCOMING_DAYS {
        bail!(
            "{days} days is too many; at most {} days can be listed",
            report::MAX_UPCOMING_DAYS
        );
    }

    let reports = report::upcoming(from, days)
        .with_context(|| format!("cannot evaluate from {from}"))?;

    if json {
        let value: Vec<serde_json::Value> = reports
            .iter()
            .map(|(date, r)| {
                serde_json::json!({
                    "date": date.format("%Y-%m-%d").to_string(),
                    "report": r,
                })
            })
            .collect();
        return print_json(&value);
    }

    let rows: Vec<Vec<String>> = reports
        .iter()
        .map(|(date, r)| {
            vec![
                date.format("%Y-%m-%d").to_string(),
                r.date_en.clone(),
                r.tachanun_en.clone(),
                r.reason_en.clone(),
            ]
        })
        .collect();
    print_table(&["DATE", "HEBREW DATE", "TACHANUN", "REASON"], rows);
    Ok(())
}
