use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use chrono::{Local, NaiveDate};
use tachanun_core::DayReport;

use crate::error::AppError;
use crate::state::AppState;

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| AppError::bad_request(format!("'{raw}' is not a YYYY-MM-DD date: {e}")))
}

fn report_for(app: &AppState, date: NaiveDate) -> Result<DayReport, AppError> {
    let report = DayReport::classify(&app.classifier, date)?;
    tracing::debug!(%date, recite = report.recite(), reason = %report.reason_en, "evaluated day");
    Ok(report)
}

fn render_page(app: &AppState, date: NaiveDate) -> Result<Html<String>, AppError> {
    let report = report_for(app, date)?;
    Ok(Html(app.templates.render_day(&report, date)?))
}

/// GET / — the page for the server's local date.
pub async fn today_page(State(app): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&app, Local::now().date_naive())
}

/// GET /date/{date} — the page for an explicit civil date.
pub async fn date_page(
    State(app): State<AppState>,
    Path(date): Path<String>,
) -> Result<Html<String>, AppError> {
    render_page(&app, parse_date(&date)?)
}

/// GET /api/today — today's report as JSON.
pub async fn today_json(State(app): State<AppState>) -> Result<Json<DayReport>, AppError> {
    Ok(Json(report_for(&app, Local::now().date_naive())?))
}

/// GET /api/date/{date} — the report for an explicit civil date as JSON.
pub async fn date_json(
    State(app): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayReport>, AppError> {
    Ok(Json(report_for(&app, parse_date(&date)?)?))
}
