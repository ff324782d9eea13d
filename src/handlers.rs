use crate::calendar::{MonthCursor, build_month};
use crate::errors::{AppError, SELECT_DATE_MESSAGE};
use crate::models::{
    CalendarQuery, DayCountResponse, MonthGrid, Record, RecordForm, RecordRequest,
    RemoveResponse, StatsResponse,
};
use crate::state::AppState;
use crate::stats::{build_stats_at, date_key, parse_date};
use crate::storage::persist_records;
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use chrono::{Local, NaiveDate, Utc};
use tracing::{debug, info};

const SELECT_DATE_NOTICE: &str = "select-date";

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Html<String> {
    let today = today();
    let cursor = MonthCursor::from_query(query.year.as_deref(), query.month.as_deref(), today);
    let selected = query
        .selected
        .as_deref()
        .and_then(parse_date)
        .map(date_key);
    let notice = (query.notice.as_deref() == Some(SELECT_DATE_NOTICE)).then_some(SELECT_DATE_MESSAGE);

    let records = state.records.lock().await;
    let grid = build_month(&records, cursor, today, selected.as_deref());
    let stats = build_stats_at(today, &records);
    Html(render_index(&grid, &stats, selected.as_deref(), notice))
}

pub async fn add_record_form(
    State(state): State<AppState>,
    Form(form): Form<RecordForm>,
) -> Result<Redirect, AppError> {
    let cursor = MonthCursor::from_query(form.year.as_deref(), form.month.as_deref(), today());
    if is_blank(form.date.as_deref()) {
        return Ok(Redirect::to(&page_url(cursor, None, Some(SELECT_DATE_NOTICE))));
    }

    let date = normalize_date(form.date.as_deref())?;
    add_record(&state, &date).await?;
    Ok(Redirect::to(&page_url(cursor, Some(&date), None)))
}

pub async fn remove_record_form(
    State(state): State<AppState>,
    Form(form): Form<RecordForm>,
) -> Result<Redirect, AppError> {
    let cursor = MonthCursor::from_query(form.year.as_deref(), form.month.as_deref(), today());
    if is_blank(form.date.as_deref()) {
        return Ok(Redirect::to(&page_url(cursor, None, Some(SELECT_DATE_NOTICE))));
    }

    let date = normalize_date(form.date.as_deref())?;
    remove_record(&state, &date).await?;
    Ok(Redirect::to(&page_url(cursor, Some(&date), None)))
}

pub async fn today_add(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let today = today();
    let date = date_key(today);
    add_record(&state, &date).await?;
    Ok(Redirect::to(&page_url(MonthCursor::containing(today), Some(&date), None)))
}

pub async fn today_remove(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let today = today();
    let date = date_key(today);
    remove_record(&state, &date).await?;
    Ok(Redirect::to(&page_url(MonthCursor::containing(today), Some(&date), None)))
}

pub async fn get_record_count(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayCountResponse>, AppError> {
    let date = normalize_date(Some(&date))?;
    let count = state.records.lock().await.count(&date);
    Ok(Json(DayCountResponse { date, count }))
}

pub async fn create_record(
    State(state): State<AppState>,
    Json(payload): Json<RecordRequest>,
) -> Result<Json<DayCountResponse>, AppError> {
    let date = normalize_date(payload.date.as_deref())?;
    let count = add_record(&state, &date).await?;
    Ok(Json(DayCountResponse { date, count }))
}

pub async fn delete_record(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<RemoveResponse>, AppError> {
    let date = normalize_date(Some(&date))?;
    let (count, removed) = remove_record(&state, &date).await?;
    Ok(Json(RemoveResponse {
        date,
        count,
        removed,
    }))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let records = state.records.lock().await;
    Json(build_stats_at(today(), &records))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Json<MonthGrid> {
    let today = today();
    let cursor = MonthCursor::from_query(query.year.as_deref(), query.month.as_deref(), today);
    let selected = query
        .selected
        .as_deref()
        .and_then(parse_date)
        .map(date_key);
    let records = state.records.lock().await;
    Json(build_month(&records, cursor, today, selected.as_deref()))
}

async fn add_record(state: &AppState, date: &str) -> Result<u64, AppError> {
    let mut records = state.records.lock().await;
    // Only swap the new set in once it is on disk.
    let mut next = records.clone();
    next.append(Record::new(date, Utc::now().timestamp_millis()));
    persist_records(&state.data_path, &next).await?;
    *records = next;

    let count = records.count(date);
    info!(date, count, "record added");
    Ok(count)
}

async fn remove_record(state: &AppState, date: &str) -> Result<(u64, bool), AppError> {
    let mut records = state.records.lock().await;
    let mut next = records.clone();
    let removed = next.remove_one(date);
    if removed {
        persist_records(&state.data_path, &next).await?;
        *records = next;
    }

    let count = records.count(date);
    if removed {
        info!(date, count, "record removed");
    } else {
        debug!(date, "no record to remove");
    }
    Ok((count, removed))
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|value| value.trim().is_empty())
}

/// Validates a client-supplied day and returns it as `YYYY-MM-DD`.
fn normalize_date(value: Option<&str>) -> Result<String, AppError> {
    let value = match value.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AppError::no_date_selected()),
    };
    parse_date(value)
        .map(date_key)
        .ok_or_else(|| AppError::bad_request(format!("invalid date '{value}', expected YYYY-MM-DD")))
}

fn page_url(cursor: MonthCursor, selected: Option<&str>, notice: Option<&str>) -> String {
    let mut url = format!("/?year={}&month={}", cursor.year, cursor.month);
    if let Some(selected) = selected {
        url.push_str("&selected=");
        url.push_str(selected);
    }
    if let Some(notice) = notice {
        url.push_str("&notice=");
        url.push_str(notice);
    }
    url
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
