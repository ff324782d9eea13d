use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/records/add", post(handlers::add_record_form))
        .route("/records/remove", post(handlers::remove_record_form))
        .route("/today/add", post(handlers::today_add))
        .route("/today/remove", post(handlers::today_remove))
        .route("/api/records", post(handlers::create_record))
        .route(
            "/api/records/:date",
            get(handlers::get_record_count).delete(handlers::delete_record),
        )
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/calendar", get(handlers::get_calendar))
        .with_state(state)
}
