pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::transfer::handlers as transfer;
use crate::views::assets;
use crate::views::handlers as views;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML pages
        .route("/", get(views::handle_lang_page))
        .route("/form", get(views::handle_form_page))
        // Export
        .route("/pdf", post(transfer::handle_export_pdf))
        .route("/static/:file", get(assets::handle_static_asset))
        .with_state(state)
}
