use anyhow::Context;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::i18n::Lang;
use crate::models::transfer::ExportRequest;
use crate::render::render_transfer_log;
use crate::state::AppState;
use crate::transfer::range::BlockedSet;
use crate::transfer::validation::validate_batch;

pub const PDF_FILENAME: &str = "transfer_log.pdf";

/// POST /pdf
///
/// Validates every row, then renders the whole batch. Nothing is rendered if any row
/// is rejected.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let lang = Lang::resolve(req.lang.as_deref(), state.config.default_lang);
    let strings = lang.strings();
    let blocked = BlockedSet::parse(&req.blocked_ranges);

    if let Err(rejection) = validate_batch(&req.rows, &blocked) {
        info!(
            row = rejection.row,
            blocked = blocked.intervals().len(),
            reason = ?rejection.reason,
            "Transfer log export rejected"
        );
        return Err(AppError::Validation {
            msg: rejection.message(strings),
            row: rejection.row,
        });
    }

    let rows = req.rows;
    let page_config = state.page_config.clone();
    let pdf = tokio::task::spawn_blocking(move || {
        render_transfer_log(&rows, strings, &page_config)
    })
    .await
    .context("PDF render task panicked")??;

    info!(
        lang = %lang,
        pages = pdf.page_count,
        bytes = pdf.bytes.len(),
        "Transfer log exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={PDF_FILENAME}"),
            ),
        ],
        pdf.bytes,
    )
        .into_response())
}
