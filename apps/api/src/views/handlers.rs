use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::AppError;
use crate::i18n::Lang;
use crate::state::AppState;
use crate::views::{script_json, FORM_PAGE, LANG_PAGE};

#[derive(Debug, Deserialize)]
pub struct FormQuery {
    pub lang: Option<String>,
}

#[derive(Serialize)]
struct LanguageChoice {
    tag: &'static str,
    title: &'static str,
}

/// GET /
pub async fn handle_lang_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let choices: Vec<LanguageChoice> = Lang::ALL
        .iter()
        .map(|lang| LanguageChoice {
            tag: lang.tag(),
            title: lang.strings().title,
        })
        .collect();

    let html = state.templates.render(
        LANG_PAGE,
        &json!({
            "lang": state.config.default_lang.tag(),
            "languages": choices,
        }),
    )?;
    Ok(Html(html))
}

/// GET /form?lang=
pub async fn handle_form_page(
    State(state): State<AppState>,
    Query(query): Query<FormQuery>,
) -> Result<Html<String>, AppError> {
    let lang = Lang::resolve(query.lang.as_deref(), state.config.default_lang);
    let strings = lang.strings();

    let html = state.templates.render(
        FORM_PAGE,
        &json!({
            "lang": lang.tag(),
            "t": strings,
            "t_json": script_json(strings)?,
        }),
    )?;
    Ok(Html(html))
}
