//! Client assets compiled into the binary, served under `/static`.

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;

/// (file name, content type, body)
const ASSETS: &[(&str, &str, &str)] = &[
    (
        "app.js",
        "text/javascript; charset=utf-8",
        include_str!("../../static/app.js"),
    ),
    (
        "style.css",
        "text/css; charset=utf-8",
        include_str!("../../static/style.css"),
    ),
];

pub fn find_asset(name: &str) -> Option<(&'static str, &'static str)> {
    ASSETS
        .iter()
        .find(|(file, _, _)| *file == name)
        .map(|(_, content_type, body)| (*content_type, *body))
}

/// GET /static/:file
pub async fn handle_static_asset(Path(file): Path<String>) -> Result<Response, AppError> {
    let (content_type, body) =
        find_asset(&file).ok_or_else(|| AppError::NotFound(format!("Static file {file}")))?;
    Ok(([(header::CONTENT_TYPE, content_type)], body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_are_embedded() {
        let (content_type, body) = find_asset("app.js").unwrap();
        assert!(content_type.starts_with("text/javascript"));
        assert!(body.contains("fetch(\"/pdf\""));
        assert!(find_asset("style.css").is_some());
    }

    #[test]
    fn test_unknown_asset_is_absent() {
        assert!(find_asset("../Cargo.toml").is_none());
        assert!(find_asset("").is_none());
    }
}
