use std::sync::Arc;

use anyhow::Result;
use handlebars::Handlebars;

use crate::config::Config;
use crate::layout::{default_page_config, PageConfig};
use crate::views;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; requests never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Page geometry for exported documents (US letter, seven fixed columns).
    pub page_config: PageConfig,
    /// Compiled HTML page templates.
    pub templates: Arc<Handlebars<'static>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Ok(AppState {
            config,
            page_config: default_page_config(),
            templates: Arc::new(views::build_registry()?),
        })
    }
}
