//! Server-rendered HTML pages: the language picker and the transfer-log entry form.

pub mod assets;
pub mod handlers;

use anyhow::{Context, Result};
use handlebars::Handlebars;

pub const LANG_PAGE: &str = "lang";
pub const FORM_PAGE: &str = "form";

/// Compiles the embedded page templates. Strict mode turns a missing variable into a
/// render error instead of an empty string.
pub fn build_registry() -> Result<Handlebars<'static>> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(LANG_PAGE, include_str!("../../templates/lang.html"))
        .context("lang.html template failed to compile")?;
    registry
        .register_template_string(FORM_PAGE, include_str!("../../templates/form.html"))
        .context("form.html template failed to compile")?;
    Ok(registry)
}

/// Serializes a value for inline `<script>` use, keeping `</script>` out of the payload.
pub fn script_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).context("failed to serialize script data")?;
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_compile() {
        let registry = build_registry().unwrap();
        assert!(registry.has_template(LANG_PAGE));
        assert!(registry.has_template(FORM_PAGE));
    }

    #[test]
    fn test_script_json_escapes_closing_tags() {
        let out = script_json(&"</script><b>").unwrap();
        assert_eq!(out, "\"<\\/script><b>\"");
    }
}
