//! Localized strings for the form, the exported document and validation errors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Zh,
    En,
    Es,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Zh, Lang::En, Lang::Es];

    pub fn tag(&self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Resolves an optional client-supplied tag, falling back to `default` when it is
    /// missing or unknown.
    pub fn resolve(tag: Option<&str>, default: Lang) -> Lang {
        tag.and_then(|t| t.parse().ok()).unwrap_or(default)
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Lang::Zh => &ZH,
            Lang::En => &EN,
            Lang::Es => &ES,
        }
    }
}

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" => Ok(Lang::Zh),
            "en" => Ok(Lang::En),
            "es" => Ok(Lang::Es),
            other => Err(UnknownLang(other.to_string())),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported language tag {0:?}")]
pub struct UnknownLang(pub String);

/// One language's string table. Serialized verbatim into the form page for the client script.
#[derive(Debug, Serialize)]
pub struct Strings {
    pub title: &'static str,
    pub add_row: &'static str,
    pub export_pdf: &'static str,
    pub from_date: &'static str,
    pub route: &'static str,
    pub from_driver: &'static str,
    pub from_range: &'static str,
    pub to_date: &'static str,
    pub to_driver: &'static str,
    pub to_range: &'static str,
    pub non_transferable: &'static str,
    pub ops: &'static str,
    pub delete: &'static str,
    pub blocked_ranges: &'static str,
    pub blocked_hint: &'static str,
    pub err_invalid_range: &'static str,
    /// Contains an `{idx}` placeholder for the 1-based row number.
    pub err_overlap_blocked: &'static str,
}

impl Strings {
    /// Column labels in document order.
    pub fn column_labels(&self) -> [&'static str; 7] {
        [
            self.from_date,
            self.route,
            self.from_driver,
            self.from_range,
            self.to_date,
            self.to_driver,
            self.to_range,
        ]
    }

    pub fn overlap_blocked(&self, row: usize) -> String {
        self.err_overlap_blocked.replace("{idx}", &row.to_string())
    }
}

static ZH: Strings = Strings {
    title: "转单记录",
    add_row: "添加一行",
    export_pdf: "导出 PDF",
    from_date: "从哪天日期",
    route: "线路",
    from_driver: "原司机",
    from_range: "包裹范围(如 100-120)",
    to_date: "转到哪天日期",
    to_driver: "新司机",
    to_range: "转单范围(如 100-120)",
    non_transferable: "不可转",
    ops: "操作",
    delete: "删除",
    blocked_ranges: "不可转的包裹范围（可选）",
    blocked_hint: "支持逗号分隔，例如：100-120, 205-210。系统会阻止与这些范围有重叠的转单。",
    err_invalid_range: "范围格式错误：请使用 numbers-numbers（例如 100-120）。",
    err_overlap_blocked: "第 {idx} 行：转单范围与不可转范围重叠，已阻止导出。",
};

static EN: Strings = Strings {
    title: "Transfer Log",
    add_row: "Add row",
    export_pdf: "Export PDF",
    from_date: "From date",
    route: "Route",
    from_driver: "From driver",
    from_range: "Package range (e.g., 100-120)",
    to_date: "To date",
    to_driver: "To driver",
    to_range: "Transfer range (e.g., 100-120)",
    non_transferable: "Locked",
    ops: "Actions",
    delete: "Delete",
    blocked_ranges: "Non-transferable ranges (optional)",
    blocked_hint: "Comma-separated, e.g. 100-120, 205-210. Export is blocked if any transfer overlaps.",
    err_invalid_range: "Invalid range format. Use numbers-numbers (e.g., 100-120).",
    err_overlap_blocked: "Row {idx}: transfer range overlaps a blocked range. Export blocked.",
};

static ES: Strings = Strings {
    title: "Registro de Transferencias",
    add_row: "Agregar fila",
    export_pdf: "Exportar PDF",
    from_date: "Fecha origen",
    route: "Ruta",
    from_driver: "Conductor origen",
    from_range: "Rango (ej. 100-120)",
    to_date: "Fecha destino",
    to_driver: "Conductor destino",
    to_range: "Rango transferido (ej. 100-120)",
    non_transferable: "Bloqueado",
    ops: "Acciones",
    delete: "Eliminar",
    blocked_ranges: "Rangos no transferibles (opcional)",
    blocked_hint: "Separados por comas, ej. 100-120, 205-210. Se bloquea si hay solapamiento.",
    err_invalid_range: "Formato inválido. Use numbers-numbers (ej. 100-120).",
    err_overlap_blocked: "Fila {idx}: el rango se solapa con uno bloqueado. Exportación bloqueada.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("en".parse::<Lang>().unwrap(), Lang::En);
        assert_eq!(" ES ".parse::<Lang>().unwrap(), Lang::Es);
        assert!("fr".parse::<Lang>().is_err());
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Lang::resolve(Some("en"), Lang::Zh), Lang::En);
        assert_eq!(Lang::resolve(Some("de"), Lang::Es), Lang::Es);
        assert_eq!(Lang::resolve(None, Lang::Zh), Lang::Zh);
    }

    #[test]
    fn test_every_language_formats_row_index() {
        for lang in Lang::ALL {
            let msg = lang.strings().overlap_blocked(7);
            assert!(msg.contains('7'), "{lang}: {msg}");
            assert!(!msg.contains("{idx}"), "{lang}: placeholder left in {msg}");
        }
    }

    #[test]
    fn test_column_labels_follow_row_field_order() {
        let labels = Lang::En.strings().column_labels();
        assert_eq!(labels[0], "From date");
        assert_eq!(labels[6], "Transfer range (e.g., 100-120)");
    }

    #[test]
    fn test_lang_serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Lang::Es).unwrap(), "\"es\"");
        let parsed: Lang = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(parsed, Lang::Zh);
    }
}
