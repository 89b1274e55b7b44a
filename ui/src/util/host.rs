//! ERP host-family detection from page markup.
//!
//! DESIGN
//! ======
//! Families are checked in a fixed priority order and the first one with any
//! matching keyword wins, so a page mentioning both SAP and Oracle is SAP.
//! Matching is plain substring search on the lower-cased markup.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use crate::config::{Theme, WidgetConfig};

/// Visual family of the page hosting the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostFamily {
    Sap,
    Oracle,
    Microsoft,
    Custom,
    Unknown,
}

/// Priority-ordered keyword table.
const INDICATORS: [(HostFamily, &[&str]); 4] = [
    (HostFamily::Sap, &["sap", "sapui5", "fiori"]),
    (HostFamily::Oracle, &["oracle", "oracleapps"]),
    (HostFamily::Microsoft, &["dynamics", "nav", "ax"]),
    (HostFamily::Custom, &["erp", "enterprise"]),
];

impl HostFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sap => "sap",
            Self::Oracle => "oracle",
            Self::Microsoft => "microsoft",
            Self::Custom => "custom",
            Self::Unknown => "unknown",
        }
    }

    /// Theme and z-index tier for this family; `None` leaves the config as is.
    pub fn adaptation(self) -> Option<(Theme, Option<i32>)> {
        match self {
            Self::Sap => Some((Theme::SapFiori, Some(15_000))),
            Self::Oracle => Some((Theme::Oracle, Some(12_000))),
            Self::Microsoft => Some((Theme::Microsoft, Some(11_000))),
            Self::Custom => Some((Theme::Professional, None)),
            Self::Unknown => None,
        }
    }
}

/// Classify a page by its full markup.
pub fn detect_host(markup: &str) -> HostFamily {
    let html = markup.to_lowercase();
    INDICATORS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| html.contains(k)))
        .map_or(HostFamily::Unknown, |(family, _)| *family)
}

/// Apply the family's theme and z-index tier to `config`.
pub fn adapt_config(config: &mut WidgetConfig, family: HostFamily) {
    if let Some((theme, z_index)) = family.adaptation() {
        config.theme = theme;
        if let Some(z) = z_index {
            config.z_index = z;
        }
    }
}
