use crate::config::AppConfig;
use crate::units::UnitRegistry;
use std::collections::HashSet;
use thiserror::Error;

/// Configuration-integrity findings. All of these block startup; none are
/// recoverable at render time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("tab '{id}' has no renderable unit registered")]
    UnknownTab { id: String },
    #[error("duplicate tab identifier '{id}'")]
    DuplicateTab { id: String },
    #[error("tab '{label}' has an empty identifier")]
    EmptyTabId { label: String },
    #[error("chart '{chart}': data point {index} is missing key '{key}'")]
    MissingDataKey {
        chart: String,
        key: String,
        index: usize,
    },
}

/// Check a configuration against the registry it will be composed with.
/// Returns every error found, not just the first, so a configuration author
/// sees the full list in one pass.
pub fn validate(config: &AppConfig, registry: &UnitRegistry) -> Vec<IntegrityError> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for tab in &config.dashboard.tabs {
        if tab.id.is_empty() {
            errors.push(IntegrityError::EmptyTabId {
                label: tab.label.clone(),
            });
            continue;
        }
        if !seen.insert(tab.id.as_str()) {
            errors.push(IntegrityError::DuplicateTab { id: tab.id.clone() });
        }
        if !registry.contains(&tab.id) {
            errors.push(IntegrityError::UnknownTab { id: tab.id.clone() });
        }
    }

    for (name, chart) in config.charts() {
        if chart.colors.len() < chart.data_keys.len() {
            tracing::debug!(
                chart = name,
                "color list shorter than data keys, falling back to default palette"
            );
        }
        for (index, data) in chart.data.iter().enumerate() {
            for key in chart.missing_keys(data) {
                errors.push(IntegrityError::MissingDataKey {
                    chart: name.to_string(),
                    key: key.to_string(),
                    index,
                });
            }
        }
    }

    errors
}

/// Fold all integrity errors into a single fatal error for startup handling.
pub fn ensure_valid(config: &AppConfig, registry: &UnitRegistry) -> anyhow::Result<()> {
    let errors = validate(config, registry);
    if errors.is_empty() {
        return Ok(());
    }
    let report: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow::bail!(
        "configuration failed {} integrity check(s):\n{}",
        report.len(),
        report.join("\n")
    );
}
