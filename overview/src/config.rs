//! Control options and ratio bounds.
//!
//! Options arrive as a loose JSON object from the host page; every field is
//! optional and merged over the defaults. Ratio bounds are validated once, here,
//! so the synchronization path never has to second-guess them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{DEFAULT_COLLAPSE_LABEL, DEFAULT_LABEL, DEFAULT_MAX_RATIO, DEFAULT_MIN_RATIO, DEFAULT_TIP_LABEL};

/// Error returned when options cannot be turned into a working configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A ratio is NaN or infinite.
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    /// A ratio lies outside `[0, 1)`.
    #[error("{name} must be within [0, 1), got {value}")]
    OutOfRange { name: &'static str, value: f64 },
    /// Both ratios are enabled but `min_ratio >= max_ratio`.
    #[error("minRatio ({min}) must be smaller than maxRatio ({max})")]
    Misordered { min: f64, max: f64 },
    /// The options payload is not valid JSON for [`OverviewOptions`].
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A recognized option holds a value of the wrong kind.
    #[error("option {name} must be a {expected}")]
    WrongType { name: String, expected: &'static str },
}

/// Allowed fraction of the overview panel the box may cover on each axis.
///
/// A zero bound disables resets entirely; ordering is only enforced when both
/// bounds are non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioBounds {
    min: f64,
    max: f64,
}

impl Default for RatioBounds {
    fn default() -> Self {
        Self { min: DEFAULT_MIN_RATIO, max: DEFAULT_MAX_RATIO }
    }
}

impl RatioBounds {
    /// Validate and build a bounds pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when either value is non-finite, outside `[0, 1)`,
    /// or when `min >= max` with both non-zero.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        check_ratio("minRatio", min)?;
        check_ratio("maxRatio", max)?;
        if min > 0.0 && max > 0.0 && min >= max {
            return Err(ConfigError::Misordered { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether the extent calculator is allowed to run.
    #[must_use]
    pub fn resets_enabled(&self) -> bool {
        self.min > 0.0 && self.max > 0.0
    }

    /// Factor applied to the primary extent so the box lands at the geometric
    /// mean of the two bounds, or `None` when resets are disabled.
    #[must_use]
    pub fn reset_scale(&self) -> Option<f64> {
        if !self.resets_enabled() {
            return None;
        }
        let steps = (self.max / self.min).log2();
        Some(1.0 / (2f64.powf(steps / 2.0) * self.min))
    }
}

fn check_ratio(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { name, value });
    }
    if !(0.0..1.0).contains(&value) {
        return Err(ConfigError::OutOfRange { name, value });
    }
    Ok(())
}

/// Keys [`OverviewOptions::from_fields`] recognizes.
///
/// Host options objects also carry `layers` and `view`. Those configure the
/// overview map itself and are applied by the host before the control is
/// built, so they are never read here.
pub const OPTION_KEYS: [&str; 7] =
    ["collapsed", "collapsible", "tipLabel", "label", "collapseLabel", "minRatio", "maxRatio"];

/// A scalar option value read from a host object.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Recognized control options, as supplied by the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewOptions {
    /// Start with the panel collapsed.
    pub collapsed: bool,
    /// Whether the toggle button may collapse the panel at all.
    pub collapsible: bool,
    /// Tooltip on the toggle button.
    pub tip_label: String,
    /// Button label while collapsed.
    pub label: String,
    /// Button label while expanded.
    pub collapse_label: String,
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl Default for OverviewOptions {
    fn default() -> Self {
        Self {
            collapsed: true,
            collapsible: true,
            tip_label: DEFAULT_TIP_LABEL.to_string(),
            label: DEFAULT_LABEL.to_string(),
            collapse_label: DEFAULT_COLLAPSE_LABEL.to_string(),
            min_ratio: DEFAULT_MIN_RATIO,
            max_ratio: DEFAULT_MAX_RATIO,
        }
    }
}

impl OverviewOptions {
    /// Parse options JSON, merge over defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and the
    /// [`RatioBounds::new`] errors for bad ratios.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(raw)?;
        options.ratio_bounds().inspect_err(|e| warn!(error = %e, "overview options rejected"))?;
        Ok(options)
    }

    /// Merge `(key, value)` pairs over the defaults and validate.
    ///
    /// Keys outside [`OPTION_KEYS`] are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WrongType`] when a recognized key holds the wrong
    /// kind of value, and the [`RatioBounds::new`] errors for bad ratios.
    pub fn from_fields<'a, I>(fields: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, OptionValue)>,
    {
        let mut options = Self::default();
        for (key, value) in fields {
            options.set(key, value).inspect_err(|e| warn!(error = %e, "overview options rejected"))?;
        }
        options.ratio_bounds().inspect_err(|e| warn!(error = %e, "overview options rejected"))?;
        Ok(options)
    }

    fn set(&mut self, key: &str, value: OptionValue) -> Result<(), ConfigError> {
        match (key, value) {
            ("collapsed", OptionValue::Bool(b)) => self.collapsed = b,
            ("collapsible", OptionValue::Bool(b)) => self.collapsible = b,
            ("tipLabel", OptionValue::Text(s)) => self.tip_label = s,
            ("label", OptionValue::Text(s)) => self.label = s,
            ("collapseLabel", OptionValue::Text(s)) => self.collapse_label = s,
            ("minRatio", OptionValue::Number(n)) => self.min_ratio = n,
            ("maxRatio", OptionValue::Number(n)) => self.max_ratio = n,
            ("collapsed" | "collapsible", _) => return Err(wrong_type(key, "boolean")),
            ("minRatio" | "maxRatio", _) => return Err(wrong_type(key, "number")),
            ("tipLabel" | "label" | "collapseLabel", _) => return Err(wrong_type(key, "string")),
            _ => {}
        }
        Ok(())
    }

    /// The validated ratio bounds carried by these options.
    ///
    /// # Errors
    ///
    /// See [`RatioBounds::new`].
    pub fn ratio_bounds(&self) -> Result<RatioBounds, ConfigError> {
        RatioBounds::new(self.min_ratio, self.max_ratio)
    }
}

fn wrong_type(name: &str, expected: &'static str) -> ConfigError {
    ConfigError::WrongType { name: name.to_string(), expected }
}
