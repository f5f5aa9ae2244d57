use serde::Serialize;

use crate::plotting::series::Series;

/// Axis and tooltip options understood by the line-plot renderer.
///
/// Serialized with the renderer's key names: `xlab`, `ylab`, `xDecimals`,
/// `yDecimals`, `tt_label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinePlotConfig {
    pub xlab: String,
    pub ylab: String,
    /// Show decimals on x-axis ticks
    #[serde(rename = "xDecimals")]
    pub x_decimals: bool,
    /// Show decimals on y-axis ticks
    #[serde(rename = "yDecimals")]
    pub y_decimals: bool,
    /// Tooltip template, e.g. `{point.x}: {point.y:.0f}`
    pub tt_label: String,
}

impl LinePlotConfig {
    /// Integer axes on both sides with a plain `x: y` tooltip
    #[must_use]
    pub fn integer_axes(xlab: impl Into<String>, ylab: impl Into<String>) -> Self {
        Self {
            xlab: xlab.into(),
            ylab: ylab.into(),
            x_decimals: false,
            y_decimals: false,
            tt_label: "{point.x}: {point.y:.0f}".to_string(),
        }
    }

    #[must_use]
    pub fn with_tt_label(mut self, tt_label: impl Into<String>) -> Self {
        self.tt_label = tt_label.into();
        self
    }
}

/// Series data plus its rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinePlot {
    pub data: Series,
    pub config: LinePlotConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_keys() {
        let config = LinePlotConfig::integer_axes("Observed Quality Score", "Count");
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["xlab"], "Observed Quality Score");
        assert_eq!(json["ylab"], "Count");
        assert_eq!(json["xDecimals"], false);
        assert_eq!(json["yDecimals"], false);
        assert_eq!(json["tt_label"], "{point.x}: {point.y:.0f}");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_with_tt_label() {
        let config = LinePlotConfig::integer_axes("x", "y").with_tt_label("{point.y}");
        assert_eq!(config.tt_label, "{point.y}");
    }
}
