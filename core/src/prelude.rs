use serde::{Deserialize, Serialize};

use crate::math::Rgb;

/// Payload pattern a row must contain to count as a range-test packet.
pub const DEFAULT_PAYLOAD_PATTERN: &str = r"seq \d+";

/// Configuration of the SNR colour rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// SNR strictly above this value gets `override_color`.
    pub override_above: f64,
    pub override_color: Rgb,
    /// SNR mapped to the first stop.
    pub snr_floor: f64,
    /// SNR mapped to the last stop.
    pub snr_ceiling: f64,
    pub stops: Vec<Rgb>,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            override_above: 15.0,
            override_color: Rgb::GRAY,
            snr_floor: -21.0,
            snr_ceiling: 12.0,
            stops: vec![Rgb::RED, Rgb::YELLOW, Rgb::GREEN],
        }
    }
}

impl ColorConfig {
    pub fn validate(&self) -> PipelineResult<()> {
        if self.stops.len() < 2 {
            return Err(PipelineError::InvalidConfig(format!(
                "colour scale needs at least 2 stops, got {}",
                self.stops.len()
            )));
        }
        let ordered = self.snr_floor < self.snr_ceiling;
        if !ordered {
            return Err(PipelineError::InvalidConfig(format!(
                "snr_ceiling ({}) must be above snr_floor ({})",
                self.snr_ceiling, self.snr_floor
            )));
        }
        Ok(())
    }
}

/// Common error type for pipeline construction.
///
/// Row-level validation never fails; rows are dropped instead.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("invalid payload pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColor(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_color_config_is_valid() {
        assert!(ColorConfig::default().validate().is_ok());
    }

    #[test]
    fn inverted_domain_is_rejected() {
        let config = ColorConfig {
            snr_floor: 12.0,
            snr_ceiling: -21.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PipelineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn color_config_reads_hex_strings() {
        let json = r##"{"override_color": "#000000", "stops": ["#0000ff", "#ff0000"]}"##;
        let config: ColorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.override_color, Rgb(0, 0, 0));
        assert_eq!(config.stops.len(), 2);
        assert_eq!(config.override_above, 15.0);
    }

    #[test]
    fn color_config_rejects_bad_hex() {
        let json = r#"{"override_color": "grey"}"#;
        assert!(serde_json::from_str::<ColorConfig>(json).is_err());
    }
}
