use crate::math::{Gradient, Rgb};
use crate::prelude::{ColorConfig, PipelineResult};

/// Maps an SNR reading (dB) to a display colour.
#[derive(Debug, Clone)]
pub struct ColorScale {
    config: ColorConfig,
    gradient: Gradient,
}

impl ColorScale {
    pub fn new(config: ColorConfig) -> PipelineResult<Self> {
        config.validate()?;
        let gradient = Gradient::new(config.stops.clone())?;
        Ok(Self { config, gradient })
    }

    /// Position of `snr` on the gradient. Not clamped.
    pub fn normalize(&self, snr: f64) -> f64 {
        (snr - self.config.snr_floor) / (self.config.snr_ceiling - self.config.snr_floor)
    }

    pub fn color(&self, snr: f64) -> Rgb {
        if snr > self.config.override_above {
            self.config.override_color
        } else {
            self.gradient.at(self.normalize(snr))
        }
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            config: ColorConfig::default(),
            gradient: Gradient::default(),
        }
    }
}
