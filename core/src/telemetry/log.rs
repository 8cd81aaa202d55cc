use log::{debug, info, warn};

/// Thin logging facade so pipeline components share one log target.
pub struct LogManager {
    target: &'static str,
}

impl LogManager {
    pub fn scoped(target: &'static str) -> Self {
        Self { target }
    }

    pub fn record(&self, message: &str) {
        info!(target: self.target, "{}", message);
    }

    pub fn warn(&self, message: &str) {
        warn!(target: self.target, "{}", message);
    }

    pub fn stage(&self, source: &str, stage: &str, kept: usize, dropped: usize) {
        debug!(
            target: self.target,
            "{}: {} kept {}, dropped {}", source, stage, kept, dropped
        );
    }

    pub fn skipped(&self, source: &str, reason: &str) {
        warn!(target: self.target, "{}: {}, skipping layer", source, reason);
    }
}
