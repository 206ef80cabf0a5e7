//! Track graph configuration.

use crate::error::TrackError;

/// Construction parameters for a [`TrackGraph`](crate::TrackGraph).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackConfig {
    /// Grid dimension, 3 or 4. Default: 4.
    pub dim: usize,
    /// Seed for the generator behind
    /// [`SwitchChoice::Random`](crate::SwitchChoice::Random). Two graphs
    /// built identically with the same seed make identical choices.
    /// Default: 0.
    pub switch_seed: u64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            dim: 4,
            switch_seed: 0,
        }
    }
}

impl TrackConfig {
    /// Check that the dimension is supported.
    pub fn validate(&self) -> Result<(), TrackError> {
        if !(3..=4).contains(&self.dim) {
            return Err(TrackError::InvalidDimension { dim: self.dim });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(TrackConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_unsupported_dimensions() {
        for dim in [0, 1, 2, 5] {
            let config = TrackConfig {
                dim,
                ..TrackConfig::default()
            };
            assert_eq!(config.validate(), Err(TrackError::InvalidDimension { dim }));
        }
    }
}
