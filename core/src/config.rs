use crate::error::{DftVecError, Result};
use crate::{DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, N_VEC};

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of test vectors to emit
    pub num_vectors: usize,
    /// Lower bound of the uniform input range
    pub min_value: f32,
    /// Upper bound of the uniform input range (inclusive)
    pub max_value: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_vectors: N_VEC,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        validate_range(self.min_value, self.max_value)
    }
}

/// Check that `[min, max]` can back a uniform distribution
pub fn validate_range(min: f32, max: f32) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(DftVecError::InvalidConfig(format!(
            "value range must be finite, got [{}, {}]",
            min, max
        )));
    }
    if min > max {
        return Err(DftVecError::InvalidConfig(format!(
            "min value {} exceeds max value {}",
            min, max
        )));
    }
    // The sampler divides the span by (1 - EPSILON); both must stay finite
    let span = max - min;
    if !span.is_finite() || !(span / (1.0 - f32::EPSILON)).is_finite() {
        return Err(DftVecError::InvalidConfig(format!(
            "value range [{}, {}] is too wide to sample",
            min, max
        )));
    }
    Ok(())
}
