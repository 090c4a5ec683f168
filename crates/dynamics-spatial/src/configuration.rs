//! Defines **configurations** of multi-body systems and related operations.

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::DVector;
use rand::Rng;
use std::ops::{Add, Index, Mul};

#[derive(Clone, Debug, PartialEq)]
/// Configuration of a multi-body system, represented as a vector of joint positions
/// (or, reused for the same layout, velocities/accelerations/torques).
pub struct Configuration(DVector<f64>);

impl Configuration {
    /// Creates a new [`Configuration`] with the given size, initialized to zeros.
    #[must_use]
    pub fn zeros(size: usize) -> Self {
        Configuration(DVector::zeros(size))
    }

    /// Creates a new [`Configuration`] with the given size, initialized to ones.
    #[must_use]
    pub fn ones(size: usize) -> Self {
        Configuration(DVector::from_element(size, 1.0))
    }

    /// Creates a new [`Configuration`] with the given size, every entry set
    /// to `value`.
    #[must_use]
    pub fn from_element(size: usize, value: f64) -> Self {
        Configuration(DVector::from_element(size, value))
    }

    /// Draws a random configuration of the given size, uniformly between
    /// `min` and `max` component-wise. Bounds that are infinite on either
    /// side fall back to `[-1, 1]` for that component, since a uniform draw
    /// over an unbounded range is not meaningful.
    #[must_use]
    pub fn random(size: usize, rng: &mut impl Rng, min: &Configuration, max: &Configuration) -> Self {
        let mut data = Vec::with_capacity(size);
        for i in 0..size {
            let lo = min[i];
            let hi = max[i];
            let (lo, hi) = if lo.is_finite() && hi.is_finite() {
                (lo, hi)
            } else {
                (-1.0, 1.0)
            };
            data.push(rng.random_range(lo..=hi));
        }
        Configuration::from_row_slice(&data)
    }

    /// Returns the length of the configuration vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the configuration vector is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The configuration vector as a flat slice of scalars.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }

    /// Validates that this configuration has exactly `expected` entries,
    /// naming the offending parameter in the error.
    pub fn check_size(&self, name: &str, expected: usize) -> Result<(), ConfigurationError> {
        if self.len() != expected {
            return Err(ConfigurationError::InvalidSize(
                name.to_string(),
                expected,
                self.len(),
            ));
        }
        Ok(())
    }

    /// Returns a slice of the configuration vector from `start` to `start + nrows - 1` (inclusive).
    #[must_use]
    pub fn rows(&self, start: usize, nrows: usize) -> Configuration {
        Configuration(self.0.rows(start, nrows).into_owned())
    }

    /// Updates a slice of the configuration vector starting from `start` with the values from another configuration.
    pub fn update_rows(&mut self, start: usize, values: &Configuration) -> Result<(), ConfigurationError> {
        if start + values.len() > self.len() {
            return Err(ConfigurationError::InvalidSize(
                "update_rows".to_string(),
                self.len(),
                start + values.len(),
            ));
        }
        self.0.rows_mut(start, values.len()).copy_from(&values.0);
        Ok(())
    }

    /// Creates a new [`Configuration`] from a slice of scalar values.
    #[must_use]
    pub fn from_row_slice(data: &[f64]) -> Self {
        Configuration(DVector::from_row_slice(data))
    }

    /// Concatenates multiple [`Configuration`] objects into a single configuration.
    #[must_use]
    pub fn concat(configs: &[Configuration]) -> Configuration {
        let mut all_values = Vec::new();
        for config in configs {
            all_values.extend_from_slice(config.0.as_slice());
        }
        Configuration::from_row_slice(&all_values)
    }
}

impl Index<usize> for Configuration {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AbsDiffEq for Configuration {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Configuration {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl Add for Configuration {
    type Output = Configuration;

    fn add(self, rhs: Self) -> Self::Output {
        Configuration(self.0 + rhs.0)
    }
}

impl Add for &Configuration {
    type Output = Configuration;

    fn add(self, rhs: Self) -> Self::Output {
        Configuration(&self.0 + &rhs.0)
    }
}

impl Mul<f64> for &Configuration {
    type Output = DVector<f64>;

    fn mul(self, rhs: f64) -> Self::Output {
        &self.0 * rhs
    }
}

/// Errors that can occur when working with configurations.
pub enum ConfigurationError {
    InvalidSize(String, usize, usize),
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::InvalidSize(name, expected, actual) => {
                write!(
                    f,
                    "Parameter '{name}' expected configuration size {expected}, but got {actual}"
                )
            }
        }
    }
}

impl std::fmt::Debug for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl std::error::Error for ConfigurationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_size_ok() {
        let c = Configuration::zeros(3);
        assert!(c.check_size("q", 3).is_ok());
    }

    #[test]
    fn test_check_size_mismatch() {
        let c = Configuration::zeros(3);
        assert!(c.check_size("q", 4).is_err());
    }
}
