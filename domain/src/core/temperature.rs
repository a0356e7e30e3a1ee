//! Sampling temperature value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};

/// Sampling temperature in `[0.0, 1.0]` (Value Object)
///
/// Finite by construction, so bitwise equality is a lawful `Eq` and the
/// value can key a cache alongside the model id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature(f32);

impl Temperature {
    /// Deterministic answers
    pub const PRECISE: Temperature = Temperature(0.0);
    /// Default for the advisor
    pub const BALANCED: Temperature = Temperature(0.5);

    pub fn new(value: f32) -> Result<Self, DomainError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(DomainError::InvalidTemperature(value.to_string()));
        }
        // -0.0 and 0.0 must hash the same
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    /// Parse a preset name (`precise`, `balanced`) or a number
    pub fn parse_preset(input: &str) -> Result<Self, DomainError> {
        match input.trim().to_lowercase().as_str() {
            "precise" => Ok(Self::PRECISE),
            "balanced" => Ok(Self::BALANCED),
            other => {
                let value: f32 = other
                    .parse()
                    .map_err(|_| DomainError::InvalidTemperature(input.to_string()))?;
                Self::new(value)
            }
        }
    }

    /// Preset label for display, if the value matches one
    pub fn preset_name(&self) -> Option<&'static str> {
        if *self == Self::PRECISE {
            Some("Precise")
        } else if *self == Self::BALANCED {
            Some("Balanced")
        } else {
            None
        }
    }
}

impl Eq for Temperature {}

impl Hash for Temperature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::BALANCED
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f32> for Temperature {
    type Error = DomainError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Temperature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f32(self.0)
    }
}

impl<'de> Deserialize<'de> for Temperature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f32::deserialize(deserializer)?;
        Temperature::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_accepts_range_bounds() {
        assert!(Temperature::new(0.0).is_ok());
        assert!(Temperature::new(1.0).is_ok());
        assert!(Temperature::new(0.25).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Temperature::new(-0.1).is_err());
        assert!(Temperature::new(1.01).is_err());
        assert!(Temperature::new(f32::NAN).is_err());
        assert!(Temperature::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_negative_zero_hashes_like_zero() {
        let mut set = HashSet::new();
        set.insert(Temperature::new(0.0).unwrap());
        set.insert(Temperature::new(-0.0).unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_parse_preset() {
        assert_eq!(
            Temperature::parse_preset("Precise").unwrap(),
            Temperature::PRECISE
        );
        assert_eq!(
            Temperature::parse_preset("balanced").unwrap(),
            Temperature::BALANCED
        );
        assert_eq!(Temperature::parse_preset("0.7").unwrap().value(), 0.7);
        assert!(Temperature::parse_preset("hot").is_err());
        assert!(Temperature::parse_preset("2").is_err());
    }

    #[test]
    fn test_preset_name() {
        assert_eq!(Temperature::PRECISE.preset_name(), Some("Precise"));
        assert_eq!(Temperature::default().preset_name(), Some("Balanced"));
        assert_eq!(Temperature::new(0.9).unwrap().preset_name(), None);
    }

    #[test]
    fn test_deserialize_validates() {
        let t: Temperature = serde_json::from_str("0.5").unwrap();
        assert_eq!(t, Temperature::BALANCED);
        assert!(serde_json::from_str::<Temperature>("3.0").is_err());
    }
}
