//! Trace settings: the valid hit window, boundary policy and sampler seed.

use crate::error::{TraceError, TraceResult};
use crate::random::Sampler;
use ember_math::Interval;
use serde::{Deserialize, Serialize};

/// Default lower bound on hit distances.
///
/// Secondary rays start on a surface; rounding can put their first root a
/// hair above zero, which would re-hit that surface ("shadow acne").
pub const DEFAULT_T_MIN: f64 = 0.001;

/// How a primitive treats a root that lands exactly on the query bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Strict `min < t < max`. Used for all scene traversal so a ray never
    /// re-hits the surface it left, and so equal-`t` hits keep the first one
    /// found.
    #[default]
    Surrounds,
    /// `min < t <= max`: a root exactly on the upper bound counts, for
    /// boundary tests that must include touching hits. The lower bound stays
    /// strict so self-intersection avoidance still holds.
    Contains,
}

impl BoundaryPolicy {
    /// Whether `t` is an acceptable root for `ray_t` under this policy.
    #[inline]
    pub fn accepts(&self, ray_t: &Interval, t: f64) -> bool {
        match self {
            BoundaryPolicy::Surrounds => ray_t.surrounds(t),
            BoundaryPolicy::Contains => ray_t.min < t && t <= ray_t.max,
        }
    }
}

/// Trace configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Smallest accepted hit distance
    pub t_min: f64,
    /// Largest accepted hit distance; `None` means unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t_max: Option<f64>,
    /// Seed for reproducible sampling; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Boundary policy for primitives built from this config
    pub boundary: BoundaryPolicy,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            t_min: DEFAULT_T_MIN,
            t_max: None,
            seed: None,
            boundary: BoundaryPolicy::Surrounds,
        }
    }
}

impl TraceConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> TraceResult<Self> {
        let config: TraceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the hit window is usable.
    pub fn validate(&self) -> TraceResult<()> {
        let t_max = self.t_max.unwrap_or(f64::INFINITY);
        if self.t_min.is_nan() || t_max.is_nan() || self.t_min < 0.0 || self.t_min > t_max {
            log::warn!("Rejecting trace window [{}, {}]", self.t_min, t_max);
            return Err(TraceError::InvalidInterval {
                min: self.t_min,
                max: t_max,
            });
        }
        Ok(())
    }

    /// The interval primary and secondary rays are traced with.
    pub fn ray_interval(&self) -> Interval {
        Interval::new(self.t_min, self.t_max.unwrap_or(f64::INFINITY))
    }

    /// A sampler seeded from this config.
    pub fn sampler(&self) -> Sampler {
        match self.seed {
            Some(seed) => Sampler::new(seed),
            None => Sampler::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TraceConfig::default();
        assert_eq!(config.ray_interval(), Interval::new(0.001, f64::INFINITY));
        assert_eq!(config.boundary, BoundaryPolicy::Surrounds);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = TraceConfig::from_json_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.t_min, DEFAULT_T_MIN);
        assert_eq!(config.t_max, None);
    }

    #[test]
    fn test_full_json() {
        let json = r#"{ "t_min": 0.01, "t_max": 50.0, "seed": 3, "boundary": "contains" }"#;
        let config = TraceConfig::from_json_str(json).unwrap();
        assert_eq!(config.ray_interval(), Interval::new(0.01, 50.0));
        assert_eq!(config.boundary, BoundaryPolicy::Contains);
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = TraceConfig {
            t_min: 0.5,
            t_max: Some(2.0),
            seed: Some(11),
            boundary: BoundaryPolicy::Contains,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(TraceConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_windows_rejected() {
        for json in [
            r#"{ "t_min": -1.0 }"#,
            r#"{ "t_min": 5.0, "t_max": 1.0 }"#,
        ] {
            assert!(matches!(
                TraceConfig::from_json_str(json),
                Err(TraceError::InvalidInterval { .. })
            ));
        }

        let nan = TraceConfig {
            t_min: f64::NAN,
            ..TraceConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            TraceConfig::from_json_str("{ not json"),
            Err(TraceError::Config(_))
        ));
    }

    #[test]
    fn test_seeded_config_gives_reproducible_sampler() {
        let config = TraceConfig {
            seed: Some(42),
            ..TraceConfig::default()
        };
        let mut a = config.sampler();
        let mut b = config.sampler();
        assert_eq!(a.uniform01(), b.uniform01());
    }

    #[test]
    fn test_boundary_accepts() {
        let window = Interval::new(1.0, 2.0);
        assert!(!BoundaryPolicy::Surrounds.accepts(&window, 1.0));
        assert!(!BoundaryPolicy::Contains.accepts(&window, 1.0));
        assert!(BoundaryPolicy::Contains.accepts(&window, 2.0));
        assert!(!BoundaryPolicy::Surrounds.accepts(&window, 2.0));
        assert!(BoundaryPolicy::Surrounds.accepts(&window, 1.5));
        assert!(!BoundaryPolicy::Contains.accepts(&window, 2.5));
    }
}
