//! Board and physics configuration
//!
//! Fixed at construction. Loaded from JSON or taken from the reference defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Everything the simulation needs to know about the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlinkoConfig {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Pin field ===
    /// Number of pin rows (row `i` holds `i + 3` pins)
    pub rows: u32,
    pub pin_radius: f32,
    /// Left/top margin of the pin field
    pub pin_start_x: f32,
    pub pin_start_y: f32,
    pub pin_h_spacing: f32,
    pub pin_v_spacing: f32,

    // === Ball physics ===
    pub ball_radius: f32,
    pub gravity: f32,
    /// Rebound/wall damping factor (0..=1)
    pub bounce: f32,
    pub rebound_speed: f32,
    pub rebound_jitter: f32,

    // === Spawn ===
    pub spawn_y: f32,
    pub spawn_x_jitter: f32,
    pub spawn_vx_jitter: f32,
    /// Ball colors (0xRRGGBB), picked uniformly at spawn
    pub palette: Vec<u32>,

    // === Buckets ===
    pub multipliers: Vec<f32>,
    /// Distance from canvas bottom to the top of the bucket strip
    pub bucket_strip_offset: f32,
    pub bucket_height: f32,
    pub bucket_gap: f32,
    pub dwell_ticks: u32,
}

impl Default for PlinkoConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            rows: ROWS,
            pin_radius: PIN_RADIUS,
            pin_start_x: PIN_START_X,
            pin_start_y: PIN_START_Y,
            pin_h_spacing: PIN_H_SPACING,
            pin_v_spacing: PIN_V_SPACING,

            ball_radius: BALL_RADIUS,
            gravity: GRAVITY,
            bounce: BOUNCE,
            rebound_speed: REBOUND_SPEED,
            rebound_jitter: REBOUND_JITTER,

            spawn_y: SPAWN_Y,
            spawn_x_jitter: SPAWN_X_JITTER,
            spawn_vx_jitter: SPAWN_VX_JITTER,
            palette: PALETTE.to_vec(),

            multipliers: MULTIPLIERS.to_vec(),
            bucket_strip_offset: BUCKET_STRIP_OFFSET,
            bucket_height: BUCKET_HEIGHT,
            bucket_gap: BUCKET_GAP,
            dwell_ticks: DWELL_TICKS,
        }
    }
}

impl PlinkoConfig {
    /// Y coordinate where the bucket strip begins; balls settle when they reach it
    #[inline]
    pub fn bucket_strip_top(&self) -> f32 {
        self.canvas_height - self.bucket_strip_offset
    }

    /// Contact distance between a ball and a pin center
    #[inline]
    pub fn contact_distance(&self) -> f32 {
        self.ball_radius + self.pin_radius
    }

    /// Check construction-time preconditions
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("pin_radius", self.pin_radius)?;
        positive("pin_h_spacing", self.pin_h_spacing)?;
        positive("pin_v_spacing", self.pin_v_spacing)?;
        non_negative("gravity", self.gravity)?;
        non_negative("rebound_speed", self.rebound_speed)?;
        non_negative("rebound_jitter", self.rebound_jitter)?;
        non_negative("spawn_x_jitter", self.spawn_x_jitter)?;
        non_negative("spawn_vx_jitter", self.spawn_vx_jitter)?;

        if !(0.0..=1.0).contains(&self.bounce) {
            return Err(ConfigError::invalid("bounce", format!("{} not in [0, 1]", self.bounce)));
        }
        if self.multipliers.is_empty() {
            return Err(ConfigError::invalid("multipliers", "bucket strip is empty"));
        }
        if let Some(m) = self.multipliers.iter().find(|m| !m.is_finite() || **m <= 0.0) {
            return Err(ConfigError::invalid("multipliers", format!("{m} is not a positive multiplier")));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::invalid("palette", "no ball colors"));
        }
        if self.bucket_strip_offset <= 0.0 || self.bucket_strip_offset > self.canvas_height {
            return Err(ConfigError::invalid(
                "bucket_strip_offset",
                format!("{} outside canvas height {}", self.bucket_strip_offset, self.canvas_height),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take reference values
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be positive")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be non-negative")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PlinkoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.multipliers.len(), 11);
        assert!((config.bucket_strip_top() - 660.0).abs() < 0.001);
        assert!((config.contact_distance() - 12.0).abs() < 0.001);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PlinkoConfig::from_json_str(r#"{ "rows": 8, "gravity": 0.25 }"#).unwrap();
        assert_eq!(config.rows, 8);
        assert!((config.gravity - 0.25).abs() < 0.0001);
        assert_eq!(config.multipliers, MULTIPLIERS.to_vec());
    }

    #[test]
    fn test_json_roundtrip_keeps_values() {
        let mut config = PlinkoConfig::default();
        config.multipliers = vec![3.0, 1.0, 3.0];
        let json = config.to_json().unwrap();
        assert_eq!(PlinkoConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = PlinkoConfig::from_json_str(r#"{ "canvas_width": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "canvas_width", .. }));

        let err = PlinkoConfig::from_json_str(r#"{ "multipliers": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "multipliers", .. }));

        let err = PlinkoConfig::from_json_str(r#"{ "bounce": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "bounce", .. }));

        let err = PlinkoConfig::from_json_str(r#"{ "palette": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "palette", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = PlinkoConfig::from_json_str("{ rows: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PlinkoConfig::load("/nonexistent/plinko.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
