//! Court geometry and physics tuning
//!
//! Defaults come from [`crate::consts`]; a JSON document may override any
//! subset of fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors produced while loading a tuning document
#[derive(Debug)]
pub enum TuningError {
    /// Document is not valid JSON for [`Tuning`]
    Parse(serde_json::Error),
    /// Document parsed but describes an unplayable court
    Invalid(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(err) => write!(f, "tuning parse error: {err}"),
            TuningError::Invalid(reason) => write!(f, "invalid tuning: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(err) => Some(err),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        TuningError::Parse(err)
    }
}

/// Physics and court constants for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Court ===
    pub court_width: f32,
    pub court_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_offset: f32,
    pub player_speed: f32,
    pub computer_speed: f32,
    pub ai_dead_zone: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub serve_speed: f32,
    pub serve_spread: f32,
    pub speed_ramp: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub reflect_gain: f32,
    pub bounce_speed_cap: f32,
    /// Radians
    pub max_bounce_angle: f32,

    // === Timing ===
    pub score_pause_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_offset: PADDLE_OFFSET,
            player_speed: PLAYER_SPEED,
            computer_speed: COMPUTER_SPEED,
            ai_dead_zone: AI_DEAD_ZONE,

            ball_radius: BALL_RADIUS,
            serve_speed: SERVE_SPEED,
            serve_spread: SERVE_SPREAD,
            speed_ramp: SPEED_RAMP,
            min_speed: BALL_MIN_SPEED,
            max_speed: BALL_MAX_SPEED,
            reflect_gain: REFLECT_GAIN,
            bounce_speed_cap: BOUNCE_SPEED_CAP,
            max_bounce_angle: MAX_BOUNCE_ANGLE,

            score_pause_ms: SCORE_PAUSE_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot play with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("min_speed", self.min_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.paddle_height > self.court_height {
            return Err(TuningError::Invalid(format!(
                "paddle_height {} exceeds court_height {}",
                self.paddle_height, self.court_height
            )));
        }
        if 2.0 * (self.paddle_offset + self.paddle_width) >= self.court_width {
            return Err(TuningError::Invalid(
                "paddles overlap: court_width too small for paddle_offset and paddle_width".into(),
            ));
        }
        if 2.0 * self.ball_radius >= self.court_height {
            return Err(TuningError::Invalid(
                "ball does not fit between the walls".into(),
            ));
        }
        if self.min_speed > self.max_speed {
            return Err(TuningError::Invalid(format!(
                "min_speed {} is above max_speed {}",
                self.min_speed, self.max_speed
            )));
        }
        if self.score_pause_ms < 0.0 {
            return Err(TuningError::Invalid("score_pause_ms must not be negative".into()));
        }
        Ok(())
    }

    /// Top edge that vertically centres a paddle
    #[inline]
    pub fn centered_paddle_y(&self) -> f32 {
        (self.court_height - self.paddle_height) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "court_width": 1000.0, "max_speed": 18.0 }"#).unwrap();
        assert_eq!(tuning.court_width, 1000.0);
        assert_eq!(tuning.max_speed, 18.0);
        assert_eq!(tuning.paddle_height, PADDLE_HEIGHT);
        assert_eq!(tuning.score_pause_ms, SCORE_PAUSE_MS);
    }

    #[test]
    fn test_json_roundtrip() {
        let tuning = Tuning {
            ball_radius: 9.0,
            ..Default::default()
        };
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ court_width: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("tuning parse error"));
    }

    #[test]
    fn test_rejects_zero_paddle_height() {
        let err = Tuning::from_json(r#"{ "paddle_height": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_rejects_inverted_speed_bounds() {
        let err = Tuning::from_json(r#"{ "min_speed": 20.0, "max_speed": 10.0 }"#).unwrap_err();
        assert!(err.to_string().contains("min_speed"));
    }

    #[test]
    fn test_rejects_paddle_taller_than_court() {
        let tuning = Tuning {
            paddle_height: 600.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_centered_paddle_y() {
        let tuning = Tuning::default();
        assert_eq!(tuning.centered_paddle_y(), (500.0 - 110.0) / 2.0);
    }
}
