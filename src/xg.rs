use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// Pitch half dimensions in meters; inputs arrive in Wyscout units (0-100).
const PITCH_LENGTH_M: f64 = 105.0;
const PITCH_WIDTH_M: f64 = 65.0;
const GOAL_WIDTH_M: f64 = 7.32;

/// Shot location in Wyscout units: x, y in roughly [0, 100], with the
/// attacked goal line at x = 100 and the pitch midline at y = 50.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ShotPosition {
    pub xc: f64,
    pub yc: f64,
}

/// Fitted logistic-regression coefficients for the baseline xG model.
/// Field names follow the training artifact (statsmodels naming).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelParams {
    #[serde(rename = "Intercept")]
    pub intercept: f64,
    #[serde(rename = "dist")]
    pub dist: f64,
    #[serde(rename = "angle")]
    pub angle: f64,
}

impl ModelParams {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read xG model {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parse xG model {}", path.display()))
    }
}

/// Remap a Wyscout coordinate pair onto the attacking half in meters.
/// X becomes distance from the goal line; Y is reflected around the midline
/// so both flanks produce the same geometry.
pub fn transform_coordinates(x: f64, y: f64) -> (f64, f64) {
    let tx = (100.0 - x) * PITCH_LENGTH_M / 100.0;
    let ty = (y - 50.0).abs() * PITCH_WIDTH_M / 100.0;
    (tx, ty)
}

/// Euclidean distance in meters from the shot point to the goal-mouth center.
pub fn shot_distance(x: f64, y: f64) -> f64 {
    let (tx, ty) = transform_coordinates(x, y);
    (tx * tx + ty * ty).sqrt()
}

/// Angle in radians subtended by the goal mouth as seen from the shot point.
pub fn shot_angle(x: f64, y: f64) -> f64 {
    let (tx, ty) = transform_coordinates(x, y);
    let half_goal = GOAL_WIDTH_M / 2.0;
    let raw = ((GOAL_WIDTH_M * tx) / (tx * tx + ty * ty - half_goal * half_goal)).atan();
    // The denominator goes negative when the shot point is inside the circle
    // through both posts, flipping atan's sign. Fold back into [0, pi).
    if raw < 0.0 { std::f64::consts::PI + raw } else { raw }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Probability that a shot from (x, y) results in a goal.
pub fn expected_goals(params: &ModelParams, shot: ShotPosition) -> f64 {
    let dist = shot_distance(shot.xc, shot.yc);
    let angle = shot_angle(shot.xc, shot.yc);
    sigmoid(params.intercept + dist * params.dist + angle * params.angle)
}
