use crate::alignment::body::Body;
use crate::alignment::shadow::ShadowRules;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasLayout {
    pub width: u32,
    pub height: u32,
    pub star_x: f64,
    pub star_radius: f64,
    pub body_gap: f64,
    pub min_marker_radius: f64,
    /// Kilometers of diameter per pixel of marker radius.
    pub diameter_scale: f64,
    pub sway_amplitude: f64,
    pub phase_sweep: f64,
    pub phase_step: f64,
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self {
            width: 800,
            height: 200,
            star_x: 80.0,
            star_radius: 40.0,
            body_gap: 150.0,
            min_marker_radius: 10.0,
            diameter_scale: 1500.0,
            sway_amplitude: 60.0,
            phase_sweep: FRAC_PI_2,
            phase_step: 0.1,
        }
    }
}

impl CanvasLayout {
    pub fn baseline(&self) -> f64 {
        f64::from(self.height) / 2.0
    }

    pub fn body_x(&self, idx: usize) -> f64 {
        self.star_x + self.body_gap * (idx + 1) as f64
    }

    pub fn marker_radius(&self, diameter: f64) -> f64 {
        self.min_marker_radius.max(diameter / self.diameter_scale)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Used whenever the caller supplies no bodies at all.
    pub default_bodies: Vec<Body>,
    pub rules: ShadowRules,
    pub layout: CanvasLayout,
    pub frames: usize,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            default_bodies: lumoria_bodies(),
            rules: ShadowRules::default(),
            layout: CanvasLayout::default(),
            frames: 10,
        }
    }
}

impl AlignmentConfig {
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| crate::error::AlignmentError::malformed(e.line(), e.to_string()))
    }
}

pub fn lumoria_bodies() -> Vec<Body> {
    vec![
        Body::new("Mercuria", 0.4, 4879.0),
        Body::new("Venusia", 0.7, 12104.0),
        Body::new("Earthia", 1.0, 12742.0),
        Body::new("Marsia", 1.5, 6779.0),
    ]
}
