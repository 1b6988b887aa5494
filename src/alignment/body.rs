use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    /// Astronomical units from the star.
    pub distance: f64,
    /// Kilometers.
    pub diameter: f64,
}

impl Body {
    pub fn new(name: impl Into<String>, distance: f64, diameter: f64) -> Self {
        Self {
            name: name.into(),
            distance,
            diameter,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ShadowType {
    None,
    Partial,
    Full,
    /// Two or more shadow candidates. The label is kept as the domain names it.
    #[serde(rename = "None (Multiple Shadows)")]
    MultipleShadows,
}

impl ShadowType {
    pub fn from_counts(candidates: usize, closer: usize) -> Self {
        match candidates {
            0 if closer == 0 => ShadowType::None,
            0 => ShadowType::Partial,
            1 => ShadowType::Full,
            _ => ShadowType::MultipleShadows,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShadowType::None => "None",
            ShadowType::Partial => "Partial",
            ShadowType::Full => "Full",
            ShadowType::MultipleShadows => "None (Multiple Shadows)",
        }
    }
}

impl fmt::Display for ShadowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedBody {
    pub name: String,
    pub distance: f64,
    pub diameter: f64,
    pub shadow_type: ShadowType,
    pub closer_count: usize,
    pub larger_count: usize,
    pub smaller_count: usize,
    pub shadowing_names: Vec<String>,
}
