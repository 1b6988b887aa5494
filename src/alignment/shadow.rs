use crate::alignment::body::{Body, ClassifiedBody, ShadowType};
use crate::alignment::geometry::{candidate, raw_angular_diameter, validate};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowRules {
    /// Maximum distance gap (AU) between a caster and the body it shadows.
    pub proximity_au: f64,
}

impl Default for ShadowRules {
    fn default() -> Self {
        Self { proximity_au: 1.0 }
    }
}

pub fn classify(bodies: &[Body]) -> Result<Vec<ClassifiedBody>> {
    classify_with(bodies, &ShadowRules::default())
}

pub fn classify_with(bodies: &[Body], rules: &ShadowRules) -> Result<Vec<ClassifiedBody>> {
    for body in bodies {
        validate(body)?;
    }

    // `sort_by` is stable, so equal distances keep input order.
    let mut sorted: Vec<&Body> = bodies.iter().collect();
    sorted.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    let thetas: Vec<f64> = sorted.iter().map(|b| raw_angular_diameter(b)).collect();

    let classified: Vec<ClassifiedBody> = sorted
        .iter()
        .enumerate()
        .map(|(idx, body)| {
            let closer = &sorted[..idx];
            let shadowing_names: Vec<String> = closer
                .iter()
                .zip(&thetas[..idx])
                .filter(|(cp, theta)| {
                    candidate(**theta, thetas[idx], cp, body, rules.proximity_au)
                })
                .map(|(cp, _)| cp.name.clone())
                .collect();

            ClassifiedBody {
                name: body.name.clone(),
                distance: body.distance,
                diameter: body.diameter,
                shadow_type: ShadowType::from_counts(shadowing_names.len(), closer.len()),
                closer_count: closer.len(),
                larger_count: closer.iter().filter(|cp| cp.diameter > body.diameter).count(),
                smaller_count: closer.iter().filter(|cp| cp.diameter < body.diameter).count(),
                shadowing_names,
            }
        })
        .collect();

    tracing::debug!(
        bodies = classified.len(),
        shadowed = classified
            .iter()
            .filter(|c| !c.shadowing_names.is_empty())
            .count(),
        "classified alignment"
    );

    Ok(classified)
}
