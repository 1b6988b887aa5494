use crate::alignment::body::Body;
use crate::error::{AlignmentError, Result};

pub const AU_KM: f64 = 149_597_870.0;

pub fn validate(body: &Body) -> Result<()> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if valid(body.distance) && valid(body.diameter) {
        Ok(())
    } else {
        Err(AlignmentError::InvalidGeometry {
            name: body.name.clone(),
            distance: body.distance,
            diameter: body.diameter,
        })
    }
}

/// Full angle subtended by the body as seen from the star, in radians.
pub fn angular_diameter(body: &Body) -> Result<f64> {
    validate(body)?;
    Ok(raw_angular_diameter(body))
}

pub fn angular_radius(body: &Body) -> Result<f64> {
    angular_diameter(body).map(|theta| theta / 2.0)
}

// Callers must have validated `body` already.
pub(crate) fn raw_angular_diameter(body: &Body) -> f64 {
    2.0 * ((body.diameter / 2.0) / (body.distance * AU_KM)).atan()
}

/// Whether `closer` qualifies as a shadow caster for `target`: it must look
/// bigger from the star and sit within `proximity_au` of the target.
pub fn casts_shadow_on(closer: &Body, target: &Body, proximity_au: f64) -> Result<bool> {
    let theta_closer = angular_diameter(closer)?;
    let theta_target = angular_diameter(target)?;
    Ok(candidate(theta_closer, theta_target, closer, target, proximity_au))
}

pub(crate) fn candidate(
    theta_closer: f64,
    theta_target: f64,
    closer: &Body,
    target: &Body,
    proximity_au: f64,
) -> bool {
    theta_closer > theta_target && (closer.distance - target.distance).abs() < proximity_au
}
