use wasm_bindgen::prelude::*;

pub mod alignment;
pub mod error;
pub mod report;
pub mod svg;

use alignment::body::Body;
use alignment::config::AlignmentConfig;
use alignment::input::{bodies_or_default, parse_bodies_json, parse_body_lines};
use alignment::shadow::classify_with;
use error::AlignmentError;

pub use alignment::body::{ClassifiedBody, ShadowType};
pub use error::Result;

fn load_bodies(bodies_json: &str, config: &AlignmentConfig) -> Result<Vec<Body>> {
    let parsed = if bodies_json.trim().is_empty() {
        Vec::new()
    } else {
        parse_bodies_json(bodies_json)?
    };
    Ok(bodies_or_default(parsed, config))
}

fn respond(result: Result<String>) -> String {
    match result {
        Ok(v) => v,
        Err(e) => error_json(&e),
    }
}

fn error_json(err: &AlignmentError) -> String {
    let message = err.to_string();
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&message));
    tracing::warn!(error = %message, "request rejected");
    serde_json::json!({ "error": message }).to_string()
}

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn classify_json(bodies_json: &str) -> String {
    let config = AlignmentConfig::default();
    respond(
        load_bodies(bodies_json, &config)
            .and_then(|bodies| classify_with(&bodies, &config.rules))
            .map(|classified| report::classification_json(&classified)),
    )
}

#[wasm_bindgen]
pub fn alignment_svg(bodies_json: &str) -> String {
    let config = AlignmentConfig::default();
    respond(
        load_bodies(bodies_json, &config)
            .and_then(|bodies| svg::render_alignment(&bodies, &config)),
    )
}

#[wasm_bindgen]
pub fn animation_frames_json(bodies_json: &str, frames: usize) -> String {
    let config = AlignmentConfig::default();
    respond(
        load_bodies(bodies_json, &config)
            .and_then(|bodies| svg::render_animation(&bodies, frames, &config))
            .map(|svgs| serde_json::to_string(&svgs).unwrap_or_else(|_| "[]".to_string())),
    )
}

#[wasm_bindgen]
pub fn lumoria_report(bodies_json: &str) -> String {
    let config = AlignmentConfig::default();
    respond(
        load_bodies(bodies_json, &config)
            .and_then(|bodies| classify_with(&bodies, &config.rules))
            .map(|classified| report::format_report(&classified)),
    )
}

/// Converts `name,distance,diameter` lines into the JSON body list the other
/// entry points accept.
#[wasm_bindgen]
pub fn parse_lines_json(text: &str) -> String {
    respond(
        parse_body_lines(text)
            .map(|bodies| serde_json::to_string(&bodies).unwrap_or_else(|_| "[]".to_string())),
    )
}
