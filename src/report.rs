use crate::alignment::body::{Body, ClassifiedBody, ShadowType};
use crate::alignment::config::AlignmentConfig;
use crate::alignment::shadow::classify_with;
use crate::error::Result;
use crate::svg::{alignment_svg, animation_svgs};
use std::fmt::Write;

const RULE: &str = "========================================";
const DIVIDER: &str = "--------------------------------------------------";

pub const ALIGNMENT_FILE: &str = "lumoria-alignment.svg";
pub const REPORT_FILE: &str = "lumoria-report.txt";

pub fn format_report(classified: &[ClassifiedBody]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "🌌 Lumoria Celestial Alignment Report");
    let _ = writeln!(output, "{}", RULE);

    for body in classified {
        let _ = writeln!(output, "\n🪐 {}", body.name);
        let _ = writeln!(output, "  - Distance from Sun: {} AU", body.distance);
        let _ = writeln!(output, "  - Diameter: {} km", body.diameter);
        let _ = writeln!(output, "  - Shadows Cast: {}", body.closer_count);
        let _ = writeln!(output, "  - Larger Planets (closer): {}", body.larger_count);
        let _ = writeln!(output, "  - Smaller Planets (closer): {}", body.smaller_count);
        let _ = writeln!(output, "  - Shadowing Planets: {}", shadowing_list(body));
        let _ = writeln!(output, "  - Shadow Type: {}", body.shadow_type);
    }

    let _ = writeln!(output, "\n{}", RULE);
    let _ = writeln!(
        output,
        "This report was generated by the Celestial Alignment of Lumoria simulation."
    );
    output
}

/// Terminal-friendly summary; printing it is left to the caller.
pub fn format_console_summary(classified: &[ClassifiedBody]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "🌌✨ The Celestial Alignment of Lumoria ✨🌌");
    let _ = writeln!(output, "{}", DIVIDER);
    for body in classified {
        let _ = writeln!(
            output,
            "🪐 {:<10} | Distance: {} AU | Diameter: {} km",
            body.name, body.distance, body.diameter
        );
        let _ = writeln!(
            output,
            "   Shadows Cast: {} | Larger: {} | Smaller: {}",
            body.closer_count, body.larger_count, body.smaller_count
        );
        let _ = writeln!(
            output,
            "   Light Intensity: {}  {}",
            shadow_icon(body.shadow_type),
            body.shadow_type
        );
        let _ = writeln!(output, "{}", DIVIDER);
    }
    output
}

pub fn classification_json(classified: &[ClassifiedBody]) -> String {
    serde_json::to_string(classified).unwrap_or_else(|_| "[]".to_string())
}

fn shadowing_list(body: &ClassifiedBody) -> String {
    if body.shadowing_names.is_empty() {
        "None".to_string()
    } else {
        body.shadowing_names.join(", ")
    }
}

fn shadow_icon(shadow: ShadowType) -> &'static str {
    match shadow {
        ShadowType::None => "☀️",
        ShadowType::Partial => "🌗",
        ShadowType::Full => "🌑",
        ShadowType::MultipleShadows => "🌑🌑",
    }
}

pub fn frame_file_name(frame: usize) -> String {
    format!("lumoria-shadow-frame{}.svg", frame + 1)
}

/// Every output of one run, held in memory until the caller writes it out.
#[derive(Clone, Debug)]
pub struct Artifacts {
    pub classified: Vec<ClassifiedBody>,
    pub alignment_svg: String,
    pub frames: Vec<String>,
    pub report: String,
    pub console_summary: String,
}

impl Artifacts {
    pub fn build(bodies: &[Body], config: &AlignmentConfig) -> Result<Self> {
        let classified = classify_with(bodies, &config.rules)?;
        let alignment_svg = alignment_svg(&classified, &config.layout);
        let frames = animation_svgs(&classified, config.frames, &config.layout)?;
        let report = format_report(&classified);
        let console_summary = format_console_summary(&classified);

        tracing::debug!(
            bodies = classified.len(),
            frames = frames.len(),
            "built lumoria artifacts"
        );

        Ok(Self {
            classified,
            alignment_svg,
            frames,
            report,
            console_summary,
        })
    }

    /// `(file name, contents)` pairs: alignment, frames in order, report.
    pub fn files(&self) -> Vec<(String, &str)> {
        let mut files = Vec::with_capacity(self.frames.len() + 2);
        files.push((ALIGNMENT_FILE.to_string(), self.alignment_svg.as_str()));
        for (idx, frame) in self.frames.iter().enumerate() {
            files.push((frame_file_name(idx), frame.as_str()));
        }
        files.push((REPORT_FILE.to_string(), self.report.as_str()));
        files
    }
}
