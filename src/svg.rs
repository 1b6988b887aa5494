use crate::alignment::body::{Body, ClassifiedBody, ShadowType};
use crate::alignment::config::{AlignmentConfig, CanvasLayout};
use crate::alignment::shadow::classify_with;
use crate::error::{AlignmentError, Result};
use std::fmt::Write;

pub fn shadow_fill(shadow: ShadowType) -> &'static str {
    match shadow {
        ShadowType::Full => "#222",
        ShadowType::Partial => "#888",
        ShadowType::MultipleShadows => "#444",
        ShadowType::None => "#fff",
    }
}

pub fn render_alignment(bodies: &[Body], config: &AlignmentConfig) -> Result<String> {
    let classified = classify_with(bodies, &config.rules)?;
    Ok(alignment_svg(&classified, &config.layout))
}

pub fn render_animation(
    bodies: &[Body],
    frames: usize,
    config: &AlignmentConfig,
) -> Result<Vec<String>> {
    let classified = classify_with(bodies, &config.rules)?;
    animation_svgs(&classified, frames, &config.layout)
}

/// Static diagram of already-classified bodies, in their given order.
pub fn alignment_svg(classified: &[ClassifiedBody], layout: &CanvasLayout) -> String {
    let mut svg = open_canvas(layout);
    let y = layout.baseline();
    for (idx, body) in classified.iter().enumerate() {
        write_body(&mut svg, body, layout.body_x(idx), y, layout);
    }
    close_canvas(&mut svg, layout, "Lumoria Alignment");
    svg
}

/// One frame per index. Categories are frame-invariant, so `classified` is
/// shared by every frame and only the vertical sway changes.
pub fn animation_svgs(
    classified: &[ClassifiedBody],
    frames: usize,
    layout: &CanvasLayout,
) -> Result<Vec<String>> {
    if frames == 0 {
        return Err(AlignmentError::DegenerateAnimation { frames });
    }

    let svgs: Vec<String> = (0..frames)
        .map(|frame| {
            let fraction = sweep_fraction(frame, frames);
            let mut svg = open_canvas(layout);
            for (idx, body) in classified.iter().enumerate() {
                let phase = layout.phase_sweep * fraction + idx as f64 * layout.phase_step;
                let y = layout.baseline() + phase.sin() * layout.sway_amplitude;
                write_body(&mut svg, body, layout.body_x(idx), y, layout);
            }
            close_canvas(&mut svg, layout, &format!("Frame {}/{}", frame + 1, frames));
            svg
        })
        .collect();

    tracing::debug!(frames = svgs.len(), bodies = classified.len(), "rendered animation");
    Ok(svgs)
}

fn sweep_fraction(frame: usize, frames: usize) -> f64 {
    if frames <= 1 {
        0.0
    } else {
        frame as f64 / (frames - 1) as f64
    }
}

fn open_canvas(layout: &CanvasLayout) -> String {
    let mut svg = String::new();
    let sun_y = layout.baseline();
    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{}' height='{}'>",
        layout.width, layout.height
    );
    let _ = writeln!(
        svg,
        "<circle cx='{}' cy='{}' r='{}' fill='gold' />",
        layout.star_x, sun_y, layout.star_radius
    );
    let _ = writeln!(
        svg,
        "<text x='{}' y='{}' font-size='18'>Lumoria Sun</text>",
        layout.star_x - 20.0,
        sun_y + 60.0
    );
    svg
}

fn write_body(svg: &mut String, body: &ClassifiedBody, x: f64, y: f64, layout: &CanvasLayout) {
    let r = layout.marker_radius(body.diameter);
    let _ = writeln!(
        svg,
        "<circle cx='{}' cy='{}' r='{}' fill='#6cf' stroke='#333' stroke-width='2' />",
        x, y, r
    );
    let _ = writeln!(
        svg,
        "<ellipse cx='{}' cy='{}' rx='{}' ry='{}' fill='{}' opacity='0.7' />",
        x,
        y + r + 5.0,
        r * 0.8,
        r * 0.4,
        shadow_fill(body.shadow_type)
    );
    let _ = writeln!(
        svg,
        "<text x='{}' y='{}' font-size='16'>{}</text>",
        x - 20.0,
        y + r + 20.0,
        escape_text(&body.name)
    );
    let _ = writeln!(
        svg,
        "<text x='{}' y='{}' font-size='12' fill='#555'>{}</text>",
        x - 20.0,
        y + r + 38.0,
        body.shadow_type
    );
}

fn close_canvas(svg: &mut String, layout: &CanvasLayout, caption: &str) {
    let _ = writeln!(
        svg,
        "<text x='{}' y='{}' font-size='14'>{}</text>",
        f64::from(layout.width) - 180.0,
        f64::from(layout.height) - 20.0,
        caption
    );
    svg.push_str("</svg>");
}

// Names come from user input and land inside XML text nodes.
fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::config::lumoria_bodies;

    fn count(svg: &str, needle: &str) -> usize {
        svg.matches(needle).count()
    }

    #[test]
    fn alignment_places_bodies_on_one_line() {
        let config = AlignmentConfig::default();
        let svg = render_alignment(&lumoria_bodies(), &config).unwrap();

        assert!(svg.starts_with(
            "<svg xmlns='http://www.w3.org/2000/svg' width='800' height='200'>\n"
        ));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("<circle cx='80' cy='100' r='40' fill='gold' />"));
        assert_eq!(count(&svg, "fill='#6cf'"), 4);
        assert_eq!(count(&svg, "<ellipse"), 4);
        // Mercuria first, then Venusia at the next slot; both below the floor radius.
        assert!(svg.contains(
            "<circle cx='230' cy='100' r='10' fill='#6cf' stroke='#333' stroke-width='2' />"
        ));
        assert!(svg.contains("<text x='360' y='130' font-size='16'>Venusia</text>"));
        assert!(svg.contains(
            "<text x='660' y='148' font-size='12' fill='#555'>None (Multiple Shadows)</text>"
        ));
        assert!(svg.contains("Lumoria Alignment"));
    }

    #[test]
    fn shadow_colors_follow_categories() {
        let config = AlignmentConfig::default();
        let svg = render_alignment(&lumoria_bodies(), &config).unwrap();

        assert!(svg.contains("rx='8' ry='4' fill='#fff'"));
        assert_eq!(count(&svg, "fill='#888' opacity"), 1);
        assert_eq!(count(&svg, "fill='#222' opacity"), 1);
        assert_eq!(count(&svg, "fill='#444' opacity"), 1);
    }

    #[test]
    fn large_bodies_scale_their_marker() {
        let config = AlignmentConfig::default();
        let bodies = vec![Body::new("Giant", 1.0, 30000.0)];
        let svg = render_alignment(&bodies, &config).unwrap();
        assert!(svg.contains("r='20' fill='#6cf'"));
    }

    #[test]
    fn single_frame_animation_does_not_divide_by_zero() {
        let config = AlignmentConfig::default();
        let frames = render_animation(&lumoria_bodies(), 1, &config).unwrap();

        assert_eq!(frames.len(), 1);
        assert!(frames[0].contains("Frame 1/1"));
        assert!(!frames[0].contains("NaN"));
        // Phase 0 for the nearest body keeps it on the baseline.
        assert!(frames[0].contains("<circle cx='230' cy='100' r='10'"));
    }

    #[test]
    fn frames_are_numbered_and_sway() {
        let config = AlignmentConfig::default();
        let frames = render_animation(&lumoria_bodies(), 10, &config).unwrap();

        assert_eq!(frames.len(), 10);
        for (idx, frame) in frames.iter().enumerate() {
            assert!(frame.contains(&format!("Frame {}/10", idx + 1)));
            assert_eq!(count(frame, "<ellipse"), 4);
        }
        // Last frame sweeps the nearest body a full quarter turn down.
        assert!(frames[9].contains("<circle cx='230' cy='160' r='10'"));
        assert_ne!(frames[0], frames[9]);
    }

    #[test]
    fn categories_do_not_change_between_frames() {
        let config = AlignmentConfig::default();
        let frames = render_animation(&lumoria_bodies(), 5, &config).unwrap();
        let labels = |svg: &str| -> Vec<String> {
            svg.lines()
                .filter_map(|l| l.split_once("fill='#555'>"))
                .map(|(_, rest)| rest.trim_end_matches("</text>").to_string())
                .collect()
        };
        let first = labels(&frames[0]);
        for frame in &frames[1..] {
            assert_eq!(labels(frame), first);
        }
    }

    #[test]
    fn zero_frames_is_rejected() {
        let config = AlignmentConfig::default();
        assert_eq!(
            render_animation(&lumoria_bodies(), 0, &config),
            Err(AlignmentError::DegenerateAnimation { frames: 0 })
        );
    }

    #[test]
    fn names_are_escaped() {
        let config = AlignmentConfig::default();
        let bodies = vec![Body::new("<A&B>", 1.0, 1000.0)];
        let svg = render_alignment(&bodies, &config).unwrap();
        assert!(svg.contains(">&lt;A&amp;B&gt;</text>"));
    }
}
