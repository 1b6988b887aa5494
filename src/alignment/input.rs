use crate::alignment::body::Body;
use crate::alignment::config::AlignmentConfig;
use crate::error::{AlignmentError, Result};
use std::collections::HashSet;

/// Parses `name,distance,diameter` records, one per line. A blank line ends
/// the input; anything after it is ignored.
pub fn parse_body_lines(text: &str) -> Result<Vec<Body>> {
    let mut bodies = Vec::new();
    let mut names = HashSet::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            break;
        }
        let body = parse_record(line, line_no)?;
        check_name(&body.name, line_no, &mut names)?;
        bodies.push(body);
    }

    tracing::debug!(bodies = bodies.len(), "parsed body lines");
    Ok(bodies)
}

pub fn parse_bodies_json(json: &str) -> Result<Vec<Body>> {
    let bodies: Vec<Body> = serde_json::from_str(json)
        .map_err(|e| AlignmentError::malformed(e.line(), e.to_string()))?;

    let mut names = HashSet::new();
    for body in &bodies {
        check_name(&body.name, 0, &mut names)?;
    }
    Ok(bodies)
}

pub fn bodies_or_default(parsed: Vec<Body>, config: &AlignmentConfig) -> Vec<Body> {
    if parsed.is_empty() {
        config.default_bodies.clone()
    } else {
        parsed
    }
}

fn parse_record(line: &str, line_no: usize) -> Result<Body> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    let [name, distance, diameter] = parts.as_slice() else {
        return Err(AlignmentError::malformed(
            line_no,
            format!("expected name,distance,diameter but got {} fields", parts.len()),
        ));
    };

    let distance = parse_number(distance, "distance", line_no)?;
    let diameter = parse_number(diameter, "diameter", line_no)?;
    Ok(Body::new(*name, distance, diameter))
}

fn parse_number(field: &str, label: &str, line_no: usize) -> Result<f64> {
    let value = field.parse::<f64>().map_err(|_| {
        AlignmentError::malformed(line_no, format!("{} '{}' is not a number", label, field))
    })?;
    // `parse` accepts "NaN" and "inf"; neither describes a real body.
    if !value.is_finite() || value <= 0.0 {
        return Err(AlignmentError::malformed(
            line_no,
            format!("{} '{}' must be a positive number", label, field),
        ));
    }
    Ok(value)
}

fn check_name(name: &str, line_no: usize, seen: &mut HashSet<String>) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AlignmentError::malformed(line_no, "body name is empty"));
    }
    if !seen.insert(name.to_string()) {
        return Err(AlignmentError::malformed(
            line_no,
            format!("duplicate body name '{}'", name),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_until_blank_line() {
        let text = "Mercuria, 0.4, 4879\nVenusia,0.7,12104\n\nIgnored,9,9\n";
        let bodies = parse_body_lines(text).unwrap();

        assert_eq!(
            bodies,
            vec![
                Body::new("Mercuria", 0.4, 4879.0),
                Body::new("Venusia", 0.7, 12104.0)
            ]
        );
    }

    #[test]
    fn reports_line_of_malformed_record() {
        let err = parse_body_lines("A,0.3,100\nB,0.4\n").unwrap_err();
        assert!(matches!(err, AlignmentError::MalformedInput { line: 2, .. }), "{err}");

        let err = parse_body_lines("A,far,100").unwrap_err();
        match err {
            AlignmentError::MalformedInput { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("distance"), "{reason}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn rejects_non_finite_and_non_positive_numbers() {
        for (text, line, label) in [
            ("A,NaN,100", 1, "distance"),
            ("A,0.3,100\nB,inf,200", 2, "distance"),
            ("A,0.3,infinity", 1, "diameter"),
            ("A,-1,100", 1, "distance"),
            ("A,0.3,100\nB,0.4,0", 2, "diameter"),
        ] {
            match parse_body_lines(text) {
                Err(AlignmentError::MalformedInput { line: got, reason }) => {
                    assert_eq!(got, line, "{text:?}");
                    assert!(reason.contains(label), "{reason}");
                }
                other => panic!("{text:?} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_empty_and_duplicate_names() {
        assert!(parse_body_lines(" ,0.3,100").is_err());
        let err = parse_body_lines("A,0.3,100\nA,0.5,200").unwrap_err();
        assert!(matches!(err, AlignmentError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn json_input_and_default_fallback() {
        let config = AlignmentConfig::default();
        let bodies =
            parse_bodies_json(r#"[{"name":"X","distance":0.2,"diameter":5000}]"#).unwrap();
        assert_eq!(
            bodies_or_default(bodies, &config),
            vec![Body::new("X", 0.2, 5000.0)]
        );

        let empty = parse_bodies_json("[]").unwrap();
        assert_eq!(bodies_or_default(empty, &config), config.default_bodies);

        assert!(matches!(
            parse_bodies_json(r#"[{"name":"X","distance":"near"}]"#),
            Err(AlignmentError::MalformedInput { .. })
        ));
    }
}
