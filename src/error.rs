use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlignmentError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlignmentError {
    #[error(
        "invalid geometry for {name}: distance {distance} AU, diameter {diameter} km \
         (both must be positive)"
    )]
    InvalidGeometry {
        name: String,
        distance: f64,
        diameter: f64,
    },

    #[error("cannot animate {frames} frames (at least one is required)")]
    DegenerateAnimation { frames: usize },

    /// `line` is 1-based; 0 means the input had no line structure (JSON).
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },
}

impl AlignmentError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
