//! Side labels: the color strings that tell the two players apart.

use tracing::debug;

/// Label of the first side when the supplied pair is rejected.
pub const DEFAULT_SIDE1_COLOR: &str = "BLACK";

/// Label of the second side when the supplied pair is rejected.
pub const DEFAULT_SIDE2_COLOR: &str = "WHITE";

/// Color given to a single piece whose label is malformed.
pub const DEFAULT_PIECE_COLOR: &str = DEFAULT_SIDE1_COLOR;

/// Uppercases `label` if it is non-empty and made only of ASCII letters.
pub fn normalize_label(label: &str) -> Option<String> {
    if label.is_empty() || !label.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(label.to_ascii_uppercase())
}

/// The normalized, distinct labels of the two sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SideLabels {
    first: String,
    second: String,
}

impl SideLabels {
    /// Normalizes a pair of labels.
    ///
    /// Either both labels are accepted or both are replaced by the defaults:
    /// a malformed label or two labels that coincide after uppercasing
    /// reset the whole pair.
    pub fn normalize(first: &str, second: &str) -> Self {
        match (normalize_label(first), normalize_label(second)) {
            (Some(first), Some(second)) if first != second => SideLabels { first, second },
            _ => {
                debug!(first, second, "rejected side labels, using defaults");
                SideLabels::default()
            }
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// Returns which side (0 or 1) `color` names, if any. Matching is exact.
    pub fn side_of(&self, color: &str) -> Option<usize> {
        if color == self.first {
            Some(0)
        } else if color == self.second {
            Some(1)
        } else {
            None
        }
    }
}

impl Default for SideLabels {
    fn default() -> Self {
        SideLabels {
            first: DEFAULT_SIDE1_COLOR.to_string(),
            second: DEFAULT_SIDE2_COLOR.to_string(),
        }
    }
}
