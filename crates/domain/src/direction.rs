//! Direction in which the next word is laid on the grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis of the next play.
///
/// Only `Horizontal` and `Vertical` are ever produced by the game itself.
/// `Unknown` absorbs any other value a client sends so that decoding a play
/// never fails on this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayDirection {
    Horizontal,
    #[default]
    Vertical,

    /// Forward-compatibility fallback for unrecognized values.
    #[serde(other)]
    Unknown,
}

impl PlayDirection {
    /// Flip the axis. Anything that is not `Horizontal` becomes `Horizontal`.
    pub fn toggled(self) -> Self {
        match self {
            PlayDirection::Horizontal => PlayDirection::Vertical,
            PlayDirection::Vertical | PlayDirection::Unknown => PlayDirection::Horizontal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayDirection::Horizontal => "Horizontal",
            PlayDirection::Vertical => "Vertical",
            PlayDirection::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PlayDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PlayDirection {
    fn from(value: &str) -> Self {
        match value.trim() {
            "Horizontal" => PlayDirection::Horizontal,
            "Vertical" => PlayDirection::Vertical,
            _ => PlayDirection::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity_for_real_axes() {
        for d in [PlayDirection::Horizontal, PlayDirection::Vertical] {
            assert_eq!(d.toggled().toggled(), d);
            assert_ne!(d.toggled(), d);
        }
    }

    #[test]
    fn unknown_toggles_to_horizontal() {
        assert_eq!(PlayDirection::Unknown.toggled(), PlayDirection::Horizontal);
        assert_eq!(PlayDirection::from("diagonal").toggled(), PlayDirection::Horizontal);
        assert_eq!(PlayDirection::from("").toggled(), PlayDirection::Horizontal);
    }

    #[test]
    fn unrecognized_wire_value_decodes_as_unknown() {
        let d: PlayDirection = serde_json::from_str("\"sideways\"").unwrap();
        assert_eq!(d, PlayDirection::Unknown);
        let v: PlayDirection = serde_json::from_str("\"Vertical\"").unwrap();
        assert_eq!(v, PlayDirection::Vertical);
    }
}
