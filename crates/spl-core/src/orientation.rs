// ABOUTME: Split axis orientation shared between config and layout.
// ABOUTME: Two values, mutated only through toggle().

use serde::{Deserialize, Serialize};

/// The axis along which a split view stacks its panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Panes flow left-to-right; dividers are vertical bars.
    #[default]
    Horizontal,
    /// Panes flow top-to-bottom; dividers are horizontal bars.
    Vertical,
}

impl Orientation {
    /// Flip Horizontal <-> Vertical in place.
    pub fn toggle(&mut self) {
        *self = match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        let mut o = Orientation::Horizontal;
        o.toggle();
        assert_eq!(o, Orientation::Vertical);
        o.toggle();
        assert_eq!(o, Orientation::Horizontal);
    }
}
