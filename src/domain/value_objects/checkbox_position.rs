//! Checkbox Position Value Object

use serde::{Deserialize, Serialize};

/// Which side of the label the checkbox is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckboxPosition {
    #[default]
    Left,
    Right,
}

impl std::str::FromStr for CheckboxPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(CheckboxPosition::Left),
            "right" => Ok(CheckboxPosition::Right),
            other => Err(format!(
                "unknown checkbox position '{}' (expected 'left' or 'right')",
                other
            )),
        }
    }
}
