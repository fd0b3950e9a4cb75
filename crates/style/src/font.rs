use serde::{Deserialize, Serialize};

/// Template fonts come in two weights; numeric weights of 600 and above are
/// treated as bold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn from_numeric(weight: u16) -> Self {
        if weight >= 600 {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}
