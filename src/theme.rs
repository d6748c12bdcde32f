use serde::{Deserialize, Serialize};

use crate::style::StyleMap;

/// Named preset controlling the default text and background colors of the
/// generated document body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Contributes no declarations; colors come entirely from caller
    /// body-style overrides.
    Custom,
}

impl Theme {
    /// The style fragment this theme layers over the baseline body style.
    pub fn style(self) -> StyleMap {
        let mut style = StyleMap::new();
        match self {
            Theme::Light => {
                style.set("color", "#333");
                style.set("backgroundColor", "#fff");
            }
            Theme::Dark => {
                style.set("color", "#fff");
                style.set("backgroundColor", "#121212");
            }
            Theme::Custom => {}
        }
        style
    }
}
