use std::fmt::Display;

use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Colour themes of the web interface.
#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Warm,
    Grayscale,
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Default => write!(f, "default"),
            Theme::Warm => write!(f, "warm"),
            Theme::Grayscale => write!(f, "grayscale"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct UiConfig {
    #[serde(default, deserialize_with = "theme_or_default")]
    pub theme: Theme,
}

/// A stored theme that is no longer known falls back to the default one
/// instead of preventing startup.
fn theme_or_default<'de, D>(deserializer: D) -> Result<Theme, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;

    Ok(Theme::deserialize(value.clone()).unwrap_or_else(|_| {
        warn!("Unknown theme {value:?} in the configuration, using {}", Theme::default());
        Theme::default()
    }))
}
