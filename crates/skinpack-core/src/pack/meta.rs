//! `pack.mcmeta` document.

use serde::{Deserialize, Serialize};

/// Lowest and highest resource pack format this pack declares.
pub const PACK_FORMAT: u32 = 75;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackMeta {
    pub pack: PackSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackSection {
    pub min_format: u32,
    pub max_format: u32,
    pub description: TextComponent,
}

/// A Minecraft JSON text component (only the fields the description uses).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextComponent {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<TextComponent>,
}

impl TextComponent {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            color: None,
            extra: Vec::new(),
        }
    }

    fn colored(text: &str, color: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            ..Self::plain(text)
        }
    }
}

impl PackMeta {
    /// The fixed metadata every generated pack carries.
    pub fn item_animator() -> Self {
        Self {
            pack: PackSection {
                min_format: PACK_FORMAT,
                max_format: PACK_FORMAT,
                description: TextComponent {
                    extra: vec![
                        TextComponent::colored("Skin for RPG", "gold"),
                        TextComponent::plain(" | "),
                        TextComponent::colored("1.21.11", "#ffdd99"),
                    ],
                    ..TextComponent::plain("")
                },
            },
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_expected_json() {
        let expected = r##"{
  "pack": {
    "min_format": 75,
    "max_format": 75,
    "description": {
      "text": "",
      "extra": [
        {
          "text": "Skin for RPG",
          "color": "gold"
        },
        {
          "text": " | "
        },
        {
          "text": "1.21.11",
          "color": "#ffdd99"
        }
      ]
    }
  }
}"##;
        assert_eq!(PackMeta::item_animator().to_json().unwrap(), expected);
    }

    #[test]
    fn json_value_shape() {
        let value = serde_json::to_value(PackMeta::item_animator()).unwrap();
        assert_eq!(value["pack"]["min_format"], 75);
        assert_eq!(value["pack"]["max_format"], 75);
        assert_eq!(value["pack"]["description"]["text"], "");
        let extra = value["pack"]["description"]["extra"].as_array().unwrap();
        assert_eq!(extra.len(), 3);
        assert_eq!(extra[1], serde_json::json!({ "text": " | " }));
        assert_eq!(extra[2]["color"], "#ffdd99");
    }
}
