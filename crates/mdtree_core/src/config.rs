//! Viewer configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonschema::Validator;
use mdtree_parser::ParseOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ViewerError;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Configuration for parsing and rendering.
///
/// Every section is optional in the file; missing keys take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerConfig {
    /// Glyphs used to draw the tree.
    pub tree_symbols: TreeSymbols,

    /// Page colours.
    pub colors: Colors,

    /// Page fonts.
    pub fonts: Fonts,

    /// Page spacing.
    pub styling: Styling,

    /// Font weights per header level.
    pub header_styling: HeaderStyling,

    /// Parser options.
    pub parse: ParseOptions,

    /// File patterns to exclude from discovery.
    pub exclude: Vec<String>,

    /// Directory containing the loaded configuration file. Relative
    /// `exclude` patterns are anchored here.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeSymbols {
    /// Connector for a node with later siblings.
    pub branch: String,
    /// Connector for the last child.
    pub last: String,
    /// Continuation line for an ancestor with later siblings.
    pub vertical: String,
    /// Filler for an ancestor that was the last child.
    pub space: String,
}

impl Default for TreeSymbols {
    fn default() -> Self {
        Self {
            branch: "├──".to_string(),
            last: "└──".to_string(),
            vertical: "│".to_string(),
            space: "   ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Colors {
    pub tree_symbols: String,
    pub content: String,
    pub background: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            tree_symbols: "rgb(200, 200, 200)".to_string(),
            content: "rgb(0, 0, 0)".to_string(),
            background: "rgb(246, 246, 246)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fonts {
    pub content: String,
    pub tree_symbols: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            content: "'Noto Sans', -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif".to_string(),
            tree_symbols: "'SF Mono', Consolas, 'Liberation Mono', Menlo, Courier, monospace"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Styling {
    pub line_height: f64,
    pub padding: String,
}

impl Default for Styling {
    fn default() -> Self {
        Self {
            line_height: 1.6,
            padding: "4em".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderStyling {
    pub h1_font_weight: String,
    pub h2_font_weight: String,
    pub h3_font_weight: String,
    pub h4_font_weight: String,
    pub h5_font_weight: String,
    pub h6_font_weight: String,
}

impl Default for HeaderStyling {
    fn default() -> Self {
        Self {
            h1_font_weight: "600".to_string(),
            h2_font_weight: "600".to_string(),
            h3_font_weight: "400".to_string(),
            h4_font_weight: "400".to_string(),
            h5_font_weight: "400".to_string(),
            h6_font_weight: "400".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Config file names searched for, in priority order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".mdtree.jsonc", ".mdtree.json"];

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks for a config file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.mdtree.jsonc` and `.mdtree.json`; comments and trailing
    /// commas are accepted in both.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ViewerError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ViewerError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_jsonc(&content)?;

        let absolute = path.canonicalize()?;
        config.base_dir = absolute.parent().map(Path::to_path_buf);

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from JSONC text with schema validation.
    pub fn from_jsonc(content: &str) -> Result<Self, ViewerError> {
        let value: serde_json::Value =
            jsonc_parser::parse_to_serde_value(content, &jsonc_parser::ParseOptions::default())
                .map_err(|e| ViewerError::config(format!("Invalid JSON: {}", e)))?
                .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        Self::from_value(value)
    }

    /// Parses configuration from a strict JSON string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ViewerError::config(format!("Invalid JSON: {}", e)))?;

        Self::from_value(value)
    }

    fn from_value(value: serde_json::Value) -> Result<Self, ViewerError> {
        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(ViewerError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| ViewerError::config(format!("Invalid config: {}", e)))
    }

    /// Serialises the configuration as pretty JSON, as written by `init`.
    pub fn to_json_pretty(&self) -> Result<String, ViewerError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ViewerError::internal(format!("Failed to serialize config: {}", e)))
    }

    /// Returns the configured font weight for header levels 1 to 6.
    pub fn font_weight_for_header(&self, level: u32) -> Option<&str> {
        let styling = &self.header_styling;
        let weight = match level {
            1 => &styling.h1_font_weight,
            2 => &styling.h2_font_weight,
            3 => &styling.h3_font_weight,
            4 => &styling.h4_font_weight,
            5 => &styling.h5_font_weight,
            6 => &styling.h6_font_weight,
            _ => return None,
        };
        Some(weight.as_str())
    }
}
