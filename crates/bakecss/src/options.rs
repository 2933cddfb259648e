//! Compiler configuration.
//!
//! Option names follow the camelCase spelling build tools pass through, so a
//! JSON options object can be deserialized directly:
//!
//! ```rust
//! use bakecss::{CompileOptions, StyleResolution};
//!
//! let options = CompileOptions::from_json(r#"{
//!     "classNamePrefix": "s",
//!     "useCSSLayers": true,
//!     "styleResolution": "property-specificity"
//! }"#).unwrap();
//!
//! assert_eq!(options.class_name_prefix, "s");
//! assert!(options.use_css_layers);
//! assert_eq!(options.style_resolution, StyleResolution::PropertySpecificity);
//! ```

use serde::{Deserialize, Serialize};

/// Ordering mode consumed by the runtime merge step.
///
/// The compiler never interprets it; it is carried so the build unit can hand
/// it to whatever merges compiled namespaces at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleResolution {
    #[default]
    ApplicationOrder,
    PropertySpecificity,
    LegacyExpandShorthands,
}

/// Options recognized by every pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOptions {
    /// Prepended to every generated class and variable name.
    pub class_name_prefix: String,
    /// Rewrite `font-size` pixel lengths to `rem`.
    pub enable_length_to_rem: bool,
    /// Emit the sheet partitioned into `@layer` blocks.
    #[serde(rename = "useCSSLayers")]
    pub use_css_layers: bool,
    pub style_resolution: StyleResolution,
    /// Prefix class names with the dashed property they style.
    pub debug: bool,
    /// Also flip physical shadow offsets and resize cursors for RTL.
    pub enable_legacy_value_flipping: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            class_name_prefix: "x".to_string(),
            enable_length_to_rem: false,
            use_css_layers: false,
            style_resolution: StyleResolution::default(),
            debug: false,
            enable_legacy_value_flipping: false,
        }
    }
}

impl CompileOptions {
    /// Parses options from a JSON object. Missing keys take their defaults.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_name_prefix = prefix.into();
        self
    }

    pub fn with_layers(mut self, enabled: bool) -> Self {
        self.use_css_layers = enabled;
        self
    }

    /// Stable digest of every option that changes compiled output.
    ///
    /// Used to key memoized compilations; `style_resolution` and
    /// `use_css_layers` are left out since neither affects per-namespace output.
    pub fn fingerprint(&self) -> u64 {
        let text = format!(
            "{}|{}|{}|{}",
            self.class_name_prefix,
            self.enable_length_to_rem,
            self.debug,
            self.enable_legacy_value_flipping
        );
        seahash::hash(text.as_bytes())
    }
}
