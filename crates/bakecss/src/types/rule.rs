//! Compiled rules.

use crate::priority::{Layer, Priority};
use serde::{Deserialize, Serialize};

/// The compiled artifact for one declaration.
///
/// `ltr` is the rule text used in left-to-right contexts (or everywhere when
/// `rtl` is `None`); `rtl` is the right-to-left variant when the physical
/// form differs. Both share `class_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtomicRule {
    pub class_name: String,
    pub ltr: String,
    pub rtl: Option<String>,
    pub priority: Priority,
}

impl AtomicRule {
    pub fn new(class_name: impl Into<String>, ltr: impl Into<String>, priority: Priority) -> Self {
        Self {
            class_name: class_name.into(),
            ltr: ltr.into(),
            rtl: None,
            priority,
        }
    }

    pub fn with_rtl(mut self, rtl: impl Into<String>) -> Self {
        self.rtl = Some(rtl.into());
        self
    }

    pub fn layer(&self) -> Layer {
        self.priority.layer()
    }

    /// Both variants, LTR first.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.ltr.as_str()).chain(self.rtl.as_deref())
    }
}
