//! Shorthand → longhand tables.
//!
//! Edges are logical and ordered top, end, bottom, start. Corners (for
//! `border-radius`) are ordered top-start, top-end, bottom-end, bottom-start,
//! which the same 1 to 4 value rule distributes.

use crate::error::CompilationError;
use phf::phf_map;

/// How a shorthand distributes its parts over longhands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shorthand {
    /// Four edges or corners; accepts 1 to 4 parts.
    Box4([&'static str; 4]),
    /// Two axes; accepts 1 or 2 parts.
    Pair([&'static str; 2]),
}

impl Shorthand {
    pub fn longhands(&self) -> &[&'static str] {
        match self {
            Self::Box4(names) => names,
            Self::Pair(names) => names,
        }
    }

    /// Assigns value parts to longhands.
    ///
    /// ```rust
    /// use bakecss::expand::shorthands::shorthand_for;
    ///
    /// let margin = shorthand_for("margin").unwrap();
    /// let parts = ["1px", "2px", "3px"].map(String::from);
    /// let assigned = margin.distribute("margin", &parts).unwrap();
    /// assert_eq!(assigned[1], ("margin-end", "2px".to_string()));
    /// assert_eq!(assigned[3], ("margin-start", "2px".to_string()));
    /// ```
    pub fn distribute(
        &self,
        property: &str,
        parts: &[String],
    ) -> Result<Vec<(&'static str, String)>, CompilationError> {
        let picked: Vec<&String> = match (self, parts) {
            (_, []) => {
                return Err(CompilationError::malformed(property, "", "empty value"));
            }
            (Self::Box4(_), [all]) => vec![all, all, all, all],
            (Self::Box4(_), [vertical, horizontal]) => {
                vec![vertical, horizontal, vertical, horizontal]
            }
            (Self::Box4(_), [top, horizontal, bottom]) => vec![top, horizontal, bottom, horizontal],
            (Self::Box4(_), [top, end, bottom, start]) => vec![top, end, bottom, start],
            (Self::Pair(_), [both]) => vec![both, both],
            (Self::Pair(_), [first, second]) => vec![first, second],
            _ => {
                return Err(CompilationError::malformed(
                    property,
                    &parts.join(" "),
                    format!(
                        "expected at most {} values, found {}",
                        self.longhands().len(),
                        parts.len()
                    ),
                ));
            }
        };
        Ok(self
            .longhands()
            .iter()
            .zip(picked)
            .map(|(longhand, part)| (*longhand, part.clone()))
            .collect())
    }
}

const MARGIN: Shorthand = Shorthand::Box4(["margin-top", "margin-end", "margin-bottom", "margin-start"]);
const PADDING: Shorthand =
    Shorthand::Box4(["padding-top", "padding-end", "padding-bottom", "padding-start"]);

static SHORTHANDS: phf::Map<&'static str, Shorthand> = phf_map! {
    "margin" => MARGIN,
    "padding" => PADDING,
    "border-width" => Shorthand::Box4([
        "border-top-width",
        "border-end-width",
        "border-bottom-width",
        "border-start-width",
    ]),
    "border-style" => Shorthand::Box4([
        "border-top-style",
        "border-end-style",
        "border-bottom-style",
        "border-start-style",
    ]),
    "border-color" => Shorthand::Box4([
        "border-top-color",
        "border-end-color",
        "border-bottom-color",
        "border-start-color",
    ]),
    "border-radius" => Shorthand::Box4([
        "border-top-start-radius",
        "border-top-end-radius",
        "border-bottom-end-radius",
        "border-bottom-start-radius",
    ]),
    "inset" => Shorthand::Box4(["top", "end", "bottom", "start"]),
    "margin-horizontal" => Shorthand::Pair(["margin-start", "margin-end"]),
    "margin-inline" => Shorthand::Pair(["margin-start", "margin-end"]),
    "margin-vertical" => Shorthand::Pair(["margin-top", "margin-bottom"]),
    "margin-block" => Shorthand::Pair(["margin-top", "margin-bottom"]),
    "padding-horizontal" => Shorthand::Pair(["padding-start", "padding-end"]),
    "padding-inline" => Shorthand::Pair(["padding-start", "padding-end"]),
    "padding-vertical" => Shorthand::Pair(["padding-top", "padding-bottom"]),
    "padding-block" => Shorthand::Pair(["padding-top", "padding-bottom"]),
    "inset-inline" => Shorthand::Pair(["start", "end"]),
    "inset-block" => Shorthand::Pair(["top", "bottom"]),
    "overflow" => Shorthand::Pair(["overflow-x", "overflow-y"]),
    "gap" => Shorthand::Pair(["row-gap", "column-gap"]),
};

/// Looks up the expansion for a dashed property name.
pub fn shorthand_for(property: &str) -> Option<&'static Shorthand> {
    SHORTHANDS.get(property)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn values(assigned: Vec<(&'static str, String)>) -> Vec<String> {
        assigned.into_iter().map(|(_, v)| v).collect()
    }

    #[test]
    fn box_one_two_four() {
        let margin = shorthand_for("margin").unwrap();
        assert_eq!(
            values(margin.distribute("margin", &parts(&["1px"])).unwrap()),
            parts(&["1px", "1px", "1px", "1px"])
        );
        assert_eq!(
            values(margin.distribute("margin", &parts(&["1px", "2px"])).unwrap()),
            parts(&["1px", "2px", "1px", "2px"])
        );
        assert_eq!(
            values(margin.distribute("margin", &parts(&["1", "2", "3", "4"])).unwrap()),
            parts(&["1", "2", "3", "4"])
        );
    }

    #[test]
    fn corners_share_the_box_rule() {
        let radius = shorthand_for("border-radius").unwrap();
        let assigned = radius
            .distribute("border-radius", &parts(&["4px", "8px"]))
            .unwrap();
        assert_eq!(assigned[0], ("border-top-start-radius", "4px".to_string()));
        assert_eq!(assigned[1], ("border-top-end-radius", "8px".to_string()));
        assert_eq!(assigned[2], ("border-bottom-end-radius", "4px".to_string()));
    }

    #[test]
    fn too_many_parts() {
        let overflow = shorthand_for("overflow").unwrap();
        assert!(matches!(
            overflow.distribute("overflow", &parts(&["a", "b", "c"])),
            Err(CompilationError::MalformedValue { .. })
        ));
        let padding = shorthand_for("padding").unwrap();
        assert!(padding
            .distribute("padding", &parts(&["1", "2", "3", "4", "5"]))
            .is_err());
    }

    #[test]
    fn plain_properties_are_not_shorthands() {
        assert!(shorthand_for("margin-top").is_none());
        assert!(shorthand_for("border").is_none());
        assert!(shorthand_for("gap").is_some());
    }
}
