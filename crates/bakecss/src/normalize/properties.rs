//! Property tables consulted by the normalizer.

use phf::phf_set;

/// Properties whose numeric values take no unit.
pub static UNITLESS_PROPERTIES: phf::Set<&'static str> = phf_set! {
    "animation-iteration-count",
    "aspect-ratio",
    "border-image-outset",
    "border-image-slice",
    "border-image-width",
    "box-flex",
    "box-flex-group",
    "box-ordinal-group",
    "column-count",
    "columns",
    "fill-opacity",
    "flex",
    "flex-grow",
    "flex-negative",
    "flex-order",
    "flex-positive",
    "flex-shrink",
    "flood-opacity",
    "font-size-adjust",
    "font-weight",
    "grid-area",
    "grid-column",
    "grid-column-end",
    "grid-column-span",
    "grid-column-start",
    "grid-row",
    "grid-row-end",
    "grid-row-span",
    "grid-row-start",
    "initial-letter",
    "line-clamp",
    "line-height",
    "math-depth",
    "opacity",
    "order",
    "orphans",
    "scale",
    "stop-opacity",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
    "tab-size",
    "widows",
    "z-index",
    "zoom",
    "-webkit-line-clamp",
};

/// Properties whose numeric values are durations in milliseconds.
pub static TIME_PROPERTIES: phf::Set<&'static str> = phf_set! {
    "animation-delay",
    "animation-duration",
    "transition-delay",
    "transition-duration",
    "voice-duration",
};

/// Properties whose values list other property names.
pub static PROPERTY_LIST_PROPERTIES: phf::Set<&'static str> = phf_set! {
    "transition-property",
    "will-change",
};

/// Properties whose string values are rendered as CSS strings.
pub static CONTENT_PROPERTIES: phf::Set<&'static str> = phf_set! {
    "content",
    "hyphenate-character",
};

/// `content` values that are keywords rather than text.
pub static CONTENT_KEYWORDS: phf::Set<&'static str> = phf_set! {
    "normal",
    "none",
    "open-quote",
    "close-quote",
    "no-open-quote",
    "no-close-quote",
    "inherit",
    "initial",
    "revert",
    "revert-layer",
    "unset",
};

/// Function prefixes that mark a `content` value as already CSS.
pub const CONTENT_FUNCTIONS: &[&str] = &[
    "attr(",
    "counter(",
    "counters(",
    "url(",
    "linear-gradient(",
    "image-set(",
    "var(--",
];

/// Functions whose arguments must keep their units.
pub static MATH_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "calc",
    "min",
    "max",
    "clamp",
    "var",
    "-webkit-calc",
    "-moz-calc",
};
