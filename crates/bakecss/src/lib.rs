//! # bakecss - atomic CSS compiler core
//!
//! Compiles declarative, nested style definitions into atomic CSS rules with
//! content-addressed class names. Identical declarations compile to identical
//! classes wherever they appear, so a whole project's stylesheet never repeats
//! a rule.
//!
//! The pipeline is a chain of pure functions:
//!
//! - **Normalization** ([`normalize`]): canonical value text
//! - **Expansion** ([`expand`]): shorthands → longhands, conditional maps → flat declarations
//! - **Direction** ([`direction`]): logical properties → LTR/RTL physical rules
//! - **Naming** ([`naming`]): hashed class and variable names
//! - **Priority** ([`priority`]): selector-shape ordering and layer buckets
//! - **Sheet** ([`sheet`]): dedup, sort, serialize
//!
//! ## Quick Start
//!
//! ```rust
//! use bakecss::{CompileOptions, Sheet, StyleDefinition, StyleValue, compile_namespace};
//!
//! let button = StyleDefinition::new()
//!     .with("color", StyleValue::conditional([
//!         ("default", "black"),
//!         (":hover", "blue"),
//!     ]))
//!     .with("paddingInline", 8);
//!
//! let options = CompileOptions::default();
//! let compiled = compile_namespace("button", &button, &options).unwrap();
//!
//! let css = Sheet::new(compiled.rules).to_css(options.use_css_layers);
//! assert!(css.contains("padding-left:8px"));
//! assert!(css.contains(":hover{color:blue}"));
//! ```
//!
//! No module here holds state; accumulating rules across a build and caching
//! compiled namespaces belong to the caller.

pub mod auxiliary;
pub mod compile;
pub mod direction;
pub mod error;
pub mod expand;
pub mod naming;
pub mod normalize;
pub mod options;
pub mod parser;
pub mod priority;
pub mod render;
pub mod sheet;
pub mod types;

pub use auxiliary::{Named, create_theme, define_vars, keyframes, position_try, view_transition_class};
pub use compile::{CompiledStyles, compile_namespace};
pub use error::{CompilationError, NamespaceError};
pub use options::{CompileOptions, StyleResolution};
pub use priority::{Layer, Priority};
pub use sheet::{Sheet, build_sheet};
pub use types::{
    AtomicRule, ClassRef, CompiledNamespace, Condition, Declaration, NamespaceKey,
    StyleDefinition, StyleValue,
};
