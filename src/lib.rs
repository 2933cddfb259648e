//! # stylebake
//!
//! A build-time compiler from nested style definitions to atomic,
//! content-addressed CSS.
//!
//! Each declaration in a definition becomes one single-property rule whose
//! class name is a hash of the normalized declaration, so identical
//! declarations anywhere in a build share a class. A [`Compiler`] collects
//! the rules of a build and turns them into one ordered stylesheet.
//!
//! ## Quick Start
//!
//! ```rust
//! use stylebake::{CompileOptions, Compiler, styles};
//!
//! let compiler = Compiler::new(CompileOptions::default());
//!
//! let button = compiler
//!     .compile("button", &styles! {
//!         color: { default: "black", ":hover": "blue" },
//!         padding_block: 4,
//!     })
//!     .unwrap();
//!
//! assert_eq!(button.namespace.class_list("color").map(|c| c.split(' ').count()), Some(2));
//! assert!(compiler.stylesheet().contains(":hover{color:blue}"));
//! ```
//!
//! The lower-level pipeline lives in [`bakecss`], re-exported here.

extern crate self as stylebake;

pub mod accumulator;
pub mod cache;
pub mod compiler;
pub mod error;

pub use bakecss;
pub use bakecss::{
    AtomicRule, ClassRef, CompilationError, CompileOptions, CompiledNamespace, CompiledStyles,
    Condition, Declaration, Layer, NamespaceError, NamespaceKey, Priority, Sheet, StyleDefinition,
    StyleResolution, StyleValue, compile_namespace,
};

pub use accumulator::RuleAccumulator;
pub use cache::{CacheKey, CompileCache};
pub use compiler::Compiler;
pub use error::{Result, StylebakeError};
pub use stylebake_macros::styles;
