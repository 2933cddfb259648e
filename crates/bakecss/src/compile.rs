//! Namespace compilation: the pipeline end to end.

use crate::error::{CompilationError, NamespaceError};
use crate::expand::expand_definition;
use crate::options::CompileOptions;
use crate::render::build_rule;
use crate::types::{AtomicRule, ClassRef, CompiledNamespace, NamespaceKey, StyleDefinition};
use std::collections::HashSet;

/// Output of compiling one namespace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledStyles {
    /// The lookup table handed back to the caller.
    pub namespace: CompiledNamespace,
    /// Rules to append to the build's accumulator, first-seen order.
    pub rules: Vec<AtomicRule>,
    /// Declarations that failed and were left out.
    pub errors: Vec<NamespaceError>,
}

impl CompiledStyles {
    /// Rules without partial failures.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Compiles a definition into atomic rules and a lookup table.
///
/// Each declaration is compiled independently: a malformed value drops that
/// declaration and is reported in [`CompiledStyles::errors`]. The call itself
/// fails only when every declaration failed, returning the first error.
///
/// ```rust
/// use bakecss::{CompileOptions, compile_namespace};
/// use bakecss::types::StyleDefinition;
///
/// let definition = StyleDefinition::new().with("color", "red").with("margin", 10);
/// let compiled = compile_namespace("root", &definition, &CompileOptions::default()).unwrap();
///
/// assert_eq!(compiled.rules.len(), 5);
/// assert!(compiled.namespace.class_for("margin-start").is_some());
/// assert!(compiled.errors.is_empty());
/// ```
pub fn compile_namespace(
    name: &str,
    definition: &StyleDefinition,
    options: &CompileOptions,
) -> Result<CompiledStyles, NamespaceError> {
    let expansion = expand_definition(definition, options);

    if expansion.all_failed() {
        let first = expansion
            .errors
            .into_iter()
            .next()
            .unwrap_or_else(|| CompilationError::unsupported(name, "empty definition"));
        return Err(NamespaceError::new(name, first));
    }

    let mut compiled = CompiledStyles {
        namespace: CompiledNamespace::new(name),
        rules: Vec::with_capacity(expansion.declarations.len()),
        errors: expansion
            .errors
            .into_iter()
            .map(|error| NamespaceError::new(name, error))
            .collect(),
    };
    let mut seen = HashSet::new();

    for declaration in &expansion.declarations {
        let key = NamespaceKey::new(&declaration.property, declaration.condition_texts());
        match build_rule(declaration, options) {
            Some(rule) => {
                compiled
                    .namespace
                    .insert(key, ClassRef::Class(rule.class_name.clone()));
                if seen.insert(rule.class_name.clone()) {
                    compiled.rules.push(rule);
                }
            }
            None => compiled.namespace.insert(key, ClassRef::Unset),
        }
    }

    log::debug!(
        "compiled namespace `{}`: {} rules, {} keys, {} errors",
        name,
        compiled.rules.len(),
        compiled.namespace.len(),
        compiled.errors.len()
    );
    Ok(compiled)
}
