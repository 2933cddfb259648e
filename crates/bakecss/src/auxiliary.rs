//! Auxiliary named constructs: variables, themes, keyframes, `@position-try`
//! and view-transition classes.
//!
//! These are referenced by name rather than matched by a class selector, but
//! follow the same rule as ordinary declarations: every name is a hash of
//! normalized content, so identical constructs anywhere in a build collapse
//! into one rule.

use crate::compile::CompiledStyles;
use crate::direction::physical_forms;
use crate::error::{CompilationError, NamespaceError};
use crate::expand::expand_property;
use crate::naming::{prefixed_hash, variable_name};
use crate::normalize::dashify;
use crate::options::CompileOptions;
use crate::priority::Priority;
use crate::render::{render_body, wrap_at_rules};
use crate::types::{
    AtomicRule, ClassRef, CompiledNamespace, ConditionKinds, ConditionPath, Declaration,
    NamespaceKey, StyleDefinition, StyleValue, condition_kinds,
};

/// A named construct and the rules that define it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Named {
    /// The identifier to reference, e.g. in `animation-name`.
    pub name: String,
    pub rules: Vec<AtomicRule>,
}

/// Declarations grouped by the at-rules they apply under.
struct VariableGroups {
    groups: Vec<(ConditionPath, Vec<Declaration>)>,
    errors: Vec<CompilationError>,
    attempted: usize,
    /// `(key, custom property)` in authored order.
    names: Vec<(String, String)>,
}

impl VariableGroups {
    fn collect(namespace: &str, vars: &StyleDefinition, options: &CompileOptions) -> Self {
        let mut out = VariableGroups {
            groups: vec![(ConditionPath::new(), Vec::new())],
            errors: Vec::new(),
            attempted: 0,
            names: Vec::new(),
        };
        for (key, value) in vars.entries() {
            let name = variable_name(namespace, key, options);
            let expansion = expand_property(&name, value, options);
            out.attempted += expansion.attempted;
            out.errors.extend(expansion.errors);
            let mut kept = false;
            for declaration in expansion.declarations {
                if !ConditionKinds::AT_RULE.contains(condition_kinds(&declaration.conditions)) {
                    out.errors.push(CompilationError::unsupported(
                        key,
                        "selector condition on a variable",
                    ));
                    continue;
                }
                if declaration.is_null() {
                    continue;
                }
                kept = true;
                match out
                    .groups
                    .iter_mut()
                    .find(|(path, _)| *path == declaration.conditions)
                {
                    Some((_, declarations)) => declarations.push(declaration),
                    None => out
                        .groups
                        .push((declaration.conditions.clone(), vec![declaration])),
                }
            }
            if kept {
                out.names.push((key.to_string(), name));
            }
        }
        out
    }

    fn into_result(
        self,
        namespace: &str,
        base_selector: &str,
        priority: Priority,
        options: &CompileOptions,
    ) -> Result<(Vec<AtomicRule>, Vec<NamespaceError>, Vec<(String, String)>), NamespaceError>
    {
        if self.attempted > 0 && self.errors.len() >= self.attempted {
            if let Some(first) = self.errors.first() {
                return Err(NamespaceError::new(namespace, first.clone()));
            }
        }
        let rules = self
            .groups
            .iter()
            .filter(|(_, declarations)| !declarations.is_empty())
            .map(|(conditions, declarations)| {
                let body = declarations
                    .iter()
                    .map(render_body)
                    .collect::<Vec<_>>()
                    .join(";");
                let text = wrap_at_rules(format!("{}{{{}}}", base_selector, body), conditions);
                AtomicRule::new(prefixed_hash(&text, options), text, priority)
            })
            .collect();
        let errors = self
            .errors
            .into_iter()
            .map(|error| NamespaceError::new(namespace, error))
            .collect();
        Ok((rules, errors, self.names))
    }
}

/// Defines a group of CSS custom properties.
///
/// Each key gets a hashed `--name`; the returned namespace maps the key to
/// `var(--name)`. Values may be conditional on at-rules, which produces one
/// extra `:root` rule per distinct at-rule path.
///
/// ```rust
/// use bakecss::CompileOptions;
/// use bakecss::auxiliary::define_vars;
/// use bakecss::types::{ClassRef, NamespaceKey, StyleDefinition};
///
/// let vars = StyleDefinition::new().with("accent", "blue").with("gap", 4);
/// let compiled = define_vars("tokens", &vars, &CompileOptions::default()).unwrap();
///
/// assert_eq!(compiled.rules.len(), 1);
/// assert!(compiled.rules[0].ltr.starts_with(":root{--x"));
/// assert!(matches!(
///     compiled.namespace.get(&NamespaceKey::plain("accent")),
///     Some(ClassRef::Variable(reference)) if reference.starts_with("var(--x")
/// ));
/// ```
pub fn define_vars(
    namespace: &str,
    vars: &StyleDefinition,
    options: &CompileOptions,
) -> Result<CompiledStyles, NamespaceError> {
    let (rules, errors, names) = VariableGroups::collect(namespace, vars, options).into_result(
        namespace,
        ":root",
        Priority::VARIABLES,
        options,
    )?;
    let mut compiled = CompiledNamespace::new(namespace);
    for (key, name) in names {
        compiled.insert(
            NamespaceKey::plain(key),
            ClassRef::Variable(format!("var({})", name)),
        );
    }
    log::debug!("defined {} variables in `{}`", compiled.len(), namespace);
    Ok(CompiledStyles {
        namespace: compiled,
        rules,
        errors,
    })
}

/// Creates a theme class overriding variables defined by [`define_vars`]
/// under `vars_namespace`.
///
/// The returned namespace maps `vars_namespace` to the theme class.
pub fn create_theme(
    vars_namespace: &str,
    overrides: &StyleDefinition,
    options: &CompileOptions,
) -> Result<CompiledStyles, NamespaceError> {
    let theme = prefixed_hash(
        &format!("theme:{}{}", vars_namespace, overrides.canonical_text()),
        options,
    );
    let selector = format!(".{theme},.{theme}:root");
    let (rules, errors, _) = VariableGroups::collect(vars_namespace, overrides, options)
        .into_result(vars_namespace, &selector, Priority::THEME, options)?;
    let mut compiled = CompiledNamespace::new(vars_namespace);
    compiled.insert(
        NamespaceKey::plain(vars_namespace),
        ClassRef::Class(theme.clone()),
    );
    log::debug!("created theme `{}` for `{}`", theme, vars_namespace);
    Ok(CompiledStyles {
        namespace: compiled,
        rules,
        errors,
    })
}

/// Renders a block of unconditional properties in both directions.
fn block<'a>(
    construct: &str,
    properties: impl IntoIterator<Item = (&'a str, &'a StyleValue)>,
    options: &CompileOptions,
) -> Result<(String, String), NamespaceError> {
    let mut ltr = Vec::new();
    let mut rtl = Vec::new();
    for (property, value) in properties {
        let expansion = expand_property(property, value, options);
        if let Some(error) = expansion.errors.into_iter().next() {
            return Err(NamespaceError::new(construct, error));
        }
        for declaration in expansion.declarations {
            if !declaration.conditions.is_empty() {
                return Err(NamespaceError::new(
                    construct,
                    CompilationError::unsupported(property, "conditional value"),
                ));
            }
            if declaration.is_null() {
                continue;
            }
            let (l, r) = physical_forms(&declaration, options);
            rtl.push(render_body(r.as_ref().unwrap_or(&l)));
            ltr.push(render_body(&l));
        }
    }
    Ok((ltr.join(";"), rtl.join(";")))
}

fn frame_properties<'a>(
    construct: &str,
    key: &str,
    value: &'a StyleValue,
) -> Result<impl Iterator<Item = (&'a str, &'a StyleValue)>, NamespaceError> {
    match value {
        StyleValue::Conditional(entries) => Ok(entries.iter().map(|(k, v)| (k.as_str(), v))),
        other => Err(NamespaceError::new(
            construct,
            CompilationError::unsupported(key, other.type_name()),
        )),
    }
}

/// Compiles a `@keyframes` animation.
///
/// `frames` maps frame selectors (`from`, `50%`, `to`) to property maps. The
/// name ends in `-B` so it can never collide with a class name.
pub fn keyframes(frames: &StyleDefinition, options: &CompileOptions) -> Result<Named, NamespaceError> {
    const CONSTRUCT: &str = "keyframes";
    let mut ltr = String::new();
    let mut rtl = String::new();
    for (key, value) in frames.entries() {
        let (l, r) = block(CONSTRUCT, frame_properties(CONSTRUCT, key, value)?, options)?;
        ltr.push_str(&format!("{}{{{}}}", key, l));
        rtl.push_str(&format!("{}{{{}}}", key, r));
    }
    let name = format!("{}-B", prefixed_hash(&ltr, options));
    let mut rule = AtomicRule::new(
        &name,
        format!("@keyframes {}{{{}}}", name, ltr),
        Priority::AUXILIARY,
    );
    if rtl != ltr {
        rule = rule.with_rtl(format!("@keyframes {}{{{}}}", name, rtl));
    }
    Ok(Named {
        name,
        rules: vec![rule],
    })
}

/// Compiles a `@position-try` fallback for anchor positioning.
pub fn position_try(
    declarations: &StyleDefinition,
    options: &CompileOptions,
) -> Result<Named, NamespaceError> {
    let (ltr, rtl) = block("position-try", declarations.entries(), options)?;
    let name = format!("--{}", prefixed_hash(&ltr, options));
    let mut rule = AtomicRule::new(
        &name,
        format!("@position-try {}{{{}}}", name, ltr),
        Priority::AUXILIARY,
    );
    if rtl != ltr {
        rule = rule.with_rtl(format!("@position-try {}{{{}}}", name, rtl));
    }
    Ok(Named {
        name,
        rules: vec![rule],
    })
}

/// Compiles a view-transition class.
///
/// Keys name the transition pseudo-elements (`group`, `imagePair`, `old`,
/// `new`); each value is a property map applied to
/// `::view-transition-{key}(*.name)`.
pub fn view_transition_class(
    pseudos: &StyleDefinition,
    options: &CompileOptions,
) -> Result<Named, NamespaceError> {
    const CONSTRUCT: &str = "view-transition-class";
    let mut blocks = Vec::new();
    for (key, value) in pseudos.entries() {
        let pseudo = dashify(key);
        if !matches!(pseudo.as_str(), "group" | "image-pair" | "old" | "new") {
            return Err(NamespaceError::new(
                CONSTRUCT,
                CompilationError::unsupported(key, "unknown view-transition pseudo-element"),
            ));
        }
        let (body, _) = block(CONSTRUCT, frame_properties(CONSTRUCT, key, value)?, options)?;
        blocks.push((pseudo, body));
    }

    let digest_text: String = blocks
        .iter()
        .map(|(pseudo, body)| format!("{}{{{}}}", pseudo, body))
        .collect();
    let name = prefixed_hash(&format!("view-transition:{}", digest_text), options);
    let text: String = blocks
        .iter()
        .map(|(pseudo, body)| format!("::view-transition-{}(*.{}){{{}}}", pseudo, name, body))
        .collect();
    Ok(Named {
        rules: vec![AtomicRule::new(&name, text, Priority::AUXILIARY)],
        name,
    })
}
