//! The build-unit compiler.
//!
//! A [`Compiler`] owns one build's options, its rule accumulator and its
//! memo cache. It is `Sync`: bundler workers can share one instance and call
//! [`Compiler::compile`] concurrently, or hand a batch to
//! [`Compiler::compile_all`], which compiles in parallel on the rayon pool.

use crate::accumulator::RuleAccumulator;
use crate::cache::{CacheKey, CompileCache};
use crate::error::Result;
use bakecss::{
    CompileOptions, CompiledStyles, NamespaceError, Sheet, StyleDefinition, StyleResolution,
    compile_namespace,
};
use rayon::prelude::*;
use std::sync::Arc;

/// Compiles namespaces and auxiliary constructs for one build.
#[derive(Debug, Default)]
pub struct Compiler {
    options: CompileOptions,
    accumulator: RuleAccumulator,
    cache: CompileCache,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            options,
            accumulator: RuleAccumulator::new(),
            cache: CompileCache::new(),
        }
    }

    /// Creates a compiler from a JSON options object.
    pub fn from_json_options(source: &str) -> Result<Self> {
        Ok(Self::new(CompileOptions::from_json(source)?))
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// The ordering mode for whatever merges compiled namespaces at runtime.
    pub fn style_resolution(&self) -> StyleResolution {
        self.options.style_resolution
    }

    pub fn accumulator(&self) -> &RuleAccumulator {
        &self.accumulator
    }

    pub fn cache(&self) -> &CompileCache {
        &self.cache
    }

    fn compile_cached(&self, name: &str, definition: &StyleDefinition) -> Result<Arc<CompiledStyles>> {
        let key = CacheKey::new(name, definition, &self.options);
        Ok(self
            .cache
            .get_or_compile(key, || compile_namespace(name, definition, &self.options))?)
    }

    /// Compiles one namespace and appends its rules to the accumulator.
    ///
    /// Repeated calls with an unchanged definition are served from the cache.
    /// Rules are appended on every call, so the accumulator can be cleared
    /// between rebuilds without invalidating the cache.
    pub fn compile(&self, name: &str, definition: &StyleDefinition) -> Result<Arc<CompiledStyles>> {
        let compiled = self.compile_cached(name, definition)?;
        self.accumulator.extend(compiled.rules.iter().cloned());
        Ok(compiled)
    }

    /// Compiles a namespace given as a JSON object.
    pub fn compile_json(&self, name: &str, source: &str) -> Result<Arc<CompiledStyles>> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        let definition = StyleDefinition::from_json_value(&value)
            .map_err(|error| NamespaceError::new(name, error))?;
        self.compile(name, &definition)
    }

    /// Compiles many namespaces in parallel.
    ///
    /// Results come back in input order, and rules are appended to the
    /// accumulator in that same order once every namespace has finished, so
    /// the accumulator's contents do not depend on thread scheduling.
    pub fn compile_all<N>(&self, definitions: &[(N, StyleDefinition)]) -> Vec<Result<Arc<CompiledStyles>>>
    where
        N: AsRef<str> + Sync,
    {
        let results: Vec<_> = definitions
            .par_iter()
            .map(|(name, definition)| self.compile_cached(name.as_ref(), definition))
            .collect();

        for compiled in results.iter().flatten() {
            self.accumulator.extend(compiled.rules.iter().cloned());
        }
        log::debug!(
            "compiled {} namespaces ({} cache hits so far)",
            definitions.len(),
            self.cache.hits()
        );
        results
    }

    fn record(&self, compiled: CompiledStyles) -> CompiledStyles {
        self.accumulator.extend(compiled.rules.iter().cloned());
        compiled
    }

    /// Defines a namespace of CSS custom properties.
    pub fn define_vars(&self, namespace: &str, vars: &StyleDefinition) -> Result<CompiledStyles> {
        let compiled = bakecss::define_vars(namespace, vars, &self.options)?;
        Ok(self.record(compiled))
    }

    /// Creates a theme class overriding the variables of `vars_namespace`.
    pub fn create_theme(
        &self,
        vars_namespace: &str,
        overrides: &StyleDefinition,
    ) -> Result<CompiledStyles> {
        let compiled = bakecss::create_theme(vars_namespace, overrides, &self.options)?;
        Ok(self.record(compiled))
    }

    /// Compiles `@keyframes` and returns the animation name.
    pub fn keyframes(&self, frames: &StyleDefinition) -> Result<String> {
        let named = bakecss::keyframes(frames, &self.options)?;
        self.accumulator.extend(named.rules);
        Ok(named.name)
    }

    /// Compiles a `@position-try` rule and returns its dashed name.
    pub fn position_try(&self, declarations: &StyleDefinition) -> Result<String> {
        let named = bakecss::position_try(declarations, &self.options)?;
        self.accumulator.extend(named.rules);
        Ok(named.name)
    }

    /// Compiles a view-transition class and returns its name.
    pub fn view_transition_class(&self, pseudos: &StyleDefinition) -> Result<String> {
        let named = bakecss::view_transition_class(pseudos, &self.options)?;
        self.accumulator.extend(named.rules);
        Ok(named.name)
    }

    /// The deduplicated, priority-ordered sheet of everything compiled so far.
    pub fn sheet(&self) -> Sheet {
        self.accumulator.to_sheet()
    }

    /// The final stylesheet text, layered when the options ask for it.
    pub fn stylesheet(&self) -> String {
        self.sheet().to_css(self.options.use_css_layers)
    }

    /// A stylesheet holding only the named rules, e.g. the classes one page
    /// actually uses.
    pub fn stylesheet_for<'a>(&self, class_names: impl IntoIterator<Item = &'a str>) -> String {
        self.sheet()
            .subset(class_names)
            .to_css(self.options.use_css_layers)
    }
}
