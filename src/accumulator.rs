//! The build-wide rule accumulator.
//!
//! Compilations append their rules here as they finish; the sheet is built
//! from a snapshot at the end of the build (or whenever a dev server asks).
//! Appends only need to be lossless: the sheet deduplicates and sorts, so the
//! order in which workers append does not affect the output.

use bakecss::{AtomicRule, Sheet};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Manifest format version written by [`RuleAccumulator::to_json`].
const MANIFEST_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Manifest {
    version: u32,
    rules: Vec<AtomicRule>,
}

/// A thread-safe, append-only list of compiled rules.
#[derive(Debug, Default)]
pub struct RuleAccumulator {
    rules: Mutex<Vec<AtomicRule>>,
}

impl RuleAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, rule: AtomicRule) {
        self.rules.lock().push(rule);
    }

    /// Appends many rules under a single lock.
    pub fn extend(&self, rules: impl IntoIterator<Item = AtomicRule>) {
        self.rules.lock().extend(rules);
    }

    /// Moves every rule of `other` into this accumulator.
    pub fn merge(&self, other: RuleAccumulator) {
        self.extend(other.rules.into_inner());
    }

    pub fn len(&self) -> usize {
        self.rules.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.lock().is_empty()
    }

    /// A copy of the rules appended so far.
    pub fn snapshot(&self) -> Vec<AtomicRule> {
        self.rules.lock().clone()
    }

    /// Removes and returns every rule.
    pub fn take(&self) -> Vec<AtomicRule> {
        std::mem::take(&mut *self.rules.lock())
    }

    pub fn clear(&self) {
        self.rules.lock().clear();
    }

    /// Builds a sheet from the current snapshot.
    pub fn to_sheet(&self) -> Sheet {
        Sheet::new(self.snapshot())
    }

    /// Serializes the accumulated rules so an incremental build can resume
    /// from them.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let manifest = Manifest {
            version: MANIFEST_VERSION,
            rules: self.snapshot(),
        };
        serde_json::to_string(&manifest)
    }

    /// Restores an accumulator written by [`to_json`](Self::to_json).
    ///
    /// Manifests from another format version are ignored and yield an empty
    /// accumulator, since their rules may not match what this version emits.
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        let manifest: Manifest = serde_json::from_str(source)?;
        if manifest.version != MANIFEST_VERSION {
            log::warn!(
                "discarding rule manifest version {} (expected {})",
                manifest.version,
                MANIFEST_VERSION
            );
            return Ok(Self::new());
        }
        Ok(Self {
            rules: Mutex::new(manifest.rules),
        })
    }
}

impl FromIterator<AtomicRule> for RuleAccumulator {
    fn from_iter<I: IntoIterator<Item = AtomicRule>>(iter: I) -> Self {
        Self {
            rules: Mutex::new(iter.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakecss::Priority;
    use std::sync::Arc;
    use std::thread;

    fn rule(class: &str) -> AtomicRule {
        AtomicRule::new(class, format!(".{}{{color:red}}", class), Priority(12))
    }

    #[test]
    fn concurrent_appends_are_not_lost() {
        let accumulator = Arc::new(RuleAccumulator::new());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let accumulator = Arc::clone(&accumulator);
                thread::spawn(move || {
                    for i in 0..100 {
                        accumulator.push(rule(&format!("w{}r{}", worker, i)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(accumulator.len(), 800);
        assert_eq!(accumulator.to_sheet().len(), 800);
    }

    #[test]
    fn merge_and_take() {
        let a: RuleAccumulator = [rule("a")].into_iter().collect();
        let b: RuleAccumulator = [rule("b"), rule("a")].into_iter().collect();
        a.merge(b);
        assert_eq!(a.len(), 3);
        assert_eq!(a.to_sheet().len(), 2);
        assert_eq!(a.take().len(), 3);
        assert!(a.is_empty());
    }

    #[test]
    fn manifest_round_trip() {
        let accumulator: RuleAccumulator =
            [rule("a"), rule("b").with_rtl(".b{color:blue}")].into_iter().collect();
        let json = accumulator.to_json().unwrap();
        let restored = RuleAccumulator::from_json(&json).unwrap();
        assert_eq!(restored.snapshot(), accumulator.snapshot());
    }

    #[test]
    fn foreign_manifest_versions_are_dropped() {
        let restored = RuleAccumulator::from_json(r#"{"version":0,"rules":[]}"#).unwrap();
        assert!(restored.is_empty());
        assert!(RuleAccumulator::from_json("not json").is_err());
    }
}
