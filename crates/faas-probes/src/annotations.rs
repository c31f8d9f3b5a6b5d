//! Per-function annotations that override probe defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Annotation keys the probe builder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKey {
    /// HTTP path the health check hits, used verbatim.
    HealthPath,
    /// Delay before the first check, as a duration string ("5s", "1m").
    InitialDelay,
}

impl AnnotationKey {
    /// Every recognized key.
    pub const ALL: [AnnotationKey; 2] = [AnnotationKey::HealthPath, AnnotationKey::InitialDelay];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationKey::HealthPath => "com.openfaas.health.http.path",
            AnnotationKey::InitialDelay => "com.openfaas.health.http.initialDelay",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl std::fmt::Display for AnnotationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered string-to-string annotation map attached to a function.
///
/// Unrecognized keys are kept so the map can be passed through to the
/// orchestrator untouched; the builder only reads [`AnnotationKey`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(BTreeMap<String, String>);

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a recognized key.
    pub fn get(&self, key: AnnotationKey) -> Option<&str> {
        self.0.get(key.as_str()).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Override HTTP path, if annotated.
    pub fn health_path(&self) -> Option<&str> {
        self.get(AnnotationKey::HealthPath)
    }

    /// Raw initial-delay duration string, if annotated.
    pub fn initial_delay(&self) -> Option<&str> {
        self.get(AnnotationKey::InitialDelay)
    }

    /// Recognized keys present in this map.
    pub fn recognized(&self) -> impl Iterator<Item = AnnotationKey> + '_ {
        AnnotationKey::ALL
            .into_iter()
            .filter(|k| self.0.contains_key(k.as_str()))
    }

    /// Merge `other` into `self`; keys in `other` win.
    pub fn extend(&mut self, other: Annotations) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for Annotations {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Annotations
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
