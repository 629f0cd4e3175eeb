//! Project state (UI vocabulary), the explicit session handle around it, and
//! the model-vocabulary context derived from it.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use super::FieldValue;

/// Field name (UI vocabulary) → value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectState {
    fields: BTreeMap<String, FieldValue>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.remove(field)
    }

    /// Present and non-empty.
    pub fn is_filled(&self, field: &str) -> bool {
        self.fields.get(field).is_some_and(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for ProjectState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut state = Self::new();
        for (k, v) in iter {
            state.set(k, v);
        }
        state
    }
}

/// Snapshot of the project in model vocabulary, non-empty values only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelContext {
    fields: BTreeMap<String, FieldValue>,
}

impl ModelContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.get(field).is_some_and(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for ModelContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Self::new();
        for (k, v) in iter {
            context.insert(k, v);
        }
        context
    }
}

/// Shared handle over one project's state.
///
/// Cloning the session clones the handle, not the state. The lock is only
/// taken inside these methods and is never held across an await point.
#[derive(Debug, Clone, Default)]
pub struct ProjectSession {
    state: Arc<RwLock<ProjectState>>,
}

impl ProjectSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: ProjectState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> ProjectState {
        self.read().clone()
    }

    pub fn get(&self, field: &str) -> Option<FieldValue> {
        self.read().get(field).cloned()
    }

    pub fn set(&self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.write().set(field, value);
    }

    pub fn is_filled(&self, field: &str) -> bool {
        self.read().is_filled(field)
    }

    /// Apply several writes under one lock acquisition.
    pub fn update<R>(&self, f: impl FnOnce(&mut ProjectState) -> R) -> R {
        let mut guard = self.write();
        f(&mut *guard)
    }

    // A panic while holding the lock cannot leave a half-written map behind
    // (every write is a single insert), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, ProjectState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ProjectState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
