//! Field Registry: static declaration of every known field, its shape, its
//! relevance list and the UI ↔ model vocabulary mapping.
//!
//! Lookups never fail: unknown names resolve to themselves and to empty
//! relevance lists. Consistency is checked once, at startup, by [`FieldRegistry::validate`].

pub mod fields;
pub mod schema;

use std::collections::{HashMap, HashSet};

use scribe_core::errors::RegistryError;

pub use schema::{ColumnKind, ColumnSpec, Formula, LevelScale, TableSchema};

/// Shape of a field's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Scalar,
    Table(TableSchema),
}

/// Static declaration of one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// UI vocabulary.
    pub name: &'static str,
    /// Vocabulary the model was trained on.
    pub model_name: &'static str,
    pub kind: FieldKind,
    /// Whether the model can generate this field.
    pub generatable: bool,
    /// Model-vocabulary names of informative context, most relevant first.
    pub relevant_fields: &'static [&'static str],
}

impl FieldSpec {
    pub fn is_table(&self) -> bool {
        matches!(self.kind, FieldKind::Table(_))
    }
}

/// Read-only registry consumed by every other component.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    specs: Vec<FieldSpec>,
    by_model_name: HashMap<&'static str, usize>,
    ui_to_model: HashMap<&'static str, &'static str>,
    model_to_ui: HashMap<&'static str, &'static str>,
    base_fields: &'static [&'static str],
    generation_order: &'static [&'static str],
}

impl FieldRegistry {
    /// Registry matching the fine-tuned model.
    pub fn standard() -> Self {
        Self::new(fields::FIELDS, fields::BASE_FIELDS, fields::GENERATION_ORDER)
    }

    pub fn new(
        specs: &[FieldSpec],
        base_fields: &'static [&'static str],
        generation_order: &'static [&'static str],
    ) -> Self {
        let mut by_model_name = HashMap::with_capacity(specs.len());
        let mut ui_to_model = HashMap::new();
        let mut model_to_ui = HashMap::new();
        for (index, spec) in specs.iter().enumerate() {
            by_model_name.entry(spec.model_name).or_insert(index);
            if spec.name != spec.model_name {
                ui_to_model.insert(spec.name, spec.model_name);
                model_to_ui.insert(spec.model_name, spec.name);
            }
        }
        Self {
            specs: specs.to_vec(),
            by_model_name,
            ui_to_model,
            model_to_ui,
            base_fields,
            generation_order,
        }
    }

    /// Always-included fields, model vocabulary, registry order.
    pub fn base_fields(&self) -> &[&'static str] {
        self.base_fields
    }

    /// Canonical generation order, model vocabulary.
    pub fn generation_order(&self) -> &[&'static str] {
        self.generation_order
    }

    /// UI → model vocabulary. Identity when no rename exists.
    pub fn model_name_of<'a>(&'a self, name: &'a str) -> &'a str {
        self.ui_to_model.get(name).copied().unwrap_or(name)
    }

    /// Model → UI vocabulary. Identity when no rename exists.
    pub fn ui_name_of<'a>(&'a self, model_name: &'a str) -> &'a str {
        self.model_to_ui.get(model_name).copied().unwrap_or(model_name)
    }

    /// Spec for a field given in either vocabulary.
    pub fn spec(&self, name: &str) -> Option<&FieldSpec> {
        self.by_model_name
            .get(self.model_name_of(name))
            .map(|&index| &self.specs[index])
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.spec(name).is_some()
    }

    /// Ranked relevance list; empty for unknown fields.
    pub fn relevant_fields_for(&self, name: &str) -> &[&'static str] {
        self.spec(name).map(|s| s.relevant_fields).unwrap_or_default()
    }

    pub fn is_table_field(&self, name: &str) -> bool {
        self.spec(name).is_some_and(FieldSpec::is_table)
    }

    pub fn table_schema(&self, name: &str) -> Option<&TableSchema> {
        match &self.spec(name)?.kind {
            FieldKind::Table(schema) => Some(schema),
            FieldKind::Scalar => None,
        }
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    /// Check relevance lists and renames for consistency.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut claimed: HashMap<&str, &str> = HashMap::new();
        let mut ui_names: HashSet<&str> = HashSet::new();
        for spec in &self.specs {
            if let Some(first) = claimed.insert(spec.model_name, spec.name) {
                return Err(RegistryError::RenameCollision {
                    model_name: spec.model_name.to_string(),
                    first: first.to_string(),
                    second: spec.name.to_string(),
                });
            }
            ui_names.insert(spec.name);
        }

        for spec in &self.specs {
            for &relevant in spec.relevant_fields {
                if relevant == spec.model_name || relevant == spec.name {
                    return Err(RegistryError::SelfReference {
                        field: spec.model_name.to_string(),
                    });
                }
                if !self.by_model_name.contains_key(relevant) {
                    return Err(RegistryError::UnknownRelevantField {
                        field: spec.model_name.to_string(),
                        relevant: relevant.to_string(),
                    });
                }
            }
        }

        for &name in self.base_fields.iter().chain(self.generation_order) {
            if !self.by_model_name.contains_key(name) {
                return Err(RegistryError::UnknownRelevantField {
                    field: "<registry>".to_string(),
                    relevant: name.to_string(),
                });
            }
        }

        tracing::debug!(fields = self.specs.len(), "field registry validated");
        Ok(())
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
