//! # scribe-context
//!
//! Decides, for any target field, which prior project data the model sees:
//! the field registry, the collector that turns project state into model
//! vocabulary, and the strategy-driven builder that assembles the exact
//! context shape the model was fine-tuned on.

pub mod builder;
pub mod collector;
pub mod prompt;
pub mod registry;

pub use builder::{
    BuiltContext, ContextBuilder, ContextFragment, ExplorationSelector, FragmentSource,
    OrderedSelector, RandomSelector,
};
pub use collector::collect;
pub use prompt::training_prompt;
pub use registry::{ColumnKind, ColumnSpec, FieldKind, FieldRegistry, FieldSpec, Formula, LevelScale, TableSchema};
