pub mod errors;
pub mod context;
pub mod schema;
pub mod render;
pub mod engine;
pub mod definition;
pub mod transforms; // plugin model for JSON definitions
mod compare;
mod snapshot;
mod extra;

pub use context::{Context, Lang, Phrasebook};
pub use definition::{FieldDefinition, SchemaDefinition};
pub use engine::{make_info, ChangeLog};
pub use errors::{LogError, Result, RECOVERED_MESSAGE};
pub use extra::Extra;
pub use schema::{FieldDescriptor, FieldMode, Record, Schema, SchemaBuilder};

/// Lower-level steps, for callers that assemble messages themselves.
pub use compare::compare;
pub use extra::describe_extras;
pub use snapshot::snapshot;
