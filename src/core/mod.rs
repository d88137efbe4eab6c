pub mod field;
pub mod field_registry;
pub mod section;
pub mod validators;
pub mod value;

pub use field::{FieldDefinition, FieldKey, FieldKind, UnknownField};
pub use field_registry::FieldRegistry;
pub use section::{Section, UnknownSection};
pub use value::{FileRef, Value};
