pub mod auth;
pub mod config;
pub mod core;
pub mod logging;
pub mod state;
pub mod store;
pub mod submit;
pub mod ui;

pub use crate::auth::{Page, Role, Session};
pub use crate::core::field;
pub use crate::core::field_registry;
pub use crate::core::section;
pub use crate::core::validators;
pub use crate::core::value;
pub use crate::core::{FieldDefinition, FieldKey, FieldKind, FieldRegistry, Section, Value};

pub use crate::state::draft;
pub use crate::state::record;
pub use crate::state::validation;
pub use crate::state::wizard;
pub use crate::state::{Draft, FormRecord, ValidationResult, Wizard};

pub use crate::store::{DraftStore, PersistenceError, RecordId, RecordStore, SubmittedRecord};
pub use crate::submit::{Receipt, SubmissionGateway, SubmitError};
