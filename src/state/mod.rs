pub mod draft;
pub mod record;
pub mod validation;
pub mod wizard;

pub use draft::Draft;
pub use record::FormRecord;
pub use validation::{ValidationResult, validate_all, validate_section};
pub use wizard::{JumpRejected, Navigation, Progress, SectionStatus, Wizard, WizardError};
