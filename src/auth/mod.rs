pub mod page;
pub mod role;
pub mod session;

pub use page::Page;
pub use role::{Role, UnknownRole};
pub use session::{AuthError, Session, User};
