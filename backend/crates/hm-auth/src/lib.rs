pub mod digest;
pub mod error;
pub mod session;
pub mod session_registry;


pub use digest::digest;
pub use error::{AuthError, Result};
pub use session::{Session, SessionId};
pub use session_registry::{DEFAULT_SESSION_TTL, SessionRegistry};
