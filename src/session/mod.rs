/// Process-wide session signals (logout broadcast)
pub mod events;
/// Persistent session token storage
pub mod store;
/// Current-user state tied to the session lifecycle
pub mod user;

pub use events::*;
pub use store::*;
pub use user::*;
