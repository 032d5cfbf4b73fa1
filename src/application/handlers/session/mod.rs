//! Session command and query handlers.

mod create_session;
mod resolve_profile;

pub use create_session::{CreateSessionCommand, CreateSessionHandler, CreateSessionResult};
pub use resolve_profile::{ResolveProfileHandler, ResolveProfileQuery};
