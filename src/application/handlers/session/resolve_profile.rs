//! ResolveProfileHandler - Query handler for the signed-in shopper profile.

use std::sync::Arc;

use crate::domain::foundation::PrincipalId;
use crate::ports::{Profile, ProfileReader};

/// Query for the profile behind an authenticated principal.
#[derive(Debug, Clone)]
pub struct ResolveProfileQuery {
    pub principal_id: PrincipalId,
}

/// Handler resolving principals to client-facing profiles.
pub struct ResolveProfileHandler {
    profiles: Arc<dyn ProfileReader>,
}

impl ResolveProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileReader>) -> Self {
        Self { profiles }
    }

    /// Resolves the profile for a principal.
    ///
    /// A principal without a stored profile resolves to the `Unknown`
    /// placeholder. A store failure resolves to `None` after logging, so
    /// clients see a signed-out shape instead of an error.
    pub async fn handle(&self, query: ResolveProfileQuery) -> Option<Profile> {
        match self.profiles.fetch(&query.principal_id).await {
            Ok(Some(profile)) => Some(profile),
            Ok(None) => Some(Profile::unknown(&query.principal_id)),
            Err(e) => {
                tracing::error!(error = %e, "Profile lookup failed");
                None
            }
        }
    }
}
