//! In-memory implementation of ProfileReader for development and testing.
//!
//! Profile storage is an external collaborator of this service; this
//! directory stands in for it. Replace with a real implementation backed
//! by the profile store for production.
//!
//! # Usage
//!
//! ```ignore
//! use cardvault::adapters::profile::InMemoryProfileDirectory;
//!
//! let directory = InMemoryProfileDirectory::new()
//!     .with_profile("user-1", "ada");
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::PrincipalId;
use crate::ports::{Profile, ProfileError, ProfileReader};

/// In-memory profile directory.
///
/// Lookups hit a fixed map configured at construction time. Missing
/// entries are `Ok(None)`, matching the port contract.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileDirectory {
    /// Profiles by principal id.
    profiles: HashMap<String, Profile>,

    /// Whether to simulate an unreachable store for testing.
    unavailable: bool,
}

impl InMemoryProfileDirectory {
    /// Create an empty directory; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile, keyed by its principal id.
    pub fn with_profile(mut self, id: impl Into<String>, username: impl Into<String>) -> Self {
        let id = id.into();
        self.profiles.insert(
            id.clone(),
            Profile {
                id,
                username: username.into(),
            },
        );
        self
    }

    /// Create a directory whose lookups all fail (for testing degraded mode).
    pub fn unavailable() -> Self {
        Self {
            profiles: HashMap::new(),
            unavailable: true,
        }
    }
}

#[async_trait]
impl ProfileReader for InMemoryProfileDirectory {
    async fn fetch(&self, principal_id: &PrincipalId) -> Result<Option<Profile>, ProfileError> {
        if self.unavailable {
            return Err(ProfileError::Unavailable(
                "profile directory offline".to_string(),
            ));
        }

        Ok(self.profiles.get(principal_id.as_str()).cloned())
    }
}
