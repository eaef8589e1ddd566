use kinship_core::{NetworkError, User};

use crate::graph::SocialGraph;

impl SocialGraph {
    /// Whether `secret` matches the stored credential of `name`.
    ///
    /// Unknown users never verify.
    pub fn verify(&self, name: &str, secret: &str) -> bool {
        self.get(name)
            .is_some_and(|user| user.credential.matches(secret))
    }

    /// Verify the caller and return their record.
    pub(crate) fn authenticate(&self, name: &str, secret: &str) -> Result<&User, NetworkError> {
        match self.get(name) {
            Some(user) if user.credential.matches(secret) => Ok(user),
            _ => {
                tracing::warn!(user = %name, "authentication failed");
                Err(NetworkError::AuthenticationFailed(name.to_string()))
            }
        }
    }
}
