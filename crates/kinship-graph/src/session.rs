use std::collections::BTreeMap;

use kinship_core::{NetworkError, User};

use crate::graph::SocialGraph;

/// A logged-in user acting on an exclusively borrowed graph.
///
/// Login verifies the credential once, but every action still goes through
/// the graph's own verification, so a session cannot act on anything its
/// credentials would not allow.
pub struct Session<'g> {
    graph: &'g mut SocialGraph,
    name: String,
    secret: String,
}

impl<'g> Session<'g> {
    /// Log in as `name`.
    pub fn login(
        graph: &'g mut SocialGraph,
        name: &str,
        secret: &str,
    ) -> Result<Self, NetworkError> {
        graph.authenticate(name, secret)?;
        tracing::info!(user = %name, "logged in");
        Ok(Self {
            graph,
            name: name.to_string(),
            secret: secret.to_string(),
        })
    }

    /// The logged-in user's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The logged-in user's record (bio, country, friends).
    pub fn profile(&self) -> Result<&User, NetworkError> {
        self.graph.authenticate(&self.name, &self.secret)
    }

    /// The logged-in user's friend list in its current order.
    pub fn friends(&self) -> Result<&[String], NetworkError> {
        Ok(&self.profile()?.friends)
    }

    pub fn add_friend(&mut self, friend: &str) -> Result<(), NetworkError> {
        self.graph.add_friend(&self.name, &self.secret, friend)
    }

    pub fn remove_friend(&mut self, friend: &str) -> Result<(), NetworkError> {
        self.graph.remove_friend(&self.name, &self.secret, friend)
    }

    pub fn sort_friends(&mut self) -> Result<(), NetworkError> {
        self.graph.sort_friends(&self.name, &self.secret)
    }

    pub fn friends_at_level(&self, degree: i64) -> Result<Vec<String>, NetworkError> {
        self.graph.friends_at_level(&self.name, &self.secret, degree)
    }

    pub fn friend_countries_by_count(&self) -> Result<BTreeMap<String, usize>, NetworkError> {
        self.graph.friend_countries_by_count(&self.name, &self.secret)
    }

    /// End the session and release the graph.
    pub fn logout(self) {
        tracing::info!(user = %self.name, "logged out");
    }
}
