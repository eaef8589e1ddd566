use serde::{Deserialize, Serialize};

use crate::credential::Credential;

/// A registered member of the social network.
///
/// The friend list is ordered; its order is the one shown to the user and
/// is rearranged by affinity ranking. Membership is only ever changed through
/// the graph so that both sides of a friendship stay in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, immutable name. Also the node key in the graph.
    pub name: String,
    /// Transformed secret.
    pub credential: Credential,
    /// Free-text profile.
    pub bio: String,
    /// Country of residence.
    pub country: String,
    /// Names of this user's friends.
    pub friends: Vec<String>,
}

impl User {
    /// Whether `name` is in this user's friend list.
    pub fn is_friend(&self, name: &str) -> bool {
        self.friends.iter().any(|f| f == name)
    }

    /// Position of `name` in this user's friend list.
    pub fn friend_index(&self, name: &str) -> Option<usize> {
        self.friends.iter().position(|f| f == name)
    }
}

/// One user as read from a roster, before the secret is transformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRecord {
    pub name: String,
    /// Clear-text secret.
    pub secret: String,
    pub bio: String,
    pub country: String,
    pub friends: Vec<String>,
}

impl RosterRecord {
    /// Create a record with an empty bio and no friends.
    pub fn new(
        name: impl Into<String>,
        secret: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            secret: secret.into(),
            bio: String::new(),
            country: country.into(),
            friends: Vec::new(),
        }
    }

    /// Set the bio.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Set the initial friend list.
    pub fn with_friends<I, S>(mut self, friends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.friends = friends.into_iter().map(Into::into).collect();
        self
    }

    /// Render as a roster line (`name,secret,bio,country|f1,f2`).
    pub fn to_line(&self) -> String {
        let mut line = format!("{},{}", self.name, self.secret);
        if !self.bio.is_empty() {
            line.push(',');
            line.push_str(&self.bio);
        }
        line.push(',');
        line.push_str(&self.country);
        line.push('|');
        line.push_str(&self.friends.join(","));
        line
    }

    /// Convert into a [`User`], transforming the secret.
    pub fn into_user(self) -> User {
        User {
            credential: Credential::from_secret(&self.secret),
            name: self.name,
            bio: self.bio,
            country: self.country,
            friends: self.friends,
        }
    }
}
