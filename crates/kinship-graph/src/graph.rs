use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use kinship_core::{NetworkError, RosterRecord, User};

/// Summary counts for a loaded social graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of registered users.
    pub users: usize,
    /// Number of undirected friendships.
    pub friendships: usize,
}

/// The social network: every registered user keyed by name.
///
/// The graph is built once from a roster and then owned by a single session.
/// Users are never added or removed afterwards; only friendships change, and
/// every change goes through methods that keep both sides of an edge in step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialGraph {
    users: HashMap<String, User>,
}

impl SocialGraph {
    /// Build a graph from roster records.
    ///
    /// Fails with [`NetworkError::DuplicateUser`] on the first repeated name,
    /// and with [`NetworkError::InvalidRoster`] if the friend lists do not
    /// describe a consistent undirected graph.
    pub fn from_records<I>(records: I) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = RosterRecord>,
    {
        let mut graph = Self::default();
        for record in records {
            graph.insert(record.into_user())?;
        }
        graph.check_invariants()?;
        Ok(graph)
    }

    pub(crate) fn insert(&mut self, user: User) -> Result<(), NetworkError> {
        if self.users.contains_key(&user.name) {
            return Err(NetworkError::DuplicateUser(user.name));
        }
        self.users.insert(user.name.clone(), user);
        Ok(())
    }

    /// Look up a user by name.
    pub fn get(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    pub(crate) fn user_mut(&mut self, name: &str) -> Result<&mut User, NetworkError> {
        self.users
            .get_mut(name)
            .ok_or_else(|| NetworkError::UserNotFound(name.to_string()))
    }

    /// Whether `name` is a registered user.
    pub fn contains(&self, name: &str) -> bool {
        self.users.contains_key(name)
    }

    /// All user names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.users.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the graph has no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Number of undirected friendships.
    pub fn friendship_count(&self) -> usize {
        self.users.values().map(|u| u.friends.len()).sum::<usize>() / 2
    }

    /// User and friendship counts.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            users: self.len(),
            friendships: self.friendship_count(),
        }
    }

    /// Check that every friend list is duplicate-free, never names its owner,
    /// only names registered users, and is mirrored by the friend's own list.
    ///
    /// Users are checked in name order so the reported violation is stable.
    pub fn check_invariants(&self) -> Result<(), NetworkError> {
        for name in self.names() {
            let Some(user) = self.users.get(name) else {
                continue;
            };
            let mut seen = HashSet::new();
            for friend in &user.friends {
                let invalid = |reason: String| NetworkError::InvalidRoster {
                    user: name.to_string(),
                    reason,
                };
                if friend == name {
                    return Err(invalid("lists itself as a friend".into()));
                }
                if !seen.insert(friend.as_str()) {
                    return Err(invalid(format!("lists {} more than once", friend)));
                }
                let Some(other) = self.users.get(friend) else {
                    return Err(invalid(format!("friend {} is not a registered user", friend)));
                };
                if !other.is_friend(name) {
                    return Err(invalid(format!("{} does not list {} back", friend, name)));
                }
            }
        }
        Ok(())
    }
}
