use std::collections::HashSet;

use kinship_core::NetworkError;

use crate::graph::SocialGraph;

impl SocialGraph {
    /// Number of users in `friend`'s list that also appear in `name`'s list.
    ///
    /// Returns zero when either user is unknown.
    pub fn mutual_friend_count(&self, name: &str, friend: &str) -> usize {
        match self.get(name) {
            Some(user) => self.shared_with(&friend_set(&user.friends), friend),
            None => 0,
        }
    }

    fn shared_with(&self, circle: &HashSet<&str>, friend: &str) -> usize {
        self.get(friend).map_or(0, |other| {
            other
                .friends
                .iter()
                .filter(|f| circle.contains(f.as_str()))
                .count()
        })
    }

    /// Reorder `name`'s friend list by descending number of mutual friends.
    ///
    /// Counts are taken against the list as it stands before sorting, and
    /// friends with equal counts keep their relative order. Membership never
    /// changes.
    pub fn sort_friends(&mut self, name: &str, secret: &str) -> Result<(), NetworkError> {
        let sorted: Vec<String> = {
            let user = self.authenticate(name, secret)?;
            let circle = friend_set(&user.friends);
            let mut ranked: Vec<(&str, usize)> = user
                .friends
                .iter()
                .map(|friend| (friend.as_str(), self.shared_with(&circle, friend)))
                .collect();

            ranked.sort_by(|a, b| b.1.cmp(&a.1));
            ranked.into_iter().map(|(f, _)| f.to_string()).collect()
        };

        self.user_mut(name)?.friends = sorted;
        tracing::debug!(user = %name, "friend list sorted by affinity");
        Ok(())
    }
}

fn friend_set(friends: &[String]) -> HashSet<&str> {
    friends.iter().map(String::as_str).collect()
}
