use kinship_core::NetworkError;

use crate::graph::SocialGraph;

impl SocialGraph {
    /// Make `name` and `friend` friends.
    ///
    /// Checks run in this order: the caller must authenticate, `friend` must
    /// be a registered user, befriending yourself succeeds without doing
    /// anything, and the friendship must not already exist. On success each
    /// name is appended to the other's friend list.
    pub fn add_friend(
        &mut self,
        name: &str,
        secret: &str,
        friend: &str,
    ) -> Result<(), NetworkError> {
        let user = self.authenticate(name, secret)?;
        if !self.contains(friend) {
            return Err(NetworkError::UserNotFound(friend.to_string()));
        }
        if friend == name {
            tracing::debug!(user = %name, "ignoring self-friendship");
            return Ok(());
        }
        if user.is_friend(friend) {
            return Err(NetworkError::FriendAlreadyExists {
                user: name.to_string(),
                friend: friend.to_string(),
            });
        }

        // Both users exist, so neither lookup below can fail.
        self.user_mut(name)?.friends.push(friend.to_string());
        self.user_mut(friend)?.friends.push(name.to_string());

        tracing::debug!(user = %name, friend = %friend, "friendship added");
        Ok(())
    }

    /// End the friendship between `name` and `friend`, removing each name from
    /// the other's friend list. The remaining friends keep their order.
    pub fn remove_friend(
        &mut self,
        name: &str,
        secret: &str,
        friend: &str,
    ) -> Result<(), NetworkError> {
        let user = self.authenticate(name, secret)?;
        let Some(index) = user.friend_index(friend) else {
            return Err(NetworkError::FriendNotFound {
                user: name.to_string(),
                friend: friend.to_string(),
            });
        };
        let reverse = self
            .get(friend)
            .ok_or_else(|| NetworkError::UserNotFound(friend.to_string()))?
            .friend_index(name);

        self.user_mut(name)?.friends.remove(index);
        if let Some(reverse) = reverse {
            self.user_mut(friend)?.friends.remove(reverse);
        }

        tracing::debug!(user = %name, friend = %friend, "friendship removed");
        Ok(())
    }
}
