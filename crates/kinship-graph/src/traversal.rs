use std::collections::{HashMap, VecDeque};

use kinship_core::NetworkError;

use crate::graph::SocialGraph;

impl SocialGraph {
    /// Users whose shortest distance from `name` is exactly `degree` hops.
    ///
    /// A degree of zero yields just `name`. A negative degree yields an empty
    /// list. Otherwise the graph is walked breadth-first from `name`, each
    /// user is visited once at the distance where it is first discovered, and
    /// the matches are returned in discovery order.
    pub fn friends_at_level(
        &self,
        name: &str,
        secret: &str,
        degree: i64,
    ) -> Result<Vec<String>, NetworkError> {
        let origin = self.authenticate(name, secret)?;
        let target = match usize::try_from(degree) {
            Ok(0) => return Ok(vec![origin.name.clone()]),
            Ok(target) => target,
            Err(_) => return Ok(Vec::new()),
        };

        let mut distances: HashMap<&str, usize> = HashMap::new();
        let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
        let mut found = Vec::new();

        distances.insert(origin.name.as_str(), 0);
        queue.push_back((origin.name.as_str(), 0));

        while let Some((current, level)) = queue.pop_front() {
            if level == target {
                found.push(current.to_string());
                continue;
            }
            let Some(user) = self.get(current) else {
                continue;
            };
            for friend in &user.friends {
                if !distances.contains_key(friend.as_str()) {
                    distances.insert(friend.as_str(), level + 1);
                    queue.push_back((friend.as_str(), level + 1));
                }
            }
        }

        tracing::debug!(user = %name, degree, matches = found.len(), "level traversal complete");
        Ok(found)
    }
}
