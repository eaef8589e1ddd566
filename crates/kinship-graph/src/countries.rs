use std::collections::BTreeMap;

use kinship_core::NetworkError;

use crate::graph::SocialGraph;

impl SocialGraph {
    /// Count `name`'s direct friends per country of residence.
    ///
    /// Only countries with at least one friend appear in the result.
    pub fn friend_countries_by_count(
        &self,
        name: &str,
        secret: &str,
    ) -> Result<BTreeMap<String, usize>, NetworkError> {
        let user = self.authenticate(name, secret)?;
        let mut counts = BTreeMap::new();
        for friend in user.friends.iter().filter_map(|f| self.get(f)) {
            *counts.entry(friend.country.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
