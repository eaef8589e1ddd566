//! Shared fixtures for the Kinship integration tests.

use kinship_core::RosterRecord;
use kinship_graph::{parse_roster, SocialGraph};

/// Secret given to every fixture user: `"<name>-pw"`.
pub fn secret_for(name: &str) -> String {
    format!("{}-pw", name)
}

/// Render records as roster text, one line each.
pub fn roster_text(records: &[RosterRecord]) -> String {
    records.iter().map(|r| r.to_line() + "\n").collect()
}

/// Users `u0..u{n-1}` with no friendships, spread over three countries.
pub fn isolated_users(n: usize) -> SocialGraph {
    let countries = ["US", "FR", "JP"];
    let records: Vec<RosterRecord> = (0..n)
        .map(|i| {
            let name = format!("u{}", i);
            let secret = secret_for(&name);
            RosterRecord::new(name, secret, countries[i % countries.len()])
        })
        .collect();
    SocialGraph::from_records(records).expect("isolated users form a valid graph")
}

/// A small neighbourhood used across scenarios:
///
/// ```text
/// alice - bob - carol - dave        erin
///   \___________/
/// ```
pub fn neighbourhood() -> SocialGraph {
    let records = [
        RosterRecord::new("alice", secret_for("alice"), "US")
            .with_bio("Trail runner, amateur baker")
            .with_friends(["bob", "carol"]),
        RosterRecord::new("bob", secret_for("bob"), "US").with_friends(["alice", "carol"]),
        RosterRecord::new("carol", secret_for("carol"), "FR")
            .with_friends(["bob", "alice", "dave"]),
        RosterRecord::new("dave", secret_for("dave"), "DE").with_friends(["carol"]),
        RosterRecord::new("erin", secret_for("erin"), "CA"),
    ];
    parse_roster(&roster_text(&records)).expect("neighbourhood roster is valid")
}
