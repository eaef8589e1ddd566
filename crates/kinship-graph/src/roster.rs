//! Roster loading.
//!
//! A roster holds one user per line:
//!
//! ```text
//! name,secret,free text bio, commas allowed,country|friend1,friend2
//! ```
//!
//! The bio is everything between the secret and the last comma-separated
//! field. Blank lines are ignored, and an empty friend list after `|` is
//! allowed.

use std::path::Path;

use kinship_core::{NetworkError, RosterRecord};

use crate::graph::SocialGraph;

/// Read and parse a roster file.
pub fn load_roster(path: impl AsRef<Path>) -> Result<SocialGraph, NetworkError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let graph = parse_roster(&contents)?;
    tracing::info!(
        path = %path.display(),
        users = graph.len(),
        friendships = graph.friendship_count(),
        "roster loaded"
    );
    Ok(graph)
}

/// Parse roster text into a validated social graph.
///
/// Lines are processed in order and the first problem wins: a malformed
/// line, a repeated user name, or (once every line is read) friend lists
/// that do not form a consistent undirected graph.
pub fn parse_roster(input: &str) -> Result<SocialGraph, NetworkError> {
    let mut graph = SocialGraph::default();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_record(index + 1, line)?;
        graph.insert(record.into_user())?;
    }
    graph.check_invariants()?;
    Ok(graph)
}

/// Parse a single roster line. `line_no` is 1-based and only used in errors.
pub fn parse_record(line_no: usize, line: &str) -> Result<RosterRecord, NetworkError> {
    let malformed = |reason: &str| NetworkError::MalformedRecord {
        line: line_no,
        reason: reason.to_string(),
    };

    let (profile, friends) = line
        .trim()
        .split_once('|')
        .ok_or_else(|| malformed("missing '|' before the friend list"))?;
    if friends.contains('|') {
        return Err(malformed("more than one '|' separator"));
    }

    let fields: Vec<&str> = profile.split(',').collect();
    let [name, secret, middle @ .., country] = fields.as_slice() else {
        return Err(malformed("expected at least name, secret and country"));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed("empty user name"));
    }

    let friends = friends
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(String::from)
        .collect();

    Ok(RosterRecord {
        name: name.to_string(),
        secret: secret.trim().to_string(),
        bio: middle.join(",").trim().to_string(),
        country: country.trim().to_string(),
        friends,
    })
}
