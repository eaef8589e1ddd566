//! Kinship Graph Layer
//!
//! The in-memory social graph and the operations a session runs against it:
//! - Credential verification before every action
//! - Friendship management with symmetric edge updates
//! - Affinity ranking of a user's friend list by mutual friends
//! - Breadth-first discovery of friends at an exact degree
//! - Country distribution of a user's direct friends
//! - Roster loading from the line-oriented flat file format
//! - [`Session`], a logged-in handle over an exclusively borrowed graph

pub mod auth;
pub mod countries;
pub mod friendship;
pub mod graph;
pub mod ranking;
pub mod roster;
pub mod session;
pub mod traversal;

pub use graph::{GraphStats, SocialGraph};
pub use roster::{load_roster, parse_roster};
pub use session::Session;

pub use kinship_core::{Credential, NetworkError, RosterRecord, User};
