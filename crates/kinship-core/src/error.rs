/// Faults returned by social network operations and the roster loader.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("found duplicate user: {0}")]
    DuplicateUser(String),

    #[error("authentication failed for user {0}")]
    AuthenticationFailed(String),

    #[error("user does not exist in the social network: {0}")]
    UserNotFound(String),

    #[error("friendship already exists: {user} and {friend}")]
    FriendAlreadyExists { user: String, friend: String },

    #[error("friendship does not exist: {user} and {friend}")]
    FriendNotFound { user: String, friend: String },

    #[error("malformed roster record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("invalid roster entry for {user}: {reason}")]
    InvalidRoster { user: String, reason: String },

    #[error("roster I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NetworkError {
    /// Whether this error prevents a social network from being built at all,
    /// as opposed to rejecting a single action within a session.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DuplicateUser(_)
                | Self::MalformedRecord { .. }
                | Self::InvalidRoster { .. }
                | Self::Io(_)
        )
    }
}
