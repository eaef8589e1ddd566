use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed per-character shift applied by [`transform_secret`].
pub const CREDENTIAL_SHIFT: u32 = 11;

/// Highest printable ASCII code point (`~`).
const PRINTABLE_MAX: u32 = 126;

/// Width of the wrap applied when a shifted code point leaves the printable range.
const PRINTABLE_SPAN: u32 = 94;

/// Transform a clear-text secret into its stored form.
///
/// Every ASCII character is shifted forward by [`CREDENTIAL_SHIFT`]; a result
/// past `~` wraps back into the printable range. Characters outside ASCII are
/// left as they are. The transform is a deterministic substitution used only
/// for equality checks. It is not a cryptographic hash and offers no secrecy.
pub fn transform_secret(secret: &str) -> String {
    secret.chars().map(shift_char).collect()
}

fn shift_char(c: char) -> char {
    let code = c as u32;
    if code > PRINTABLE_MAX {
        return c;
    }

    let mut shifted = code + CREDENTIAL_SHIFT;
    if shifted > PRINTABLE_MAX {
        shifted -= PRINTABLE_SPAN;
    }
    // Always ASCII here, so the conversion cannot fail.
    char::from_u32(shifted).unwrap_or(c)
}

/// A secret in its transformed, stored form.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Build the stored credential for a clear-text secret.
    pub fn from_secret(secret: &str) -> Self {
        Self(transform_secret(secret))
    }

    /// Whether `secret` transforms to this credential.
    pub fn matches(&self, secret: &str) -> bool {
        transform_secret(secret) == self.0
    }

    /// The transformed value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}
