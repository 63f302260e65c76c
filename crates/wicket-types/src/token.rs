//! canonical token type for roles and actions.
//!
//! tokens are normalized on construction:
//! - Surrounding whitespace is trimmed
//! - Ascii letters are lowercased
//!
//! so `"INDEX"`, `" index "` and `"index"` all compare equal.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// the reserved role granting access to any user, authenticated or not.
pub const PUBLIC_ROLE: &str = "public";

/// the canonical action assumed when a caller does not supply one.
pub const DEFAULT_ACTION: &str = "index";

/// a canonical comparable token identifying a role or an action.
///
/// construction never fails; the input is normalized instead of validated.
/// an empty token is representable and simply never matches anything.
///
/// # Example
/// ```
/// use wicket_types::Token;
///
/// let action = Token::new(" INDEX ");
/// assert_eq!(action.as_str(), "index");
/// assert_eq!(action, Token::new("index"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    /// create a token, trimming whitespace and lowercasing ascii letters.
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_ascii_lowercase())
    }

    /// get the canonical form as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// consume the token and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// whether the token normalized to nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// the reserved [`PUBLIC_ROLE`] token.
    pub fn public() -> Self {
        Self(PUBLIC_ROLE.to_string())
    }

    /// whether this token is the reserved [`PUBLIC_ROLE`].
    pub fn is_public(&self) -> bool {
        self.0 == PUBLIC_ROLE
    }

    /// the canonical [`DEFAULT_ACTION`] token.
    pub fn index() -> Self {
        Self(DEFAULT_ACTION.to_string())
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Token {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

// serde: deserialize with normalization
impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Token::new(s))
    }
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}
