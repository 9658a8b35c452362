// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A username is empty or does not match the allowed format.
    InvalidUsername(String),
    /// A column name is not part of the projectable field allowlist.
    UnknownUserField(String),
    /// A permission code does not name a known permission level.
    InvalidPermissions(i32),
    /// An award type code is not recognized.
    InvalidAwardType(i32),
    /// An award mode code is neither softcore nor hardcore.
    InvalidUnlockMode(i32),
    /// A ticket report state code is not recognized.
    InvalidTicketState(i32),
    /// A set claim status code is not recognized.
    InvalidClaimStatus(i32),
    /// An achievement flag code is not recognized.
    InvalidAchievementFlag(i32),
    /// A named value could not be parsed.
    UnknownName {
        /// What kind of value was being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUsername(msg) => write!(f, "Invalid username: {msg}"),
            Self::UnknownUserField(name) => {
                write!(f, "Field '{name}' is not a projectable user field")
            }
            Self::InvalidPermissions(code) => write!(f, "Invalid permission level: {code}"),
            Self::InvalidAwardType(code) => write!(f, "Invalid award type: {code}"),
            Self::InvalidUnlockMode(code) => {
                write!(f, "Invalid unlock mode: {code}. Must be 0 or 1")
            }
            Self::InvalidTicketState(code) => write!(f, "Invalid ticket state: {code}"),
            Self::InvalidClaimStatus(code) => write!(f, "Invalid claim status: {code}"),
            Self::InvalidAchievementFlag(code) => write!(f, "Invalid achievement flag: {code}"),
            Self::UnknownName { kind, value } => write!(f, "Unknown {kind}: '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
