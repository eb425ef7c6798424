//! Shared data types for the application.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an entry inside an editor.
///
/// Ids are handed out in increasing order and never reused by the same
/// editor, so they stay valid while other entries are added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub(crate) u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a custom field. Fixed for the lifetime of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Hidden,
    Boolean,
}

impl FieldKind {
    /// All kinds in the order they are offered to the user.
    pub const ALL: [FieldKind; 3] = [FieldKind::Text, FieldKind::Hidden, FieldKind::Boolean];

    /// Decode the numeric kind used by stored records.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(FieldKind::Text),
            1 => Some(FieldKind::Hidden),
            2 => Some(FieldKind::Boolean),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            FieldKind::Text => 0,
            FieldKind::Hidden => 1,
            FieldKind::Boolean => 2,
        }
    }
}

/// How a stored login URI is compared against the URI being autofilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    Domain,
    Host,
    StartsWith,
    RegularExpression,
    Exact,
    Never,
}

impl MatchType {
    /// Display order of the match-type options (after the "Default" sentinel).
    pub const ALL: [MatchType; 6] = [
        MatchType::Domain,
        MatchType::Host,
        MatchType::StartsWith,
        MatchType::RegularExpression,
        MatchType::Exact,
        MatchType::Never,
    ];

    /// Decode the numeric match type used by stored records.
    ///
    /// The stored numbering differs from the display order.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MatchType::Domain),
            1 => Some(MatchType::Host),
            2 => Some(MatchType::StartsWith),
            3 => Some(MatchType::Exact),
            4 => Some(MatchType::RegularExpression),
            5 => Some(MatchType::Never),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            MatchType::Domain => 0,
            MatchType::Host => 1,
            MatchType::StartsWith => 2,
            MatchType::Exact => 3,
            MatchType::RegularExpression => 4,
            MatchType::Never => 5,
        }
    }
}

/// Top-level credential type, used when adding a new credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CipherType {
    Login,
    Card,
    Identity,
    SecureNote,
}

/// A custom field as written into the credential record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedField {
    pub name: Option<String>,
    pub value: Option<String>,
    pub kind: FieldKind,
}

/// A login URI as written into the credential record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedUri {
    pub uri: String,
    pub match_type: Option<MatchType>,
}

/// The parts of a stored credential this crate reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Owning organization; used as the encryption scope.
    pub organization_id: Option<String>,
    pub fields: Option<Vec<EncryptedField>>,
    pub login_uris: Option<Vec<EncryptedUri>>,
}

impl CredentialRecord {
    /// Create an empty record owned by the given organization.
    pub fn new(organization_id: Option<String>) -> Self {
        Self {
            organization_id,
            ..Self::default()
        }
    }
}
