//! English display strings used by prompts and choice lists.

use crate::models::{CipherType, FieldKind, MatchType};

pub const CANCEL: &str = "Cancel";
pub const DEFAULT: &str = "Default";
pub const SELECTED_MARK: &str = "✓ ";

pub const SELECT_FIELD_TYPE: &str = "Select the type of field you want to create.";
pub const CUSTOM_FIELD_NAME: &str = "Custom Field Name";
pub const URI_MATCH_DETECTION: &str = "URI Match Detection";
pub const SELECT_CIPHER_TYPE: &str = "Select the type of item to add.";

pub const VIEW: &str = "View";
pub const EDIT: &str = "Edit";
pub const COPY_PASSWORD: &str = "Copy Password";
pub const COPY_USERNAME: &str = "Copy Username";
pub const GO_TO_WEBSITE: &str = "Go To Website";
pub const COPY_NUMBER: &str = "Copy Number";
pub const COPY_SECURITY_CODE: &str = "Copy Security Code";

/// Label shown next to the URI at the given 1-based position.
pub fn uri_position(position: usize) -> String {
    format!("URI {position}")
}

/// Toast text after a value was copied.
pub fn value_copied(what: &str) -> String {
    format!("{what} copied")
}

pub fn field_kind(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "Text",
        FieldKind::Hidden => "Hidden",
        FieldKind::Boolean => "Boolean",
    }
}

pub fn match_type(match_type: MatchType) -> &'static str {
    match match_type {
        MatchType::Domain => "Base domain",
        MatchType::Host => "Host",
        MatchType::StartsWith => "Starts with",
        MatchType::RegularExpression => "Regular expression",
        MatchType::Exact => "Exact",
        MatchType::Never => "Never",
    }
}

pub fn cipher_type(cipher_type: CipherType) -> &'static str {
    match cipher_type {
        CipherType::Login => "Login",
        CipherType::Card => "Card",
        CipherType::Identity => "Identity",
        CipherType::SecureNote => "Secure Note",
    }
}
