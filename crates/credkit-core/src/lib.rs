//! Core editing model for credkit.
//!
//! This crate holds the editable custom-field and login-URI lists of a
//! credential, their mapping into the encrypted record on save, and the
//! startup update gate. Rendering, storage and transport are reached
//! through the traits in [`ports`].

pub mod actions;
pub mod fields;
pub mod host;
pub mod labels;
pub mod models;
pub mod ports;
pub mod save;
pub mod settings;
pub mod sync;
pub mod update;
pub mod uris;

pub use fields::{FieldEntry, FieldListEditor, FieldValue};
pub use models::{
    CipherType, CredentialRecord, EncryptedField, EncryptedUri, EntryId, FieldKind, MatchType,
};
pub use save::{apply_to_record, map_fields_for_save, map_uris_for_save};
pub use update::{resolve_update_gate, UpdateGate, UpdateOutcome};
pub use uris::{UriEntry, UriListEditor};
