//! Interfaces to the collaborators this crate does not own.
//!
//! Rendering, storage and transport live elsewhere; the editors and the
//! update gate only talk to them through these traits.

use crate::labels;
use anyhow::Result;
use async_trait::async_trait;

/// Opaque keyed transform applied to every value written into a record.
pub trait EncryptionPort {
    /// Encrypt `plaintext` for the given scope (organization id, or the
    /// user's own key when `None`).
    fn encrypt(&self, plaintext: &str, scope: Option<&str>) -> String;
}

/// User interaction needed by the interactive editing paths.
pub trait Prompter {
    /// Ask for a line of text. `None` means the prompt was cancelled.
    fn prompt_for_text(&self, title: &str, initial: Option<&str>) -> Option<String>;

    /// Offer a list of options. Returns the chosen option text, the cancel
    /// label, or `None` when the sheet was dismissed.
    fn present_choice(&self, title: &str, cancel_label: &str, options: &[String])
        -> Option<String>;
}

/// Key/value settings persisted across runs.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Local storage schema owner.
pub trait SchemaStore {
    /// Create any missing tables. Must be safe to call repeatedly.
    fn initialize(&self) -> Result<()>;
}

/// Fire-and-forget request for a full remote synchronization.
pub trait SyncTrigger {
    fn request_full_sync(&self, force_resync: bool);
}

/// The remote synchronization itself, driven by [`crate::sync::SyncWorker`].
#[async_trait]
pub trait FullSync: Send + Sync {
    async fn full_sync(&self, force_resync: bool) -> Result<(), crate::sync::SyncError>;
}

/// Clipboard and toast notifications.
pub trait DeviceActions {
    fn copy_to_clipboard(&self, text: &str);
    fn toast(&self, message: &str);
}

/// Present `options` and return the index of the chosen one.
///
/// Cancel, dismissal and answers that are not one of the options all
/// come back as `None`.
pub fn choose_index(prompter: &dyn Prompter, title: &str, options: &[String]) -> Option<usize> {
    let answer = prompter.present_choice(title, labels::CANCEL, options)?;
    if answer == labels::CANCEL {
        return None;
    }
    options.iter().position(|option| *option == answer)
}
