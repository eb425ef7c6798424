//! Custom field entries and the editor that owns them.

use crate::labels;
use crate::models::{EntryId, FieldKind};
use crate::ports::{choose_index, Prompter};
use serde::Serialize;
use std::collections::BTreeMap;

/// Current value of a field. Text and hidden fields hold a string,
/// boolean fields an on/off flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldValue {
    Text(String),
    Boolean(bool),
}

/// One custom field as shown in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    kind: FieldKind,
    /// User-visible name of the field.
    pub label: Option<String>,
    value: FieldValue,
}

impl FieldEntry {
    /// Build an entry of `kind` from its textual value.
    ///
    /// Boolean fields are on only when `value` is exactly `"true"`.
    pub fn new(kind: FieldKind, label: Option<String>, value: &str) -> Self {
        let value = match kind {
            FieldKind::Text | FieldKind::Hidden => FieldValue::Text(value.to_string()),
            FieldKind::Boolean => FieldValue::Boolean(value == "true"),
        };
        Self { kind, label, value }
    }

    /// Build an entry from a stored kind code. Unknown codes produce nothing.
    pub fn from_parts(kind_code: u8, label: Option<String>, value: &str) -> Option<Self> {
        let Some(kind) = FieldKind::from_code(kind_code) else {
            tracing::debug!("Skipping field with unsupported kind code {}", kind_code);
            return None;
        };
        Some(Self::new(kind, label, value))
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// The value as it is written to the record: the text itself, or the
    /// literal `"true"` / `"false"` for boolean fields.
    pub fn value_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(text) => text.as_str(),
            FieldValue::Boolean(true) => "true",
            FieldValue::Boolean(false) => "false",
        }
    }

    pub fn appearance(&self) -> FieldAppearance {
        appearance(self.kind)
    }
}

/// How a field of a given kind is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAppearance {
    /// Value is masked until revealed.
    pub concealed: bool,
    /// A reveal/hide toggle is offered.
    pub visibility_toggle: bool,
    pub monospace: bool,
    /// Rendered as an on/off switch instead of a text entry.
    pub switch: bool,
}

pub fn appearance(kind: FieldKind) -> FieldAppearance {
    match kind {
        FieldKind::Text => FieldAppearance {
            concealed: false,
            visibility_toggle: false,
            monospace: false,
            switch: false,
        },
        FieldKind::Hidden => FieldAppearance {
            concealed: true,
            visibility_toggle: true,
            monospace: true,
            switch: false,
        },
        FieldKind::Boolean => FieldAppearance {
            concealed: false,
            visibility_toggle: false,
            monospace: false,
            switch: true,
        },
    }
}

/// Ordered, editable list of custom fields.
#[derive(Debug, Clone, Default)]
pub struct FieldListEditor {
    entries: BTreeMap<EntryId, FieldEntry>,
    next_id: u64,
}

impl FieldListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an editor from existing entries, keeping their order.
    pub fn from_entries(entries: impl IntoIterator<Item = FieldEntry>) -> Self {
        let mut editor = Self::new();
        for entry in entries {
            editor.push(entry);
        }
        editor
    }

    fn push(&mut self, entry: FieldEntry) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, entry);
        id
    }

    /// Append a new field and return its id.
    pub fn add_field(
        &mut self,
        kind: FieldKind,
        label: Option<String>,
        initial_value: &str,
    ) -> EntryId {
        let id = self.push(FieldEntry::new(kind, label, initial_value));
        tracing::debug!("Added {:?} field {}", kind, id);
        id
    }

    /// Ask for a field type and then a name, and append the field.
    ///
    /// Cancelling either step adds nothing.
    pub fn add_field_interactive(&mut self, prompter: &dyn Prompter) -> Option<EntryId> {
        let options: Vec<String> = FieldKind::ALL
            .iter()
            .map(|kind| labels::field_kind(*kind).to_string())
            .collect();
        let kind = FieldKind::ALL[choose_index(prompter, labels::SELECT_FIELD_TYPE, &options)?];
        let label = prompter.prompt_for_text(labels::CUSTOM_FIELD_NAME, None)?;
        Some(self.add_field(kind, Some(label), ""))
    }

    /// Replace the field's name. Unknown ids are ignored.
    pub fn rename_field(&mut self, id: EntryId, new_label: &str) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.label = Some(new_label.to_string());
            tracing::debug!("Renamed field {}", id);
        }
    }

    /// Prompt for a new name, pre-filled with the current one.
    ///
    /// Returns whether the field was renamed.
    pub fn rename_field_interactive(&mut self, id: EntryId, prompter: &dyn Prompter) -> bool {
        let Some(entry) = self.entries.get(&id) else {
            return false;
        };
        match prompter.prompt_for_text(labels::CUSTOM_FIELD_NAME, entry.label.as_deref()) {
            Some(label) => {
                self.rename_field(id, &label);
                true
            }
            None => false,
        }
    }

    /// Remove a field. Removing an absent field is a no-op.
    pub fn remove_field(&mut self, id: EntryId) -> Option<FieldEntry> {
        let removed = self.entries.remove(&id);
        if removed.is_some() {
            tracing::debug!("Removed field {}", id);
        }
        removed
    }

    /// Set the text of a text or hidden field. Ignored for boolean fields.
    pub fn set_text(&mut self, id: EntryId, text: &str) {
        if let Some(FieldEntry {
            value: FieldValue::Text(current),
            ..
        }) = self.entries.get_mut(&id)
        {
            *current = text.to_string();
        }
    }

    /// Switch a boolean field on or off. Ignored for text fields.
    pub fn set_on(&mut self, id: EntryId, on: bool) {
        if let Some(FieldEntry {
            value: FieldValue::Boolean(current),
            ..
        }) = self.entries.get_mut(&id)
        {
            *current = on;
        }
    }

    pub fn get(&self, id: EntryId) -> Option<&FieldEntry> {
        self.entries.get(&id)
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &FieldEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
