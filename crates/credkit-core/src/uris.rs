//! Login URI entries and the editor that owns them.

use crate::labels;
use crate::models::{EntryId, MatchType};
use crate::ports::{choose_index, Prompter};
use serde::Serialize;
use std::collections::BTreeMap;

/// One login URI as shown in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UriEntry {
    pub value: String,
    /// Explicit match type; `None` falls back to the global default.
    pub match_type: Option<MatchType>,
    label: String,
}

impl UriEntry {
    /// Display label, e.g. `"URI 2"`.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered, editable list of login URIs.
#[derive(Debug, Clone, Default)]
pub struct UriListEditor {
    entries: BTreeMap<EntryId, UriEntry>,
    next_id: u64,
}

impl UriListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an editor from existing `(value, match_type)` pairs.
    pub fn from_uris<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<MatchType>)>,
        S: Into<String>,
    {
        let mut editor = Self::new();
        for (value, match_type) in uris {
            editor.add_uri(value, match_type);
        }
        editor
    }

    /// Append a URI and return its id.
    pub fn add_uri(
        &mut self,
        initial_value: impl Into<String>,
        match_type: Option<MatchType>,
    ) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            UriEntry {
                value: initial_value.into(),
                match_type,
                label: labels::uri_position(self.entries.len() + 1),
            },
        );
        tracing::debug!("Added URI {} at position {}", id, self.entries.len());
        id
    }

    /// Remove a URI and renumber the ones that remain.
    pub fn remove_uri(&mut self, id: EntryId) -> Option<UriEntry> {
        let removed = self.entries.remove(&id)?;
        self.renumber();
        tracing::debug!("Removed URI {}, {} left", id, self.entries.len());
        Some(removed)
    }

    fn renumber(&mut self) {
        for (index, entry) in self.entries.values_mut().enumerate() {
            entry.label = labels::uri_position(index + 1);
        }
    }

    pub fn set_value(&mut self, id: EntryId, value: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.value = value.into();
        }
    }

    /// Set or clear the match type directly.
    pub fn set_match_type(&mut self, id: EntryId, match_type: Option<MatchType>) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.match_type = match_type;
        }
    }

    /// Ask the user for a match type.
    ///
    /// Returns the newly stored value, or `None` if the entry does not exist
    /// or the choice was cancelled. Cancelling keeps the previous value;
    /// only picking "Default" clears it.
    pub fn select_match_type(
        &mut self,
        id: EntryId,
        prompter: &dyn Prompter,
    ) -> Option<Option<MatchType>> {
        let entry = self.entries.get_mut(&id)?;
        let options = match_type_options(entry.match_type);
        let index = choose_index(prompter, labels::URI_MATCH_DETECTION, &options)?;
        let selected = index.checked_sub(1).map(|i| MatchType::ALL[i]);
        entry.match_type = selected;
        tracing::debug!("URI {} match type set to {:?}", id, selected);
        Some(selected)
    }

    /// 1-based position of the entry in the current order.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.keys().position(|key| *key == id).map(|index| index + 1)
    }

    pub fn get(&self, id: EntryId) -> Option<&UriEntry> {
        self.entries.get(&id)
    }

    /// Entries in display order with their 1-based positions.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, usize, &UriEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, (id, entry))| (*id, index + 1, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Option labels for the match-type choice: "Default" followed by every
/// match type, with the current selection marked.
pub fn match_type_options(current: Option<MatchType>) -> Vec<String> {
    let mut options = Vec::with_capacity(MatchType::ALL.len() + 1);
    options.push(labels::DEFAULT.to_string());
    options.extend(MatchType::ALL.iter().map(|m| labels::match_type(*m).to_string()));

    let selected = match current {
        Some(match_type) => MatchType::ALL
            .iter()
            .position(|m| *m == match_type)
            .map_or(0, |i| i + 1),
        None => 0,
    };
    options[selected] = format!("{}{}", labels::SELECTED_MARK, options[selected]);
    options
}
