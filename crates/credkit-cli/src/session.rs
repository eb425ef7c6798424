//! Interactive editing of a credential's custom fields and URIs.

use credkit_core::ports::{choose_index, EncryptionPort, Prompter};
use credkit_core::{
    apply_to_record, CredentialRecord, EntryId, FieldKind, FieldListEditor, FieldValue,
    UriListEditor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    AddField,
    RenameField,
    SetFieldValue,
    RemoveField,
    AddUri,
    UriOptions,
    RemoveUri,
    Done,
}

const MENU: [(MenuItem, &str); 8] = [
    (MenuItem::AddField, "Add field"),
    (MenuItem::RenameField, "Rename field"),
    (MenuItem::SetFieldValue, "Set field value"),
    (MenuItem::RemoveField, "Remove field"),
    (MenuItem::AddUri, "Add URI"),
    (MenuItem::UriOptions, "URI match detection"),
    (MenuItem::RemoveUri, "Remove URI"),
    (MenuItem::Done, "Done"),
];

/// Editors for one credential being edited.
#[derive(Debug, Default)]
pub struct EditSession {
    pub fields: FieldListEditor,
    pub uris: UriListEditor,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the menu loop until "Done" is picked or input ends.
    pub fn run(&mut self, prompter: &dyn Prompter) {
        let options: Vec<String> = MENU.iter().map(|(_, label)| label.to_string()).collect();
        loop {
            let Some(index) = choose_index(prompter, "Edit credential", &options) else {
                return;
            };
            match MENU[index].0 {
                MenuItem::AddField => {
                    self.fields.add_field_interactive(prompter);
                }
                MenuItem::RenameField => {
                    if let Some(id) = self.pick_field(prompter) {
                        self.fields.rename_field_interactive(id, prompter);
                    }
                }
                MenuItem::SetFieldValue => {
                    if let Some(id) = self.pick_field(prompter) {
                        self.edit_field_value(id, prompter);
                    }
                }
                MenuItem::RemoveField => {
                    if let Some(id) = self.pick_field(prompter) {
                        self.fields.remove_field(id);
                    }
                }
                MenuItem::AddUri => {
                    if let Some(value) = prompter.prompt_for_text("URI", None) {
                        self.uris.add_uri(value, None);
                    }
                }
                MenuItem::UriOptions => {
                    if let Some(id) = self.pick_uri(prompter) {
                        self.uris.select_match_type(id, prompter);
                    }
                }
                MenuItem::RemoveUri => {
                    if let Some(id) = self.pick_uri(prompter) {
                        self.uris.remove_uri(id);
                    }
                }
                MenuItem::Done => return,
            }
        }
    }

    fn pick_field(&self, prompter: &dyn Prompter) -> Option<EntryId> {
        let (ids, names): (Vec<EntryId>, Vec<String>) = self
            .fields
            .iter()
            .map(|(id, entry)| {
                let name = entry.label.clone().unwrap_or_else(|| "(unnamed)".to_string());
                (id, format!("{} ({})", name, credkit_core::labels::field_kind(entry.kind())))
            })
            .unzip();
        choose_index(prompter, "Field", &names).map(|i| ids[i])
    }

    fn pick_uri(&self, prompter: &dyn Prompter) -> Option<EntryId> {
        let (ids, names): (Vec<EntryId>, Vec<String>) = self
            .uris
            .iter()
            .map(|(id, _, entry)| (id, format!("{}: {}", entry.label(), entry.value)))
            .unzip();
        choose_index(prompter, "URI", &names).map(|i| ids[i])
    }

    fn edit_field_value(&mut self, id: EntryId, prompter: &dyn Prompter) {
        let Some(entry) = self.fields.get(id) else {
            return;
        };
        match entry.value() {
            FieldValue::Boolean(on) => {
                let on = !*on;
                self.fields.set_on(id, on);
            }
            FieldValue::Text(current) => {
                let initial = (entry.kind() == FieldKind::Text).then_some(current.as_str());
                if let Some(text) = prompter.prompt_for_text("Value", initial) {
                    self.fields.set_text(id, &text);
                }
            }
        }
    }

    /// Map both editors into a record owned by `organization_id`.
    pub fn save(
        &self,
        organization_id: Option<String>,
        encryptor: &dyn EncryptionPort,
    ) -> CredentialRecord {
        let mut record = CredentialRecord::new(organization_id);
        apply_to_record(&mut record, &self.fields, &self.uris, encryptor);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::LinePrompter;
    use crate::redact::RedactingEncryptor;
    use credkit_core::MatchType;
    use std::io::Cursor;

    fn run(script: &str) -> EditSession {
        let prompter = LinePrompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut session = EditSession::new();
        session.run(&prompter);
        session
    }

    #[test]
    fn adds_fields_and_uris() {
        // add Text field "Note", set value, add two URIs, set match type of
        // the second to Exact, remove the first, done.
        let session = run(concat!(
            "1\n1\nNote\n3\n1\nhi\n",
            "5\nhttps://a.com\n5\nhttps://b.com\n",
            "6\n2\n6\n7\n1\n8\n",
        ));

        let (_, note) = session.fields.iter().next().unwrap();
        assert_eq!(session.fields.len(), 1);
        assert_eq!(note.label.as_deref(), Some("Note"));
        assert_eq!(note.value_text(), "hi");

        let uris: Vec<_> = session.uris.iter().collect();
        assert_eq!(uris.len(), 1);
        assert_eq!(uris[0].1, 1);
        assert_eq!(uris[0].2.value, "https://b.com");
        assert_eq!(uris[0].2.match_type, Some(MatchType::Exact));

        let record = session.save(Some("org-1".into()), &RedactingEncryptor);
        let saved = record.login_uris.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].match_type, Some(MatchType::Exact));
        assert_eq!(saved[0].uri, "<encrypted:org-1:13 chars>");
    }

    #[test]
    fn boolean_value_toggles() {
        let session = run("1\n3\nEnabled\n3\n1\n8\n");
        let (_, entry) = session.fields.iter().next().unwrap();
        assert_eq!(entry.value_text(), "true");
    }

    #[test]
    fn end_of_input_stops_the_session() {
        let session = run("1\n2\n");
        assert!(session.fields.is_empty());
    }

    #[test]
    fn empty_session_saves_empty_record() {
        let record = run("8\n").save(None, &RedactingEncryptor);
        assert_eq!(record.fields, None);
        assert_eq!(record.login_uris, None);
    }

    #[test]
    fn saved_record_does_not_reveal_hidden_values() {
        // add Hidden field "PIN", set its value, add a URI, done.
        let session = run("1\n2\nPIN\n3\n1\n123456\n5\nhttps://a.com\n8\n");
        let record = session.save(None, &RedactingEncryptor);

        let fields = record.fields.as_ref().unwrap();
        assert_eq!(fields[0].kind, FieldKind::Hidden);
        assert_eq!(fields[0].value.as_deref(), Some("<encrypted:user:6 chars>"));

        let text = toml::to_string_pretty(&record).unwrap();
        assert!(!text.contains("123456"));
        assert!(!text.contains("PIN"));
        assert!(!text.contains("https://a.com"));
        assert!(text.contains("<encrypted:user:13 chars>"));
    }
}
