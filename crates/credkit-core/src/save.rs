//! Mapping of editor state into the encrypted collections of a record.

use crate::fields::FieldListEditor;
use crate::models::{CredentialRecord, EncryptedField, EncryptedUri};
use crate::ports::EncryptionPort;
use crate::uris::UriListEditor;

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn encrypt_non_blank(
    encryptor: &dyn EncryptionPort,
    text: &str,
    scope: Option<&str>,
) -> Option<String> {
    (!is_blank(text)).then(|| encryptor.encrypt(text, scope))
}

/// Encrypt the custom fields in display order.
///
/// Blank names and values are stored as `None`. Returns `None` when there
/// are no fields, or when no field has either a name or a value.
pub fn map_fields_for_save(
    editor: &FieldListEditor,
    scope: Option<&str>,
    encryptor: &dyn EncryptionPort,
) -> Option<Vec<EncryptedField>> {
    if editor.is_empty() {
        return None;
    }

    let fields: Vec<EncryptedField> = editor
        .iter()
        .map(|(_, entry)| EncryptedField {
            name: entry
                .label
                .as_deref()
                .and_then(|label| encrypt_non_blank(encryptor, label, scope)),
            value: encrypt_non_blank(encryptor, entry.value_text(), scope),
            kind: entry.kind(),
        })
        .collect();

    if fields.iter().all(|f| f.name.is_none() && f.value.is_none()) {
        return None;
    }
    Some(fields)
}

/// Encrypt the login URIs in display order, dropping blank ones.
///
/// Returns `None` when nothing is left.
pub fn map_uris_for_save(
    editor: &UriListEditor,
    scope: Option<&str>,
    encryptor: &dyn EncryptionPort,
) -> Option<Vec<EncryptedUri>> {
    let uris: Vec<EncryptedUri> = editor
        .iter()
        .filter(|(_, _, entry)| !is_blank(&entry.value))
        .map(|(_, _, entry)| EncryptedUri {
            uri: encryptor.encrypt(&entry.value, scope),
            match_type: entry.match_type,
        })
        .collect();

    (!uris.is_empty()).then_some(uris)
}

/// Write both collections into `record`, scoped to its organization.
pub fn apply_to_record(
    record: &mut CredentialRecord,
    fields: &FieldListEditor,
    uris: &UriListEditor,
    encryptor: &dyn EncryptionPort,
) {
    let scope = record.organization_id.as_deref();
    let mapped_fields = map_fields_for_save(fields, scope, encryptor);
    let mapped_uris = map_uris_for_save(uris, scope, encryptor);
    tracing::debug!(
        "Saving {} fields and {} URIs",
        mapped_fields.as_ref().map_or(0, Vec::len),
        mapped_uris.as_ref().map_or(0, Vec::len)
    );
    record.fields = mapped_fields;
    record.login_uris = mapped_uris;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldKind, MatchType};
    use crate::ports::testing::{enc, TagEncryptor};

    const SCOPE: Option<&str> = Some("org-1");

    #[test]
    fn empty_field_editor_maps_to_none() {
        assert_eq!(map_fields_for_save(&FieldListEditor::new(), SCOPE, &TagEncryptor), None);
    }

    #[test]
    fn single_text_field_is_encrypted() {
        let mut editor = FieldListEditor::new();
        editor.add_field(FieldKind::Text, Some("Note".into()), "hi");
        assert_eq!(
            map_fields_for_save(&editor, SCOPE, &TagEncryptor),
            Some(vec![EncryptedField {
                name: Some(enc("Note", SCOPE)),
                value: Some(enc("hi", SCOPE)),
                kind: FieldKind::Text,
            }])
        );
    }

    #[test]
    fn boolean_fields_always_carry_a_value() {
        let mut editor = FieldListEditor::new();
        editor.add_field(FieldKind::Boolean, None, "true");
        editor.add_field(FieldKind::Boolean, Some("  ".into()), "false");

        let fields = map_fields_for_save(&editor, SCOPE, &TagEncryptor).unwrap();
        assert_eq!(fields[0].value, Some(enc("true", SCOPE)));
        assert_eq!(fields[1].value, Some(enc("false", SCOPE)));
        assert!(fields.iter().all(|f| f.name.is_none()));
    }

    #[test]
    fn blank_parts_become_none_but_field_is_kept() {
        let mut editor = FieldListEditor::new();
        editor.add_field(FieldKind::Hidden, Some("pin".into()), "   ");
        editor.add_field(FieldKind::Text, None, "value only");
        editor.add_field(FieldKind::Text, Some("".into()), "");

        let fields = map_fields_for_save(&editor, None, &TagEncryptor).unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].name, Some(enc("pin", None)));
        assert_eq!(fields[0].value, None);
        assert_eq!(fields[0].kind, FieldKind::Hidden);
        assert_eq!(fields[1].name, None);
        assert_eq!(fields[2], EncryptedField { name: None, value: None, kind: FieldKind::Text });
    }

    #[test]
    fn fields_with_nothing_meaningful_collapse_to_none() {
        let mut editor = FieldListEditor::new();
        editor.add_field(FieldKind::Text, None, "");
        editor.add_field(FieldKind::Hidden, Some(" ".into()), "\t");
        assert_eq!(map_fields_for_save(&editor, SCOPE, &TagEncryptor), None);
    }

    #[test]
    fn blank_uris_are_dropped_in_order() {
        let editor = UriListEditor::from_uris([
            ("", None),
            ("https://a.com", Some(MatchType::Host)),
            ("   ", Some(MatchType::Exact)),
            ("https://b.com", None),
        ]);
        assert_eq!(
            map_uris_for_save(&editor, SCOPE, &TagEncryptor),
            Some(vec![
                EncryptedUri {
                    uri: enc("https://a.com", SCOPE),
                    match_type: Some(MatchType::Host),
                },
                EncryptedUri {
                    uri: enc("https://b.com", SCOPE),
                    match_type: None,
                },
            ])
        );
    }

    #[test]
    fn only_blank_uris_map_to_none() {
        let editor = UriListEditor::from_uris([("", None), (" ", None)]);
        assert_eq!(map_uris_for_save(&editor, SCOPE, &TagEncryptor), None);
        assert_eq!(map_uris_for_save(&UriListEditor::new(), SCOPE, &TagEncryptor), None);
    }

    #[test]
    fn apply_to_record_uses_organization_scope() {
        let mut fields = FieldListEditor::new();
        fields.add_field(FieldKind::Text, Some("Note".into()), "hi");
        let uris = UriListEditor::from_uris([("", None)]);

        let mut record = CredentialRecord::new(Some("org-9".into()));
        record.login_uris = Some(Vec::new());
        apply_to_record(&mut record, &fields, &uris, &TagEncryptor);

        let saved = record.fields.unwrap();
        assert_eq!(saved[0].name, Some(enc("Note", Some("org-9"))));
        assert_eq!(record.login_uris, None);
        assert_eq!(fields.len(), 1);
        assert_eq!(uris.len(), 1);
    }
}
