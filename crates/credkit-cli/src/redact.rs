//! Stand-in encryption for terminal output.
//!
//! No vault key is available to the CLI, so values are replaced by a marker
//! naming the scope and the plaintext length. Nothing typed into the editor
//! is echoed back.

use credkit_core::ports::EncryptionPort;

pub struct RedactingEncryptor;

impl EncryptionPort for RedactingEncryptor {
    fn encrypt(&self, plaintext: &str, scope: Option<&str>) -> String {
        format!(
            "<encrypted:{}:{} chars>",
            scope.unwrap_or("user"),
            plaintext.chars().count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_names_scope_and_length_only() {
        assert_eq!(RedactingEncryptor.encrypt("hunter2", None), "<encrypted:user:7 chars>");
        assert_eq!(RedactingEncryptor.encrypt("ünï", Some("org-1")), "<encrypted:org-1:3 chars>");
    }
}
