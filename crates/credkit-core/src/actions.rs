//! Quick actions offered for a credential in the vault list, and the
//! type picker used when adding a new credential.

use crate::labels;
use crate::models::CipherType;
use crate::ports::{choose_index, DeviceActions, Prompter};

/// The decrypted values of a credential needed to build its action list.
#[derive(Debug, Clone, Default)]
pub struct CipherSummary {
    pub name: String,
    pub cipher_type: Option<CipherType>,
    pub login_username: Option<String>,
    pub login_password: Option<String>,
    pub login_uri: Option<String>,
    pub card_number: Option<String>,
    pub card_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    View,
    Edit,
    CopyPassword,
    CopyUsername,
    GoToWebsite,
    CopyNumber,
    CopySecurityCode,
}

impl QuickAction {
    pub fn label(self) -> &'static str {
        match self {
            QuickAction::View => labels::VIEW,
            QuickAction::Edit => labels::EDIT,
            QuickAction::CopyPassword => labels::COPY_PASSWORD,
            QuickAction::CopyUsername => labels::COPY_USERNAME,
            QuickAction::GoToWebsite => labels::GO_TO_WEBSITE,
            QuickAction::CopyNumber => labels::COPY_NUMBER,
            QuickAction::CopySecurityCode => labels::COPY_SECURITY_CODE,
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn is_web_uri(uri: &str) -> bool {
    uri.starts_with("http://") || uri.starts_with("https://")
}

/// Actions available for `summary`, in display order.
///
/// Copy actions only appear when there is something to copy. The website
/// action is hidden while autofilling.
pub fn quick_actions(summary: &CipherSummary, autofill: bool) -> Vec<QuickAction> {
    let mut actions = vec![QuickAction::View, QuickAction::Edit];
    match summary.cipher_type {
        Some(CipherType::Login) => {
            if present(&summary.login_password).is_some() {
                actions.push(QuickAction::CopyPassword);
            }
            if present(&summary.login_username).is_some() {
                actions.push(QuickAction::CopyUsername);
            }
            if !autofill && present(&summary.login_uri).is_some_and(is_web_uri) {
                actions.push(QuickAction::GoToWebsite);
            }
        }
        Some(CipherType::Card) => {
            if present(&summary.card_number).is_some() {
                actions.push(QuickAction::CopyNumber);
            }
            if present(&summary.card_code).is_some() {
                actions.push(QuickAction::CopySecurityCode);
            }
        }
        Some(CipherType::Identity) | Some(CipherType::SecureNote) | None => {}
    }
    actions
}

/// Show the action list for `summary` and return the chosen action.
pub fn choose_quick_action(
    prompter: &dyn Prompter,
    summary: &CipherSummary,
    autofill: bool,
) -> Option<QuickAction> {
    let actions = quick_actions(summary, autofill);
    let options: Vec<String> = actions.iter().map(|a| a.label().to_string()).collect();
    choose_index(prompter, &summary.name, &options).map(|i| actions[i])
}

/// Copy the value behind a copy action and confirm with a toast.
///
/// Returns `false` for actions that are not copies or have nothing to copy;
/// those are left to the caller.
pub fn perform_copy(
    device: &dyn DeviceActions,
    action: QuickAction,
    summary: &CipherSummary,
) -> bool {
    let (value, what) = match action {
        QuickAction::CopyPassword => (&summary.login_password, "Password"),
        QuickAction::CopyUsername => (&summary.login_username, "Username"),
        QuickAction::CopyNumber => (&summary.card_number, "Number"),
        QuickAction::CopySecurityCode => (&summary.card_code, "Security code"),
        QuickAction::View | QuickAction::Edit | QuickAction::GoToWebsite => return false,
    };
    let Some(value) = present(value) else {
        return false;
    };
    device.copy_to_clipboard(value);
    device.toast(&labels::value_copied(what));
    true
}

/// Ask which kind of credential to add.
pub fn choose_cipher_type(prompter: &dyn Prompter) -> Option<CipherType> {
    const TYPES: [CipherType; 4] = [
        CipherType::Login,
        CipherType::Card,
        CipherType::Identity,
        CipherType::SecureNote,
    ];
    let options: Vec<String> = TYPES.iter().map(|t| labels::cipher_type(*t).to_string()).collect();
    choose_index(prompter, labels::SELECT_CIPHER_TYPE, &options).map(|i| TYPES[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::testing::{RecordingDevice, ScriptedPrompter};

    fn login() -> CipherSummary {
        CipherSummary {
            name: "Mail".into(),
            cipher_type: Some(CipherType::Login),
            login_username: Some("alex".into()),
            login_password: Some("hunter2".into()),
            login_uri: Some("https://mail.example.com".into()),
            ..CipherSummary::default()
        }
    }

    #[test]
    fn login_actions_in_order() {
        assert_eq!(
            quick_actions(&login(), false),
            vec![
                QuickAction::View,
                QuickAction::Edit,
                QuickAction::CopyPassword,
                QuickAction::CopyUsername,
                QuickAction::GoToWebsite,
            ]
        );
    }

    #[test]
    fn website_hidden_for_autofill_and_non_web_uris() {
        assert!(!quick_actions(&login(), true).contains(&QuickAction::GoToWebsite));

        let mut app = login();
        app.login_uri = Some("androidapp://com.example".into());
        assert!(!quick_actions(&app, false).contains(&QuickAction::GoToWebsite));
    }

    #[test]
    fn blank_values_are_not_offered() {
        let mut summary = login();
        summary.login_password = Some("  ".into());
        summary.login_username = None;
        let actions = quick_actions(&summary, true);
        assert_eq!(actions, vec![QuickAction::View, QuickAction::Edit]);
    }

    #[test]
    fn card_actions() {
        let card = CipherSummary {
            name: "Visa".into(),
            cipher_type: Some(CipherType::Card),
            card_number: Some("4111".into()),
            card_code: Some("123".into()),
            ..CipherSummary::default()
        };
        assert_eq!(
            &quick_actions(&card, false)[2..],
            &[QuickAction::CopyNumber, QuickAction::CopySecurityCode]
        );
    }

    #[test]
    fn copy_goes_through_device_port() {
        let device = RecordingDevice::default();
        assert!(perform_copy(&device, QuickAction::CopyPassword, &login()));
        assert!(!perform_copy(&device, QuickAction::Edit, &login()));
        assert!(!perform_copy(&device, QuickAction::CopyNumber, &login()));
        assert_eq!(*device.copied.borrow(), vec!["hunter2"]);
        assert_eq!(*device.toasts.borrow(), vec!["Password copied"]);
    }

    #[test]
    fn chosen_action_maps_back() {
        let prompter = ScriptedPrompter::new()
            .choice(Some("Copy Username"))
            .choice(Some(labels::CANCEL));
        assert_eq!(
            choose_quick_action(&prompter, &login(), false),
            Some(QuickAction::CopyUsername)
        );
        assert_eq!(choose_quick_action(&prompter, &login(), false), None);
    }

    #[test]
    fn cipher_type_choice() {
        let prompter = ScriptedPrompter::new()
            .choice(Some("Secure Note"))
            .choice(None);
        assert_eq!(choose_cipher_type(&prompter), Some(CipherType::SecureNote));
        assert_eq!(choose_cipher_type(&prompter), None);
    }
}
