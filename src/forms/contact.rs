use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::error::SiteError;
use crate::forms::errors::ErrorPresenter;
use crate::forms::validation::{validate, FieldId, FieldKind};

/// Simulated round trip before the message counts as sent.
pub const SUBMIT_DELAY_MS: u32 = 2_000;
/// How long the success banner stays up once the message is sent.
pub const SUCCESS_DISPLAY_MS: u32 = 5_000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFormValues {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Message => &self.message,
            _ => "",
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Name => self.name = value,
            FieldId::Email => self.email = value,
            FieldId::Phone => self.phone = value,
            FieldId::Message => self.message = value,
            _ => {}
        }
    }
}

/// Rule set for a contact control, `None` for controls without one.
pub fn contact_field_kind(field: FieldId) -> Option<FieldKind> {
    match field {
        FieldId::Name => Some(FieldKind::Name),
        FieldId::Email => Some(FieldKind::Email),
        FieldId::Phone => Some(FieldKind::Phone),
        FieldId::Message => Some(FieldKind::Message),
        _ => None,
    }
}

/// Validates a single control and updates its inline error.
pub fn validate_contact_field(field: FieldId, value: &str, errors: &mut ErrorPresenter) -> bool {
    let Some(kind) = contact_field_kind(field) else {
        return true;
    };
    match validate(kind, value).into_error(field) {
        Some(SiteError::FieldInvalid { field, message }) => {
            errors.show_error(field, message);
            false
        }
        _ => {
            errors.clear_error(field);
            true
        }
    }
}

/// Validates every contact control, replacing any previously shown errors.
pub fn validate_contact_form(values: &ContactFormValues, errors: &mut ErrorPresenter) -> bool {
    errors.clear_all_errors();
    for field in FieldId::CONTACT {
        validate_contact_field(field, values.get(field), errors);
    }
    errors.is_empty()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactPhase {
    Idle,
    Validating,
    Submitting,
    Success,
}

pub enum ContactAction {
    Edit(FieldId, String),
    Blur(FieldId),
    Submit,
    SubmissionComplete,
    SuccessTimeout,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactState {
    pub values: ContactFormValues,
    pub errors: ErrorPresenter,
    pub phase: ContactPhase,
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            values: ContactFormValues::default(),
            errors: ErrorPresenter::default(),
            phase: ContactPhase::Idle,
        }
    }
}

impl ContactState {
    pub fn is_submitting(&self) -> bool {
        self.phase == ContactPhase::Submitting
    }

    pub fn success_visible(&self) -> bool {
        self.phase == ContactPhase::Success
    }

    /// Runs the full validation pass and returns the phase to settle in.
    fn validate_submission(&mut self) -> ContactPhase {
        self.phase = ContactPhase::Validating;
        if validate_contact_form(&self.values, &mut self.errors) {
            info!("Contact form valid, sending");
            ContactPhase::Submitting
        } else {
            let invalid: Vec<&str> = self.errors.fields().map(|field| field.as_str()).collect();
            info!("Contact form invalid: {}", invalid.join(", "));
            ContactPhase::Idle
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.values.set(field, value),
            ContactAction::Blur(field) => {
                let value = next.values.get(field).to_string();
                validate_contact_field(field, &value, &mut next.errors);
            }
            ContactAction::Submit => {
                // the button is disabled while sending, but a queued submit can still land
                if self.is_submitting() {
                    return self;
                }
                next.phase = next.validate_submission();
            }
            ContactAction::SubmissionComplete => {
                if !self.is_submitting() {
                    return self;
                }
                next.values = ContactFormValues::default();
                next.phase = ContactPhase::Success;
            }
            ContactAction::SuccessTimeout => {
                if !self.success_visible() {
                    return self;
                }
                next.phase = ContactPhase::Idle;
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> ContactFormValues {
        ContactFormValues {
            name: "Asha Rao".to_string(),
            email: "asha@example.in".to_string(),
            phone: "+91 9876543210".to_string(),
            message: "Need help with GST filing".to_string(),
        }
    }

    fn reduce(state: Rc<ContactState>, action: ContactAction) -> Rc<ContactState> {
        state.reduce(action)
    }

    fn with_values(values: ContactFormValues) -> Rc<ContactState> {
        Rc::new(ContactState {
            values,
            ..ContactState::default()
        })
    }

    #[test]
    fn short_message_blocks_submission() {
        let mut values = valid_values();
        values.message = "123456789".to_string();

        let state = reduce(with_values(values), ContactAction::Submit);

        assert_eq!(state.phase, ContactPhase::Idle);
        assert_eq!(
            state.errors.message(FieldId::Message),
            Some("Message must be at least 10 characters")
        );
        assert!(!state.success_visible());
        assert_eq!(state.errors.fields().count(), 1);
    }

    #[test]
    fn valid_submission_runs_through_success_and_back_to_idle() {
        let state = reduce(with_values(valid_values()), ContactAction::Submit);
        assert_eq!(state.phase, ContactPhase::Submitting);
        assert!(state.is_submitting());
        assert_eq!(state.submit_label(), "Sending...");
        assert!(!state.success_visible());

        let state = reduce(state, ContactAction::SubmissionComplete);
        assert_eq!(state.phase, ContactPhase::Success);
        assert!(state.success_visible());
        assert_eq!(state.values, ContactFormValues::default());
        assert_eq!(state.submit_label(), "Send Message");

        let state = reduce(state, ContactAction::SuccessTimeout);
        assert_eq!(state.phase, ContactPhase::Idle);
        assert!(!state.success_visible());
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let state = reduce(with_values(valid_values()), ContactAction::Submit);
        let again = reduce(state.clone(), ContactAction::Submit);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn stray_timers_do_not_change_idle_state() {
        let state = Rc::new(ContactState::default());
        let after = reduce(state.clone(), ContactAction::SubmissionComplete);
        assert!(Rc::ptr_eq(&state, &after));
        let after = reduce(after, ContactAction::SuccessTimeout);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn resubmitting_clears_previous_errors() {
        let state = reduce(Rc::new(ContactState::default()), ContactAction::Submit);
        assert_eq!(state.errors.fields().count(), 4);
        assert_eq!(state.errors.message(FieldId::Name), Some("Name is required"));

        let mut state = state;
        for field in FieldId::CONTACT {
            let value = valid_values().get(field).to_string();
            state = reduce(state, ContactAction::Edit(field, value));
        }
        let state = reduce(state, ContactAction::Submit);
        assert!(state.errors.is_empty());
        assert_eq!(state.phase, ContactPhase::Submitting);
    }

    #[test]
    fn form_validity_follows_shown_errors() {
        let mut errors = ErrorPresenter::default();
        errors.show_error(FieldId::Name, "stale".to_string());

        let mut values = valid_values();
        values.phone = "12345".to_string();
        values.email = "nope".to_string();
        assert!(!validate_contact_form(&values, &mut errors));
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![FieldId::Email, FieldId::Phone]
        );

        assert!(validate_contact_form(&valid_values(), &mut errors));
        assert!(errors.is_empty());
    }

    #[test]
    fn blur_validates_only_the_blurred_field() {
        let state = reduce(
            Rc::new(ContactState::default()),
            ContactAction::Edit(FieldId::Email, "not-an-email".to_string()),
        );
        let state = reduce(state, ContactAction::Blur(FieldId::Email));
        assert_eq!(
            state.errors.message(FieldId::Email),
            Some("Please enter a valid email address")
        );
        assert!(!state.errors.is_visible(FieldId::Name));

        let state = reduce(state, ContactAction::Edit(FieldId::Email, "a@b.co".to_string()));
        let state = reduce(state, ContactAction::Blur(FieldId::Email));
        assert!(state.errors.is_empty());
    }
}
