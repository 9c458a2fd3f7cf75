use std::collections::BTreeMap;

use yew::prelude::*;

use crate::forms::validation::FieldId;

/// Inline error messages bound to form fields. A field with no entry renders
/// its `<field>-error` element empty and hidden.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorPresenter {
    messages: BTreeMap<FieldId, String>,
}

impl ErrorPresenter {
    pub fn show_error(&mut self, field: FieldId, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    pub fn clear_error(&mut self, field: FieldId) {
        self.messages.remove(&field);
    }

    pub fn clear_all_errors(&mut self) {
        self.messages.clear();
    }

    pub fn message(&self, field: FieldId) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn is_visible(&self, field: FieldId) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.messages.keys().copied()
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub field: FieldId,
    pub errors: ErrorPresenter,
}

#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    let message = props.errors.message(props.field).unwrap_or_default().to_string();
    let style = if props.errors.is_visible(props.field) {
        "display: block;"
    } else {
        "display: none;"
    };

    html! {
        <div id={props.field.error_id()} class="error-message" {style}>
            {message}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_clear_hides_message() {
        let mut errors = ErrorPresenter::default();
        errors.show_error(FieldId::Email, "Email is required");
        assert_eq!(errors.message(FieldId::Email), Some("Email is required"));
        assert!(errors.is_visible(FieldId::Email));

        errors.clear_error(FieldId::Email);
        assert!(!errors.is_visible(FieldId::Email));
        assert_eq!(errors.message(FieldId::Email), None);
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let mut errors = ErrorPresenter::default();
        errors.show_error(FieldId::Name, "Name is required");
        errors.show_error(FieldId::Name, "Name is required");
        assert_eq!(errors.fields().count(), 1);

        errors.clear_error(FieldId::Phone);
        errors.clear_error(FieldId::Phone);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FieldId::Name]);
    }

    #[test]
    fn clear_all_errors_empties_every_field() {
        let mut errors = ErrorPresenter::default();
        for field in FieldId::CONTACT {
            errors.show_error(field, "bad");
        }
        errors.clear_all_errors();
        assert!(errors.is_empty());
    }
}
