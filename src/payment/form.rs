use std::rc::Rc;

use yew::prelude::*;

use crate::forms::validation::FieldId;
use crate::payment::checkout::{PaymentFormValues, PaymentValidation};
use crate::payment::pricing::{price_for, ServiceCategory};
use crate::payment::summary::{summary_for_input, PaymentSummary};

pub enum PaymentAction {
    Edit(FieldId, String),
    SelectService(String),
    Validated(PaymentValidation),
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentState {
    pub values: PaymentFormValues,
    /// Result of the last submit attempt, drives the field borders.
    pub validation: Option<PaymentValidation>,
    pub summary: PaymentSummary,
    /// Bumped whenever the amount field should take focus.
    pub amount_focus_requests: u32,
}

impl PaymentState {
    pub fn border_style(&self, field: FieldId) -> Option<String> {
        self.validation
            .as_ref()
            .and_then(|validation| validation.border_color(field))
            .map(|color| format!("border-color: {};", color))
    }

    fn select_service(&mut self, key: String) {
        let category = ServiceCategory::from_key(&key);
        self.values.service_type = key;
        match category {
            Some(ServiceCategory::Custom) => {
                self.values.amount.clear();
                self.summary = summary_for_input("");
                self.amount_focus_requests += 1;
            }
            Some(category) => {
                if let Some(price) = price_for(category) {
                    self.values.amount = price.to_string();
                    self.summary = summary_for_input(&self.values.amount);
                }
            }
            // placeholder option: leave the amount as typed
            None => {}
        }
    }
}

impl Reducible for PaymentState {
    type Action = PaymentAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PaymentAction::Edit(field, value) => {
                next.values.set(field, value);
                if field == FieldId::Amount {
                    next.summary = summary_for_input(&next.values.amount);
                }
            }
            PaymentAction::SelectService(key) => next.select_service(key),
            PaymentAction::Validated(validation) => next.validation = Some(validation),
            PaymentAction::Reset => {
                next = PaymentState {
                    amount_focus_requests: self.amount_focus_requests,
                    ..PaymentState::default()
                };
            }
        }
        next.into()
    }
}
