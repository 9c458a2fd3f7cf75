use std::rc::Rc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::SiteError;
use crate::forms::validation::{parse_float, validate, FieldId, FieldKind};
use crate::payment::pricing::ServiceCategory;
use crate::payment::summary::compute_summary;

pub const INVALID_BORDER: &str = "#e74c3c";
pub const VALID_BORDER: &str = "#e0e0e0";

/// Controls the payment form requires before the widget is opened.
pub const REQUIRED_FIELDS: [FieldId; 5] = [
    FieldId::ClientName,
    FieldId::ClientEmail,
    FieldId::ClientPhone,
    FieldId::ServiceType,
    FieldId::Amount,
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentFormValues {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_type: String,
    pub amount: String,
    pub description: String,
}

impl PaymentFormValues {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::ClientName => &self.client_name,
            FieldId::ClientEmail => &self.client_email,
            FieldId::ClientPhone => &self.client_phone,
            FieldId::ServiceType => &self.service_type,
            FieldId::Amount => &self.amount,
            FieldId::Description => &self.description,
            _ => "",
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::ClientName => self.client_name = value,
            FieldId::ClientEmail => self.client_email = value,
            FieldId::ClientPhone => self.client_phone = value,
            FieldId::ServiceType => self.service_type = value,
            FieldId::Amount => self.amount = value,
            FieldId::Description => self.description = value,
            _ => {}
        }
    }

    pub fn category(&self) -> Option<ServiceCategory> {
        ServiceCategory::from_key(&self.service_type)
    }
}

/// Outcome of checking the payment form. Each required field is either
/// flagged or cleared; the amount failure is reported separately because it
/// is surfaced with a blocking alert rather than only a red border.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentValidation {
    pub invalid_fields: Vec<FieldId>,
    pub amount_invalid: bool,
}

impl PaymentValidation {
    pub fn is_valid(&self) -> bool {
        self.invalid_fields.is_empty() && !self.amount_invalid
    }

    pub fn border_color(&self, field: FieldId) -> Option<&'static str> {
        if self.invalid_fields.contains(&field) {
            Some(INVALID_BORDER)
        } else if REQUIRED_FIELDS.contains(&field) {
            Some(VALID_BORDER)
        } else {
            None
        }
    }

    pub fn into_result(self) -> Result<(), SiteError> {
        if self.is_valid() {
            return Ok(());
        }
        Err(SiteError::FormInvalid {
            fields: self.invalid_fields,
            amount_invalid: self.amount_invalid,
        })
    }
}

pub fn validate_payment_form(values: &PaymentFormValues) -> PaymentValidation {
    let mut invalid_fields: Vec<FieldId> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !validate(FieldKind::Required, values.get(*field)).valid)
        .collect();

    let amount_invalid = !validate(FieldKind::Amount, &values.amount).valid;
    if amount_invalid && !invalid_fields.contains(&FieldId::Amount) {
        invalid_fields.push(FieldId::Amount);
    }

    PaymentValidation {
        invalid_fields,
        amount_invalid,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckoutNotes {
    pub service_type: Option<ServiceCategory>,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutRequest {
    /// Total including GST, in paise.
    pub amount: u64,
    pub currency: &'static str,
    pub name: &'static str,
    pub description: String,
    pub prefill: Prefill,
    pub notes: CheckoutNotes,
    pub theme_color: &'static str,
}

impl CheckoutRequest {
    pub fn from_form(values: &PaymentFormValues) -> Self {
        let base = parse_float(&values.amount).unwrap_or(0.0);
        let summary = compute_summary(base);
        let category = values.category();
        let description = match category {
            Some(category) => format!("Payment for {}", category.label()),
            None => "Payment for Services".to_string(),
        };

        Self {
            amount: summary.total_minor_units(),
            currency: config::CURRENCY,
            name: config::BUSINESS_NAME,
            description,
            prefill: Prefill {
                name: values.client_name.clone(),
                email: values.client_email.clone(),
                contact: values.client_phone.clone(),
            },
            notes: CheckoutNotes {
                service_type: category,
                description: values.description.clone(),
            },
            theme_color: config::THEME_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PaymentReceipt {
    pub razorpay_payment_id: String,
    #[serde(default)]
    pub razorpay_order_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PaymentFailure {
    #[serde(default)]
    pub code: Option<String>,
    pub description: String,
}

impl From<PaymentFailure> for SiteError {
    fn from(failure: PaymentFailure) -> Self {
        SiteError::PaymentDeclined {
            code: failure.code,
            reason: failure.description,
        }
    }
}

pub struct CheckoutCallbacks {
    pub on_success: Box<dyn FnOnce(PaymentReceipt)>,
    /// Fires once per declined attempt; the widget stays open for retries.
    pub on_failure: Box<dyn Fn(PaymentFailure)>,
    pub on_dismiss: Box<dyn FnOnce()>,
}

/// Hosted checkout widget. It owns its own UI once opened; this side only
/// learns the outcome through the callbacks. Success and dismiss fire at most
/// once, failure once per declined attempt.
pub trait CheckoutGateway {
    fn open(&self, request: CheckoutRequest, callbacks: CheckoutCallbacks) -> Result<(), SiteError>;
}

/// Blocking user-facing messages (`window.alert` in the browser).
pub trait Notifier {
    fn alert(&self, message: &str);
}

pub struct CheckoutOrchestrator {
    gateway: Rc<dyn CheckoutGateway>,
    notifier: Rc<dyn Notifier>,
}

impl CheckoutOrchestrator {
    pub fn new(gateway: Rc<dyn CheckoutGateway>, notifier: Rc<dyn Notifier>) -> Self {
        Self { gateway, notifier }
    }

    /// Validates the form and, if it passes, opens the checkout widget.
    /// `on_paid` runs after a successful payment so the caller can reset the form.
    pub fn submit(
        &self,
        values: &PaymentFormValues,
        on_paid: impl FnOnce() + 'static,
    ) -> Result<CheckoutRequest, SiteError> {
        let validation = validate_payment_form(values);
        if validation.amount_invalid {
            self.notifier.alert("Please enter a valid amount");
        }
        validation.into_result()?;

        let request = CheckoutRequest::from_form(values);
        info!("Opening checkout for {} paise ({})", request.amount, request.description);

        let success_notifier = self.notifier.clone();
        let failure_notifier = self.notifier.clone();
        let callbacks = CheckoutCallbacks {
            on_success: Box::new(move |receipt: PaymentReceipt| {
                info!(
                    "Payment successful: {} (order {})",
                    receipt.razorpay_payment_id,
                    receipt.razorpay_order_id.as_deref().unwrap_or("none")
                );
                success_notifier.alert(&format!(
                    "Payment successful! Payment ID: {}",
                    receipt.razorpay_payment_id
                ));
                on_paid();
            }),
            on_failure: Box::new(move |failure: PaymentFailure| {
                let error = SiteError::from(failure);
                if let SiteError::PaymentDeclined { code, reason } = &error {
                    warn!("Payment declined [{}]: {}", code.as_deref().unwrap_or("unknown"), reason);
                }
                failure_notifier.alert(&error.to_string());
            }),
            on_dismiss: Box::new(|| {
                gloo_console::log!("Payment modal closed");
            }),
        };

        self.gateway.open(request.clone(), callbacks)?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct FakeGateway {
        opened: RefCell<Vec<CheckoutRequest>>,
        callbacks: RefCell<Option<CheckoutCallbacks>>,
        unavailable: bool,
    }

    impl CheckoutGateway for FakeGateway {
        fn open(&self, request: CheckoutRequest, callbacks: CheckoutCallbacks) -> Result<(), SiteError> {
            if self.unavailable {
                return Err(SiteError::ConfigurationMissing("Razorpay checkout"));
            }
            self.opened.borrow_mut().push(request);
            *self.callbacks.borrow_mut() = Some(callbacks);
            Ok(())
        }
    }

    impl FakeGateway {
        fn succeed(&self, payment_id: &str) {
            let callbacks = self.callbacks.borrow_mut().take().unwrap();
            (callbacks.on_success)(PaymentReceipt {
                razorpay_payment_id: payment_id.to_string(),
                razorpay_order_id: None,
            });
        }

        fn fail(&self, description: &str) {
            let callbacks = self.callbacks.borrow();
            (callbacks.as_ref().unwrap().on_failure)(PaymentFailure {
                code: Some("BAD_REQUEST_ERROR".to_string()),
                description: description.to_string(),
            });
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        alerts: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn filled_form() -> PaymentFormValues {
        PaymentFormValues {
            client_name: "Ravi Kumar".to_string(),
            client_email: "ravi@example.in".to_string(),
            client_phone: "9876543210".to_string(),
            service_type: "tax-consultation".to_string(),
            amount: "2000".to_string(),
            description: "FY24 return".to_string(),
        }
    }

    fn orchestrator() -> (Rc<FakeGateway>, Rc<RecordingNotifier>, CheckoutOrchestrator) {
        let gateway = Rc::new(FakeGateway::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let orchestrator = CheckoutOrchestrator::new(gateway.clone(), notifier.clone());
        (gateway, notifier, orchestrator)
    }

    #[test]
    fn request_carries_total_in_paise() {
        let request = CheckoutRequest::from_form(&filled_form());
        assert_eq!(request.amount, 236_000);
        assert_eq!(request.currency, "INR");
        assert_eq!(request.name, "Fingard Partners");
        assert_eq!(request.description, "Payment for Tax Consultation");
        assert_eq!(request.prefill.contact, "9876543210");
        assert_eq!(request.notes.service_type, Some(ServiceCategory::TaxConsultation));
    }

    #[test]
    fn notes_serialize_with_category_key() {
        let request = CheckoutRequest::from_form(&filled_form());
        let notes = serde_json::to_value(&request.notes).unwrap();
        assert_eq!(notes["service_type"], "tax-consultation");
        assert_eq!(notes["description"], "FY24 return");
    }

    #[test]
    fn empty_required_fields_are_flagged_without_alert() {
        let (gateway, notifier, orchestrator) = orchestrator();
        let mut values = filled_form();
        values.client_email = "  ".to_string();
        values.service_type.clear();

        let err = orchestrator.submit(&values, || {}).unwrap_err();

        assert_eq!(
            err,
            SiteError::FormInvalid {
                fields: vec![FieldId::ClientEmail, FieldId::ServiceType],
                amount_invalid: false,
            }
        );
        assert!(notifier.alerts.borrow().is_empty());
        assert!(gateway.opened.borrow().is_empty());
    }

    #[test]
    fn invalid_amount_raises_alert() {
        let (gateway, notifier, orchestrator) = orchestrator();
        let mut values = filled_form();
        values.amount = "0".to_string();

        let err = orchestrator.submit(&values, || {}).unwrap_err();

        assert!(matches!(err, SiteError::FormInvalid { amount_invalid: true, .. }));
        assert_eq!(*notifier.alerts.borrow(), vec!["Please enter a valid amount".to_string()]);
        assert!(gateway.opened.borrow().is_empty());
    }

    #[test]
    fn border_colours_follow_validation() {
        let mut values = filled_form();
        values.client_name.clear();
        let validation = validate_payment_form(&values);
        assert_eq!(validation.border_color(FieldId::ClientName), Some(INVALID_BORDER));
        assert_eq!(validation.border_color(FieldId::Amount), Some(VALID_BORDER));
        assert_eq!(validation.border_color(FieldId::Description), None);
    }

    #[test]
    fn success_alerts_and_resets() {
        let (gateway, notifier, orchestrator) = orchestrator();
        let paid = Rc::new(Cell::new(false));
        let paid_flag = paid.clone();

        let request = orchestrator.submit(&filled_form(), move || paid_flag.set(true)).unwrap();
        assert_eq!(gateway.opened.borrow()[0], request);
        assert!(!paid.get());

        gateway.succeed("pay_29QQoUBi66xm2f");
        assert!(paid.get());
        assert_eq!(
            *notifier.alerts.borrow(),
            vec!["Payment successful! Payment ID: pay_29QQoUBi66xm2f".to_string()]
        );
    }

    #[test]
    fn failure_alerts_and_keeps_form() {
        let (gateway, notifier, orchestrator) = orchestrator();
        let paid = Rc::new(Cell::new(false));
        let paid_flag = paid.clone();

        orchestrator.submit(&filled_form(), move || paid_flag.set(true)).unwrap();
        gateway.fail("Your card was declined");

        assert!(!paid.get());
        assert_eq!(
            *notifier.alerts.borrow(),
            vec!["Payment failed: Your card was declined".to_string()]
        );
    }

    #[test]
    fn every_declined_retry_alerts() {
        let (gateway, notifier, orchestrator) = orchestrator();
        let paid = Rc::new(Cell::new(false));
        let paid_flag = paid.clone();

        orchestrator.submit(&filled_form(), move || paid_flag.set(true)).unwrap();
        gateway.fail("Your card was declined");
        gateway.fail("Insufficient funds");

        assert_eq!(
            *notifier.alerts.borrow(),
            vec![
                "Payment failed: Your card was declined".to_string(),
                "Payment failed: Insufficient funds".to_string(),
            ]
        );

        gateway.succeed("pay_after_retry");
        assert!(paid.get());
        assert_eq!(notifier.alerts.borrow().len(), 3);
    }

    #[test]
    fn missing_widget_is_reported() {
        let gateway = Rc::new(FakeGateway {
            unavailable: true,
            ..FakeGateway::default()
        });
        let notifier = Rc::new(RecordingNotifier::default());
        let orchestrator = CheckoutOrchestrator::new(gateway, notifier.clone());

        let err = orchestrator.submit(&filled_form(), || {}).unwrap_err();
        assert_eq!(err, SiteError::ConfigurationMissing("Razorpay checkout"));
        assert!(notifier.alerts.borrow().is_empty());
    }
}
