use std::rc::Rc;

use log::warn;

use crate::payment::checkout::{CheckoutGateway, CheckoutOrchestrator, Notifier};
use crate::payment::razorpay::RazorpayGateway;

pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                let _ = window.alert_with_message(message);
            }
            None => warn!("No window to show alert: {}", message),
        }
    }
}

/// Page-wide capabilities, built once in `App` and handed down through a
/// `ContextProvider`.
#[derive(Clone)]
pub struct PageContext {
    pub gateway: Rc<dyn CheckoutGateway>,
    pub notifier: Rc<dyn Notifier>,
}

impl PageContext {
    pub fn new(gateway: Rc<dyn CheckoutGateway>, notifier: Rc<dyn Notifier>) -> Self {
        Self { gateway, notifier }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(RazorpayGateway), Rc::new(BrowserNotifier))
    }

    pub fn checkout(&self) -> CheckoutOrchestrator {
        CheckoutOrchestrator::new(self.gateway.clone(), self.notifier.clone())
    }
}

impl PartialEq for PageContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.gateway, &other.gateway) && Rc::ptr_eq(&self.notifier, &other.notifier)
    }
}
