use log::warn;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Object, Reflect};

use crate::config;
use crate::error::SiteError;
use crate::payment::checkout::{
    CheckoutCallbacks, CheckoutGateway, CheckoutNotes, CheckoutRequest, PaymentFailure, PaymentReceipt,
    Prefill,
};

// Loaded from https://checkout.razorpay.com/v1/checkout.js in index.html
#[wasm_bindgen]
extern "C" {
    type Razorpay;

    #[wasm_bindgen(constructor, catch)]
    fn new(options: &JsValue) -> Result<Razorpay, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &Razorpay, event: &str, handler: &JsValue);

    #[wasm_bindgen(method)]
    fn open(this: &Razorpay);
}

#[derive(Serialize)]
struct Theme<'a> {
    color: &'a str,
}

#[derive(Serialize)]
struct RazorpayOptions<'a> {
    key: &'a str,
    amount: u64,
    currency: &'a str,
    name: &'a str,
    description: &'a str,
    image: &'a str,
    // orders are not created server-side
    order_id: &'a str,
    prefill: &'a Prefill,
    notes: &'a CheckoutNotes,
    theme: Theme<'a>,
}

#[derive(Deserialize)]
struct FailedPayment {
    error: PaymentFailure,
}

const UNAVAILABLE: &str = "Razorpay checkout";

/// Widget options for a request, minus the JS callbacks attached afterwards.
fn razorpay_options(request: &CheckoutRequest) -> RazorpayOptions<'_> {
    RazorpayOptions {
        key: config::get_razorpay_key(),
        amount: request.amount,
        currency: request.currency,
        name: request.name,
        description: &request.description,
        image: config::LOGO_DATA_URI,
        order_id: "",
        prefill: &request.prefill,
        notes: &request.notes,
        theme: Theme { color: request.theme_color },
    }
}

#[derive(Default)]
pub struct RazorpayGateway;

impl RazorpayGateway {
    fn is_loaded() -> bool {
        web_sys::window()
            .map(|window| Reflect::has(&window, &JsValue::from_str("Razorpay")).unwrap_or(false))
            .unwrap_or(false)
    }
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), SiteError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|_| SiteError::ConfigurationMissing(UNAVAILABLE))
}

impl CheckoutGateway for RazorpayGateway {
    fn open(&self, request: CheckoutRequest, callbacks: CheckoutCallbacks) -> Result<(), SiteError> {
        if !Self::is_loaded() {
            warn!("Razorpay script not loaded, cannot open checkout");
            return Err(SiteError::ConfigurationMissing(UNAVAILABLE));
        }

        let options = serde_wasm_bindgen::to_value(&razorpay_options(&request)).map_err(|e| {
            warn!("Failed to build checkout options: {}", e);
            SiteError::ConfigurationMissing(UNAVAILABLE)
        })?;

        let CheckoutCallbacks {
            on_success,
            on_failure,
            on_dismiss,
        } = callbacks;

        let handler = Closure::once_into_js(move |response: JsValue| {
            match serde_wasm_bindgen::from_value::<PaymentReceipt>(response) {
                Ok(receipt) => on_success(receipt),
                Err(e) => warn!("Unreadable payment response: {}", e),
            }
        });
        set(&options, "handler", &handler)?;

        let modal = Object::new();
        set(&modal, "ondismiss", &Closure::once_into_js(move || on_dismiss()))?;
        set(&options, "modal", &modal)?;

        let checkout = Razorpay::new(&options).map_err(|e| {
            warn!("Razorpay rejected the checkout options: {:?}", e);
            SiteError::ConfigurationMissing(UNAVAILABLE)
        })?;

        // fires again on every retry inside the open widget
        let failed = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            match serde_wasm_bindgen::from_value::<FailedPayment>(response) {
                Ok(failed) => on_failure(failed.error),
                Err(e) => warn!("Unreadable payment failure: {}", e),
            }
        });
        checkout.on("payment.failed", &failed.into_js_value());
        checkout.open();
        Ok(())
    }
}
