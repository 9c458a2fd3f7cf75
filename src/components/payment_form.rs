use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::context::PageContext;
use crate::error::SiteError;
use crate::forms::validation::FieldId;
use crate::payment::checkout::validate_payment_form;
use crate::payment::form::{PaymentAction, PaymentState};
use crate::payment::pricing::{price_for, ServiceCategory};
use crate::payment::summary::format_inr;

#[function_component(PaymentForm)]
pub fn payment_form() -> Html {
    let page = use_context::<PageContext>();
    let state = use_reducer(PaymentState::default);
    let amount_ref = use_node_ref();

    {
        let amount_ref = amount_ref.clone();
        use_effect_with_deps(
            move |requests| {
                if *requests > 0 {
                    if let Some(input) = amount_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                }
                || ()
            },
            state.amount_focus_requests,
        );
    }

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(page) = page.as_ref() else {
                warn!("Payment form rendered without a page context, checkout disabled");
                return;
            };

            state.dispatch(PaymentAction::Validated(validate_payment_form(&state.values)));

            let dispatcher = state.dispatcher();
            let on_paid = move || dispatcher.dispatch(PaymentAction::Reset);
            match page.checkout().submit(&state.values, on_paid) {
                Ok(request) => info!("Checkout opened: {}", request.description),
                Err(SiteError::ConfigurationMissing(what)) => {
                    warn!("{} missing, payment form inactive", what)
                }
                Err(e) => info!("Payment form not submitted: {}", e),
            }
        })
    };

    let oninput = |field: FieldId| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                input.value()
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                area.value()
            } else {
                return;
            };
            dispatcher.dispatch(PaymentAction::Edit(field, value));
        })
    };

    let onchange_service = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(PaymentAction::SelectService(select.value()));
        })
    };

    let service_options = ServiceCategory::ALL.into_iter().map(|category| {
        let label = match price_for(category) {
            Some(price) => format!("{} ({})", category.label(), format_inr(price as f64)),
            None => category.label().to_string(),
        };
        html! {
            <option value={category.key()} selected={state.values.service_type == category.key()}>
                {label}
            </option>
        }
    });

    html! {
        <div class="payment-layout">
            <form id="payment-form" class="payment-form" {onsubmit} novalidate=true>
                <h3>{"Client Details"}</h3>
                <div class="form-group">
                    <label for="client-name">{"Full Name *"}</label>
                    <input type="text" id="client-name" name="client-name" required=true
                        style={state.border_style(FieldId::ClientName)}
                        value={state.values.client_name.clone()}
                        oninput={oninput(FieldId::ClientName)} />
                </div>
                <div class="form-group">
                    <label for="client-email">{"Email *"}</label>
                    <input type="email" id="client-email" name="client-email" required=true
                        style={state.border_style(FieldId::ClientEmail)}
                        value={state.values.client_email.clone()}
                        oninput={oninput(FieldId::ClientEmail)} />
                </div>
                <div class="form-group">
                    <label for="client-phone">{"Phone *"}</label>
                    <input type="tel" id="client-phone" name="client-phone" required=true
                        style={state.border_style(FieldId::ClientPhone)}
                        value={state.values.client_phone.clone()}
                        oninput={oninput(FieldId::ClientPhone)} />
                </div>

                <h3>{"Service"}</h3>
                <div class="form-group">
                    <label for="service-type">{"Service *"}</label>
                    <select id="service-type" name="service-type" required=true
                        style={state.border_style(FieldId::ServiceType)}
                        onchange={onchange_service}>
                        <option value="" selected={state.values.service_type.is_empty()}>
                            {"Select a service"}
                        </option>
                        { for service_options }
                    </select>
                </div>
                <div class="form-group">
                    <label for="amount">{"Amount (₹) *"}</label>
                    <input type="number" id="amount" name="amount" min="1" step="any" required=true
                        ref={amount_ref}
                        style={state.border_style(FieldId::Amount)}
                        value={state.values.amount.clone()}
                        oninput={oninput(FieldId::Amount)} />
                </div>
                <div class="form-group">
                    <label for="description">{"Notes"}</label>
                    <textarea id="description" name="description" rows="3"
                        value={state.values.description.clone()}
                        oninput={oninput(FieldId::Description)} />
                </div>
                <button type="submit" class="btn btn-primary">{"Proceed to Pay"}</button>
            </form>

            <aside class="payment-summary">
                <h3>{"Payment Summary"}</h3>
                <div class="summary-row">
                    <span>{"Service Amount"}</span>
                    <span id="service-amount">{state.summary.display_base()}</span>
                </div>
                <div class="summary-row">
                    <span>{"GST (18%)"}</span>
                    <span id="gst-amount">{state.summary.display_tax()}</span>
                </div>
                <div class="summary-row total">
                    <span>{"Total"}</span>
                    <span id="total-amount">{state.summary.display_total()}</span>
                </div>
                <p class="secure-note">{"Payments are processed securely by Razorpay."}</p>
            </aside>
        </div>
    }
}
