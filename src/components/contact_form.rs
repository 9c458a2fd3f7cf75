use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::forms::contact::{ContactAction, ContactPhase, ContactState, SUBMIT_DELAY_MS, SUCCESS_DISPLAY_MS};
use crate::forms::errors::FieldError;
use crate::forms::validation::FieldId;
use crate::nav::scroll_into_view;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let state = use_reducer(ContactState::default);
    let success_ref = use_node_ref();

    // Timers live as long as the phase that started them
    {
        let dispatcher = state.dispatcher();
        let success_ref = success_ref.clone();
        use_effect_with_deps(
            move |phase| {
                let timeout = match phase {
                    ContactPhase::Submitting => Some(Timeout::new(SUBMIT_DELAY_MS, move || {
                        dispatcher.dispatch(ContactAction::SubmissionComplete);
                    })),
                    ContactPhase::Success => {
                        info!("Contact message sent");
                        if let Some(banner) = success_ref.cast::<Element>() {
                            scroll_into_view(&banner);
                        }
                        Some(Timeout::new(SUCCESS_DISPLAY_MS, move || {
                            dispatcher.dispatch(ContactAction::SuccessTimeout);
                        }))
                    }
                    ContactPhase::Idle | ContactPhase::Validating => None,
                };
                move || drop(timeout)
            },
            state.phase,
        );
    }

    let onsubmit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(ContactAction::Submit);
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
            dispatcher.dispatch(ContactAction::Edit(field, value));
        })
    };

    let onblur = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: FocusEvent| {
            let name = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                input.name()
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                area.name()
            } else {
                return;
            };
            if let Some(field) = FieldId::from_name(&name) {
                dispatcher.dispatch(ContactAction::Blur(field));
            }
        })
    };

    let success_style = if state.success_visible() {
        "display: block;"
    } else {
        "display: none;"
    };

    html! {
        <form id="contact-form" class="contact-form" {onsubmit} novalidate=true>
            <div class="form-group">
                <label for="name">{"Full Name"}</label>
                <input type="text" id="name" name="name"
                    value={state.values.name.clone()}
                    oninput={oninput(FieldId::Name)}
                    onblur={onblur.clone()} />
                <FieldError field={FieldId::Name} errors={state.errors.clone()} />
            </div>
            <div class="form-group">
                <label for="email">{"Email Address"}</label>
                <input type="email" id="email" name="email"
                    value={state.values.email.clone()}
                    oninput={oninput(FieldId::Email)}
                    onblur={onblur.clone()} />
                <FieldError field={FieldId::Email} errors={state.errors.clone()} />
            </div>
            <div class="form-group">
                <label for="phone">{"Phone Number"}</label>
                <input type="tel" id="phone" name="phone"
                    value={state.values.phone.clone()}
                    oninput={oninput(FieldId::Phone)}
                    onblur={onblur.clone()} />
                <FieldError field={FieldId::Phone} errors={state.errors.clone()} />
            </div>
            <div class="form-group">
                <label for="message">{"How can we help?"}</label>
                <textarea id="message" name="message" rows="5"
                    value={state.values.message.clone()}
                    oninput={oninput(FieldId::Message)}
                    onblur={onblur.clone()} />
                <FieldError field={FieldId::Message} errors={state.errors.clone()} />
            </div>
            <button type="submit" class="btn btn-primary" disabled={state.is_submitting()}>
                {state.submit_label()}
            </button>
            <div id="form-success" class="form-success" ref={success_ref} style={success_style}>
                {"Thank you! Your message has been sent. We'll get back to you within one business day."}
            </div>
        </form>
    }
}
