use yew::prelude::*;

use crate::components::payment_form::PaymentForm;

#[function_component(Payment)]
pub fn payment() -> Html {
    html! {
        <>
            <section class="page-header">
                <h1>{"Pay Online"}</h1>
                <p>{"Choose a service, check the GST-inclusive total, and pay securely."}</p>
            </section>
            <section class="section">
                <PaymentForm />
            </section>
        </>
    }
}
