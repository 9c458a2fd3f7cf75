use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::reveal::Reveal;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <>
            <section class="page-header">
                <h1>{"Get in Touch"}</h1>
                <p>{"Tell us what you need and a partner will call you back."}</p>
            </section>
            <section class="section contact-layout">
                <div class="contact-details">
                    <Reveal index={0} class="expertise-card">
                        <h3>{"Office"}</h3>
                        <p>{"Fingard Partners, Nariman Point, Mumbai 400021"}</p>
                    </Reveal>
                    <Reveal index={1} class="expertise-card">
                        <h3>{"Hours"}</h3>
                        <p>{"Monday to Saturday, 9:30 to 18:30 IST"}</p>
                    </Reveal>
                </div>
                <ContactForm />
            </section>
        </>
    }
}
