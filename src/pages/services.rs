use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::payment::pricing::{price_for, ServiceCategory};
use crate::payment::summary::format_inr;
use crate::Route;

const FEATURES: [&str; 4] = [
    "Fixed, published fees",
    "Dedicated relationship manager",
    "Secure online payments",
    "Filing reminders for every deadline",
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <>
            <section class="page-header">
                <h1>{"Our Services"}</h1>
                <p>{"Transparent pricing. GST at 18% is added at checkout."}</p>
            </section>

            <section class="section">
                <div class="services-detail-grid">
                    { for ServiceCategory::ALL.into_iter().enumerate().map(|(index, category)| {
                        let price = match price_for(category) {
                            Some(price) => format!("from {}", format_inr(price as f64)),
                            None => "Quoted on request".to_string(),
                        };
                        html! {
                            <Reveal {index} class="service-detail-card">
                                <h3>{category.label()}</h3>
                                <p>{category.blurb()}</p>
                                <div class="service-price">{price}</div>
                                <Link<Route> to={Route::Payment} classes="btn btn-secondary">{"Pay now"}</Link<Route>>
                            </Reveal>
                        }
                    }) }
                </div>
            </section>

            <section class="section section-alt">
                <div class="features-list">
                    { for FEATURES.into_iter().enumerate().map(|(index, feature)| html! {
                        <Reveal {index} class="feature-item">{feature}</Reveal>
                    }) }
                </div>
            </section>
        </>
    }
}
