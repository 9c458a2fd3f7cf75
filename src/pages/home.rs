use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{LazyImage, Reveal};
use crate::nav::AnchorLink;
use crate::payment::pricing::ServiceCategory;
use crate::Route;

const VALUES: [(&str, &str); 3] = [
    ("Integrity", "Straight answers on tax, money and compliance, even when they are not the easy ones."),
    ("Expertise", "Chartered accountants, lawyers and planners working on the same file."),
    ("Partnership", "One point of contact who knows your business from year to year."),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <section class="hero">
                <div class="hero-content">
                    <h1>{"Financial clarity for growing businesses"}</h1>
                    <p>{"Tax, accounting, compliance and advisory from a single trusted partner."}</p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Contact} classes="btn btn-primary">
                            {"Book a consultation"}
                        </Link<Route>>
                        <AnchorLink target="services-overview" class="btn btn-secondary">
                            {"Explore services"}
                        </AnchorLink>
                    </div>
                </div>
                <LazyImage src="/assets/hero-office.jpg" alt="Fingard Partners office" class="hero-image" />
            </section>

            <section id="services-overview" class="section">
                <h2 class="section-title">{"What we do"}</h2>
                <div class="services-grid">
                    { for ServiceCategory::ALL.into_iter()
                        .filter(|category| *category != ServiceCategory::Custom)
                        .enumerate()
                        .map(|(index, category)| html! {
                            <Reveal {index} class="service-card">
                                <h3>{category.label()}</h3>
                                <p>{category.blurb()}</p>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <section class="section section-alt">
                <h2 class="section-title">{"Why clients stay with us"}</h2>
                <div class="values-grid">
                    { for VALUES.into_iter().enumerate().map(|(index, (title, text))| html! {
                        <Reveal {index} class="value-card">
                            <h3>{title}</h3>
                            <p>{text}</p>
                        </Reveal>
                    }) }
                </div>
            </section>
        </>
    }
}
