use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod context;
mod error;
mod nav;
mod forms {
    pub mod validation;
    pub mod errors;
    pub mod contact;
}
mod payment {
    pub mod pricing;
    pub mod summary;
    pub mod checkout;
    pub mod form;
    pub mod razorpay;
}
mod components {
    pub mod reveal;
    pub mod contact_form;
    pub mod payment_form;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod contact;
    pub mod payment;
}

use context::PageContext;
use nav::{Navbar, ScrollToTop};
use pages::{
    home::Home,
    services::Services,
    contact::Contact,
    payment::Payment,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
    #[at("/payment")]
    Payment,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Payment => {
            info!("Rendering Payment page");
            html! { <Payment /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <section class="page-header">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to home"}</Link<Route>>
                </section>
            }
        },
    }
}


#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-content">
                <span>{config::BUSINESS_NAME}</span>
                <span>{"Chartered accountants & financial advisors, Mumbai"}</span>
            </div>
        </footer>
    }
}


#[function_component]
fn App() -> Html {
    // Built once for the lifetime of the page
    let page = use_memo(|_| PageContext::browser(), ());

    html! {
        <ContextProvider<PageContext> context={(*page).clone()}>
            <style>
                {r#"
                    :root { --navy: #002147; --gold: #C19A6B; }
                    body { margin: 0; font-family: Poppins, sans-serif; color: #333; }
                    .navbar { position: fixed; top: 0; width: 100%; z-index: 100; background: transparent; transition: background 0.3s ease, box-shadow 0.3s ease; }
                    .navbar.scrolled { background: var(--navy); box-shadow: 0 2px 12px rgba(0, 0, 0, 0.2); }
                    .nav-container { display: flex; align-items: center; justify-content: space-between; max-width: 1200px; margin: 0 auto; padding: 1rem 2rem; }
                    .nav-logo { color: var(--gold); font-weight: 700; font-size: 1.4rem; text-decoration: none; }
                    .nav-menu { display: flex; gap: 2rem; list-style: none; margin: 0; padding: 0; }
                    .nav-link { color: #fff; text-decoration: none; }
                    .hamburger { display: none; background: none; border: none; cursor: pointer; }
                    .hamburger span { display: block; width: 25px; height: 3px; margin: 5px 0; background: #fff; transition: all 0.3s ease; }
                    @media (max-width: 768px) {
                        .hamburger { display: block; }
                        .nav-menu { position: fixed; left: -100%; top: 64px; flex-direction: column; width: 100%; background: var(--navy); padding: 2rem; transition: left 0.3s ease; }
                        .nav-menu.active { left: 0; }
                    }
                    .hero { min-height: 80vh; display: flex; align-items: center; justify-content: space-around; padding: 6rem 2rem 2rem; background: var(--navy); color: #fff; }
                    .hero-image { max-width: 40%; border-radius: 12px; }
                    .section { max-width: 1200px; margin: 0 auto; padding: 4rem 2rem; }
                    .section-alt { background: #f7f7f7; max-width: none; }
                    .page-header { padding: 8rem 2rem 3rem; text-align: center; background: var(--navy); color: #fff; }
                    .services-grid, .values-grid, .services-detail-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; }
                    .service-card, .value-card, .expertise-card, .service-detail-card, .feature-item { opacity: 0; padding: 1.5rem; border-radius: 12px; background: #fff; box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06); }
                    .fade-in-up { animation: fadeInUp 0.6s ease forwards; }
                    @keyframes fadeInUp { from { opacity: 0; transform: translateY(30px); } to { opacity: 1; transform: translateY(0); } }
                    .btn { display: inline-block; padding: 0.75rem 1.5rem; border-radius: 6px; border: none; cursor: pointer; text-decoration: none; }
                    .btn-primary { background: var(--gold); color: #fff; }
                    .btn-primary:disabled { opacity: 0.6; cursor: wait; }
                    .btn-secondary { background: transparent; color: var(--gold); border: 1px solid var(--gold); }
                    .form-group { display: flex; flex-direction: column; margin-bottom: 1rem; }
                    .form-group input, .form-group select, .form-group textarea { padding: 0.7rem; border: 1px solid #e0e0e0; border-radius: 6px; }
                    .error-message { color: #e74c3c; font-size: 0.85rem; margin-top: 0.3rem; }
                    .form-success { margin-top: 1rem; padding: 1rem; border-radius: 6px; background: #e8f8ee; color: #1e7e44; }
                    .payment-layout, .contact-layout { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
                    .payment-summary { padding: 1.5rem; border-radius: 12px; background: #f7f7f7; }
                    .summary-row { display: flex; justify-content: space-between; margin: 0.5rem 0; }
                    .summary-row.total { font-weight: 700; border-top: 1px solid #ddd; padding-top: 0.5rem; }
                    .scroll-to-top { position: fixed; right: 2rem; bottom: 2rem; opacity: 0; visibility: hidden; transition: opacity 0.3s ease; }
                    .scroll-to-top.visible { opacity: 1; visibility: visible; }
                    .lazy { opacity: 0; }
                    .footer { background: var(--navy); color: #fff; padding: 2rem; }
                    .footer-content { display: flex; justify-content: space-between; max-width: 1200px; margin: 0 auto; }
                "#}
            </style>
            <BrowserRouter>
                <Navbar />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
                <ScrollToTop />
            </BrowserRouter>
        </ContextProvider<PageContext>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
