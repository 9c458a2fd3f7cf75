use log::warn;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::Route;

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// The mobile menu never stays open on a desktop-width window.
pub fn menu_open_after_resize(open: bool, window_width: f64) -> bool {
    open && window_width <= MOBILE_BREAKPOINT
}

/// Inline style for each of the three hamburger bars; open turns them into an X.
pub fn hamburger_bar_style(index: usize, open: bool) -> &'static str {
    if !open {
        return "transform: none; opacity: 1;";
    }
    match index {
        0 => "transform: rotate(45deg) translate(5px, 5px);",
        1 => "opacity: 0;",
        _ => "transform: rotate(-45deg) translate(7px, -6px);",
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smoothly scrolls to the element with `id`; does nothing if it is absent.
pub fn scroll_to_id(id: &str) {
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    match target {
        Some(element) => scroll_into_view(&element),
        None => warn!("No element #{} to scroll to", id),
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page `#anchor` link that scrolls instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_id(&target);
        })
    };

    html! {
        <a href={format!("#{}", props.target)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let (window_width, _) = use_window_size();

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |width| {
                if !menu_open_after_resize(*menu_open, *width) {
                    menu_open.set(false);
                }
                || ()
            },
            window_width,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = [
        (Route::Home, "Home"),
        (Route::Services, "Services"),
        (Route::Contact, "Contact"),
        (Route::Payment, "Pay Online"),
    ];

    html! {
        <nav id="navbar" class={classes!("navbar", navbar_scrolled(scroll_y).then_some("scrolled"))}>
            <div class="nav-container">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Fingard Partners"}
                </Link<Route>>
                <ul id="nav-menu" class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                    { for links.into_iter().map(|(route, label)| html! {
                        <li class="nav-item" onclick={close_menu.clone()}>
                            <Link<Route> to={route} classes="nav-link">{label}</Link<Route>>
                        </li>
                    }) }
                </ul>
                <button id="hamburger" class="hamburger" onclick={toggle_menu}>
                    { for (0..3).map(|index| html! {
                        <span style={hamburger_bar_style(index, *menu_open)}></span>
                    }) }
                </button>
            </div>
        </nav>
    }
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top_button() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button
            id="scroll-to-top"
            class={classes!("scroll-to-top", scroll_top_visible(scroll_y).then_some("visible"))}
            {onclick}
        >
            {"↑"}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_turns_solid_past_fifty_pixels() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.5));
    }

    #[test]
    fn scroll_to_top_appears_past_three_hundred_pixels() {
        assert!(!scroll_top_visible(300.0));
        assert!(scroll_top_visible(301.0));
    }

    #[test]
    fn wide_window_closes_menu() {
        assert!(!menu_open_after_resize(true, 1024.0));
        assert!(menu_open_after_resize(true, 768.0));
        assert!(!menu_open_after_resize(false, 375.0));
    }

    #[test]
    fn hamburger_bars_form_a_cross_when_open() {
        assert_eq!(hamburger_bar_style(0, true), "transform: rotate(45deg) translate(5px, 5px);");
        assert_eq!(hamburger_bar_style(1, true), "opacity: 0;");
        assert_eq!(hamburger_bar_style(2, true), "transform: rotate(-45deg) translate(7px, -6px);");
        for index in 0..3 {
            assert_eq!(hamburger_bar_style(index, false), "transform: none; opacity: 1;");
        }
    }
}
