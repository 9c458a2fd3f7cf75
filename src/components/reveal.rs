use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Cards fade in once a tenth of them is on screen, slightly before the bottom edge.
pub const REVEAL: ObserveOptions = ObserveOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

pub const LAZY_LOAD: ObserveOptions = ObserveOptions {
    threshold: 0.0,
    root_margin: "0px",
};

pub fn animation_delay(index: usize) -> String {
    format!("animation-delay: {}s;", index as f64 / 10.0)
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    options: ObserveOptions,
    on_visible: impl Fn() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                observer.unobserve(&entry.target());
                on_visible();
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// True once the referenced element has entered the viewport.
#[hook]
pub fn use_first_intersection(node: NodeRef, options: ObserveOptions) -> bool {
    let seen = use_state(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |(node, options): &(NodeRef, ObserveOptions)| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, *options, move || seen.set(true)));
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (node, options),
        );
    }

    *seen
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_first_intersection(node.clone(), REVEAL);

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), visible.then_some("fade-in-up"))}
            style={animation_delay(props.index)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let loaded = use_first_intersection(node.clone(), LAZY_LOAD);

    if loaded {
        html! { <img ref={node} src={props.src.clone()} alt={props.alt.clone()} class={props.class.clone()} /> }
    } else {
        html! {
            <img
                ref={node}
                data-src={props.src.clone()}
                alt={props.alt.clone()}
                class={classes!(props.class.clone(), "lazy")}
            />
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_steps_by_a_tenth_of_a_second() {
        assert_eq!(animation_delay(0), "animation-delay: 0s;");
        assert_eq!(animation_delay(3), "animation-delay: 0.3s;");
        assert_eq!(animation_delay(12), "animation-delay: 1.2s;");
    }
}
