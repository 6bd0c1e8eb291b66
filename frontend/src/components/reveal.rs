use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum RevealFrom {
    #[default]
    Fade,
    Above,
    Left,
    Right,
}

impl RevealFrom {
    fn class(self) -> &'static str {
        match self {
            RevealFrom::Fade => "reveal-fade",
            RevealFrom::Above => "reveal-above",
            RevealFrom::Left => "reveal-left",
            RevealFrom::Right => "reveal-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub from: RevealFrom,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    on_visible: impl Fn() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if intersecting {
                on_visible();
                observer.disconnect();
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    observer.observe(element);
    Some((observer, callback))
}

/// Plays its entrance transition the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let observation = node.cast::<Element>().and_then(|element| {
                    let revealed = revealed.clone();
                    observe_once(&element, move || revealed.set(true))
                });
                if observation.is_none() {
                    debug!("IntersectionObserver unavailable, revealing immediately");
                    revealed.set(true);
                }
                move || {
                    if let Some((observer, _callback)) = observation {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.from.class(),
                (*revealed).then(|| "revealed"),
                props.class.clone()
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
