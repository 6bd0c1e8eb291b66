use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::scroll::{ScrollAction, ScrollTracker};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let tracker = use_reducer(ScrollTracker::default);

    {
        let tracker = tracker.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                tracker.dispatch(ScrollAction::Moved(offset));
            }
        });
    }

    let hidden = !tracker.visibility.is_visible();

    html! {
        <nav class={classes!("top-nav", hidden.then(|| "hidden"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 1rem;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        margin: 0 auto;
                        height: 5rem;
                        max-width: 900px;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(16px);
                        border-radius: 9999px;
                        transition: top 0.15s ease-in-out;
                    }
                    .top-nav.hidden {
                        top: -5rem;
                    }
                    .nav-content {
                        display: flex;
                        height: 100%;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        font-family: 'Poppins', sans-serif;
                    }
                    .nav-link {
                        width: 6rem;
                        text-align: center;
                        font-size: 1.125rem;
                        color: #e5e7eb;
                        text-decoration: none;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .nav-logo img {
                        height: 3rem;
                        width: auto;
                        margin: 0 2rem;
                    }
                    @media (max-width: 768px) {
                        .top-nav {
                            top: 0;
                            border-radius: 0;
                        }
                        .nav-link {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#home" class="nav-link">{"Home"}</a>
                <a href="#about" class="nav-link">{"About"}</a>
                <a href="#home" class="nav-logo">
                    <img src="/resources/logos/OG-logo-white.png" alt="Origin Golf Logo" width="256" height="62" />
                </a>
                <a href="#process" class="nav-link">{"Process"}</a>
                <a href="#contact" class="nav-link">{"Contact"}</a>
            </div>
        </nav>
    }
}
