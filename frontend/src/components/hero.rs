use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header id="home" class="hero">
            <style>
                {r#"
                    .hero {
                        display: flex;
                        height: 100vh;
                        width: 100%;
                        background-color: #000;
                        background-image: url('/resources/backgrounds/suite-2.jpg');
                        background-size: cover;
                        background-attachment: fixed;
                    }
                    .hero-card {
                        margin: auto;
                        width: 100%;
                        max-width: 600px;
                        background: #000;
                        padding: 0 1rem;
                        text-align: center;
                        color: #fff;
                    }
                    .hero-card h2 {
                        margin-top: 3rem;
                        font-size: 3rem;
                        font-weight: 300;
                        line-height: 60px;
                        letter-spacing: -0.025em;
                    }
                    .hero-chevron {
                        display: block;
                        margin: 1rem auto 2.5rem;
                        fill: #9ca3af;
                        transition: fill 0.15s;
                    }
                    .hero-chevron:hover {
                        fill: #fff;
                    }
                    @media (max-width: 640px) {
                        .hero-card h2 {
                            font-size: 1.875rem;
                            line-height: normal;
                        }
                    }
                "#}
            </style>
            <Reveal from={RevealFrom::Above} class={classes!("hero-card")}>
                <h2>{"Decades of experience designing and manufacturing finely milled golf putters."}</h2>
                <a href="#about" aria-label="Read about us">
                    <svg
                        class="hero-chevron"
                        xmlns="http://www.w3.org/2000/svg"
                        height="48px"
                        width="48px"
                        viewBox="0 -960 960 960"
                    >
                        <path d="M480-345 240-585l56-56 184 184 184-184 56 56-240 240Z" />
                    </svg>
                </a>
            </Reveal>
        </header>
    }
}
