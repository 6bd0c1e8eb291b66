use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::process::Process;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing-page">
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        background: #000;
                        font-family: 'Poppins', sans-serif;
                    }
                    .landing-page {
                        position: relative;
                        overflow-x: hidden;
                    }
                    .reveal {
                        transition: opacity 0.4s ease-in-out, transform 0.4s ease-in-out;
                    }
                    .reveal-fade {
                        opacity: 0;
                    }
                    .reveal-above {
                        opacity: 0;
                        transform: translateY(-25px);
                    }
                    .reveal-left {
                        opacity: 0.5;
                        transform: translateX(-25px);
                    }
                    .reveal-right {
                        opacity: 0;
                        transform: translateX(25px);
                    }
                    .reveal.revealed {
                        opacity: 1;
                        transform: none;
                    }
                "#}
            </style>
            <Navbar />
            <Hero />
            <About />
            <Process />
            <Contact />
            <Footer />
        </main>
    }
}
