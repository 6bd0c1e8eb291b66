use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <style>
                {r#"
                    .about {
                        position: relative;
                        width: 100%;
                        background: #000;
                        padding: 8rem 0;
                    }
                    .about-inner {
                        position: relative;
                        margin: 0 auto;
                        width: 900px;
                        height: 700px;
                    }
                    .about-copy {
                        position: absolute;
                        top: 12rem;
                        right: 0;
                        z-index: 20;
                        max-width: 600px;
                        padding: 0 0.5rem;
                        color: #fff;
                        font-weight: 300;
                    }
                    .about-copy h3 {
                        margin-bottom: 0.5rem;
                        font-size: 3rem;
                        font-weight: 500;
                        letter-spacing: -0.025em;
                    }
                    .about-copy p {
                        font-size: 1.125rem;
                        line-height: 2rem;
                        margin-bottom: 3rem;
                    }
                    .about-image {
                        position: absolute;
                        top: 0;
                        z-index: 10;
                    }
                    .about-image img {
                        width: 100%;
                        max-width: 600px;
                        aspect-ratio: 1;
                    }
                    @media (max-width: 1024px) {
                        .about {
                            padding: 4rem 1rem 8rem;
                        }
                        .about-inner {
                            width: fit-content;
                            height: auto;
                        }
                        .about-copy {
                            position: relative;
                            top: 0;
                        }
                        .about-image img {
                            transform: rotate(90deg);
                        }
                    }
                "#}
            </style>
            <div class="about-inner">
                <Reveal from={RevealFrom::Right} class={classes!("about-copy")}>
                    <h3>{"Who we are"}</h3>
                    <p>
                        {"Origin Golf is a milled putter design and CNC machine production studio. \
                          We turn ideas into conceptual designs and fulfill production based on the \
                          needs and desires of each individual client."}
                    </p>
                    <h3>{"Kevin Peterson"}</h3>
                    <p>
                        {"Kevin Peterson, owner of Origin Golf, has been exclusively milling fine \
                          putters for almost 30 years and has produced a greater variety of styles \
                          than probably anyone else in the industry. He offers focused service for \
                          each of his clients and they appreciate the rare talent and experience he \
                          possesses. From the designing and prototyping aspects, to the precise \
                          quality of the finished machined products, Origin Golf offers matchless \
                          quality and experience in milling high-end golf putters."}
                    </p>
                </Reveal>
                <Reveal from={RevealFrom::Left} class={classes!("about-image")}>
                    <img src="/resources/images/putter.jpg" alt="Image of a putter" width="600" height="600" />
                </Reveal>
            </div>
        </section>
    }
}
