use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};

pub struct ProcessStep {
    pub heading: &'static str,
    pub content: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub reverse: bool,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        heading: "Designing",
        content: "Computer models, from simple to high complex assemblies, allow clients to see \
                  their product in a 3D view, allowing them to discover the weight of the \
                  finished putter in various materials, which is critical in the golf industry.",
        image: "/resources/pictures/01.jpg",
        alt: "A computer model of a putter",
        reverse: false,
    },
    ProcessStep {
        heading: "Prototyping",
        content: "Prototypes are available as quick and inexpensive SLA plastic models to exact \
                  functioning milled models. Milled putters can be produced using a variety of \
                  avenues including 100% milled designs from a block of material, milling from \
                  forgings, and/or castings.",
        image: "/resources/pictures/02.jpg",
        alt: "A prototype of a putter",
        reverse: true,
    },
    ProcessStep {
        heading: "CNC Milling",
        content: "Our passion for technology keeps us current with the latest performance \
                  methods and our experience with high-end putter production is unmatched in \
                  the industry. Every detail is flawlessly milled from the putter itself to the \
                  engraving and face mill design work.",
        image: "/resources/pictures/03.jpg",
        alt: "A Peterson Fine Mill putter",
        reverse: false,
    },
    ProcessStep {
        heading: "Production",
        content: "We are located in one of the largest golf manufacturing areas in the world and \
                  work closely with other vendors who serve in finishing the product, making the \
                  production process seamless from start to finish.",
        image: "/resources/pictures/04.jpg",
        alt: "An assortment of putters",
        reverse: true,
    },
];

fn render_step(step: &ProcessStep) -> Html {
    let from = if step.reverse { RevealFrom::Right } else { RevealFrom::Left };
    html! {
        <Reveal
            {from}
            class={classes!("process-step", step.reverse.then(|| "reverse"))}
        >
            <img src={step.image} alt={step.alt} width="1000" height="1000" />
            <div class="process-copy">
                <h3>{step.heading}</h3>
                <p>{step.content}</p>
            </div>
        </Reveal>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="process">
            <style>
                {r#"
                    .process {
                        width: 100%;
                        background: #000;
                        padding: 8rem 0;
                        color: #fff;
                    }
                    .process-heading {
                        margin: 0 auto 4rem;
                        max-width: 600px;
                        padding: 0 1rem;
                        text-align: center;
                        font-size: 3rem;
                        font-weight: 500;
                        letter-spacing: -0.025em;
                    }
                    .process-step {
                        margin: 0 auto 4rem;
                        display: flex;
                        max-width: 900px;
                        align-items: center;
                        gap: 2.5rem;
                        overflow-x: hidden;
                    }
                    .process-step.reverse {
                        flex-direction: row-reverse;
                    }
                    .process-step img {
                        width: 16rem;
                        height: 16rem;
                        border-radius: 9999px;
                        border: 2px solid #111827;
                        object-fit: cover;
                        margin-bottom: 1rem;
                    }
                    .process-copy {
                        padding: 0 0.5rem;
                    }
                    .process-copy h3 {
                        margin-bottom: 1rem;
                        font-size: 3rem;
                        letter-spacing: -0.05em;
                    }
                    .process-copy p {
                        font-size: 1.125rem;
                        font-weight: 300;
                        line-height: 1.75rem;
                    }
                    @media (max-width: 1024px) {
                        .process-step,
                        .process-step.reverse {
                            flex-direction: column;
                            max-width: 600px;
                        }
                    }
                "#}
            </style>
            <Reveal class={classes!("process-heading")}>
                <h2>{"We take care of every step of the process"}</h2>
            </Reveal>
            { for PROCESS_STEPS.iter().map(render_step) }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_steps_in_production_order() {
        let headings: Vec<_> = PROCESS_STEPS.iter().map(|step| step.heading).collect();
        assert_eq!(headings, ["Designing", "Prototyping", "CNC Milling", "Production"]);
    }

    #[test]
    fn layout_alternates_direction() {
        for (index, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.reverse, index % 2 == 1, "{}", step.heading);
        }
    }
}
