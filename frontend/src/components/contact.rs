use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::contact::captcha::{CaptchaEvent, ReCaptcha};
use crate::contact::form::{Field, FieldErrors};
use crate::contact::relay::send_email;
use crate::contact::state::{ContactAction, ContactState, DispatchGate, DispatchStatus, SubmitPlan};

fn field_error(errors: &FieldErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

fn status_banner(status: &DispatchStatus) -> Html {
    match status {
        DispatchStatus::Sent => html! {
            <h3 class="contact-sent">{"Your message has been sent!"}</h3>
        },
        DispatchStatus::Failed(_) => html! {
            <h3 class="contact-failed">{"Your message could not be sent. Please try again."}</h3>
        },
        DispatchStatus::Idle | DispatchStatus::Sending => html! {},
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let state = use_reducer(ContactState::default);
    let gate = use_mut_ref(DispatchGate::default);

    // Start every visit without a verification token.
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                state.dispatch(ContactAction::Captcha(CaptchaEvent::Cleared));
                || ()
            },
            (),
        );
    }

    let on_input = |field: Field| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ContactAction::Edit(field, input.value()));
        })
    };

    let on_message_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(ContactAction::Edit(Field::Message, textarea.value()));
        })
    };

    let on_captcha = {
        let state = state.clone();
        Callback::from(move |event: CaptchaEvent| {
            state.dispatch(ContactAction::Captcha(event));
        })
    };

    let onsubmit = {
        let state = state.clone();
        let gate = gate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match state.plan_submit() {
                SubmitPlan::InFlight => debug!("Submit ignored, message already sending"),
                SubmitPlan::Blocked(errors) => {
                    let invalid: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
                    debug!("Contact form rejected, invalid fields: {:?}", invalid);
                    state.dispatch(ContactAction::Rejected(errors));
                }
                SubmitPlan::Dispatch(payload) => {
                    if !gate.borrow_mut().try_acquire() {
                        debug!("Submit ignored, message already sending");
                        return;
                    }
                    state.dispatch(ContactAction::DispatchStarted);
                    let state = state.clone();
                    let gate = gate.clone();
                    spawn_local(async move {
                        let result = send_email(&payload).await;
                        if let Err(e) = &result {
                            error!("Contact message not delivered: {}", e);
                        }
                        gate.borrow_mut().release();
                        state.dispatch(ContactAction::DispatchSettled(result));
                    });
                }
            }
        })
    };

    let sending = state.status.is_sending();

    html! {
        <section id="contact" class="contact">
            <style>
                {r#"
                    .contact {
                        width: 100%;
                        background: #000;
                        padding: 8rem 0;
                        font-family: 'Poppins', sans-serif;
                    }
                    .contact-header {
                        margin-bottom: 2rem;
                        text-align: center;
                    }
                    .contact-header h2 {
                        margin: 0 auto 0.5rem;
                        max-width: 600px;
                        font-size: 3rem;
                        font-weight: 500;
                        letter-spacing: -0.025em;
                        color: #fff;
                    }
                    .contact-sent {
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #22c55e;
                    }
                    .contact-failed {
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #dc2626;
                    }
                    .contact-form {
                        margin: 0 auto;
                        max-width: 600px;
                        padding: 0 0.5rem;
                    }
                    .contact-row {
                        display: flex;
                        gap: 1rem;
                    }
                    .contact-field {
                        flex-grow: 1;
                        margin-bottom: 1rem;
                    }
                    .contact-field h4 {
                        margin-bottom: 0.25rem;
                        font-size: 1.125rem;
                        color: #fff;
                    }
                    .contact-field input,
                    .contact-field textarea {
                        width: 100%;
                        padding: 0.5rem;
                        background: #f8fafc;
                        color: #0f172a;
                        box-sizing: border-box;
                    }
                    .field-error {
                        margin-top: 0.25rem;
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: #dc2626;
                    }
                    .contact-actions {
                        display: flex;
                        justify-content: space-between;
                        min-height: 8rem;
                    }
                    .contact-submit {
                        height: 76px;
                        padding: 0 2rem;
                        background: #475569;
                        color: #f8fafc;
                        border: none;
                        cursor: pointer;
                    }
                    .contact-submit:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .submit-label {
                        visibility: hidden;
                    }
                    @media (max-width: 640px) {
                        .contact-row,
                        .contact-actions {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
            <div class="contact-header">
                <Reveal>
                    <h2>{"Contact us"}</h2>
                </Reveal>
                { status_banner(&state.status) }
            </div>
            <form class="contact-form" {onsubmit} novalidate={true}>
                <div class="contact-row">
                    <div class="contact-field">
                        <h4>{"Name"}</h4>
                        <input
                            placeholder="Tiger Woods"
                            value={state.submission.name.clone()}
                            oninput={on_input(Field::Name)}
                        />
                        { field_error(&state.errors, Field::Name) }
                    </div>
                    <div class="contact-field">
                        <h4>{"Email"}</h4>
                        <input
                            placeholder="example@gmail.com"
                            value={state.submission.email.clone()}
                            oninput={on_input(Field::Email)}
                        />
                        { field_error(&state.errors, Field::Email) }
                    </div>
                </div>
                <div class="contact-field">
                    <h4>{"Message"}</h4>
                    <textarea
                        placeholder="Hello..."
                        rows="12"
                        value={state.submission.message.clone()}
                        oninput={on_message_input}
                    />
                    { field_error(&state.errors, Field::Message) }
                </div>
                <div class="contact-actions">
                    <div class="contact-field">
                        <h4>{"Verify"}</h4>
                        <ReCaptcha on_change={on_captcha} />
                        { field_error(&state.errors, Field::Token) }
                    </div>
                    <div class="contact-field">
                        <h4 class="submit-label">{"Submit"}</h4>
                        <button class="contact-submit" type="submit" disabled={sending}>
                            { if sending { "Sending..." } else { "Submit" } }
                        </button>
                    </div>
                </div>
            </form>
        </section>
    }
}
