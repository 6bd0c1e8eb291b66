use std::rc::Rc;

use yew::prelude::*;

use crate::contact::captcha::CaptchaEvent;
use crate::contact::form::{validate, ContactSubmission, Field, FieldErrors, TOKEN_REQUIRED};
use crate::contact::relay::{DispatchError, RelayPayload};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DispatchStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(DispatchError),
}

impl DispatchStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, DispatchStatus::Sending)
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, DispatchStatus::Sent)
    }
}

/// What a submit attempt should do given the current form.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitPlan {
    InFlight,
    Blocked(FieldErrors),
    Dispatch(RelayPayload),
}

/// Tracks a dispatch between the submit handler and the relay response.
/// Submits that arrive before the next render read a stale `ContactState`,
/// so the handler checks this gate as well.
#[derive(Debug, Default)]
pub struct DispatchGate {
    in_flight: bool,
}

impl DispatchGate {
    pub fn try_acquire(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn release(&mut self) {
        self.in_flight = false;
    }
}

pub enum ContactAction {
    Edit(Field, String),
    Captcha(CaptchaEvent),
    Rejected(FieldErrors),
    DispatchStarted,
    DispatchSettled(Result<(), DispatchError>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub submission: ContactSubmission,
    pub errors: FieldErrors,
    pub status: DispatchStatus,
}

impl ContactState {
    pub fn plan_submit(&self) -> SubmitPlan {
        if self.status.is_sending() {
            return SubmitPlan::InFlight;
        }
        let errors = validate(&self.submission);
        if !errors.is_empty() {
            return SubmitPlan::Blocked(errors);
        }
        match RelayPayload::from_submission(&self.submission) {
            Some(payload) => SubmitPlan::Dispatch(payload),
            None => {
                let mut errors = FieldErrors::default();
                errors.insert(Field::Token, TOKEN_REQUIRED);
                SubmitPlan::Blocked(errors)
            }
        }
    }

    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(Field::Token, _) => {
                // Only the captcha widget may write the token.
            }
            ContactAction::Edit(field, value) => self.submission.set(field, value),
            ContactAction::Captcha(event) => event.apply(&mut self.submission, &mut self.errors),
            ContactAction::Rejected(errors) => self.errors = errors,
            ContactAction::DispatchStarted => {
                if !self.status.is_sending() {
                    self.errors = FieldErrors::default();
                    self.status = DispatchStatus::Sending;
                }
            }
            ContactAction::DispatchSettled(Ok(())) => {
                self.status = DispatchStatus::Sent;
                self.submission.clear_typed_fields();
            }
            ContactAction::DispatchSettled(Err(e)) => {
                self.status = DispatchStatus::Failed(e);
            }
        }
    }
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
