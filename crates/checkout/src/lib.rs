//! Checkout flow controller: pricing → order form → thank-you.
//!
//! The controller owns the step and the selected plan. Every transition is
//! synchronous and returns the view effect the caller should apply. The only
//! asynchronous part of checkout, delivering the order, happens outside
//! between [`CheckoutFlow::begin_submission`] and
//! [`CheckoutFlow::finish_submission`].

use std::time::Duration;

use shared::{
    domain::Step,
    protocol::{CheckoutSnapshot, SubmissionResult},
};
use thiserror::Error;
use tracing::debug;

/// Delay before scrolling after a plan pick, so the form view renders first.
pub const PLAN_SELECT_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Shown inline when a failed submission carries no message.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ScrollToTop { delay: Duration },
}

impl Effect {
    fn scroll_now() -> Self {
        Effect::ScrollToTop {
            delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutState {
    pub step: Step,
    pub selected_plan: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot {action} from the {step} step")]
    InvalidStep { action: &'static str, step: Step },
    #[error("plan identifier must not be empty")]
    EmptyPlan,
    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

/// Proof that a submission was started. Navigation away from the form
/// invalidates outstanding tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The order went through and the flow moved to the thank-you step.
    Completed(Effect),
    /// The flow stays on the form with an inline error.
    Failed,
    /// The visitor navigated away while the order was in flight.
    Discarded,
}

#[derive(Debug, Clone, Default)]
pub struct CheckoutFlow {
    state: CheckoutState,
    submitting: bool,
    generation: u64,
    last_error: Option<String>,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn selected_plan(&self) -> &str {
        &self.state.selected_plan
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn snapshot(&self) -> CheckoutSnapshot {
        CheckoutSnapshot {
            step: self.state.step,
            selected_plan: self.state.selected_plan.clone(),
            submitting: self.submitting,
            error: self.last_error.clone(),
        }
    }

    /// `pricing → form`. The plan is any non-empty token; it is not checked
    /// against the catalog.
    pub fn select_plan(&mut self, plan: impl Into<String>) -> Result<Effect, TransitionError> {
        self.expect_step(Step::Pricing, "select a plan")?;
        let plan = plan.into();
        if plan.trim().is_empty() {
            return Err(TransitionError::EmptyPlan);
        }

        debug!(%plan, "plan selected");
        self.state.selected_plan = plan;
        self.state.step = Step::Form;
        self.last_error = None;
        Ok(Effect::ScrollToTop {
            delay: PLAN_SELECT_SCROLL_DELAY,
        })
    }

    /// `form → pricing`, keeping the selected plan.
    pub fn back(&mut self) -> Result<Effect, TransitionError> {
        self.expect_step(Step::Form, "go back")?;
        self.abandon_submission();
        self.state.step = Step::Pricing;
        self.last_error = None;
        debug!(plan = %self.state.selected_plan, "returned to pricing");
        Ok(Effect::scroll_now())
    }

    /// `* → pricing`, clearing the selected plan.
    pub fn go_home(&mut self) -> Effect {
        self.abandon_submission();
        self.state = CheckoutState::default();
        self.last_error = None;
        debug!("returned home");
        Effect::scroll_now()
    }

    /// Marks the form as submitting. Fails when not on the form or when
    /// another submission from this session has not finished yet.
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, TransitionError> {
        self.expect_step(Step::Form, "submit an order")?;
        if self.submitting {
            return Err(TransitionError::SubmissionInFlight);
        }
        self.submitting = true;
        self.last_error = None;
        Ok(SubmissionTicket {
            generation: self.generation,
        })
    }

    /// Applies the gateway result for `ticket`. This is the only way into
    /// the thank-you step.
    pub fn finish_submission(
        &mut self,
        ticket: SubmissionTicket,
        result: &SubmissionResult,
    ) -> SubmissionOutcome {
        if !self.submitting || ticket.generation != self.generation {
            debug!("discarding result of an abandoned submission");
            return SubmissionOutcome::Discarded;
        }
        self.submitting = false;

        if result.success {
            self.state.step = Step::ThankYou;
            self.last_error = None;
            SubmissionOutcome::Completed(Effect::scroll_now())
        } else {
            let message = result
                .error
                .clone()
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            self.last_error = Some(message);
            SubmissionOutcome::Failed
        }
    }

    fn abandon_submission(&mut self) {
        self.submitting = false;
        self.generation = self.generation.wrapping_add(1);
    }

    fn expect_step(&self, expected: Step, action: &'static str) -> Result<(), TransitionError> {
        if self.state.step == expected {
            Ok(())
        } else {
            Err(TransitionError::InvalidStep {
                action,
                step: self.state.step,
            })
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
