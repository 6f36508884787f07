use checkout::{SubmissionOutcome, TransitionError};
use content::{PlanCatalog, SiteCopy};
use lead_gateway::OrderGateway;
use shared::{
    domain::{Language, Step, TRIAL_PLAN},
    error::{ApiError, ErrorCode},
    protocol::{CheckoutSnapshot, OrderData, OrderDraft, PlanSummary, SubmissionResult},
};
use tracing::debug;
use uuid::Uuid;

use crate::sessions::SessionStore;

#[derive(Clone)]
pub struct ApiContext {
    pub sessions: SessionStore,
    pub gateway: OrderGateway,
}

pub fn list_plans(lang: Language) -> Vec<PlanSummary> {
    PlanCatalog::standard().summaries(lang)
}

/// Stateless order intake for API clients. The plan must be part of the
/// payload.
pub async fn submit_order(
    ctx: &ApiContext,
    draft: OrderDraft,
) -> Result<SubmissionResult, ApiError> {
    let order = OrderData::try_from(draft)?;
    Ok(ctx.gateway.submit(&order).await)
}

pub async fn checkout_snapshot(ctx: &ApiContext, session_id: Uuid) -> CheckoutSnapshot {
    ctx.sessions
        .with_session(session_id, |session| session.flow.snapshot())
        .await
}

/// Sets the session language, or flips it when `lang` is `None`.
pub async fn set_language(
    ctx: &ApiContext,
    session_id: Uuid,
    lang: Option<Language>,
) -> Language {
    ctx.sessions
        .with_session(session_id, |session| {
            session.language = lang.unwrap_or_else(|| session.language.toggle());
            session.language
        })
        .await
}

pub async fn select_plan(
    ctx: &ApiContext,
    session_id: Uuid,
    plan: String,
) -> Result<(), ApiError> {
    ctx.sessions
        .with_session(session_id, |session| {
            let effect = session.flow.select_plan(plan).map_err(transition_error)?;
            session.draft = OrderDraft::default();
            session.notice = None;
            session.pending_effect = Some(effect);
            Ok(())
        })
        .await
}

pub async fn go_back(ctx: &ApiContext, session_id: Uuid) -> Result<(), ApiError> {
    ctx.sessions
        .with_session(session_id, |session| {
            let effect = session.flow.back().map_err(transition_error)?;
            session.notice = None;
            session.pending_effect = Some(effect);
            Ok(())
        })
        .await
}

pub async fn go_home(ctx: &ApiContext, session_id: Uuid) {
    ctx.sessions
        .with_session(session_id, |session| {
            let effect = session.flow.go_home();
            session.draft = OrderDraft::default();
            session.notice = None;
            session.pending_effect = Some(effect);
        })
        .await
}

/// Submits the order form of a session.
///
/// The session lock is released while the gateway runs; the result is
/// applied afterwards through the submission ticket, so a visitor who
/// navigated away in the meantime gets [`SubmissionOutcome::Discarded`].
pub async fn submit_checkout(
    ctx: &ApiContext,
    session_id: Uuid,
    draft: OrderDraft,
) -> Result<SubmissionOutcome, ApiError> {
    let (ticket, order) = ctx
        .sessions
        .with_session(session_id, |session| {
            let copy = &SiteCopy::for_language(session.language).order;
            let plan = match session.flow.selected_plan() {
                "" => TRIAL_PLAN,
                plan => plan,
            };
            let order = OrderData::new(
                draft.name.as_str(),
                draft.phone.as_str(),
                Some(draft.device_key.clone()),
                Some(draft.mac_address.clone()),
                plan,
            );

            let order = match order {
                Ok(order) => order,
                Err(error) => {
                    if session.flow.step() == Step::Form {
                        session.draft = draft;
                        session.notice = Some(copy.missing_fields.to_string());
                    }
                    return Err(ApiError::from(error));
                }
            };

            let ticket = session.flow.begin_submission().map_err(|error| {
                if matches!(error, TransitionError::SubmissionInFlight) {
                    session.notice = Some(copy.in_flight.to_string());
                }
                transition_error(error)
            })?;
            session.draft = draft;
            session.notice = None;
            Ok((ticket, order))
        })
        .await?;

    let result = ctx.gateway.submit(&order).await;

    let outcome = ctx
        .sessions
        .with_session(session_id, |session| {
            let outcome = session.flow.finish_submission(ticket, &result);
            match &outcome {
                SubmissionOutcome::Completed(effect) => {
                    session.draft = OrderDraft::default();
                    session.notice = None;
                    session.pending_effect = Some(*effect);
                }
                SubmissionOutcome::Failed => session.notice = None,
                SubmissionOutcome::Discarded => {
                    debug!(session = %session_id, "submission result arrived after navigation");
                }
            }
            outcome
        })
        .await;
    Ok(outcome)
}

fn transition_error(error: TransitionError) -> ApiError {
    let code = match error {
        TransitionError::EmptyPlan => ErrorCode::Validation,
        TransitionError::InvalidStep { .. } | TransitionError::SubmissionInFlight => {
            ErrorCode::Conflict
        }
    };
    ApiError::new(code, error.to_string())
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
