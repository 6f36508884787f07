use super::*;
use async_trait::async_trait;
use lead_gateway::{GatewayConfig, LeadTransport, TransportError};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::sync::Notify;
use url::Url;

/// Succeeds, or fails with `fail_with`, once `gate` is opened.
struct ScriptedTransport {
    calls: AtomicUsize,
    fail_with: Option<String>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedTransport {
    fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_with: None,
            gate: None,
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::ok()
        }
    }

    fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::ok()
        }
    }
}

#[async_trait]
impl LeadTransport for ScriptedTransport {
    async fn deliver(
        &self,
        _endpoint: &Url,
        _fields: &[(&'static str, String)],
    ) -> Result<(), TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.fail_with {
            Some(message) => Err(TransportError::Other(message.clone())),
            None => Ok(()),
        }
    }
}

fn context(transport: Arc<ScriptedTransport>) -> ApiContext {
    let config = GatewayConfig::from_endpoint(
        Some("https://script.example.com/exec"),
        Duration::from_millis(1),
    )
    .expect("config");
    ApiContext {
        sessions: SessionStore::new(16, Language::En),
        gateway: OrderGateway::with_transport(config, transport),
    }
}

fn demo_context() -> ApiContext {
    let config = GatewayConfig::from_endpoint(None, Duration::ZERO).expect("config");
    ApiContext {
        sessions: SessionStore::new(16, Language::Fr),
        gateway: OrderGateway::new(config),
    }
}

fn draft(name: &str, phone: &str) -> OrderDraft {
    OrderDraft {
        name: name.into(),
        phone: phone.into(),
        ..OrderDraft::default()
    }
}

#[test]
fn plan_listing_hides_the_trial() {
    let plans = list_plans(Language::En);
    assert_eq!(plans.len(), 3);
    assert!(plans.iter().all(|plan| plan.id != TRIAL_PLAN));
    assert!(plans.iter().any(|plan| plan.popular));
}

#[tokio::test]
async fn stateless_order_requires_name_phone_and_plan() {
    let ctx = demo_context();
    let err = submit_order(&ctx, draft("Alice", ""))
        .await
        .expect_err("phone missing");
    assert_eq!(err.code, ErrorCode::Validation);

    let err = submit_order(&ctx, draft("Alice", "0600000000"))
        .await
        .expect_err("plan missing");
    assert_eq!(err.code, ErrorCode::Validation);

    let mut complete = draft("Alice", "0600000000");
    complete.plan = "6months-1device".into();
    let result = submit_order(&ctx, complete).await.expect("submitted");
    assert!(result.success);
}

#[tokio::test]
async fn language_toggles_without_an_explicit_choice() {
    let ctx = demo_context();
    let id = Uuid::new_v4();
    assert_eq!(set_language(&ctx, id, None).await, Language::En);
    assert_eq!(set_language(&ctx, id, None).await, Language::Fr);
    assert_eq!(set_language(&ctx, id, Some(Language::Fr)).await, Language::Fr);
}

#[tokio::test]
async fn successful_checkout_reaches_thank_you_and_clears_the_form() {
    let transport = Arc::new(ScriptedTransport::ok());
    let ctx = context(transport.clone());
    let id = Uuid::new_v4();

    select_plan(&ctx, id, "12months-1device".into())
        .await
        .expect("select");
    let outcome = submit_checkout(&ctx, id, draft("Alice", "0600000000"))
        .await
        .expect("submit");

    assert!(matches!(outcome, SubmissionOutcome::Completed(_)));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    let (step, draft_name, effect) = ctx
        .sessions
        .with_session(id, |s| {
            (s.flow.step(), s.draft.name.clone(), s.pending_effect.take())
        })
        .await;
    assert_eq!(step, Step::ThankYou);
    assert!(draft_name.is_empty());
    assert!(effect.is_some());
}

#[tokio::test]
async fn failed_checkout_stays_on_form_with_inline_error() {
    let transport = Arc::new(ScriptedTransport::failing("network down"));
    let ctx = context(transport);
    let id = Uuid::new_v4();

    select_plan(&ctx, id, "6months-1device".into())
        .await
        .expect("select");
    let outcome = submit_checkout(&ctx, id, draft("Alice", "0600000000"))
        .await
        .expect("submit");

    assert_eq!(outcome, SubmissionOutcome::Failed);
    let snapshot = checkout_snapshot(&ctx, id).await;
    assert_eq!(snapshot.step, Step::Form);
    assert_eq!(snapshot.error.as_deref(), Some("network down"));
    assert!(!snapshot.submitting);
    let kept = ctx.sessions.with_session(id, |s| s.draft.name.clone()).await;
    assert_eq!(kept, "Alice");
}

#[tokio::test]
async fn blank_required_fields_never_reach_the_gateway() {
    let transport = Arc::new(ScriptedTransport::ok());
    let ctx = context(transport.clone());
    let id = Uuid::new_v4();

    select_plan(&ctx, id, "6months-1device".into())
        .await
        .expect("select");
    let err = submit_checkout(&ctx, id, draft("  ", "0600000000"))
        .await
        .expect_err("invalid");

    assert_eq!(err.code, ErrorCode::Validation);
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    let notice = ctx.sessions.with_session(id, |s| s.form_error()).await;
    assert_eq!(
        notice.as_deref(),
        Some("Please fill in your name and phone number.")
    );
}

#[tokio::test]
async fn submitting_outside_the_form_is_a_conflict() {
    let ctx = demo_context();
    let err = submit_checkout(&ctx, Uuid::new_v4(), draft("Alice", "0600000000"))
        .await
        .expect_err("not on form");
    assert_eq!(err.code, ErrorCode::Conflict);
}

#[tokio::test]
async fn illegal_navigation_is_reported() {
    let ctx = demo_context();
    let id = Uuid::new_v4();
    assert_eq!(
        go_back(&ctx, id).await.expect_err("not on form").code,
        ErrorCode::Conflict
    );
    assert_eq!(
        select_plan(&ctx, id, " ".into())
            .await
            .expect_err("empty plan")
            .code,
        ErrorCode::Validation
    );
}

#[tokio::test]
async fn second_submit_while_in_flight_is_rejected() {
    let gate = Arc::new(Notify::new());
    let transport = Arc::new(ScriptedTransport::gated(gate.clone()));
    let ctx = context(transport.clone());
    let id = Uuid::new_v4();
    select_plan(&ctx, id, "6months-1device".into())
        .await
        .expect("select");

    let first = tokio::spawn({
        let ctx = ctx.clone();
        async move { submit_checkout(&ctx, id, draft("Alice", "0600000000")).await }
    });
    while transport.calls.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }

    let err = submit_checkout(&ctx, id, draft("Alice", "0600000000"))
        .await
        .expect_err("in flight");
    assert_eq!(err.code, ErrorCode::Conflict);

    gate.notify_one();
    let outcome = first.await.expect("join").expect("first submit");
    assert!(matches!(outcome, SubmissionOutcome::Completed(_)));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn result_is_discarded_after_navigating_home() {
    let gate = Arc::new(Notify::new());
    let transport = Arc::new(ScriptedTransport::gated(gate.clone()));
    let ctx = context(transport.clone());
    let id = Uuid::new_v4();
    select_plan(&ctx, id, "6months-1device".into())
        .await
        .expect("select");

    let pending = tokio::spawn({
        let ctx = ctx.clone();
        async move { submit_checkout(&ctx, id, draft("Alice", "0600000000")).await }
    });
    while transport.calls.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }

    go_home(&ctx, id).await;
    gate.notify_one();

    let outcome = pending.await.expect("join").expect("submit");
    assert_eq!(outcome, SubmissionOutcome::Discarded);
    let snapshot = checkout_snapshot(&ctx, id).await;
    assert_eq!(snapshot.step, Step::Pricing);
    assert_eq!(snapshot.selected_plan, "");
}
