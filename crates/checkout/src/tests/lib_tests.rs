use super::*;

fn failed(message: &str) -> SubmissionResult {
    SubmissionResult {
        success: false,
        error: Some(message.to_string()),
    }
}

#[test]
fn starts_on_pricing_with_no_plan() {
    let flow = CheckoutFlow::new();
    assert_eq!(flow.step(), Step::Pricing);
    assert_eq!(flow.selected_plan(), "");
    assert!(!flow.is_submitting());
}

#[test]
fn selecting_a_plan_moves_to_form_and_schedules_delayed_scroll() {
    let mut flow = CheckoutFlow::new();
    let effect = flow.select_plan("12months-1device").expect("select");

    assert_eq!(flow.step(), Step::Form);
    assert_eq!(flow.selected_plan(), "12months-1device");
    assert_eq!(
        effect,
        Effect::ScrollToTop {
            delay: PLAN_SELECT_SCROLL_DELAY
        }
    );
}

#[test]
fn unknown_plan_tokens_are_accepted_but_empty_ones_are_not() {
    let mut flow = CheckoutFlow::new();
    assert_eq!(flow.select_plan("  "), Err(TransitionError::EmptyPlan));
    assert_eq!(flow.step(), Step::Pricing);

    flow.select_plan("lifetime-deal").expect("opaque token");
    assert_eq!(flow.selected_plan(), "lifetime-deal");
}

#[test]
fn back_keeps_selected_plan_and_go_home_clears_it() {
    let mut flow = CheckoutFlow::new();
    flow.select_plan("12months-1device").expect("select");
    flow.back().expect("back");
    assert_eq!(flow.step(), Step::Pricing);
    assert_eq!(flow.selected_plan(), "12months-1device");

    flow.select_plan("6months-1device").expect("select again");
    let ticket = flow.begin_submission().expect("begin");
    let outcome = flow.finish_submission(ticket, &SubmissionResult::ok());
    assert!(matches!(outcome, SubmissionOutcome::Completed(_)));
    assert_eq!(flow.step(), Step::ThankYou);

    flow.go_home();
    assert_eq!(flow.step(), Step::Pricing);
    assert_eq!(flow.selected_plan(), "");
}

#[test]
fn failed_submission_stays_on_form_with_inline_error() {
    let mut flow = CheckoutFlow::new();
    flow.select_plan("trial").expect("select");
    let ticket = flow.begin_submission().expect("begin");

    let outcome = flow.finish_submission(ticket, &failed("network down"));
    assert_eq!(outcome, SubmissionOutcome::Failed);
    assert_eq!(flow.step(), Step::Form);
    assert_eq!(flow.last_error(), Some("network down"));
    assert!(!flow.is_submitting());

    let retry = flow.begin_submission().expect("retry allowed");
    assert_eq!(flow.last_error(), None);
    flow.finish_submission(retry, &SubmissionResult::ok());
    assert_eq!(flow.step(), Step::ThankYou);
}

#[test]
fn failure_without_message_uses_generic_text() {
    let mut flow = CheckoutFlow::new();
    flow.select_plan("trial").expect("select");
    let ticket = flow.begin_submission().expect("begin");
    flow.finish_submission(
        ticket,
        &SubmissionResult {
            success: false,
            error: None,
        },
    );
    assert_eq!(flow.last_error(), Some(GENERIC_FAILURE_MESSAGE));
}

#[test]
fn concurrent_submission_from_same_flow_is_rejected() {
    let mut flow = CheckoutFlow::new();
    flow.select_plan("trial").expect("select");
    let _ticket = flow.begin_submission().expect("begin");
    assert_eq!(
        flow.begin_submission(),
        Err(TransitionError::SubmissionInFlight)
    );
    assert!(flow.snapshot().submitting);
}

#[test]
fn navigating_away_discards_in_flight_result() {
    let mut flow = CheckoutFlow::new();
    flow.select_plan("trial").expect("select");
    let ticket = flow.begin_submission().expect("begin");
    flow.back().expect("back");

    let outcome = flow.finish_submission(ticket, &SubmissionResult::ok());
    assert_eq!(outcome, SubmissionOutcome::Discarded);
    assert_eq!(flow.step(), Step::Pricing);

    flow.select_plan("trial").expect("select again");
    let outcome = flow.finish_submission(ticket, &SubmissionResult::ok());
    assert_eq!(outcome, SubmissionOutcome::Discarded);
    assert_eq!(flow.step(), Step::Form);
}

#[test]
fn transitions_from_the_wrong_step_leave_state_untouched() {
    let mut flow = CheckoutFlow::new();
    assert!(matches!(
        flow.back(),
        Err(TransitionError::InvalidStep {
            step: Step::Pricing,
            ..
        })
    ));
    assert!(flow.begin_submission().is_err());

    flow.select_plan("trial").expect("select");
    assert!(flow.select_plan("6months-1device").is_err());
    assert_eq!(flow.selected_plan(), "trial");

    let ticket = flow.begin_submission().expect("begin");
    flow.finish_submission(ticket, &SubmissionResult::ok());
    assert!(flow.back().is_err());
    assert!(flow.select_plan("trial").is_err());
    assert_eq!(flow.step(), Step::ThankYou);
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Select,
    Back,
    Home,
    Begin,
    FinishOk,
    FinishErr,
}

const ACTIONS: [Action; 6] = [
    Action::Select,
    Action::Back,
    Action::Home,
    Action::Begin,
    Action::FinishOk,
    Action::FinishErr,
];

#[test]
fn thank_you_is_only_entered_through_a_successful_submission() {
    const DEPTH: u32 = 6;
    let total = ACTIONS.len().pow(DEPTH);

    for mut index in 0..total {
        let mut flow = CheckoutFlow::new();
        let mut ticket = None;
        let mut history = Vec::new();

        for _ in 0..DEPTH {
            let action = ACTIONS[index % ACTIONS.len()];
            index /= ACTIONS.len();
            history.push(action);

            let before = flow.step();
            let mut completed = false;
            match action {
                Action::Select => {
                    let _ = flow.select_plan("12months-1device");
                }
                Action::Back => {
                    let _ = flow.back();
                }
                Action::Home => {
                    flow.go_home();
                }
                Action::Begin => {
                    if let Ok(t) = flow.begin_submission() {
                        ticket = Some(t);
                    }
                }
                Action::FinishOk => {
                    if let Some(t) = ticket {
                        completed = matches!(
                            flow.finish_submission(t, &SubmissionResult::ok()),
                            SubmissionOutcome::Completed(_)
                        );
                    }
                }
                Action::FinishErr => {
                    if let Some(t) = ticket {
                        flow.finish_submission(t, &failed("boom"));
                    }
                }
            }

            let after = flow.step();
            assert!(Step::ALL.contains(&after));
            if after == Step::ThankYou && before != Step::ThankYou {
                assert!(completed, "entered thank-you without success: {history:?}");
            }
            if after == Step::Form {
                assert!(!flow.selected_plan().is_empty(), "{history:?}");
            }
            if after == Step::ThankYou && before == Step::ThankYou {
                assert!(!matches!(action, Action::Back | Action::Select));
            }
        }
    }
}
