//! Menu tree property tests
//!
//! Verifies the transition table is closed: every displayed choice of every
//! step resolves to a defined transition and no menu is a dead end.

use BudBuddy::state::flow::{steps, ChoiceAction, FlowManager};

#[test]
fn every_choice_of_every_step_resolves() {
    let flow = FlowManager::new();

    for step in flow.all_steps() {
        assert!(!step.choices.is_empty(), "step '{}' displays no choices", step.id);

        for label in step.choice_labels() {
            let choice = flow
                .resolve(&step.id, &label)
                .unwrap_or_else(|e| panic!("choice '{}' at '{}' failed to resolve: {}", label, step.id, e));

            // Every transition target must be a registered step
            let target = match &choice.action {
                ChoiceAction::Goto(next) => Some(next),
                ChoiceAction::Explain { next, .. } => Some(next),
                ChoiceAction::Remember { next, .. } => Some(next),
                ChoiceAction::RememberAndRecommend { .. } => None,
                ChoiceAction::Restart => None,
                ChoiceAction::Farewell => None,
            };
            if let Some(target) = target {
                assert!(
                    flow.step(target).is_ok(),
                    "choice '{}' at '{}' targets unknown step '{}'",
                    label,
                    step.id,
                    target
                );
            }
        }
    }
}

#[test]
fn flow_validation_passes() {
    let flow = FlowManager::new();
    assert!(flow.validate().is_ok());
}

#[test]
fn initial_step_is_welcome() {
    let flow = FlowManager::new();
    assert_eq!(flow.initial_step(), steps::WELCOME);
}

#[test]
fn failure_prompts_always_offer_a_restart_path() {
    let flow = FlowManager::new();

    for step_id in [steps::NO_MATCHES, steps::RETRY, steps::FAREWELL] {
        let step = flow.step(step_id).unwrap();
        let has_restart = step
            .choices
            .iter()
            .any(|c| matches!(c.action, ChoiceAction::Restart));
        assert!(has_restart, "step '{}' offers no restart path", step_id);
    }
}

#[test]
fn welcome_is_reachable_via_restart_labels() {
    let flow = FlowManager::new();

    // Drifting button copy must still resolve
    let choice = flow.resolve(steps::FAREWELL, "  START over ").unwrap();
    assert!(matches!(choice.action, ChoiceAction::Restart));
}
