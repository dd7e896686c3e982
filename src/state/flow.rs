//! Menu flow definition
//!
//! This module defines the fixed menu tree the chat walks through: each step
//! shows a prompt and a set of choice buttons, and every choice maps to a
//! defined transition. The table is built once at startup and validated so
//! that no reachable menu is a dead end.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::PrefKey;
use crate::utils::errors::{BudBuddyError, Result};
use crate::utils::helpers::normalize_label;

/// Step identifiers used by the default flow
pub mod steps {
    pub const WELCOME: &str = "welcome";
    pub const LEARN_MENU: &str = "learn_menu";
    pub const MEDICAL_MENU: &str = "medical_menu";
    pub const EXPERIENCE_LEVEL: &str = "experience_level";
    pub const MEDICAL_EXPERIENCE: &str = "medical_experience";
    pub const DESIRED_EFFECT: &str = "desired_effect";
    pub const EXPLORE_MORE: &str = "explore_more";
    pub const NO_MATCHES: &str = "no_matches";
    pub const RETRY: &str = "retry";
    pub const FAREWELL: &str = "farewell";
}

/// What happens when a choice is picked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChoiceAction {
    /// Move to another menu step
    Goto(String),
    /// Show an educational blurb, then the `next` menu
    Explain { text: String, next: String },
    /// Record a preference, then move to `next`
    Remember { key: PrefKey, value: String, next: String },
    /// Record a preference, then call the recommendation endpoint
    RememberAndRecommend { key: PrefKey, value: String },
    /// Clear all preferences and return to the welcome step
    Restart,
    /// Closing message; the farewell step still offers "Start over"
    Farewell,
}

/// A single choice button
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub action: ChoiceAction,
}

impl Choice {
    fn new(label: &str, action: ChoiceAction) -> Self {
        Self { label: label.to_string(), action }
    }
}

/// A step in the menu flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowStep {
    pub id: String,
    /// The bot message shown when this step is entered
    pub prompt: String,
    pub choices: Vec<Choice>,
}

impl FlowStep {
    fn new(id: &str, prompt: &str, choices: Vec<Choice>) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            choices,
        }
    }

    /// Labels of the choices this step displays
    pub fn choice_labels(&self) -> Vec<String> {
        self.choices.iter().map(|c| c.label.clone()).collect()
    }
}

/// Registry of flow steps keyed by id
#[derive(Debug, Clone)]
pub struct FlowManager {
    steps: HashMap<String, FlowStep>,
    initial_step: String,
}

impl FlowManager {
    /// Create a flow manager with the default budtender menu tree
    pub fn new() -> Self {
        let mut manager = Self {
            steps: HashMap::new(),
            initial_step: steps::WELCOME.to_string(),
        };

        manager.register_default_steps();
        manager
    }

    /// Register a step, replacing any step with the same id
    pub fn register_step(&mut self, step: FlowStep) {
        self.steps.insert(step.id.clone(), step);
    }

    /// Get a step by id
    pub fn step(&self, id: &str) -> Result<&FlowStep> {
        self.steps.get(id)
            .ok_or_else(|| BudBuddyError::UnknownStep(id.to_string()))
    }

    /// Id of the step the chat opens with
    pub fn initial_step(&self) -> &str {
        &self.initial_step
    }

    /// Resolve a displayed choice label against a step.
    ///
    /// Labels are compared after normalization so emoji-decorated or
    /// re-spaced button copy still resolves to the same transition.
    pub fn resolve(&self, step_id: &str, label: &str) -> Result<&Choice> {
        let step = self.step(step_id)?;
        let wanted = normalize_label(label);

        step.choices
            .iter()
            .find(|c| normalize_label(&c.label) == wanted)
            .ok_or_else(|| BudBuddyError::InvalidChoice {
                step: step_id.to_string(),
                choice: label.to_string(),
            })
    }

    /// Verify the table is closed: every transition targets a registered step
    /// and every step offers at least one choice.
    pub fn validate(&self) -> Result<()> {
        if !self.steps.contains_key(&self.initial_step) {
            return Err(BudBuddyError::UnknownStep(self.initial_step.clone()));
        }

        for step in self.steps.values() {
            if step.choices.is_empty() {
                return Err(BudBuddyError::InvalidStateTransition {
                    from: step.id.clone(),
                    to: "<nothing>".to_string(),
                });
            }

            for choice in &step.choices {
                let target = match &choice.action {
                    ChoiceAction::Goto(next) => Some(next),
                    ChoiceAction::Explain { next, .. } => Some(next),
                    ChoiceAction::Remember { next, .. } => Some(next),
                    ChoiceAction::RememberAndRecommend { .. } => None,
                    ChoiceAction::Restart => None,
                    ChoiceAction::Farewell => None,
                };

                if let Some(target) = target {
                    if !self.steps.contains_key(target) {
                        return Err(BudBuddyError::InvalidStateTransition {
                            from: step.id.clone(),
                            to: target.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// All registered steps (for tests and diagnostics)
    pub fn all_steps(&self) -> Vec<&FlowStep> {
        self.steps.values().collect()
    }

    fn register_default_steps(&mut self) {
        use steps::*;

        self.register_step(FlowStep::new(
            WELCOME,
            "Welcome! What would you like to explore?",
            vec![
                Choice::new("Find the right strain", ChoiceAction::Goto(EXPERIENCE_LEVEL.into())),
                Choice::new("Learn about cannabis", ChoiceAction::Goto(LEARN_MENU.into())),
                Choice::new("Medical benefits", ChoiceAction::Goto(MEDICAL_MENU.into())),
            ],
        ));

        self.register_step(FlowStep::new(
            LEARN_MENU,
            "What would you like to learn about?",
            vec![
                Choice::new("Strain types", ChoiceAction::Explain {
                    text: "Indica strains tend toward body relaxation, sativa strains \
                           toward an energetic head high, and hybrids sit in between. \
                           Most modern strains are hybrids leaning one way or the other."
                        .to_string(),
                    next: LEARN_MENU.into(),
                }),
                Choice::new("THC vs CBD", ChoiceAction::Explain {
                    text: "THC is the main psychoactive compound; CBD is non-intoxicating \
                           and often chosen for relief without a strong high. The ratio \
                           between the two shapes how a strain feels."
                        .to_string(),
                    next: LEARN_MENU.into(),
                }),
                Choice::new("Find the right strain", ChoiceAction::Goto(EXPERIENCE_LEVEL.into())),
            ],
        ));

        self.register_step(FlowStep::new(
            MEDICAL_MENU,
            "What are you looking to address?",
            vec![
                Choice::new("Pain management", ChoiceAction::Remember {
                    key: PrefKey::Effect,
                    value: "Pain Relief".into(),
                    next: MEDICAL_EXPERIENCE.into(),
                }),
                Choice::new("Anxiety/Stress", ChoiceAction::Remember {
                    key: PrefKey::Effect,
                    value: "Relaxation".into(),
                    next: MEDICAL_EXPERIENCE.into(),
                }),
                Choice::new("Sleep issues", ChoiceAction::Remember {
                    key: PrefKey::Effect,
                    value: "Sleep".into(),
                    next: MEDICAL_EXPERIENCE.into(),
                }),
                Choice::new("Find the right strain", ChoiceAction::Goto(EXPERIENCE_LEVEL.into())),
            ],
        ));

        self.register_step(FlowStep::new(
            EXPERIENCE_LEVEL,
            "What's your experience level?",
            experience_choices(|label| ChoiceAction::Remember {
                key: PrefKey::Experience,
                value: label.into(),
                next: DESIRED_EFFECT.into(),
            }),
        ));

        // Same question as experience_level, but the effect preference was
        // already recorded by the medical menu, so the answer goes straight
        // to the recommendation call.
        self.register_step(FlowStep::new(
            MEDICAL_EXPERIENCE,
            "What's your experience level?",
            experience_choices(|label| ChoiceAction::RememberAndRecommend {
                key: PrefKey::Experience,
                value: label.into(),
            }),
        ));

        self.register_step(FlowStep::new(
            DESIRED_EFFECT,
            "What effect are you looking for?",
            ["Relaxation", "Energy", "Creativity", "Sleep", "Pain Relief"]
                .iter()
                .map(|label| Choice::new(label, ChoiceAction::RememberAndRecommend {
                    key: PrefKey::Effect,
                    value: (*label).into(),
                }))
                .collect(),
        ));

        self.register_step(FlowStep::new(
            EXPLORE_MORE,
            "Would you like to explore more options?",
            vec![
                Choice::new("Find another strain", ChoiceAction::Goto(EXPERIENCE_LEVEL.into())),
                Choice::new("No, I'm good", ChoiceAction::Farewell),
            ],
        ));

        self.register_step(FlowStep::new(
            NO_MATCHES,
            "I couldn't find matching products. Let's try again.",
            vec![
                Choice::new("Start over", ChoiceAction::Restart),
                Choice::new("No, thanks", ChoiceAction::Farewell),
            ],
        ));

        self.register_step(FlowStep::new(
            RETRY,
            "Something went wrong. Would you like to try again?",
            vec![
                Choice::new("Start over", ChoiceAction::Restart),
                Choice::new("No, thanks", ChoiceAction::Farewell),
            ],
        ));

        self.register_step(FlowStep::new(
            FAREWELL,
            "Thanks for using our service! Feel free to start over when you're ready.",
            vec![
                Choice::new("Start over", ChoiceAction::Restart),
            ],
        ));
    }
}

impl Default for FlowManager {
    fn default() -> Self {
        Self::new()
    }
}

fn experience_choices(action: impl Fn(&str) -> ChoiceAction) -> Vec<Choice> {
    ["New to cannabis", "Occasional user", "Experienced user"]
        .iter()
        .map(|label| Choice::new(label, action(label)))
        .collect()
}
