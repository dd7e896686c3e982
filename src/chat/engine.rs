//! Chat engine
//!
//! The engine drives the conversation: it resolves a picked choice against
//! the flow table, mutates the conversation context, calls the
//! recommendation service when a transition asks for it, and hands back a
//! `Reply` for the presentation layer to render.

use std::time::Instant;

use tracing::{debug, warn};

use crate::models::{PrefKey, Strain};
use crate::services::RecommendService;
use crate::state::flow::{steps, ChoiceAction, FlowManager};
use crate::state::{ConversationContext, ProfileStorage};
use crate::utils::errors::{BudBuddyError, Result};
use crate::utils::logging;

/// What the bot says next: messages in order, optional strain cards,
/// and the choice buttons to display.
#[derive(Debug, Clone)]
pub struct Reply {
    pub messages: Vec<String>,
    pub cards: Vec<Strain>,
    pub choices: Vec<String>,
    /// Step the conversation is now at
    pub step: String,
}

/// Drives one conversation session over the menu flow
pub struct ChatEngine {
    flow: FlowManager,
    recommender: RecommendService,
    context: ConversationContext,
    profile: Option<ProfileStorage>,
}

impl ChatEngine {
    /// Create an engine over the default flow. Fails if the flow table
    /// has an undefined transition.
    pub fn new(recommender: RecommendService) -> Result<Self> {
        Self::with_flow(FlowManager::new(), recommender)
    }

    pub fn with_flow(flow: FlowManager, recommender: RecommendService) -> Result<Self> {
        flow.validate()?;
        Ok(Self {
            flow,
            recommender,
            context: ConversationContext::new(),
            profile: None,
        })
    }

    /// Attach a profile store so chosen experience levels are remembered
    /// across sessions.
    pub fn with_profile(mut self, profile: ProfileStorage) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Begin (or re-begin) the conversation at the welcome step.
    /// A remembered experience level gets a greeting nod but is not
    /// pre-filled into the preference bag; the menu still asks.
    pub fn start(&mut self) -> Result<Reply> {
        self.context.reset();
        let mut reply = self.enter(self.flow.initial_step().to_string())?;

        if let Some(experience) = self.persisted_experience() {
            reply.messages.insert(0, format!("Welcome back! Last time your experience level was \"{}\".", experience));
        }

        debug!(session_id = %self.context.session_id, "Conversation started");
        Ok(reply)
    }

    /// Handle a picked choice label and return the bot's reply.
    ///
    /// An unrecognized label yields `InvalidChoice` and leaves the
    /// conversation untouched, so the caller can simply re-prompt.
    pub async fn handle_choice(&mut self, label: &str) -> Result<Reply> {
        let session_id = self.context.session_id.to_string();
        let action = self.flow.resolve(&self.context.step, label)?.action.clone();
        logging::log_user_choice(&session_id, &self.context.step, label);

        match action {
            ChoiceAction::Goto(next) => self.enter(next),
            ChoiceAction::Explain { text, next } => {
                let mut reply = self.enter(next)?;
                reply.messages.insert(0, text);
                Ok(reply)
            }
            ChoiceAction::Remember { key, value, next } => {
                self.remember(key, &value);
                self.enter(next)
            }
            ChoiceAction::RememberAndRecommend { key, value } => {
                self.remember(key, &value);
                self.recommend().await
            }
            ChoiceAction::Restart => {
                self.context.reset();
                self.enter(self.flow.initial_step().to_string())
            }
            ChoiceAction::Farewell => self.enter(steps::FAREWELL.to_string()),
        }
    }

    /// Current conversation context (read-only)
    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    /// The flow table this engine runs
    pub fn flow(&self) -> &FlowManager {
        &self.flow
    }

    fn remember(&mut self, key: PrefKey, value: &str) {
        self.context.set_preference(key, value);

        if key == PrefKey::Experience {
            if let Some(profile) = &self.profile {
                if let Err(e) = profile.set_experience(value) {
                    // Remembering the level is a convenience, not a requirement
                    warn!(error = %e, "Failed to persist experience level");
                }
            }
        }
    }

    fn persisted_experience(&self) -> Option<String> {
        self.profile
            .as_ref()
            .and_then(|p| p.experience().ok().flatten())
    }

    /// Move to a step and build its prompt/choices reply
    fn enter(&mut self, step_id: String) -> Result<Reply> {
        let step = self.flow.step(&step_id)?;
        let reply = Reply {
            messages: vec![step.prompt.clone()],
            cards: vec![],
            choices: step.choice_labels(),
            step: step.id.clone(),
        };
        self.context.goto(&step_id);
        Ok(reply)
    }

    /// Call the recommendation endpoint with the accumulated preferences.
    ///
    /// Success lands on the explore-more prompt (with cards when there are
    /// any); a non-2xx response lands on "no matches"; transport or parse
    /// failures land on the generic retry prompt. Preferences are never
    /// touched on failure.
    async fn recommend(&mut self) -> Result<Reply> {
        let session_id = self.context.session_id.to_string();
        let started = Instant::now();

        match self.recommender.recommend(&self.context.preferences).await {
            Ok(response) => {
                logging::log_recommendation(
                    &session_id,
                    response.recommendations.len(),
                    started.elapsed().as_millis() as u64,
                );

                let mut reply = self.enter(steps::EXPLORE_MORE.to_string())?;
                let mut messages = Vec::new();

                if !response.recommendations.is_empty() {
                    messages.push("Here are your personalized recommendations:".to_string());
                }
                if let Some(description) = response.description.filter(|d| !d.trim().is_empty()) {
                    messages.push(description);
                }
                messages.append(&mut reply.messages);

                reply.messages = messages;
                reply.cards = response.recommendations;
                Ok(reply)
            }
            Err(BudBuddyError::Api(api_error)) => {
                logging::log_api_error(&session_id, &api_error.to_string());
                let step = if api_error.is_no_matches() {
                    steps::NO_MATCHES
                } else {
                    steps::RETRY
                };
                self.enter(step.to_string())
            }
            Err(other) => Err(other),
        }
    }
}
