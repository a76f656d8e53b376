//! Session state machine for the Shiori chat pipeline.
//!
//! [`StagedDispatcher`] owns one session: its message log, its processing
//! stage and its active domain. Questions are answered one at a time, walking
//! through the stages of the domain kind with simulated latency.

pub mod pacer;

use std::sync::Arc;

use serde::Serialize;
use shiori_core::classifier::{Classifier, MatchOutcome};
use shiori_core::config::DispatcherConfig;
use shiori_core::domain::{DomainId, DomainProfile, DomainRegistry};
use shiori_core::session::{Message, SessionEvent, SessionSnapshot, Stage};
use shiori_core::synthesizer::synthesize;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;

pub use pacer::{NoDelay, Pacer, TokioPacer};

/// Why a submission was not accepted. Rejections leave the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RejectReason {
    /// Empty after trimming.
    EmptyQuestion,
    /// Another question is still being answered.
    Busy { stage: Stage },
}

/// Result of [`StagedDispatcher::submit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Rejected { reason: RejectReason },
    /// The answer was appended; `matched` tells which rule produced it.
    Completed { matched: MatchOutcome },
    /// The session was reset while the question was in flight. Nothing was
    /// appended after the user message, which the reset already removed.
    Abandoned,
}

#[derive(Debug)]
struct SessionState {
    messages: Vec<Message>,
    stage: Stage,
    domain: DomainId,
    /// Bumped on every reset. In-flight submissions compare it after each wait.
    epoch: u64,
}

/// Serializes questions for one session and drives them through the stages.
///
/// All transitions happen inside a single write section of the state lock and
/// the lock is never held across a pacer wait, so readers always see a
/// consistent snapshot. Cloning yields another handle to the same session.
#[derive(Clone)]
pub struct StagedDispatcher {
    classifier: Classifier,
    pacer: Arc<dyn Pacer>,
    delays: DispatcherConfig,
    state: Arc<RwLock<SessionState>>,
    events: Option<UnboundedSender<SessionEvent>>,
}

impl StagedDispatcher {
    pub fn new(
        registry: Arc<DomainRegistry>,
        domain: DomainId,
        pacer: Arc<dyn Pacer>,
        delays: DispatcherConfig,
    ) -> Self {
        Self {
            classifier: Classifier::new(registry),
            pacer,
            delays,
            state: Arc::new(RwLock::new(SessionState {
                messages: Vec::new(),
                stage: Stage::Idle,
                domain,
                epoch: 0,
            })),
            events: None,
        }
    }

    /// Publishes every state change to `sender`. A closed receiver is ignored.
    pub fn with_events(mut self, sender: UnboundedSender<SessionEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    pub fn registry(&self) -> &Arc<DomainRegistry> {
        self.classifier.registry()
    }

    /// Profile of the currently active domain.
    pub async fn active_profile(&self) -> &DomainProfile {
        let domain = self.state.read().await.domain;
        self.registry().profile(domain)
    }

    /// Answers one question.
    ///
    /// The trimmed question is appended as a user message right away and the
    /// session enters the first stage of the domain's plan. After the last
    /// stage the answer is appended and the session returns to idle.
    ///
    /// Blank questions and questions submitted while another one is in flight
    /// are rejected without touching the state.
    pub async fn submit(&self, raw_question: &str) -> SubmitOutcome {
        let question = raw_question.trim();
        if question.is_empty() {
            return SubmitOutcome::Rejected {
                reason: RejectReason::EmptyQuestion,
            };
        }

        let (epoch, domain, plan) = match self.accept(question).await {
            Ok(accepted) => accepted,
            Err(reason) => {
                tracing::debug!("[Dispatcher] Rejected question: {:?}", reason);
                return SubmitOutcome::Rejected { reason };
            }
        };

        for (position, &stage) in plan.iter().enumerate() {
            self.pacer
                .pause(stage, self.delays.stage_delay(stage))
                .await;

            let Some(&next) = plan.get(position + 1) else {
                break;
            };
            if !self.advance(epoch, next).await {
                return self.abandoned(epoch);
            }
        }

        let classification = self.classifier.classify(domain, question);
        let message = Message::assistant(synthesize(&classification.template));

        if !self.complete(epoch, message).await {
            return self.abandoned(epoch);
        }

        tracing::info!(
            "[Dispatcher] {}: answered with {}",
            domain,
            classification.outcome.rule_id().unwrap_or("fallback")
        );
        SubmitOutcome::Completed {
            matched: classification.outcome,
        }
    }

    /// Clears the session and switches to `domain`.
    ///
    /// Any in-flight question is abandoned: it will not append an answer.
    pub async fn switch_domain(&self, domain: DomainId) {
        let mut state = self.state.write().await;
        self.reset_locked(&mut state, domain);
    }

    /// Clears the session, keeping the active domain.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        let domain = state.domain;
        self.reset_locked(&mut state, domain);
    }

    /// Copy of the current messages, stage and domain.
    pub async fn current_state(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        SessionSnapshot {
            messages: state.messages.clone(),
            stage: state.stage,
            domain: state.domain,
        }
    }

    /// Guard check, user append and first stage in one write section.
    async fn accept(
        &self,
        question: &str,
    ) -> Result<(u64, DomainId, &'static [Stage]), RejectReason> {
        let mut state = self.state.write().await;
        if !state.stage.is_idle() {
            return Err(RejectReason::Busy { stage: state.stage });
        }

        let message = Message::user(question);
        state.messages.push(message.clone());
        self.emit(SessionEvent::MessageAppended { message });

        let plan = self.registry().profile(state.domain).kind.stage_plan();
        if let Some(&first) = plan.first() {
            state.stage = first;
            self.emit(SessionEvent::StageChanged { stage: first });
        }

        tracing::debug!("[Dispatcher] {}: accepted question", state.domain);
        Ok((state.epoch, state.domain, plan))
    }

    /// Moves to `next` unless the session was reset meanwhile.
    async fn advance(&self, epoch: u64, next: Stage) -> bool {
        let mut state = self.state.write().await;
        if state.epoch != epoch {
            return false;
        }
        state.stage = next;
        self.emit(SessionEvent::StageChanged { stage: next });
        true
    }

    /// Appends the answer and returns to idle unless the session was reset.
    async fn complete(&self, epoch: u64, message: Message) -> bool {
        let mut state = self.state.write().await;
        if state.epoch != epoch {
            return false;
        }
        state.messages.push(message.clone());
        self.emit(SessionEvent::MessageAppended { message });
        state.stage = Stage::Idle;
        self.emit(SessionEvent::StageChanged { stage: Stage::Idle });
        true
    }

    fn reset_locked(&self, state: &mut SessionState, domain: DomainId) {
        state.messages.clear();
        state.stage = Stage::Idle;
        state.domain = domain;
        state.epoch += 1;
        self.emit(SessionEvent::SessionReset { domain });
        tracing::info!("[Dispatcher] Session reset (domain: {})", domain);
    }

    fn abandoned(&self, epoch: u64) -> SubmitOutcome {
        tracing::debug!("[Dispatcher] Dropped answer of epoch {}", epoch);
        SubmitOutcome::Abandoned
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(sender) = &self.events {
            let _ = sender.send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher(domain: DomainId) -> StagedDispatcher {
        StagedDispatcher::new(
            Arc::new(DomainRegistry::builtin().unwrap()),
            domain,
            Arc::new(NoDelay),
            DispatcherConfig::immediate(),
        )
    }

    #[tokio::test]
    async fn test_blank_questions_are_rejected() {
        let dispatcher = dispatcher(DomainId::KnowledgeBase);
        for question in ["", "   ", "\n\t"] {
            assert_eq!(
                dispatcher.submit(question).await,
                SubmitOutcome::Rejected {
                    reason: RejectReason::EmptyQuestion
                }
            );
        }
        let state = dispatcher.current_state().await;
        assert!(state.messages.is_empty());
        assert_eq!(state.stage, Stage::Idle);
    }

    #[tokio::test]
    async fn test_completed_submission_appends_two_messages() {
        let dispatcher = dispatcher(DomainId::Sales);
        let outcome = dispatcher.submit("  売上推移をグラフにして ").await;
        assert!(matches!(outcome, SubmitOutcome::Completed { .. }));

        let state = dispatcher.current_state().await;
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].body, "売上推移をグラフにして");
        assert!(state.messages[0].is_user());
        assert!(!state.messages[1].is_user());
        assert_eq!(state.stage, Stage::Idle);
    }

    #[tokio::test]
    async fn test_active_profile_follows_domain() {
        let dispatcher = dispatcher(DomainId::KnowledgeBase);
        dispatcher.switch_domain(DomainId::Marketing).await;
        assert_eq!(dispatcher.active_profile().await.id, DomainId::Marketing);
    }
}
