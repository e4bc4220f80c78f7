//! Game session state
//!
//! ```text
//!            begin_translation            complete(Ok)            submit_guess
//!   Idle ───────────────────▶ Translating ─────────────▶ AwaitingGuess ─────────▶ Answered
//!    ▲                            │                                                  │
//!    │                            │ complete(Err)                                    │
//!    │                            ▼                                                  │
//!    │         restart          Failed ── begin_translation ──▶ Translating          │
//!    └──────────────────────────┴────────────────────────────────────────────────────┘
//! ```
//!
//! Every translation attempt and every restart starts a new round. A result
//! tagged with an older round is dropped by [`GameSession::complete_translation`].

use serde::Serialize;

use crate::error::{CoreError, CoreResult, ProviderError, TRANSLATION_FAILED_MESSAGE};
use crate::types::{Language, LanguageCatalog, TranslateRequest};

/// Feedback message for a correct guess.
pub const CORRECT_GUESS_MESSAGE: &str = "Correct! You are a language master!";

/// Result of a single guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessFeedback {
    pub message: String,
    pub is_correct: bool,
}

impl GuessFeedback {
    fn evaluate(guess: &str, target: Language) -> Self {
        let is_correct = guess.to_lowercase() == target.name.to_lowercase();
        let message = if is_correct {
            CORRECT_GUESS_MESSAGE.to_string()
        } else {
            format!("Incorrect. The correct language was {} :(", target.name)
        };
        Self {
            message,
            is_correct,
        }
    }
}

/// Where a round currently stands. Derived from the session fields, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Input view, nothing in flight.
    Idle,
    /// Input view, request in flight.
    Translating,
    /// Input view with the error line.
    Failed,
    /// Result view, guess input visible.
    AwaitingGuess,
    /// Result view, feedback visible.
    Answered,
}

/// A translation request handed out by [`GameSession::begin_translation`].
///
/// The caller runs it and feeds the outcome back with the same `round`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTranslation {
    pub round: u64,
    pub text: String,
    pub target: Language,
}

impl PendingTranslation {
    pub fn request(&self) -> TranslateRequest {
        TranslateRequest::new(self.text.clone(), self.target.code)
    }
}

/// All mutable state of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    input_text: String,
    target: Option<Language>,
    translated_text: String,
    user_guess: String,
    guess_feedback: Option<GuessFeedback>,
    loading: bool,
    error_message: Option<String>,
    round: u64,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== 只读访问 =====

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn target(&self) -> Option<Language> {
        self.target
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    pub fn guess_feedback(&self) -> Option<&GuessFeedback> {
        self.guess_feedback.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    /// The result view is shown exactly when a translation is present.
    pub fn shows_result(&self) -> bool {
        !self.translated_text.is_empty()
    }

    /// A guess may be submitted once per translated round.
    pub fn can_guess(&self) -> bool {
        self.shows_result() && self.guess_feedback.is_none() && self.target.is_some()
    }

    /// Restart is offered once the round has feedback.
    pub fn can_restart(&self) -> bool {
        self.guess_feedback.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Translating
        } else if self.shows_result() {
            if self.guess_feedback.is_some() {
                Phase::Answered
            } else {
                Phase::AwaitingGuess
            }
        } else if self.error_message.is_some() {
            Phase::Failed
        } else {
            Phase::Idle
        }
    }

    // ===== 文本编辑 =====

    pub fn input_text_mut(&mut self) -> &mut String {
        &mut self.input_text
    }

    pub fn user_guess_mut(&mut self) -> &mut String {
        &mut self.user_guess
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    // ===== 状态转换 =====

    /// Start a translation attempt with a catalog language drawn from `rng`.
    ///
    /// Returns `None` while a request is already in flight.
    pub fn begin_translation<R: rand::Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<PendingTranslation> {
        self.begin_translation_to(LanguageCatalog::random(rng))
    }

    /// Start a translation attempt into a fixed `target`.
    pub fn begin_translation_to(&mut self, target: Language) -> Option<PendingTranslation> {
        if self.loading {
            log::debug!("Translation already in flight (round {}), ignoring", self.round);
            return None;
        }

        self.round += 1;
        self.loading = true;
        self.error_message = None;
        self.translated_text.clear();
        self.guess_feedback = None;
        self.user_guess.clear();
        self.target = Some(target);

        log::debug!("Round {} translating into {}", self.round, target.code);

        Some(PendingTranslation {
            round: self.round,
            text: self.input_text.clone(),
            target,
        })
    }

    /// Apply the outcome of the request for `round`.
    ///
    /// Returns `false` (and changes nothing) when `round` is not the current
    /// in-flight round.
    pub fn complete_translation(
        &mut self,
        round: u64,
        result: Result<String, ProviderError>,
    ) -> bool {
        if round != self.round || !self.loading {
            log::debug!(
                "Discarding stale translation result for round {round} (current {})",
                self.round
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(text) => {
                self.translated_text = text;
            }
            Err(e) => {
                let err = CoreError::from(e);
                if err.is_expected() {
                    log::warn!("Translation failed in round {round}: {err}");
                } else {
                    log::error!("Translation failed in round {round}: {err}");
                }
                self.translated_text.clear();
                self.error_message = Some(TRANSLATION_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Compare `guess` against the target's display name, case-insensitively
    /// and without trimming.
    pub fn submit_guess(&mut self, guess: impl Into<String>) -> CoreResult<&GuessFeedback> {
        let target = match self.target {
            Some(target) if self.can_guess() => target,
            _ => return Err(CoreError::GuessNotAllowed),
        };

        self.user_guess = guess.into();
        let feedback = GuessFeedback::evaluate(&self.user_guess, target);
        log::debug!(
            "Round {} guess {:?} → correct={}",
            self.round,
            self.user_guess,
            feedback.is_correct
        );
        Ok(self.guess_feedback.insert(feedback))
    }

    /// Back to the empty input view. The round id keeps advancing.
    pub fn restart(&mut self) {
        *self = Self {
            round: self.round + 1,
            ..Self::default()
        };
    }
}
