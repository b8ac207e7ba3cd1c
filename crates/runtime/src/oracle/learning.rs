//! In-memory learning store.

use std::collections::HashMap;
use std::sync::Mutex;

use lexicon_core::{LearningOracle, ProficiencyLevel, QuizAnswer, WordId};
use tracing::{debug, warn};

/// Per-word record kept by [`InMemoryLearning`].
#[derive(Clone, Debug, PartialEq)]
pub struct WordProgress {
    pub level: ProficiencyLevel,
    pub correct_count: u32,
    pub wrong_count: u32,
    /// SM-2 style ease factor, never below [`WordProgress::MIN_EASE`].
    pub ease_factor: f32,
}

impl WordProgress {
    pub const MIN_EASE: f32 = 1.3;
    pub const INITIAL_EASE: f32 = 2.5;

    pub fn new(level: ProficiencyLevel) -> Self {
        Self {
            level,
            correct_count: 0,
            wrong_count: 0,
            ease_factor: Self::INITIAL_EASE,
        }
    }

    /// Total correct answers needed to leave `level`.
    pub const fn required_correct(level: ProficiencyLevel) -> u32 {
        match level {
            ProficiencyLevel::New => 3,
            ProficiencyLevel::Known => 5,
            ProficiencyLevel::Familiar => 7,
            ProficiencyLevel::Remembered => 10,
            ProficiencyLevel::Proficient => 15,
            ProficiencyLevel::Mastered => 20,
            ProficiencyLevel::Locked | ProficiencyLevel::Internalized => u32::MAX,
        }
    }

    fn record(&mut self, is_correct: bool, quality: u8) {
        if is_correct {
            self.correct_count += 1;
            let miss = (QuizAnswer::MAX_QUALITY - quality.min(QuizAnswer::MAX_QUALITY)) as f32;
            self.ease_factor =
                (self.ease_factor + (0.1 - miss * (0.08 + miss * 0.02))).max(Self::MIN_EASE);
            if self.correct_count >= Self::required_correct(self.level) {
                self.level = promote(self.level);
            }
        } else {
            self.wrong_count += 1;
            self.ease_factor = (self.ease_factor - 0.2).max(Self::MIN_EASE);
            self.level = demote(self.level);
        }
    }
}

fn promote(level: ProficiencyLevel) -> ProficiencyLevel {
    use ProficiencyLevel::*;
    match level {
        Locked => Locked,
        New => Known,
        Known => Familiar,
        Familiar => Remembered,
        Remembered => Proficient,
        Proficient => Mastered,
        Mastered | Internalized => Internalized,
    }
}

fn demote(level: ProficiencyLevel) -> ProficiencyLevel {
    use ProficiencyLevel::*;
    match level {
        Locked => Locked,
        New | Known => New,
        Familiar => Known,
        Remembered => Familiar,
        Proficient => Remembered,
        Mastered => Proficient,
        Internalized => Mastered,
    }
}

#[derive(Debug, Default)]
struct LearningState {
    words: HashMap<WordId, WordProgress>,
    current_streak: u32,
    best_streak: u32,
    total_correct: u32,
    total_wrong: u32,
}

/// Learning collaborator backed by a map behind a mutex.
///
/// Levels move one step per answer: a wrong answer always demotes (never
/// below New), a correct one promotes once the word's cumulative correct
/// count reaches the threshold for its level.
#[derive(Debug, Default)]
pub struct InMemoryLearning {
    state: Mutex<LearningState>,
}

impl InMemoryLearning {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `word` at `level`, replacing any existing record.
    #[must_use]
    pub fn with_word(self, word: impl Into<String>, level: ProficiencyLevel) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state
                .words
                .insert(WordId::new(word), WordProgress::new(level));
        }
        self
    }

    pub fn progress(&self, word: &WordId) -> Option<WordProgress> {
        self.state.lock().ok()?.words.get(word).cloned()
    }

    pub fn current_streak(&self) -> u32 {
        self.state.lock().map_or(0, |s| s.current_streak)
    }

    pub fn best_streak(&self) -> u32 {
        self.state.lock().map_or(0, |s| s.best_streak)
    }

    /// Correct and wrong answers recorded so far.
    pub fn totals(&self) -> (u32, u32) {
        self.state
            .lock()
            .map_or((0, 0), |s| (s.total_correct, s.total_wrong))
    }
}

impl LearningOracle for InMemoryLearning {
    fn level(&self, word: &WordId) -> Option<ProficiencyLevel> {
        self.state.lock().ok()?.words.get(word).map(|p| p.level)
    }

    fn ensure_progress(
        &self,
        word: &WordId,
        default_level: ProficiencyLevel,
    ) -> ProficiencyLevel {
        let Ok(mut state) = self.state.lock() else {
            return default_level;
        };
        state
            .words
            .entry(word.clone())
            .or_insert_with(|| WordProgress::new(default_level))
            .level
    }

    fn update_progress(&self, word: &WordId, is_correct: bool, quality: u8) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        let Some(progress) = state.words.get_mut(word) else {
            warn!(target: "lexicon::learning", %word, "answer for a word without progress");
            return;
        };
        let before = progress.level;
        progress.record(is_correct, quality);
        if progress.level != before {
            debug!(
                target: "lexicon::learning",
                %word,
                from = %before,
                to = %progress.level,
                "proficiency changed"
            );
        }
    }

    fn on_answer_result(&self, is_correct: bool) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        if is_correct {
            state.total_correct += 1;
            state.current_streak += 1;
            state.best_streak = state.best_streak.max(state.current_streak);
        } else {
            state.total_wrong += 1;
            state.current_streak = 0;
        }
    }
}
