//! Resuming a card play suspended on a quiz.

use tracing::{debug, info};

use super::{
    CombatEvent, CombatPhase, CombatSession, PlayOutcome, QuizAnswer, QuizTicket, RejectReason,
};
use crate::combat::wrong_answer_multiplier;
use crate::env::{CombatEnv, Dice};
use crate::state::Stance;

impl CombatSession {
    /// Settles the pending quiz and resolves, weakens or fizzles its card.
    ///
    /// The ticket is consumed either way. A ticket that does not match the
    /// pending quiz is rejected and the quiz stays pending.
    pub fn answer_quiz(
        &mut self,
        env: &CombatEnv<'_>,
        ticket: QuizTicket,
        answer: QuizAnswer,
    ) -> PlayOutcome {
        if self.phase != CombatPhase::AnsweringQuiz {
            return PlayOutcome::Rejected(RejectReason::WrongPhase);
        }
        let pending = match self.pending.take() {
            Some(pending) if pending.ticket_id == ticket.id => pending,
            other => {
                self.pending = other;
                return PlayOutcome::Rejected(RejectReason::StaleTicket);
            }
        };

        let learning = env.learning();
        let quality = answer.quality.min(QuizAnswer::MAX_QUALITY);
        learning.update_progress(&pending.card, answer.is_correct, quality);
        learning.on_answer_result(answer.is_correct);
        self.set_phase(CombatPhase::PlayerTurn);

        debug!(
            target: "lexicon::combat",
            card = %pending.card,
            correct = answer.is_correct,
            quality,
            cost = pending.reserved_cost,
            "quiz answered"
        );

        if answer.is_correct {
            self.stats.correct_answers += 1;
            self.stats.experience += pending.mode.experience();
            self.streaks.record_correct();

            let multiplier = learning.effect_multiplier(pending.level);
            self.resolve_card(
                &pending.card,
                pending.target,
                multiplier,
                Some(pending.level),
                env,
            );
            if self.phase.is_terminal() {
                return PlayOutcome::Resolved;
            }
            if self.streaks.focused_triggered() {
                self.change_stance(Stance::Focused);
            }

            let bonus = {
                let mut dice = Dice::new(env.rng(), &mut self.rng);
                self.relics.on_correct_answer(&mut dice)
            };
            self.flush_relic_triggers();
            if bonus.heal > 0 {
                self.player.heal(bonus.heal);
            }
            if bonus.strip_target_block
                && let Some(index) = self.resolve_target(pending.target)
            {
                let removed = self.enemies[index].entity.strip_block();
                debug!(target: "lexicon::relic", enemy = index, removed, "enemy block stripped");
            }
            return PlayOutcome::Resolved;
        }

        self.stats.wrong_answers += 1;
        if self.player.stance() == Stance::Focused {
            self.change_stance(Stance::None);
        }

        let converted = {
            let mut dice = Dice::new(env.rng(), &mut self.rng);
            self.relics.convert_mistake(&mut dice)
        };
        self.flush_relic_triggers();
        let multiplier = if converted {
            info!(target: "lexicon::relic", card = %pending.card, "mistake converted");
            learning.effect_multiplier(pending.level)
        } else {
            wrong_answer_multiplier(self.config.game_phase, pending.level)
        };

        if multiplier > 0.0 {
            self.resolve_card(
                &pending.card,
                pending.target,
                multiplier,
                Some(pending.level),
                env,
            );
            return PlayOutcome::Resolved;
        }

        if let Some(card) = self.piles.take_from_hand(&pending.card) {
            self.piles.discard(card);
        }
        self.emit(CombatEvent::CardFizzled { card: pending.card });
        PlayOutcome::Fizzled
    }
}
