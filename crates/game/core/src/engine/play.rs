//! Card play: validation, quiz suspension and effect resolution.

use tracing::{debug, warn};

use super::outcome::PendingQuiz;
use super::{
    CombatEvent, CombatPhase, CombatSession, PlayOutcome, QuizRequest, QuizTicket, RejectReason,
};
use crate::combat::{self, CardModifiers};
use crate::config::CombatConfig;
use crate::env::{CombatEnv, Dice, ProficiencyLevel};
use crate::state::{CardData, CardEffect, EffectKind, EnemyId, Stance, WordId};
use crate::synergy::{ResonanceEffect, ResonanceTrigger};

impl CombatSession {
    /// Energy the card would cost right now, after resonance and relic
    /// reductions.
    pub fn effective_cost(&self, card: &CardData) -> u32 {
        card.energy_cost
            .saturating_sub(self.synergy.element.pending_cost_reduction())
            .saturating_sub(self.relics.cost_reduction(card))
    }

    /// Plays a card from hand.
    ///
    /// Energy is spent immediately. Word cards may suspend the session on a
    /// quiz; the card then stays in hand until the returned ticket is
    /// answered. Invalid plays are rejected without changing anything.
    pub fn try_play_card(
        &mut self,
        env: &CombatEnv<'_>,
        word: &WordId,
        target: Option<EnemyId>,
    ) -> PlayOutcome {
        if self.phase != CombatPhase::PlayerTurn {
            return PlayOutcome::Rejected(RejectReason::WrongPhase);
        }
        let Some(card) = self.piles.find_in_hand(word).cloned() else {
            return PlayOutcome::Rejected(RejectReason::NotInHand);
        };
        let cost = self.effective_cost(&card);
        if cost > self.energy {
            return PlayOutcome::Rejected(RejectReason::InsufficientEnergy {
                cost,
                available: self.energy,
            });
        }

        self.energy -= cost;
        self.synergy.element.take_cost_reduction();
        self.relics.commit_cost_reduction(&card);
        self.flush_relic_triggers();

        let learning = env.learning();
        let level = learning.level(&card.word_id);
        let needs_quiz = card.is_word_card() && {
            let chance = level.map_or(1.0, |l| learning.quiz_chance(l));
            Dice::new(env.rng(), &mut self.rng).chance(chance)
        };
        if !needs_quiz {
            self.resolve_card(&card.word_id, target, 1.0, level, env);
            return PlayOutcome::Resolved;
        }

        let level = level.unwrap_or_default();
        let roll = Dice::new(env.rng(), &mut self.rng).unit();
        let mode = learning.quiz_mode(level, roll);
        let mut assist = self.relics.quiz_assist();
        if self.player.stance() == Stance::Focused {
            assist.extra_seconds += CombatConfig::FOCUSED_EXTRA_QUIZ_SECONDS;
        }

        self.next_ticket += 1;
        let ticket_id = self.next_ticket;
        self.pending = Some(PendingQuiz {
            ticket_id,
            card: card.word_id.clone(),
            target,
            reserved_cost: cost,
            level,
            mode,
        });
        self.set_phase(CombatPhase::AnsweringQuiz);
        self.emit(CombatEvent::QuizRequested {
            card: card.word_id.clone(),
        });
        debug!(
            target: "lexicon::combat",
            card = %card.word_id,
            %level,
            %mode,
            cost,
            "quiz requested"
        );

        PlayOutcome::AwaitingQuiz(QuizTicket::new(
            ticket_id,
            QuizRequest {
                word_id: card.word_id.clone(),
                english: card.word.as_ref().map(|w| w.english.clone()),
                level,
                mode,
                game_phase: self.config.game_phase,
                assist,
            },
        ))
    }

    /// Moves the card out of hand and applies its effects at `multiplier`.
    ///
    /// `level` is the proficiency seen when the card was played; junk cards
    /// pass `None`.
    pub(super) fn resolve_card(
        &mut self,
        word: &WordId,
        target: Option<EnemyId>,
        multiplier: f32,
        level: Option<ProficiencyLevel>,
        env: &CombatEnv<'_>,
    ) {
        let Some(card) = self.piles.take_from_hand(word) else {
            warn!(target: "lexicon::combat", card = %word, "resolved card is no longer in hand");
            return;
        };
        let first_of_combat = self.stats.cards_played == 0;
        self.stats.cards_played += 1;
        self.streaks.record_card(card.card_type);

        let cfg = &self.synergy_config;
        let resource_bonus = self
            .synergy
            .resource
            .consume(&card.consumes, &cfg.resource_mediator);
        let dimension_bonus = self
            .synergy
            .dimension
            .record(card.dimension, &cfg.dimension_chain);
        let level = level.filter(|_| card.is_word_card());
        let knowledge_bonus = self
            .synergy
            .knowledge
            .record(level, &cfg.knowledge_resonance);
        let lexicon_bonus = self.relics.lexicon_bonus(&card);
        let flat = self.relics.claim_card_bonus(&card);
        self.flush_relic_triggers();

        let mods = CardModifiers {
            multiplier,
            resource_bonus,
            dimension_bonus,
            knowledge_bonus,
            lexicon_bonus,
            flat,
            stance: self.player.stance(),
            element: card.element(),
            attack_bonus: self.synergy.element.attack_bonus(),
        };

        let requested = self.living_index(target);
        let aimed = self.resolve_target(target);
        let mut drew = false;
        for effect in &card.effects {
            drew |= effect.kind == EffectKind::DrawCard;
            self.apply_effect(env, effect, &mods, requested, aimed);
        }
        if flat.draw > 0 && !drew {
            self.draw_cards(env, flat.draw as u32);
        }

        let cfg = &self.synergy_config;
        self.synergy
            .resource
            .produce(&card.produces, &cfg.resource_mediator);
        if let Some(element) = card.element()
            && let Some(trigger) = self
                .synergy
                .element
                .record(element, &cfg.element_resonance)
        {
            self.apply_resonance(env, trigger);
        }
        let reward = self
            .synergy
            .dimension
            .check_coverage(&self.synergy_config.dimension_chain);
        if !reward.is_empty() {
            self.energy += reward.energy;
            self.emit(CombatEvent::CoverageRewarded {
                draw: reward.draw,
                energy: reward.energy,
            });
            self.draw_cards(env, reward.draw);
        }

        if let Some(stance) = self.streaks.triggered_stance() {
            self.change_stance(stance);
        }

        let word_id = card.word_id.clone();
        if first_of_combat && self.relics.claim_card_return() {
            self.flush_relic_triggers();
            self.piles.return_to_hand(card);
        } else if card.exhausts() {
            self.piles.exhaust(card);
        } else {
            self.piles.discard(card);
        }

        debug!(target: "lexicon::combat", card = %word_id, multiplier, "card resolved");
        self.emit(CombatEvent::CardPlayed { card: word_id });
        self.check_combat_end();
    }

    /// `requested` is the living enemy the player aimed at; `aimed` falls
    /// back to the first living enemy for single-target effects.
    fn apply_effect(
        &mut self,
        env: &CombatEnv<'_>,
        effect: &CardEffect,
        mods: &CardModifiers,
        requested: Option<usize>,
        aimed: Option<usize>,
    ) {
        let pipeline_target = match effect.kind {
            EffectKind::DamageAll => requested,
            _ => aimed,
        };
        let value = combat::compute(
            effect,
            mods,
            &self.synergy_config,
            pipeline_target.map(|i| self.enemies[i].data()),
        );

        match effect.kind {
            EffectKind::Damage => {
                if let Some(index) = aimed {
                    self.damage_enemy(index, value.amount());
                }
            }
            EffectKind::DamageAll => {
                for index in 0..self.enemies.len() {
                    if self.enemies[index].is_alive() {
                        let hit =
                            combat::damage_all_hit(value, mods.element, self.enemies[index].data());
                        self.damage_enemy(index, hit);
                    }
                }
            }
            EffectKind::Block => self.player.add_block(value.amount()),
            EffectKind::Heal => {
                self.player.heal(value.amount());
            }
            EffectKind::DrawCard => self.draw_cards(env, value.amount()),
            EffectKind::GainEnergy => self.energy += value.amount(),
            EffectKind::ApplyStatus(kind) if kind.is_positive() => {
                self.apply_player_status(kind, value.total(), effect.duration);
            }
            EffectKind::ApplyStatus(kind) => {
                if let Some(index) = aimed {
                    self.apply_enemy_status(index, kind, value.total(), effect.duration);
                }
            }
            EffectKind::Exhaust => {}
        }
    }

    fn apply_resonance(&mut self, env: &CombatEnv<'_>, trigger: ResonanceTrigger) {
        debug!(
            target: "lexicon::combat",
            element = %trigger.element,
            tier = trigger.tier,
            effect = ?trigger.effect,
            "element resonance"
        );
        self.emit(CombatEvent::ResonanceTriggered {
            element: trigger.element,
            tier: trigger.tier,
            effect: trigger.effect,
        });
        match trigger.effect {
            ResonanceEffect::Heal(amount) => {
                self.player.heal(amount);
            }
            ResonanceEffect::Draw(amount) => self.draw_cards(env, amount),
            ResonanceEffect::Block(amount) => self.player.add_block(amount),
            ResonanceEffect::AttackBonus(_) | ResonanceEffect::CostReduction(_) => {}
        }
    }
}
