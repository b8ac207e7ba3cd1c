//! Per-turn play counters that drive stance changes.

use crate::config::CombatConfig;
use crate::state::{CardType, Stance};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayStreaks {
    pub consecutive_attacks: u32,
    pub consecutive_skills: u32,
    pub cards_this_turn: u32,
    pub correct_answers: u32,
}

impl PlayStreaks {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Attacks and skills break each other's streak; other types break neither.
    pub fn record_card(&mut self, card_type: CardType) {
        self.cards_this_turn += 1;
        match card_type {
            CardType::Attack => {
                self.consecutive_attacks += 1;
                self.consecutive_skills = 0;
            }
            CardType::Skill => {
                self.consecutive_skills += 1;
                self.consecutive_attacks = 0;
            }
            CardType::Power | CardType::Tactical => {}
        }
    }

    pub fn record_correct(&mut self) {
        self.correct_answers += 1;
    }

    /// Stance this play pattern asks for, if any.
    ///
    /// Checked in the order Offensive, Defensive, Frenzy; the last one that
    /// holds wins.
    pub fn triggered_stance(&self) -> Option<Stance> {
        [
            (
                self.consecutive_attacks >= CombatConfig::OFFENSIVE_ATTACK_STREAK,
                Stance::Offensive,
            ),
            (
                self.consecutive_skills >= CombatConfig::DEFENSIVE_SKILL_STREAK,
                Stance::Defensive,
            ),
            (
                self.cards_this_turn >= CombatConfig::FRENZY_CARDS_PER_TURN,
                Stance::Frenzy,
            ),
        ]
        .into_iter()
        .filter_map(|(hit, stance)| hit.then_some(stance))
        .last()
    }

    pub fn focused_triggered(&self) -> bool {
        self.correct_answers >= CombatConfig::FOCUSED_CORRECT_ANSWERS
    }
}
