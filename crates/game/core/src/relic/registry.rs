//! Hook registry for active relics.
//!
//! The combat session calls one method per hook point. Every method either
//! does nothing (no matching relic, latch already set, roll failed) or applies
//! a single effect and records a [`RelicTrigger`] for the event stream.

use tracing::debug;

use super::{QuizAssist, RelicEffectEntry, RelicEffectKind, RelicId};
use crate::env::Dice;
use crate::state::{CardData, CardType, EffectClass};

bitflags::bitflags! {
    /// Use flags of one relic.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RelicLatch: u8 {
        /// Spent for the rest of the combat.
        const COMBAT_USED = 1 << 0;
        /// Spent until the next player turn.
        const TURN_USED = 1 << 1;
    }
}

/// A relic that fired, for the event stream.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelicTrigger {
    pub relic: RelicId,
    pub kind: RelicEffectKind,
}

/// Flat additions a card earns from relics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlatBonus {
    pub damage: i32,
    pub block: i32,
    /// Extra draw; added to a DrawCard effect or drawn directly.
    pub draw: i32,
}

impl FlatBonus {
    pub fn for_class(&self, class: EffectClass) -> i32 {
        match class {
            EffectClass::Damage | EffectClass::DamageAll => self.damage,
            EffectClass::Block => self.block,
            EffectClass::DrawCard => self.draw,
            _ => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CorrectAnswerBonus {
    pub heal: u32,
    pub strip_target_block: bool,
}

#[derive(Clone, Debug, PartialEq)]
struct ActiveRelic {
    entry: RelicEffectEntry,
    latch: RelicLatch,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelicRegistry {
    relics: Vec<ActiveRelic>,
    triggered: Vec<RelicTrigger>,
}

impl RelicRegistry {
    /// Resolves active ids against the content table.
    ///
    /// Duplicate ids count once; ids without an entry are inapplicable.
    pub fn from_active(
        ids: &[RelicId],
        lookup: impl Fn(&RelicId) -> Option<RelicEffectEntry>,
    ) -> Self {
        let mut relics: Vec<ActiveRelic> = Vec::with_capacity(ids.len());
        for id in ids {
            if relics.iter().any(|r| &r.entry.id == id) {
                continue;
            }
            match lookup(id) {
                Some(entry) => relics.push(ActiveRelic {
                    entry,
                    latch: RelicLatch::empty(),
                }),
                None => debug!(target: "lexicon::relic", relic = %id, "relic has no combat effect"),
            }
        }
        Self {
            relics,
            triggered: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.relics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relics.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &RelicEffectEntry> {
        self.relics.iter().map(|r| &r.entry)
    }

    pub fn latch(&self, id: &RelicId) -> Option<RelicLatch> {
        self.relics
            .iter()
            .find(|r| &r.entry.id == id)
            .map(|r| r.latch)
    }

    pub fn drain_triggers(&mut self) -> Vec<RelicTrigger> {
        core::mem::take(&mut self.triggered)
    }

    pub fn reset_turn(&mut self) {
        for relic in &mut self.relics {
            relic.latch.remove(RelicLatch::TURN_USED);
        }
    }

    fn fire(&mut self, index: usize, latch: RelicLatch) {
        let relic = &mut self.relics[index];
        relic.latch.insert(latch);
        debug!(
            target: "lexicon::relic",
            relic = %relic.entry.id,
            kind = relic.entry.kind.as_ref(),
            "relic triggered"
        );
        self.triggered.push(RelicTrigger {
            relic: relic.entry.id.clone(),
            kind: relic.entry.kind,
        });
    }

    fn indices_of(&self, kind: RelicEffectKind) -> Vec<usize> {
        self.relics
            .iter()
            .enumerate()
            .filter(|(_, r)| r.entry.kind == kind)
            .map(|(i, _)| i)
            .collect()
    }

    // ===== combat start =====

    pub fn start_block(&mut self) -> u32 {
        let mut block = 0;
        for i in self.indices_of(RelicEffectKind::StartBlock) {
            block += self.relics[i].entry.amount();
            self.fire(i, RelicLatch::empty());
        }
        block
    }

    /// Number of intents revealed beyond the current one.
    pub fn preview_depth(&self) -> usize {
        self.entries()
            .filter(|e| e.kind == RelicEffectKind::PreviewEnemyActions)
            .map(|e| e.amount() as usize)
            .max()
            .unwrap_or(0)
    }

    // ===== card value =====

    /// Sum of lexicon bonuses whose dimension gate matches the card.
    pub fn lexicon_bonus(&self, card: &CardData) -> f32 {
        self.entries()
            .filter(|e| e.matches_dimension(card.dimension))
            .map(|e| e.lexicon_bonus)
            .sum()
    }

    /// Flat bonuses for a card being resolved; claims one-shot latches.
    pub fn claim_card_bonus(&mut self, card: &CardData) -> FlatBonus {
        let mut bonus = FlatBonus::default();
        for i in 0..self.relics.len() {
            let ActiveRelic { entry, latch } = &self.relics[i];
            let (kind, value, latch) = (entry.kind, entry.int_value, *latch);
            let matches = entry.matches_dimension(card.dimension);
            match kind {
                RelicEffectKind::FirstAttackBonus
                    if card.card_type == CardType::Attack
                        && !latch.contains(RelicLatch::COMBAT_USED) =>
                {
                    bonus.damage += value;
                    self.fire(i, RelicLatch::COMBAT_USED);
                }
                RelicEffectKind::DimensionDamageBonus if matches => {
                    bonus.damage += value;
                    self.fire(i, RelicLatch::empty());
                }
                RelicEffectKind::DimensionBlockBonus if matches => {
                    bonus.block += value;
                    self.fire(i, RelicLatch::empty());
                }
                RelicEffectKind::DimensionDrawOncePerTurn
                    if matches && !latch.contains(RelicLatch::TURN_USED) =>
                {
                    bonus.draw += value.max(1);
                    self.fire(i, RelicLatch::TURN_USED);
                }
                _ => {}
            }
        }
        bonus
    }

    // ===== cost =====

    /// Reduction the card would receive if played now.
    pub fn cost_reduction(&self, card: &CardData) -> u32 {
        self.relics
            .iter()
            .filter(|r| {
                r.entry.kind == RelicEffectKind::FirstDimensionCostReduction
                    && r.entry.matches_dimension(card.dimension)
                    && !r.latch.contains(RelicLatch::TURN_USED)
            })
            .map(|r| r.entry.amount())
            .sum()
    }

    /// Marks the per-turn reduction for the card's dimension as used.
    pub fn commit_cost_reduction(&mut self, card: &CardData) {
        for i in self.indices_of(RelicEffectKind::FirstDimensionCostReduction) {
            let relic = &self.relics[i];
            if relic.entry.matches_dimension(card.dimension)
                && !relic.latch.contains(RelicLatch::TURN_USED)
            {
                self.fire(i, RelicLatch::TURN_USED);
            }
        }
    }

    // ===== turn =====

    pub fn block_per_turn(&mut self) -> u32 {
        let mut block = 0;
        for i in self.indices_of(RelicEffectKind::BlockPerTurn) {
            if self.relics[i].latch.contains(RelicLatch::TURN_USED) {
                continue;
            }
            block += self.relics[i].entry.amount();
            self.fire(i, RelicLatch::TURN_USED);
        }
        block
    }

    /// Damage dealt to a random enemy for one discarded card.
    pub fn on_discard(&mut self, dice: &mut Dice<'_>) -> u32 {
        let mut damage = 0;
        for i in self.indices_of(RelicEffectKind::DamageOnDiscard) {
            if dice.chance(self.relics[i].entry.float_value) {
                damage += self.relics[i].entry.amount();
                self.fire(i, RelicLatch::empty());
            }
        }
        damage
    }

    // ===== quiz =====

    pub fn quiz_assist(&self) -> QuizAssist {
        let mut assist = QuizAssist::default();
        for entry in self.entries() {
            match entry.kind {
                RelicEffectKind::QuizTimeBonus => assist.extra_seconds += entry.amount(),
                RelicEffectKind::QuizHintFirstLetter => assist.first_letter_hint = true,
                _ => {}
            }
        }
        assist
    }

    pub fn on_correct_answer(&mut self, dice: &mut Dice<'_>) -> CorrectAnswerBonus {
        let mut bonus = CorrectAnswerBonus::default();
        for i in 0..self.relics.len() {
            let entry = &self.relics[i].entry;
            let (kind, amount, chance) = (entry.kind, entry.amount(), entry.float_value);
            match kind {
                RelicEffectKind::HealOnCorrect => {
                    bonus.heal += amount;
                    self.fire(i, RelicLatch::empty());
                }
                RelicEffectKind::RemoveEnemyBlockOnCorrect => {
                    if dice.chance(chance) {
                        bonus.strip_target_block = true;
                        self.fire(i, RelicLatch::empty());
                    }
                }
                _ => {}
            }
        }
        bonus
    }

    /// Rolls every mistake-conversion relic; true flips the answer for effect.
    pub fn convert_mistake(&mut self, dice: &mut Dice<'_>) -> bool {
        for i in self.indices_of(RelicEffectKind::MistakeConvert) {
            if dice.chance(self.relics[i].entry.float_value) {
                self.fire(i, RelicLatch::empty());
                return true;
            }
        }
        false
    }

    // ===== card lifecycle =====

    /// Claims the once-per-combat return of the first played card.
    pub fn claim_card_return(&mut self) -> bool {
        let Some(i) = self
            .indices_of(RelicEffectKind::ReturnFirstCard)
            .into_iter()
            .find(|&i| !self.relics[i].latch.contains(RelicLatch::COMBAT_USED))
        else {
            return false;
        };
        self.fire(i, RelicLatch::COMBAT_USED);
        true
    }

    // ===== defense =====

    /// Hp floor granted against a lethal hit, spending the relic.
    pub fn survive_lethal(&mut self) -> Option<u32> {
        let i = self
            .indices_of(RelicEffectKind::SurviveOnce)
            .into_iter()
            .find(|&i| !self.relics[i].latch.contains(RelicLatch::COMBAT_USED))?;
        let floor = self.relics[i].entry.amount().max(1);
        self.fire(i, RelicLatch::COMBAT_USED);
        Some(floor)
    }

    /// Damage reflected to the attacker from block left after its hit.
    pub fn overblock_reflect(&mut self, overblock: u32) -> u32 {
        if overblock == 0 {
            return 0;
        }
        let mut reflected = 0;
        for i in self.indices_of(RelicEffectKind::OverblockReflect) {
            let share = (overblock as f32 * self.relics[i].entry.float_value).round_ties_even();
            if share > 0.0 {
                reflected += share as u32;
                self.fire(i, RelicLatch::empty());
            }
        }
        reflected
    }
}
