use strum::EnumCount;

use super::ElementResonanceConfig;
use crate::state::Element;

bitflags::bitflags! {
    /// Tiers already fired for one element this turn.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ResonanceTiers: u8 {
        const TIER_2 = 1 << 0;
        const TIER_3 = 1 << 1;
    }
}

/// What a resonance tier grants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResonanceEffect {
    Heal(u32),
    /// Added to every damage-class effect for the rest of the turn.
    AttackBonus(u32),
    Draw(u32),
    Block(u32),
    /// Reduces the cost of the next card played.
    CostReduction(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResonanceTrigger {
    pub element: Element,
    pub tier: u8,
    pub effect: ResonanceEffect,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementResonance {
    counts: [u32; Element::COUNT],
    fired: [ResonanceTiers; Element::COUNT],
    attack_bonus: u32,
    pending_cost_reduction: u32,
}

impl ElementResonance {
    pub fn count(&self, element: Element) -> u32 {
        self.counts[element.index()]
    }

    pub fn attack_bonus(&self) -> u32 {
        self.attack_bonus
    }

    pub fn pending_cost_reduction(&self) -> u32 {
        self.pending_cost_reduction
    }

    /// Consumes the pending cost reduction for the card being played.
    pub fn take_cost_reduction(&mut self) -> u32 {
        core::mem::take(&mut self.pending_cost_reduction)
    }

    /// Counts a play of `element` and fires the tier it reaches, if any.
    ///
    /// Attack bonus and cost reduction are folded into this tracker; the
    /// caller applies heal, draw and block.
    pub fn record(
        &mut self,
        element: Element,
        config: &ElementResonanceConfig,
    ) -> Option<ResonanceTrigger> {
        let index = element.index();
        self.counts[index] += 1;
        let (tier, flag) = match self.counts[index] {
            2 => (2, ResonanceTiers::TIER_2),
            3 => (3, ResonanceTiers::TIER_3),
            _ => return None,
        };
        if self.fired[index].contains(flag) {
            return None;
        }
        self.fired[index].insert(flag);

        let amount = config.tiers(element).increment(tier);
        let effect = match element {
            Element::Life => ResonanceEffect::Heal(amount),
            Element::Force => {
                self.attack_bonus += amount;
                ResonanceEffect::AttackBonus(amount)
            }
            Element::Mind => ResonanceEffect::Draw(amount),
            Element::Matter => ResonanceEffect::Block(amount),
            Element::Abstract => {
                self.pending_cost_reduction += amount;
                ResonanceEffect::CostReduction(amount)
            }
        };
        Some(ResonanceTrigger {
            element,
            tier,
            effect,
        })
    }
}
