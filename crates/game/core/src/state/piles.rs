//! Draw, hand, discard and exhaust piles.
//!
//! Every card instance lives in exactly one pile. The top of the draw pile is
//! the end of its vector.

use super::{CardRef, WordId};
use crate::env::Dice;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PileKind {
    Draw,
    Hand,
    Discard,
    Exhaust,
}

#[derive(Clone, Debug, Default)]
pub struct Piles {
    draw: Vec<CardRef>,
    hand: Vec<CardRef>,
    discard: Vec<CardRef>,
    exhaust: Vec<CardRef>,
}

impl Piles {
    /// Places the whole deck in the draw pile, unshuffled.
    pub fn new(deck: Vec<CardRef>) -> Self {
        Self {
            draw: deck,
            ..Self::default()
        }
    }

    pub fn pile(&self, kind: PileKind) -> &[CardRef] {
        match kind {
            PileKind::Draw => &self.draw,
            PileKind::Hand => &self.hand,
            PileKind::Discard => &self.discard,
            PileKind::Exhaust => &self.exhaust,
        }
    }

    pub fn hand(&self) -> &[CardRef] {
        &self.hand
    }

    pub fn total_cards(&self) -> usize {
        self.draw.len() + self.hand.len() + self.discard.len() + self.exhaust.len()
    }

    pub fn shuffle_draw(&mut self, dice: &mut Dice<'_>) {
        dice.shuffle(&mut self.draw);
    }

    /// Draws the top card into the hand.
    ///
    /// An empty draw pile is refilled from the shuffled discard pile first.
    /// Returns `None` when both piles are empty.
    pub fn draw(&mut self, dice: &mut Dice<'_>) -> Option<CardRef> {
        if self.draw.is_empty() {
            if self.discard.is_empty() {
                return None;
            }
            self.draw.append(&mut self.discard);
            dice.shuffle(&mut self.draw);
            tracing::debug!(target: "lexicon::combat", cards = self.draw.len(), "reshuffled discard into draw pile");
        }
        let card = self.draw.pop()?;
        self.hand.push(card.clone());
        Some(card)
    }

    pub fn find_in_hand(&self, word: &WordId) -> Option<&CardRef> {
        self.hand.iter().find(|c| &c.word_id == word)
    }

    pub fn take_from_hand(&mut self, word: &WordId) -> Option<CardRef> {
        let index = self.hand.iter().position(|c| &c.word_id == word)?;
        Some(self.hand.remove(index))
    }

    pub fn take_random_from_hand(&mut self, dice: &mut Dice<'_>) -> Option<CardRef> {
        if self.hand.is_empty() {
            return None;
        }
        let index = dice.below(self.hand.len() as u32) as usize;
        Some(self.hand.remove(index))
    }

    pub fn drain_hand(&mut self) -> Vec<CardRef> {
        core::mem::take(&mut self.hand)
    }

    pub fn discard(&mut self, card: CardRef) {
        self.discard.push(card);
    }

    pub fn exhaust(&mut self, card: CardRef) {
        self.exhaust.push(card);
    }

    pub fn return_to_hand(&mut self, card: CardRef) {
        self.hand.push(card);
    }

    /// True when a card with this word id is in any pile.
    pub fn contains(&self, word: &WordId) -> bool {
        [&self.draw, &self.hand, &self.discard, &self.exhaust]
            .into_iter()
            .flatten()
            .any(|c| &c.word_id == word)
    }
}
