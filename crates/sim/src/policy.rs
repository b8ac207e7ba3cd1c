//! Greedy card selection for the simulator.
use lexicon_core::{CombatSession, EnemyId, WordId};

/// Picks the most expensive affordable card and aims it at the weakest
/// living enemy. `None` means the turn should end.
pub fn choose_play(session: &CombatSession) -> Option<(WordId, Option<EnemyId>)> {
    let card = session
        .piles()
        .hand()
        .iter()
        .filter(|card| session.effective_cost(card) <= session.energy())
        .max_by_key(|card| session.effective_cost(card))?;

    let target = session
        .enemies()
        .iter()
        .filter(|enemy| enemy.is_alive())
        .min_by_key(|enemy| enemy.entity().hp())
        .map(|enemy| enemy.id());

    Some((card.word_id.clone(), target))
}
