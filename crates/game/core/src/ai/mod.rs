//! Enemy intent selection and action values.

use tracing::debug;

use crate::combat::round_value;
use crate::config::CombatConfig;
use crate::env::Dice;
use crate::state::{EnemyAction, EnemyInstance, Stance};

/// Walks cumulative weights and returns the first action whose running total
/// exceeds `roll`. Falls back to the first action.
pub fn select_weighted(actions: &[EnemyAction], roll: u32) -> usize {
    let mut cumulative = 0u32;
    for (index, action) in actions.iter().enumerate() {
        cumulative = cumulative.saturating_add(action.weight);
        if roll < cumulative {
            return index;
        }
    }
    0
}

/// Draws one action index from the weighted table.
pub fn roll_intent(actions: &[EnemyAction], dice: &mut Dice<'_>) -> usize {
    let total: u32 = actions.iter().map(|a| a.weight).sum();
    if total == 0 {
        return 0;
    }
    select_weighted(actions, dice.below(total))
}

/// Tops the enemy's intent queue up to `1 + preview_depth` entries.
pub fn fill_intents(enemy: &mut EnemyInstance, preview_depth: usize, dice: &mut Dice<'_>) {
    while enemy.queued_intents() < 1 + preview_depth {
        let index = roll_intent(&enemy.data().actions, dice);
        debug!(
            target: "lexicon::combat",
            enemy = %enemy.id(),
            action = index,
            "intent rolled"
        );
        enemy.push_intent(index);
    }
}

/// Final magnitude of an enemy action.
///
/// Attack-class intents add the enemy's Strength and are boosted while the
/// player is in Offensive stance.
pub fn action_value(action: &EnemyAction, strength: i32, player_stance: Stance) -> u32 {
    if !action.intent.is_attack() {
        return action.value.max(0) as u32;
    }
    let mut value = action.value + strength;
    if player_stance == Stance::Offensive {
        value = round_value(value as f32 * CombatConfig::OFFENSIVE_ENEMY_ATTACK_MULTIPLIER);
    }
    value.max(0) as u32
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::env::{PcgRng, RngState};
    use crate::state::{EnemyData, EnemyId, EnemyIntent};

    fn table() -> Vec<EnemyAction> {
        vec![
            EnemyAction::new(EnemyIntent::Attack, 6, 3),
            EnemyAction::new(EnemyIntent::Defend, 5, 0),
            EnemyAction::new(EnemyIntent::Buff, 2, 1),
        ]
    }

    #[test]
    fn cumulative_scan_picks_first_exceeding() {
        let actions = table();
        assert_eq!(select_weighted(&actions, 0), 0);
        assert_eq!(select_weighted(&actions, 2), 0);
        assert_eq!(select_weighted(&actions, 3), 2);
        assert_eq!(select_weighted(&actions, 99), 0);
    }

    #[test]
    fn zero_weight_actions_are_never_rolled() {
        let actions = table();
        let mut state = RngState::new(77);
        let mut dice = Dice::new(&PcgRng, &mut state);
        for _ in 0..200 {
            assert_ne!(roll_intent(&actions, &mut dice), 1);
        }
    }

    #[test]
    fn queue_holds_preview_depth_plus_one() {
        let data = Arc::new(EnemyData::new("slime", 10, table()));
        let mut enemy = EnemyInstance::new(EnemyId(0), data);
        let mut state = RngState::new(1);
        let mut dice = Dice::new(&PcgRng, &mut state);
        fill_intents(&mut enemy, 2, &mut dice);
        assert_eq!(enemy.upcoming_actions().count(), 3);
    }

    #[test]
    fn offensive_stance_invites_harder_hits() {
        let attack = EnemyAction::new(EnemyIntent::Attack, 8, 1);
        assert_eq!(action_value(&attack, 0, Stance::None), 8);
        assert_eq!(action_value(&attack, 2, Stance::None), 10);
        assert_eq!(action_value(&attack, 0, Stance::Offensive), 10);
        let defend = EnemyAction::new(EnemyIntent::Defend, 8, 1);
        assert_eq!(action_value(&defend, 2, Stance::Offensive), 8);
    }
}
