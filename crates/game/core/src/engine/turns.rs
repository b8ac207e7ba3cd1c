//! Combat setup and the player/enemy turn cycle.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use super::{CombatEvent, CombatPhase, CombatSession, CombatStats, InsightOption, TurnOutcome};
use crate::ai;
use crate::config::CombatConfig;
use crate::engine::RejectReason;
use crate::env::{CombatEnv, Dice, ProficiencyLevel};
use crate::error::SetupError;
use crate::relic::RelicRegistry;
use crate::state::{
    CardData, CombatEntity, EnemyData, EnemyId, EnemyInstance, EnemyIntent, EnemySpecial, Piles,
    Stance, StatusKind, WordId,
};
use crate::synergy::SynergyConfig;

impl CombatSession {
    /// Sets up a combat against `enemies` and starts the first player turn.
    ///
    /// Fails without touching the session when the encounter or the card
    /// pool is unusable.
    pub fn start_combat(
        &mut self,
        env: &CombatEnv<'_>,
        enemies: &[EnemyData],
    ) -> Result<(), SetupError> {
        if self.phase.is_active() {
            return Err(SetupError::AlreadyInCombat);
        }
        if enemies.is_empty() {
            return Err(SetupError::NoEnemies);
        }
        if enemies.len() > CombatConfig::MAX_ENEMIES {
            return Err(SetupError::TooManyEnemies {
                count: enemies.len(),
                max: CombatConfig::MAX_ENEMIES,
            });
        }
        for enemy in enemies {
            enemy.validate()?;
        }

        let content = env.content();
        let deck = content.card_pool();
        if deck.is_empty() {
            return Err(SetupError::EmptyCardPool);
        }
        let mut seen = BTreeSet::new();
        for card in &deck {
            if !seen.insert(&card.word_id) {
                return Err(SetupError::DuplicateCard(card.word_id.to_string()));
            }
        }

        self.config = content.combat_config();
        self.synergy_config = content.synergy_config().unwrap_or_else(|| {
            debug!(target: "lexicon::combat", "no synergy tuning provided, using defaults");
            SynergyConfig::default()
        });

        let learning = env.learning();
        for card in deck.iter().filter(|c| c.is_word_card()) {
            learning.ensure_progress(&card.word_id, ProficiencyLevel::New);
        }

        let active = env.inventory().active_relics();
        self.relics = RelicRegistry::from_active(&active, |id| content.relic_effect(id));
        self.preview_depth = self.relics.preview_depth();

        self.player = CombatEntity::new(self.config.player_max_hp);
        self.turn = 0;
        self.energy = 0;
        self.pending = None;
        self.junk_serial = 0;
        self.stats = CombatStats::default();
        self.streaks.reset();
        self.synergy = Default::default();

        self.enemies = enemies
            .iter()
            .enumerate()
            .map(|(i, data)| EnemyInstance::new(EnemyId(i as u32), Arc::new(data.clone())))
            .collect();
        let mut dice = Dice::new(env.rng(), &mut self.rng);
        for enemy in &mut self.enemies {
            ai::fill_intents(enemy, self.preview_depth, &mut dice);
        }

        self.piles = Piles::new(deck.into_iter().map(Arc::new).collect());
        self.piles.shuffle_draw(&mut dice);

        let start_block = self.relics.start_block();
        self.player.add_block(start_block);
        self.flush_relic_triggers();

        info!(
            target: "lexicon::combat",
            enemies = self.enemies.len(),
            cards = self.piles.total_cards(),
            relics = self.relics.len(),
            game_phase = %self.config.game_phase,
            "combat started"
        );

        self.start_player_turn(env);
        Ok(())
    }

    /// Ends the player's turn, runs every enemy and opens the next turn.
    pub fn end_player_turn(&mut self, env: &CombatEnv<'_>) -> TurnOutcome {
        if self.phase != CombatPhase::PlayerTurn {
            return TurnOutcome::Rejected(RejectReason::WrongPhase);
        }

        let mut discarded = Vec::new();
        if self.player.stance() == Stance::Frenzy {
            let mut dice = Dice::new(env.rng(), &mut self.rng);
            for _ in 0..CombatConfig::FRENZY_RANDOM_DISCARDS {
                if let Some(card) = self.piles.take_random_from_hand(&mut dice) {
                    discarded.push(card);
                }
            }
        }
        discarded.extend(self.piles.drain_hand());
        for card in discarded {
            self.piles.discard(card);
            let damage = {
                let mut dice = Dice::new(env.rng(), &mut self.rng);
                self.relics.on_discard(&mut dice)
            };
            self.flush_relic_triggers();
            if damage > 0
                && let Some(index) = self.random_living_enemy(env)
            {
                self.damage_enemy(index, damage);
            }
        }

        self.player.process_turn_end();

        let knowledge = &self.synergy_config.knowledge_resonance;
        if let Some(reward) = self.synergy.knowledge.take_reward(knowledge) {
            debug!(target: "lexicon::combat", ?reward, "insight reward earned");
            self.emit(CombatEvent::InsightRewardAvailable {
                options: vec![
                    InsightOption::Damage(reward.damage),
                    InsightOption::Block(reward.block),
                    InsightOption::Draw(reward.draw),
                ],
            });
            self.draw_cards(env, reward.draw);
        }

        self.emit(CombatEvent::TurnEnded { turn: self.turn });
        if !self.check_combat_end() {
            self.run_enemy_turn(env);
        }

        match self.phase {
            CombatPhase::Victory => TurnOutcome::Ended { victory: true },
            CombatPhase::Defeat => TurnOutcome::Ended { victory: false },
            _ => TurnOutcome::NextTurn { turn: self.turn },
        }
    }

    fn start_player_turn(&mut self, env: &CombatEnv<'_>) {
        self.turn += 1;
        self.streaks.reset();
        self.synergy.reset_turn();
        self.relics.reset_turn();

        let energized = self
            .player
            .remove_status(StatusKind::Energized)
            .map_or(0, |e| e.value.max(0) as u32);
        self.energy = self.config.max_energy + energized;
        self.set_phase(CombatPhase::PlayerTurn);

        let ticks = self.player.process_turn_start();
        if ticks.damage > 0 {
            self.emit(CombatEvent::PlayerDamaged {
                amount: ticks.damage,
            });
            self.guard_lethal();
        }
        if self.check_combat_end() {
            return;
        }

        let block = self.relics.block_per_turn();
        self.player.add_block(block);
        self.flush_relic_triggers();

        self.draw_cards(env, self.config.hand_size);
        self.emit(CombatEvent::TurnStarted { turn: self.turn });
        debug!(
            target: "lexicon::combat",
            turn = self.turn,
            energy = self.energy,
            hand = self.piles.hand().len(),
            "player turn started"
        );
    }

    fn run_enemy_turn(&mut self, env: &CombatEnv<'_>) {
        self.set_phase(CombatPhase::EnemyTurn);

        for index in 0..self.enemies.len() {
            if !self.enemies[index].is_alive() {
                continue;
            }
            self.inject_junk(index);

            let ticks = self.enemies[index].entity.process_turn_start();
            let id = self.enemies[index].id();
            if ticks.damage > 0 {
                self.emit(CombatEvent::EnemyDamaged {
                    enemy: id,
                    amount: ticks.damage,
                });
                if !self.enemies[index].is_alive() {
                    self.emit(CombatEvent::EnemyDefeated { enemy: id });
                    continue;
                }
            }

            if self.enemies[index].entity.consume_frozen() {
                debug!(target: "lexicon::combat", enemy = %id, "frozen, action skipped");
            } else {
                self.execute_enemy_action(index);
            }

            let depth = self.preview_depth;
            let mut dice = Dice::new(env.rng(), &mut self.rng);
            let enemy = &mut self.enemies[index];
            enemy.pop_intent();
            ai::fill_intents(enemy, depth, &mut dice);
            enemy.entity.process_turn_end();
            enemy.turns_taken += 1;

            if !self.player.is_alive() {
                break;
            }
        }

        if !self.check_combat_end() {
            self.start_player_turn(env);
        }
    }

    fn inject_junk(&mut self, index: usize) {
        let enemy = &self.enemies[index];
        let Some(EnemySpecial::InjectJunk { card, every_turns }) = &enemy.data().special else {
            return;
        };
        if *every_turns == 0 || enemy.turns_taken % every_turns != 0 {
            return;
        }
        let mut junk: CardData = card.clone();
        let id = enemy.id();
        self.junk_serial += 1;
        junk.word_id = WordId::new(format!("{}#{}", card.word_id, self.junk_serial));
        let word = junk.word_id.clone();
        self.piles.discard(Arc::new(junk));
        debug!(target: "lexicon::combat", enemy = %id, card = %word, "junk injected");
        self.emit(CombatEvent::JunkInjected {
            enemy: id,
            card: word,
        });
    }

    fn execute_enemy_action(&mut self, index: usize) {
        let enemy = &self.enemies[index];
        let Some(action) = enemy.current_action().cloned() else {
            return;
        };
        let id = enemy.id();

        if let Some(EnemySpecial::Sleeper { growth, .. }) = enemy.data().special
            && enemy.is_asleep()
        {
            let enemy = &mut self.enemies[index];
            enemy.sleep_remaining -= 1;
            enemy
                .entity
                .apply_status(StatusKind::Strength, growth, CombatConfig::PERMANENT_DURATION);
            debug!(
                target: "lexicon::combat",
                enemy = %id,
                remaining = enemy.sleep_remaining,
                "sleeping enemy grows stronger"
            );
            return;
        }

        let strikes = match enemy.data().special {
            Some(EnemySpecial::DoubleStrike) if action.intent.is_attack() => 2,
            _ => 1,
        };
        let strength = enemy.entity().statuses().value(StatusKind::Strength);
        let value = ai::action_value(&action, strength, self.player.stance());
        debug!(
            target: "lexicon::combat",
            enemy = %id,
            intent = %action.intent,
            value,
            strikes,
            "enemy acts"
        );

        match action.intent {
            EnemyIntent::Attack | EnemyIntent::AttackDebuff => {
                for _ in 0..strikes {
                    self.enemy_attack(index, value);
                }
                if action.intent == EnemyIntent::AttackDebuff
                    && let Some(kind) = action.status
                {
                    self.apply_player_status(kind, value as i32, action.status_duration);
                }
            }
            EnemyIntent::Defend => self.enemies[index].entity.add_block(value),
            EnemyIntent::Buff => {
                self.enemies[index].entity.apply_status(
                    StatusKind::Strength,
                    value as i32,
                    CombatConfig::PERMANENT_DURATION,
                );
            }
            EnemyIntent::Debuff => {
                if let Some(kind) = action.status {
                    self.apply_player_status(kind, action.value, action.status_duration);
                }
            }
            EnemyIntent::Special => {}
        }
    }

    fn enemy_attack(&mut self, index: usize, amount: u32) {
        let report = self.damage_player(amount);
        if report.hp_lost > 0 {
            return;
        }
        let reflected = self.relics.overblock_reflect(self.player.block());
        self.flush_relic_triggers();
        if reflected > 0 {
            self.damage_enemy(index, reflected);
        }
    }
}
