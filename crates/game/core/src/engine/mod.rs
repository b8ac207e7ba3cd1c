//! Combat state machine and action pipeline.
//!
//! [`CombatSession`] is the authoritative owner of one combat. Player actions
//! arrive through [`CombatSession::try_play_card`],
//! [`CombatSession::answer_quiz`] and [`CombatSession::end_player_turn`];
//! every mutation flows through those entry points and is reported as a
//! [`CombatEvent`]. A card that needs a quiz suspends the session and hands
//! out a single-use [`QuizTicket`]; nothing else can be played until that
//! ticket is answered.
//!
//! The session never blocks and never performs I/O. Collaborators are passed
//! per call through [`CombatEnv`].

mod events;
mod outcome;
mod play;
mod quiz;
mod turns;

pub use events::{CombatEvent, CombatPhase, InsightOption};
pub use outcome::{
    CombatSummary, PlayOutcome, QuizAnswer, QuizRequest, QuizTicket, RejectReason, TurnOutcome,
};
pub use crate::relic::QuizAssist;

use outcome::PendingQuiz;
use tracing::info;

use crate::combat::PlayStreaks;
use crate::config::CombatConfig;
use crate::env::{CombatEnv, Dice, RngState};
use crate::relic::RelicRegistry;
use crate::state::{
    CombatEntity, DamageReport, EnemyAction, EnemyId, EnemyInstance, Piles, Stance,
    StatusInteraction, StatusKind,
};
use crate::synergy::{SynergyConfig, SynergyState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct CombatStats {
    cards_played: u32,
    correct_answers: u32,
    wrong_answers: u32,
    experience: u32,
}

/// One combat, from setup to victory or defeat.
#[derive(Debug)]
pub struct CombatSession {
    config: CombatConfig,
    synergy_config: SynergyConfig,
    phase: CombatPhase,
    turn: u32,
    energy: u32,
    player: CombatEntity,
    piles: Piles,
    enemies: Vec<EnemyInstance>,
    streaks: PlayStreaks,
    synergy: SynergyState,
    relics: RelicRegistry,
    preview_depth: usize,
    rng: RngState,
    pending: Option<PendingQuiz>,
    next_ticket: u64,
    junk_serial: u32,
    stats: CombatStats,
    events: Vec<CombatEvent>,
}

impl Default for CombatSession {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CombatSession {
    /// Creates an idle session whose rolls derive from `seed`.
    ///
    /// Tuning is read from the content oracle when combat starts.
    pub fn new(seed: u64) -> Self {
        let config = CombatConfig::default();
        Self {
            player: CombatEntity::new(config.player_max_hp),
            config,
            synergy_config: SynergyConfig::default(),
            phase: CombatPhase::NotInCombat,
            turn: 0,
            energy: 0,
            piles: Piles::default(),
            enemies: Vec::new(),
            streaks: PlayStreaks::default(),
            synergy: SynergyState::default(),
            relics: RelicRegistry::default(),
            preview_depth: 0,
            rng: RngState::new(seed),
            pending: None,
            next_ticket: 0,
            junk_serial: 0,
            stats: CombatStats::default(),
            events: Vec::new(),
        }
    }

    // ===== observation =====

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn player(&self) -> &CombatEntity {
        &self.player
    }

    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    pub fn enemies(&self) -> &[EnemyInstance] {
        &self.enemies
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&EnemyInstance> {
        self.enemies.iter().find(|e| e.id() == id)
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn synergy_config(&self) -> &SynergyConfig {
        &self.synergy_config
    }

    pub fn synergy(&self) -> &SynergyState {
        &self.synergy
    }

    pub fn relics(&self) -> &RelicRegistry {
        &self.relics
    }

    pub fn streaks(&self) -> &PlayStreaks {
        &self.streaks
    }

    pub fn rng_state(&self) -> RngState {
        self.rng
    }

    /// Current intent plus any revealed by preview relics.
    pub fn upcoming_intents(&self, id: EnemyId) -> Vec<&EnemyAction> {
        self.enemy(id)
            .map(|e| e.upcoming_actions().take(1 + self.preview_depth).collect())
            .unwrap_or_default()
    }

    /// Final report; `None` until the combat has ended.
    pub fn summary(&self) -> Option<CombatSummary> {
        if !self.phase.is_terminal() {
            return None;
        }
        Some(CombatSummary {
            victory: self.phase == CombatPhase::Victory,
            turns: self.turn,
            cards_played: self.stats.cards_played,
            correct_answers: self.stats.correct_answers,
            wrong_answers: self.stats.wrong_answers,
            experience: self.stats.experience,
            player_hp: self.player.hp(),
        })
    }

    /// Takes every event emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        core::mem::take(&mut self.events)
    }

    // ===== shared helpers =====

    fn emit(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    fn set_phase(&mut self, phase: CombatPhase) {
        if self.phase != phase {
            self.phase = phase;
            self.emit(CombatEvent::StateChanged(phase));
        }
    }

    fn flush_relic_triggers(&mut self) {
        for trigger in self.relics.drain_triggers() {
            self.events.push(CombatEvent::RelicTriggered(trigger));
        }
    }

    fn change_stance(&mut self, stance: Stance) {
        if self.player.set_stance(stance) {
            info!(target: "lexicon::combat", %stance, "stance changed");
            self.emit(CombatEvent::StanceChanged(stance));
        }
    }

    fn draw_cards(&mut self, env: &CombatEnv<'_>, count: u32) {
        for _ in 0..count {
            let mut dice = Dice::new(env.rng(), &mut self.rng);
            let Some(card) = self.piles.draw(&mut dice) else {
                break;
            };
            self.events.push(CombatEvent::CardDrawn {
                card: card.word_id.clone(),
            });
        }
    }

    /// Restores the player from a lethal blow when a survive relic is ready.
    fn guard_lethal(&mut self) {
        if self.player.is_alive() {
            return;
        }
        if let Some(floor) = self.relics.survive_lethal() {
            self.player.set_hp(floor);
            info!(target: "lexicon::relic", hp = floor, "lethal damage survived");
            self.flush_relic_triggers();
        }
    }

    fn damage_player(&mut self, amount: u32) -> DamageReport {
        let report = self.player.take_damage(amount);
        self.emit(CombatEvent::PlayerDamaged { amount });
        self.guard_lethal();
        report
    }

    /// Player statuses stack without interacting.
    fn apply_player_status(&mut self, kind: StatusKind, value: i32, duration: i32) {
        self.player.apply_status(kind, value, duration);
    }

    fn damage_enemy(&mut self, index: usize, amount: u32) {
        let Some(enemy) = self.enemies.get_mut(index) else {
            return;
        };
        if !enemy.is_alive() {
            return;
        }
        enemy.entity.take_damage(amount);
        let (id, alive) = (enemy.id(), enemy.is_alive());
        self.emit(CombatEvent::EnemyDamaged { enemy: id, amount });
        if !alive {
            info!(target: "lexicon::combat", enemy = %id, "enemy defeated");
            self.emit(CombatEvent::EnemyDefeated { enemy: id });
        }
    }

    fn apply_enemy_status(&mut self, index: usize, kind: StatusKind, value: i32, duration: i32) {
        let Some(enemy) = self.enemies.get_mut(index) else {
            return;
        };
        if !enemy.is_alive() {
            return;
        }
        enemy.entity.apply_status(kind, value, duration);
        let fired = enemy.entity.resolve_interactions();
        let (id, alive) = (enemy.id(), enemy.is_alive());
        for interaction in fired {
            self.emit(CombatEvent::StatusInteraction {
                enemy: id,
                interaction,
            });
            if let StatusInteraction::Explosion { damage } = interaction {
                self.emit(CombatEvent::EnemyDamaged {
                    enemy: id,
                    amount: damage,
                });
            }
        }
        if !alive {
            self.emit(CombatEvent::EnemyDefeated { enemy: id });
        }
    }

    /// Index of the requested enemy when it is alive.
    fn living_index(&self, target: Option<EnemyId>) -> Option<usize> {
        let id = target?;
        self.enemies
            .iter()
            .position(|e| e.id() == id && e.is_alive())
    }

    /// Requested living target, else the first living enemy.
    fn resolve_target(&self, target: Option<EnemyId>) -> Option<usize> {
        self.living_index(target)
            .or_else(|| self.enemies.iter().position(EnemyInstance::is_alive))
    }

    fn random_living_enemy(&mut self, env: &CombatEnv<'_>) -> Option<usize> {
        let living: Vec<usize> = self
            .enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .map(|(i, _)| i)
            .collect();
        if living.is_empty() {
            return None;
        }
        let mut dice = Dice::new(env.rng(), &mut self.rng);
        living.get(dice.below(living.len() as u32) as usize).copied()
    }

    /// Moves to Victory or Defeat when the combat is decided.
    ///
    /// Defeat is checked first. Returns true once the combat is over.
    fn check_combat_end(&mut self) -> bool {
        if self.phase.is_terminal() {
            return true;
        }
        let victory = if !self.player.is_alive() {
            false
        } else if self.enemies.iter().all(|e| !e.is_alive()) {
            true
        } else {
            return false;
        };

        self.pending = None;
        self.set_phase(if victory {
            CombatPhase::Victory
        } else {
            CombatPhase::Defeat
        });
        self.emit(CombatEvent::CombatEnded { victory });
        info!(
            target: "lexicon::combat",
            victory,
            turns = self.turn,
            cards_played = self.stats.cards_played,
            correct = self.stats.correct_answers,
            wrong = self.stats.wrong_answers,
            "combat ended"
        );
        true
    }
}

#[cfg(test)]
mod tests;
