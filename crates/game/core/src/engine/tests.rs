use std::collections::HashMap;
use std::sync::Mutex;

use super::*;
use crate::env::{
    ContentOracle, InventoryOracle, LearningOracle, ProficiencyLevel, RngOracle, SequenceRng,
};
use crate::error::SetupError;
use crate::relic::{RelicEffectEntry, RelicEffectKind, RelicId};
use crate::state::{
    CardData, CardType, Dimension, EffectKind, Element, EnemyAction, EnemyData, EnemyIntent,
    EnemySpecial, PileKind, StatusKind, WordId,
};

struct TestContent {
    cards: Vec<CardData>,
    config: CombatConfig,
    relics: Vec<RelicEffectEntry>,
}

impl ContentOracle for TestContent {
    fn card_pool(&self) -> Vec<CardData> {
        self.cards.clone()
    }

    fn combat_config(&self) -> CombatConfig {
        self.config.clone()
    }

    fn relic_effect(&self, id: &RelicId) -> Option<RelicEffectEntry> {
        self.relics.iter().find(|r| &r.id == id).cloned()
    }
}

#[derive(Default)]
struct TestLearning {
    levels: Mutex<HashMap<WordId, ProficiencyLevel>>,
    answers: Mutex<Vec<(WordId, bool)>>,
}

impl LearningOracle for TestLearning {
    fn level(&self, word: &WordId) -> Option<ProficiencyLevel> {
        self.levels.lock().unwrap().get(word).copied()
    }

    fn ensure_progress(&self, word: &WordId, default_level: ProficiencyLevel) -> ProficiencyLevel {
        *self
            .levels
            .lock()
            .unwrap()
            .entry(word.clone())
            .or_insert(default_level)
    }

    fn update_progress(&self, word: &WordId, is_correct: bool, _quality: u8) {
        self.answers.lock().unwrap().push((word.clone(), is_correct));
    }
}

struct TestInventory(Vec<RelicId>);

impl InventoryOracle for TestInventory {
    fn equipped_relics(&self) -> Vec<RelicId> {
        self.0.clone()
    }

    fn owned_relics(&self) -> Vec<RelicId> {
        Vec::new()
    }
}

struct Fixture {
    content: TestContent,
    learning: TestLearning,
    inventory: TestInventory,
    rng: Box<dyn RngOracle>,
}

impl Fixture {
    fn new(cards: Vec<CardData>) -> Self {
        Self {
            content: TestContent {
                cards,
                config: CombatConfig::default(),
                relics: Vec::new(),
            },
            learning: TestLearning::default(),
            inventory: TestInventory(Vec::new()),
            rng: Box::new(SequenceRng::always_low()),
        }
    }

    fn level(self, word: &str, level: ProficiencyLevel) -> Self {
        self.learning
            .levels
            .lock()
            .unwrap()
            .insert(WordId::new(word), level);
        self
    }

    fn relic(mut self, entry: RelicEffectEntry) -> Self {
        self.inventory.0.push(entry.id.clone());
        self.content.relics.push(entry);
        self
    }

    fn env(&self) -> CombatEnv<'_> {
        CombatEnv::new(
            &self.content,
            &self.learning,
            &self.inventory,
            self.rng.as_ref(),
        )
    }
}

fn strike(id: &str, cost: u32, damage: i32) -> CardData {
    CardData::new(id, CardType::Attack, cost, Dimension::Strike)
        .with_effect(EffectKind::Damage, damage)
        .with_word(id, Element::Abstract)
}

fn tactic(id: &str, dimension: Dimension) -> CardData {
    CardData::new(id, CardType::Tactical, 0, dimension).with_word(id, Element::Life)
}

fn dummy(hp: u32) -> EnemyData {
    EnemyData::new("dummy", hp, vec![EnemyAction::new(EnemyIntent::Defend, 0, 1)])
}

fn brute(hp: u32, attack: i32) -> EnemyData {
    EnemyData::new("brute", hp, vec![EnemyAction::new(EnemyIntent::Attack, attack, 1)])
}

fn all_known(fixture: Fixture, level: ProficiencyLevel) -> Fixture {
    let ids: Vec<String> = fixture
        .content
        .cards
        .iter()
        .map(|c| c.word_id.to_string())
        .collect();
    ids.iter().fold(fixture, |f, id| f.level(id, level))
}

fn started(fixture: &Fixture, enemies: &[EnemyData]) -> CombatSession {
    let mut session = CombatSession::new(7);
    session
        .start_combat(&fixture.env(), enemies)
        .expect("combat should start");
    session.drain_events();
    session
}

fn play(session: &mut CombatSession, fixture: &Fixture, word: &str) -> PlayOutcome {
    session.try_play_card(&fixture.env(), &WordId::new(word), None)
}

#[test]
fn setup_rejects_bad_encounters() {
    let fixture = Fixture::new(vec![strike("fire", 1, 6)]);
    let env = fixture.env();
    let mut session = CombatSession::new(1);

    assert_eq!(session.start_combat(&env, &[]), Err(SetupError::NoEnemies));
    let crowd = vec![dummy(5); CombatConfig::MAX_ENEMIES + 1];
    assert!(matches!(
        session.start_combat(&env, &crowd),
        Err(SetupError::TooManyEnemies { .. })
    ));
    assert_eq!(session.phase(), CombatPhase::NotInCombat);

    session.start_combat(&env, &[dummy(5)]).unwrap();
    assert_eq!(
        session.start_combat(&env, &[dummy(5)]),
        Err(SetupError::AlreadyInCombat)
    );
}

#[test]
fn duplicate_cards_fail_setup() {
    let fixture = Fixture::new(vec![strike("fire", 1, 6), strike("fire", 1, 6)]);
    let mut session = CombatSession::new(1);
    assert_eq!(
        session.start_combat(&fixture.env(), &[dummy(5)]),
        Err(SetupError::DuplicateCard("fire".into()))
    );
}

#[test]
fn first_turn_draws_hand_and_registers_words() {
    let cards: Vec<_> = (0..8).map(|i| strike(&format!("w{i}"), 1, 1)).collect();
    let fixture = Fixture::new(cards);
    let session = started(&fixture, &[dummy(10)]);

    assert_eq!(session.phase(), CombatPhase::PlayerTurn);
    assert_eq!(session.turn(), 1);
    assert_eq!(session.energy(), 3);
    assert_eq!(session.piles().hand().len(), 5);
    assert_eq!(session.piles().total_cards(), 8);
    assert_eq!(
        fixture.learning.level(&WordId::new("w3")),
        Some(ProficiencyLevel::New)
    );
}

#[test]
fn weakness_scales_damage() {
    let card = CardData::new("fist", CardType::Attack, 1, Dimension::Strike)
        .with_effect(EffectKind::Damage, 8)
        .with_word("fist", Element::Force);
    let fixture = Fixture::new(vec![card]).level("fist", ProficiencyLevel::Internalized);
    let enemy = dummy(20).with_weakness(Element::Force);
    let mut session = started(&fixture, &[enemy]);

    assert!(matches!(
        play(&mut session, &fixture, "fist"),
        PlayOutcome::Resolved
    ));
    assert_eq!(session.enemies()[0].entity().hp(), 8);
    assert_eq!(session.energy(), 2);
    assert!(
        session
            .drain_events()
            .contains(&CombatEvent::EnemyDamaged {
                enemy: EnemyId(0),
                amount: 12
            })
    );
}

#[test]
fn energy_never_goes_negative() {
    let fixture = all_known(
        Fixture::new(vec![strike("a", 2, 1), strike("b", 2, 1)]),
        ProficiencyLevel::Internalized,
    );
    let mut session = started(&fixture, &[dummy(50)]);

    assert!(matches!(play(&mut session, &fixture, "a"), PlayOutcome::Resolved));
    match play(&mut session, &fixture, "b") {
        PlayOutcome::Rejected(RejectReason::InsufficientEnergy { cost, available }) => {
            assert_eq!((cost, available), (2, 1));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(session.energy(), 1);
    assert!(session.piles().hand().iter().any(|c| c.word_id.as_str() == "b"));
}

#[test]
fn unknown_card_is_rejected() {
    let fixture = Fixture::new(vec![strike("a", 1, 1)]);
    let mut session = started(&fixture, &[dummy(5)]);
    assert!(matches!(
        play(&mut session, &fixture, "missing"),
        PlayOutcome::Rejected(RejectReason::NotInHand)
    ));
    assert!(session.drain_events().is_empty());
}

#[test]
fn wrong_answer_on_known_word_halves_effect() {
    let fixture = Fixture::new(vec![strike("nine", 1, 10)]).level("nine", ProficiencyLevel::Known);
    let mut session = started(&fixture, &[dummy(30)]);

    let PlayOutcome::AwaitingQuiz(ticket) = play(&mut session, &fixture, "nine") else {
        panic!("known words quiz on a low roll");
    };
    assert_eq!(ticket.request().level, ProficiencyLevel::Known);
    assert_eq!(session.phase(), CombatPhase::AnsweringQuiz);
    assert_eq!(session.energy(), 2);

    let outcome = session.answer_quiz(&fixture.env(), ticket, QuizAnswer::incorrect(1));
    assert!(matches!(outcome, PlayOutcome::Resolved));
    assert_eq!(session.enemies()[0].entity().hp(), 25);
    assert_eq!(session.phase(), CombatPhase::PlayerTurn);
    assert_eq!(
        fixture.learning.answers.lock().unwrap().as_slice(),
        &[(WordId::new("nine"), false)]
    );
}

#[test]
fn wrong_answer_on_new_word_fizzles() {
    let fixture = Fixture::new(vec![strike("new", 1, 10)]);
    let mut session = started(&fixture, &[dummy(30)]);

    let PlayOutcome::AwaitingQuiz(ticket) = play(&mut session, &fixture, "new") else {
        panic!("new words always quiz");
    };
    let outcome = session.answer_quiz(&fixture.env(), ticket, QuizAnswer::timed_out());
    assert!(matches!(outcome, PlayOutcome::Fizzled));
    assert_eq!(session.enemies()[0].entity().hp(), 30);
    assert_eq!(session.energy(), 2);
    assert_eq!(session.piles().pile(PileKind::Discard).len(), 1);
    assert!(session.drain_events().contains(&CombatEvent::CardFizzled {
        card: WordId::new("new")
    }));
}

#[test]
fn correct_answer_applies_proficiency_multiplier() {
    let fixture =
        Fixture::new(vec![strike("ten", 1, 10)]).level("ten", ProficiencyLevel::Familiar);
    let mut session = started(&fixture, &[dummy(40)]);

    let PlayOutcome::AwaitingQuiz(ticket) = play(&mut session, &fixture, "ten") else {
        panic!("familiar words quiz on a low roll");
    };
    session.answer_quiz(&fixture.env(), ticket, QuizAnswer::correct(5));
    assert_eq!(session.enemies()[0].entity().hp(), 29);
}

#[test]
fn pending_quiz_blocks_other_actions() {
    let fixture = Fixture::new(vec![strike("a", 1, 1), strike("b", 1, 1)]);
    let env = fixture.env();
    let mut session = started(&fixture, &[dummy(30)]);

    let PlayOutcome::AwaitingQuiz(ticket) = play(&mut session, &fixture, "a") else {
        panic!("new words always quiz");
    };
    assert!(matches!(
        play(&mut session, &fixture, "b"),
        PlayOutcome::Rejected(RejectReason::WrongPhase)
    ));
    assert_eq!(
        session.end_player_turn(&env),
        TurnOutcome::Rejected(RejectReason::WrongPhase)
    );

    let forged = QuizTicket::new(ticket.id + 100, ticket.request().clone());
    assert!(matches!(
        session.answer_quiz(&env, forged, QuizAnswer::correct(5)),
        PlayOutcome::Rejected(RejectReason::StaleTicket)
    ));
    assert_eq!(session.phase(), CombatPhase::AnsweringQuiz);

    assert!(matches!(
        session.answer_quiz(&env, ticket, QuizAnswer::correct(5)),
        PlayOutcome::Resolved
    ));
    assert_eq!(session.phase(), CombatPhase::PlayerTurn);
}

#[test]
fn three_attacks_enter_offensive_once() {
    let cards: Vec<_> = (0..5).map(|i| strike(&format!("s{i}"), 0, 1)).collect();
    let fixture = all_known(Fixture::new(cards), ProficiencyLevel::Internalized);
    let mut session = started(&fixture, &[dummy(100)]);

    for word in ["s0", "s1", "s2", "s3"] {
        let hand_has = session.piles().hand().iter().any(|c| c.word_id.as_str() == word);
        assert!(hand_has);
        play(&mut session, &fixture, word);
    }
    let changes: Vec<_> = session
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, CombatEvent::StanceChanged(_)))
        .collect();
    assert_eq!(changes, vec![CombatEvent::StanceChanged(Stance::Offensive)]);
    assert_eq!(session.player().stance(), Stance::Offensive);
}

#[test]
fn five_cards_in_a_turn_enter_frenzy() {
    let cards = vec![
        tactic("t0", Dimension::Strike),
        tactic("t1", Dimension::Strike),
        tactic("t2", Dimension::Guard),
        tactic("t3", Dimension::Guard),
        tactic("t4", Dimension::Boost),
    ];
    let fixture = all_known(Fixture::new(cards), ProficiencyLevel::Internalized);
    let mut session = started(&fixture, &[dummy(100)]);

    for word in ["t0", "t1", "t2", "t3", "t4"] {
        play(&mut session, &fixture, word);
    }
    assert_eq!(session.player().stance(), Stance::Frenzy);
}

#[test]
fn coverage_rewards_fire_once_per_threshold() {
    let cards = vec![
        tactic("strike", Dimension::Strike),
        tactic("guard", Dimension::Guard),
        tactic("boost", Dimension::Boost),
        tactic("warp", Dimension::Warp),
        tactic("spare", Dimension::Strike),
    ];
    let fixture = all_known(Fixture::new(cards), ProficiencyLevel::Internalized);
    let mut session = started(&fixture, &[dummy(100)]);

    for word in ["strike", "guard", "boost", "warp", "spare"] {
        play(&mut session, &fixture, word);
    }
    let rewards: Vec<_> = session
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, CombatEvent::CoverageRewarded { .. }))
        .collect();
    assert_eq!(
        rewards,
        vec![
            CombatEvent::CoverageRewarded { draw: 1, energy: 0 },
            CombatEvent::CoverageRewarded { draw: 1, energy: 1 },
        ]
    );
    assert_eq!(session.energy(), 4);
}

#[test]
fn second_same_element_card_resonates() {
    let fixture = all_known(
        Fixture::new(vec![
            tactic("leaf", Dimension::Guard),
            tactic("root", Dimension::Guard),
        ]),
        ProficiencyLevel::Internalized,
    );
    let mut session = started(&fixture, &[dummy(100)]);

    play(&mut session, &fixture, "leaf");
    play(&mut session, &fixture, "root");
    assert!(session.drain_events().contains(&CombatEvent::ResonanceTriggered {
        element: Element::Life,
        tier: 2,
        effect: crate::synergy::ResonanceEffect::Heal(2),
    }));
}

#[test]
fn survive_relic_saves_once_then_defeat() {
    let fixture = Fixture::new(vec![strike("a", 1, 1)]).relic(
        RelicEffectEntry::new("phoenix", RelicEffectKind::SurviveOnce).with_int(1),
    );
    let env = fixture.env();
    let mut session = started(&fixture, &[brute(50, 100)]);

    assert_eq!(session.end_player_turn(&env), TurnOutcome::NextTurn { turn: 2 });
    assert_eq!(session.player().hp(), 1);
    assert!(session.drain_events().iter().any(|e| matches!(
        e,
        CombatEvent::RelicTriggered(t) if t.kind == RelicEffectKind::SurviveOnce
    )));

    assert_eq!(
        session.end_player_turn(&env),
        TurnOutcome::Ended { victory: false }
    );
    assert_eq!(session.phase(), CombatPhase::Defeat);
    assert!(!session.player().is_alive());
    let summary = session.summary().unwrap();
    assert!(!summary.victory);
    assert_eq!(summary.turns, 2);
}

#[test]
fn block_decays_before_enemy_attacks() {
    let guard = CardData::new("wall", CardType::Skill, 1, Dimension::Guard)
        .with_effect(EffectKind::Block, 10)
        .with_word("wall", Element::Matter);
    let fixture = Fixture::new(vec![guard]).level("wall", ProficiencyLevel::Internalized);
    let env = fixture.env();
    let mut session = started(&fixture, &[brute(50, 6)]);

    play(&mut session, &fixture, "wall");
    assert_eq!(session.player().block(), 10);
    session.end_player_turn(&env);
    assert_eq!(session.player().hp(), 74);
    assert_eq!(session.player().block(), 0);
}

#[test]
fn defeating_every_enemy_is_victory() {
    let fixture = Fixture::new(vec![strike("big", 1, 30)]).level("big", ProficiencyLevel::Internalized);
    let mut session = started(&fixture, &[dummy(10)]);

    play(&mut session, &fixture, "big");
    assert_eq!(session.phase(), CombatPhase::Victory);
    let events = session.drain_events();
    assert!(events.contains(&CombatEvent::EnemyDefeated { enemy: EnemyId(0) }));
    assert!(events.contains(&CombatEvent::CombatEnded { victory: true }));
    assert!(play(&mut session, &fixture, "big").is_rejected());
}

#[test]
fn junk_lands_in_discard_on_first_enemy_turn() {
    let junk = CardData::new("sludge", CardType::Skill, 1, Dimension::Warp);
    let enemy = dummy(40).with_special(EnemySpecial::InjectJunk {
        card: junk,
        every_turns: 2,
    });
    let fixture = Fixture::new(vec![strike("a", 1, 1)]);
    let env = fixture.env();
    let mut session = started(&fixture, &[enemy]);

    session.end_player_turn(&env);
    assert!(session.piles().contains(&WordId::new("sludge#1")));
    session.end_player_turn(&env);
    assert!(!session.piles().contains(&WordId::new("sludge#2")));
}

#[test]
fn sleeper_grows_instead_of_acting() {
    let enemy = brute(40, 5).with_special(EnemySpecial::Sleeper {
        turns: 1,
        growth: 3,
    });
    let fixture = Fixture::new(vec![strike("a", 1, 1)]);
    let env = fixture.env();
    let mut session = started(&fixture, &[enemy]);

    session.end_player_turn(&env);
    assert_eq!(session.player().hp(), 80);
    assert_eq!(
        session.enemies()[0]
            .entity()
            .statuses()
            .value(StatusKind::Strength),
        3
    );
    session.end_player_turn(&env);
    assert_eq!(session.player().hp(), 72);
}

fn hexer(id: &str, status: StatusKind, value: i32) -> EnemyData {
    EnemyData::new(
        id,
        40,
        vec![EnemyAction::new(EnemyIntent::Debuff, value, 1).with_status(status, 3)],
    )
}

#[test]
fn player_statuses_do_not_interact() {
    let fixture = Fixture::new(vec![strike("a", 1, 1)]);
    let env = fixture.env();
    let enemies = [
        hexer("oiler", StatusKind::Oiled, 1),
        hexer("torch", StatusKind::Burning, 2),
    ];
    let mut session = started(&fixture, &enemies);

    session.end_player_turn(&env);
    let statuses = session.player().statuses();
    assert!(statuses.has(StatusKind::Oiled));
    assert!(statuses.has(StatusKind::Burning));
    assert_eq!(session.player().hp(), 78);
    assert!(
        !session
            .drain_events()
            .contains(&CombatEvent::PlayerDamaged { amount: 20 })
    );
}

#[test]
fn oil_then_fire_explodes_on_an_enemy() {
    let oil = CardData::new("oil", CardType::Skill, 0, Dimension::Warp)
        .with_status(StatusKind::Oiled, 1, 2)
        .with_word("oil", Element::Matter);
    let fire = CardData::new("fire", CardType::Skill, 0, Dimension::Boost)
        .with_status(StatusKind::Burning, 2, 2)
        .with_word("fire", Element::Abstract);
    let fixture = all_known(Fixture::new(vec![oil, fire]), ProficiencyLevel::Internalized);
    let mut session = started(&fixture, &[dummy(50)]);

    play(&mut session, &fixture, "oil");
    play(&mut session, &fixture, "fire");
    assert_eq!(session.enemies()[0].entity().hp(), 30);
    assert!(session.enemies()[0].entity().statuses().is_empty());
}

#[test]
fn player_strength_leaves_card_values_alone() {
    let might = CardData::new("might", CardType::Skill, 0, Dimension::Boost)
        .with_status(StatusKind::Strength, 3, 3)
        .with_word("might", Element::Life);
    let fixture = all_known(
        Fixture::new(vec![might, strike("hit", 1, 10)]),
        ProficiencyLevel::Internalized,
    );
    let mut session = started(&fixture, &[dummy(40)]);

    play(&mut session, &fixture, "might");
    assert_eq!(session.player().statuses().value(StatusKind::Strength), 3);
    play(&mut session, &fixture, "hit");
    assert_eq!(session.enemies()[0].entity().hp(), 30);
}

#[test]
fn attack_debuff_status_uses_the_computed_value() {
    let cards: Vec<_> = (0..3).map(|i| strike(&format!("s{i}"), 0, 1)).collect();
    let fixture = all_known(Fixture::new(cards), ProficiencyLevel::Internalized);
    let env = fixture.env();
    let adder = EnemyData::new(
        "adder",
        100,
        vec![
            EnemyAction::new(EnemyIntent::AttackDebuff, 4, 1)
                .with_status(StatusKind::Poisoned, 3),
        ],
    );
    let mut session = started(&fixture, &[adder]);

    for word in ["s0", "s1", "s2"] {
        play(&mut session, &fixture, word);
    }
    assert_eq!(session.player().stance(), Stance::Offensive);

    session.end_player_turn(&env);
    assert_eq!(session.player().statuses().value(StatusKind::Poisoned), 5);
    assert_eq!(session.player().hp(), 70);
}

#[test]
fn converted_mistake_resolves_at_full_strength() {
    let fixture = Fixture::new(vec![strike("nine", 1, 10)])
        .level("nine", ProficiencyLevel::Known)
        .relic(RelicEffectEntry::new("charm", RelicEffectKind::MistakeConvert).with_float(1.0));
    let mut session = started(&fixture, &[dummy(30)]);

    let PlayOutcome::AwaitingQuiz(ticket) = play(&mut session, &fixture, "nine") else {
        panic!("known words quiz on a low roll");
    };
    let outcome = session.answer_quiz(&fixture.env(), ticket, QuizAnswer::incorrect(1));
    assert!(matches!(outcome, PlayOutcome::Resolved));
    assert_eq!(session.enemies()[0].entity().hp(), 20);
    assert_eq!(
        fixture.learning.answers.lock().unwrap().as_slice(),
        &[(WordId::new("nine"), false)]
    );
    assert!(session.drain_events().iter().any(|e| matches!(
        e,
        CombatEvent::RelicTriggered(t) if t.kind == RelicEffectKind::MistakeConvert
    )));
}

#[test]
fn frozen_enemy_skips_one_action() {
    let ice = CardData::new("ice", CardType::Skill, 0, Dimension::Warp)
        .with_status(StatusKind::Frozen, 1, 1)
        .with_word("ice", Element::Matter);
    let fixture = all_known(Fixture::new(vec![ice]), ProficiencyLevel::Internalized);
    let env = fixture.env();
    let mut session = started(&fixture, &[brute(40, 5)]);

    play(&mut session, &fixture, "ice");
    assert!(session.enemies()[0].entity().statuses().has(StatusKind::Frozen));

    session.end_player_turn(&env);
    assert_eq!(session.player().hp(), 80);
    assert!(!session.enemies()[0].entity().statuses().has(StatusKind::Frozen));

    session.end_player_turn(&env);
    assert_eq!(session.player().hp(), 75);
}

#[test]
fn damage_all_applies_each_enemy_matchup() {
    let quake = CardData::new("quake", CardType::Attack, 1, Dimension::Strike)
        .with_effect(EffectKind::DamageAll, 10)
        .with_word("quake", Element::Force);
    let fixture = Fixture::new(vec![quake]).level("quake", ProficiencyLevel::Internalized);
    let enemies = [
        dummy(40).with_weakness(Element::Force),
        dummy(40),
        dummy(40).with_resistance(Element::Force),
    ];
    let mut session = started(&fixture, &enemies);

    play(&mut session, &fixture, "quake");
    let hp: Vec<_> = session.enemies().iter().map(|e| e.entity().hp()).collect();
    assert_eq!(hp, vec![25, 30, 35]);
}

#[test]
fn discard_relic_hits_an_enemy_per_card() {
    let fixture = Fixture::new(vec![strike("a", 1, 1), strike("b", 1, 1)]).relic(
        RelicEffectEntry::new("thorn", RelicEffectKind::DamageOnDiscard)
            .with_float(1.0)
            .with_int(4),
    );
    let env = fixture.env();
    let mut session = started(&fixture, &[dummy(30)]);

    session.end_player_turn(&env);
    assert_eq!(session.enemies()[0].entity().hp(), 22);
    let fired = session
        .drain_events()
        .iter()
        .filter(|e| matches!(
            e,
            CombatEvent::RelicTriggered(t) if t.kind == RelicEffectKind::DamageOnDiscard
        ))
        .count();
    assert_eq!(fired, 2);
}

#[test]
fn insight_reward_is_offered_at_turn_end() {
    let cards = vec![
        tactic("t0", Dimension::Strike),
        tactic("t1", Dimension::Strike),
        tactic("t2", Dimension::Strike),
    ];
    let fixture = all_known(Fixture::new(cards), ProficiencyLevel::Internalized);
    let env = fixture.env();
    let mut session = started(&fixture, &[dummy(100)]);

    for word in ["t0", "t1", "t2"] {
        play(&mut session, &fixture, word);
    }
    assert_eq!(session.synergy().knowledge.insight_tokens(), 3);
    session.drain_events();

    session.end_player_turn(&env);
    let events = session.drain_events();
    let at = events
        .iter()
        .position(|e| matches!(e, CombatEvent::InsightRewardAvailable { .. }))
        .expect("three high-level words earn insight");
    assert_eq!(
        events[at],
        CombatEvent::InsightRewardAvailable {
            options: vec![
                InsightOption::Damage(3),
                InsightOption::Block(3),
                InsightOption::Draw(1),
            ],
        }
    );
    assert!(matches!(events[at + 1], CombatEvent::CardDrawn { .. }));
}
