use game_core::{
    BaseStats, CombatSession, EncounterError, EncounterResult, Enemy, GameRng, InterfaceError,
    InventoryState, Player, Rank, ResourceMeter, Rules, ScriptedIo, ScriptedRng, SkillCatalog,
    SkillId, run_encounter,
};

// Wheel draws for a level 1 player with luck 5 (total weight 72).
const SPIN_POWER: u32 = 0;
const SPIN_TIME: u32 = 45;
const SPIN_REVERSAL: u32 = 68;
const SPIN_SURGE: u32 = 71;

// d100 draw that always lands above the dodge chance.
const HIT: u32 = 99;

// Action menu entries (1-based).
const ATTACK: usize = 1;
const SPIN: usize = 2;
const SKILL: usize = 3;
const ITEMS: usize = 4;
const DEFEND: usize = 5;
const RETREAT: usize = 6;

fn stalker() -> Enemy {
    Enemy::new("Mist Stalker", 80, BaseStats::new(12, 5, 12, 5), 100).with_gold_reward(20)
}

fn learn(player: &mut Player, id: SkillId) {
    let skill = SkillCatalog::builtin().get(id).cloned().unwrap();
    player.skills.push(skill);
}

#[test]
fn retreat_ends_immediately_without_rewards() {
    let mut player = Player::new("Kael");
    let mut enemy = stalker();
    let mut io = ScriptedIo::new([RETREAT]);
    let mut rng = ScriptedRng::new([]);

    let report =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    assert_eq!(report.result, EncounterResult::Escaped);
    assert_eq!(report.rounds, 1);
    assert!(report.rewards.is_none());
    assert_eq!(player.entity.gold, 50);
    assert_eq!(player.exp, 0);
    assert_eq!(player.entity.hp.current, 100);
    assert!(!io.saw("Mist Stalker's turn"));
}

#[test]
fn killing_blow_skips_enemy_phase_and_pays_out() {
    let mut player = Player::new("Kael");
    let mut enemy = stalker();
    enemy.entity.hp.set(5);
    let mut io = ScriptedIo::new([ATTACK]);
    let mut rng = ScriptedRng::new([]);

    let report =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    assert_eq!(report.result, EncounterResult::Victory);
    let rewards = report.rewards.unwrap();
    assert_eq!((rewards.gold, rewards.exp, rewards.stones), (20, 100, 0));
    assert_eq!(player.entity.gold, 70);
    assert_eq!(player.level, 2);
    assert!(io.saw("Victory! Mist Stalker has been defeated."));
    assert!(io.saw("Gained 20 Gold."));
    assert!(io.saw("LEVEL UP! Reach Level 2."));
    assert!(!io.saw("Mist Stalker's turn"));
}

#[test]
fn boss_always_drops_one_or_two_stones() {
    for seed in 0..64 {
        let mut player = Player::new("Kael");
        let mut boss = Enemy::new("The Mournful Sentinel", 1, BaseStats::new(25, 15, 20, 15), 500)
            .with_rank(Rank::F)
            .boss();
        let mut io = ScriptedIo::new([ATTACK]);
        let mut rng = GameRng::new(seed);

        let report =
            run_encounter(&mut player, &mut boss, &Rules::default(), &mut io, &mut rng).unwrap();

        let stones = report.rewards.unwrap().stones;
        assert!((1..=2).contains(&stones), "seed {seed} granted {stones}");
        assert_eq!(player.skill_stones, stones);
    }
}

#[test]
fn reversal_reflects_once_then_clears() {
    let mut player = Player::new("Kael");
    let mut enemy = stalker();
    // Round 1: spin Fate Reversal. Round 2: drink Mend-Extract. Round 3: leave.
    let mut io = ScriptedIo::new([SPIN, ITEMS, 1, RETREAT]);
    let mut rng = ScriptedRng::new([SPIN_REVERSAL, HIT, HIT]);

    let report =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    // Enemy hits for 12² / (12 + 5) = 8; reflection is 8 / 2 + 5 = 9.
    assert_eq!(report.result, EncounterResult::Escaped);
    assert_eq!(enemy.entity.hp.current, 80 - 9);
    assert!(io.saw("Fate Reversal! Mist Stalker is struck by their own power for 9 damage!"));
    let reflections = io
        .messages
        .iter()
        .filter(|m| m.text.starts_with("Fate Reversal!"))
        .count();
    assert_eq!(reflections, 1);
}

#[test]
fn enemy_attack_reflects_half_plus_defense() {
    let mut player = Player::new("Kael");
    let mut enemy = stalker();
    let rules = Rules::default();
    let mut io = ScriptedIo::new([]);
    let mut rng = ScriptedRng::new([HIT, HIT]);

    let mut session = CombatSession::new(&mut player, &mut enemy, &rules);
    session.arm_reversal();
    let strike = session.enemy_attack(&mut io, &mut rng);

    assert!(!strike.dodged);
    assert_eq!(strike.reflected, strike.damage / 2 + 5);
    assert_eq!(session.enemy().entity.hp.current, 80 - strike.reflected);
}

#[test]
fn time_freezes_enemy_for_two_rounds() {
    let mut player = Player::new("Kael");
    let mut enemy = stalker();
    enemy.entity.hp = ResourceMeter::full(500);
    let mut io = ScriptedIo::new([SPIN, ITEMS, 1, ITEMS, 1, RETREAT]);
    let mut rng = ScriptedRng::new([SPIN_TIME, HIT]);

    let report =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    assert_eq!(report.rounds, 4);
    assert!(io.saw("frozen in a fracture of time! (2 turns remaining)"));
    assert!(io.saw("frozen in a fracture of time! (1 turns remaining)"));
    let attacks = io
        .messages
        .iter()
        .filter(|m| m.text.contains("attacks for"))
        .count();
    assert_eq!(attacks, 1);
}

#[test]
fn invalid_and_defend_selections_reprompt() {
    let mut player = Player::new("Kael");
    let mut enemy = stalker();
    let mut io = ScriptedIo::new([9, 0, DEFEND, RETREAT]);
    let mut rng = ScriptedRng::new([]);

    let report =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    assert_eq!(report.result, EncounterResult::Escaped);
    assert_eq!(report.rounds, 1);
    assert_eq!(io.prompts.len(), 4);
    assert!(io.saw("Selection 9 is not one of the 6 options."));
}

#[test]
fn failed_skill_use_does_not_consume_the_round() {
    let mut player = Player::new("Kael");
    let mut enemy = stalker();
    let mut io = ScriptedIo::new([SKILL, RETREAT]);
    let mut rng = ScriptedRng::new([]);

    run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();
    assert!(io.saw("No skills available yet."));

    learn(&mut player, SkillId::Light);
    let mut io = ScriptedIo::new([SKILL, 1, RETREAT]);
    let report =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    assert_eq!(report.rounds, 1);
    assert!(io.saw("Insufficient Mana (MP)."));
    assert_eq!(player.mp.current, 20);
    assert_eq!(enemy.entity.hp.current, 80);
}

#[test]
fn skill_menu_back_returns_to_actions() {
    let mut player = Player::new("Kael");
    learn(&mut player, SkillId::Echo);
    let mut enemy = stalker();
    let mut io = ScriptedIo::new([SKILL, 2, RETREAT]);
    let mut rng = ScriptedRng::new([]);

    let report =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    assert_eq!(report.result, EncounterResult::Escaped);
    assert_eq!(player.mp.current, 20);
    assert_eq!(io.prompts[1].1, vec!["Echo Step (10 MP)".to_string(), "Back".to_string()]);
}

#[test]
fn light_arc_finishes_and_levels_twice() {
    let mut player = Player::new("Kael");
    player.mp = ResourceMeter::full(60);
    learn(&mut player, SkillId::Light);
    let mut enemy = stalker();
    enemy.entity.hp.set(40);
    enemy.exp_reward = 250;
    let mut io = ScriptedIo::new([SKILL, 1]);
    let mut rng = ScriptedRng::new([]);

    let report =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    // 45² / (45 + 5) = 40
    assert!(io.saw("sears Mist Stalker for 40 damage!"));
    assert_eq!(report.result, EncounterResult::Victory);
    assert_eq!(report.rewards.unwrap().level_ups.len(), 2);
    assert_eq!(player.level, 3);
    assert!(player.exp < player.exp_to_next);
}

#[test]
fn echo_step_adds_base_speed() {
    let mut player = Player::new("Kael");
    learn(&mut player, SkillId::Echo);
    let mut enemy = stalker();
    let mut io = ScriptedIo::new([SKILL, 1, RETREAT]);
    let mut rng = ScriptedRng::new([HIT]);

    run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    // Round 2 status: speed 20 against 12 gives 33% dodge.
    assert_eq!(io.statuses[1].dodge_chance, 33);
    assert_eq!(player.entity.effects.count_named("Echo Step"), 1);
}

fn enemy_attacks(io: &ScriptedIo) -> usize {
    io.messages
        .iter()
        .filter(|m| m.text.contains("attacks for"))
        .count()
}

#[test]
fn fate_guard_adds_base_defense_for_two_rounds() {
    let mut player = Player::new("Kael");
    learn(&mut player, SkillId::Guard);
    let mut enemy = stalker();
    let mut io = ScriptedIo::new([SKILL, 1, RETREAT]);
    let mut rng = ScriptedRng::new([HIT]);

    run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    // Defense 5 + 5 = 10: 12² / (12 + 10) = 6 instead of 8.
    assert_eq!(player.entity.hp.current, 94);
    assert_eq!(player.mp.current, 5);
    let guard = player.entity.effects.iter().find(|e| e.name == "Fate Guard").unwrap();
    assert_eq!(guard.remaining_turns, 1);
}

#[test]
fn time_split_skips_two_enemy_turns() {
    let mut player = Player::new("Kael");
    player.mp = ResourceMeter::full(60);
    learn(&mut player, SkillId::Time);
    let mut enemy = stalker();
    enemy.entity.hp = ResourceMeter::full(500);
    let mut io = ScriptedIo::new([SKILL, 1, ATTACK, RETREAT]);
    let mut rng = ScriptedRng::new([]);

    let report =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    assert_eq!(report.rounds, 3);
    assert!(io.saw("frozen in a fracture of time! (2 turns remaining)"));
    assert!(io.saw("frozen in a fracture of time! (1 turns remaining)"));
    assert_eq!(enemy_attacks(&io), 0);
    assert_eq!(player.entity.hp.current, 100);
}

#[test]
fn final_mercy_strikes_with_five_times_attack() {
    let mut player = Player::new("Kael");
    player.mp = ResourceMeter::full(60);
    learn(&mut player, SkillId::Mercy);
    let mut enemy = stalker();
    enemy.entity.hp = ResourceMeter::full(500);
    let mut io = ScriptedIo::new([SKILL, 1, RETREAT]);
    let mut rng = ScriptedRng::new([HIT]);

    run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    // 75² / (75 + 5) = 70
    assert!(io.saw("Final Mercy struck for 70 damage."));
    assert_eq!(enemy.entity.hp.current, 430);
    assert_eq!(player.mp.current, 0);
}

#[test]
fn empty_satchel_reprompts_without_consuming_the_round() {
    let mut player = Player::new("Kael").with_inventory(InventoryState::empty());
    let mut enemy = stalker();
    let mut io = ScriptedIo::new([ITEMS, RETREAT]);
    let mut rng = ScriptedRng::new([]);

    let report =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    assert!(io.saw("Your satchel is empty."));
    assert_eq!(report.result, EncounterResult::Escaped);
    assert_eq!(report.rounds, 1);
    assert_eq!(io.prompts.len(), 2);
}

#[test]
fn fallen_enemy_ends_the_encounter_before_any_prompt() {
    let mut player = Player::new("Kael");
    let mut enemy = stalker();
    enemy.entity.hp.set(0);
    let mut io = ScriptedIo::new([]);
    let mut rng = ScriptedRng::new([]);

    let report =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    assert_eq!(report.result, EncounterResult::Victory);
    assert!(io.prompts.is_empty());
    assert!(io.statuses.is_empty());
}

#[test]
fn defeat_purges_effects_and_grants_nothing() {
    let mut player = Player::new("Kael");
    let mut brute = Enemy::new("Ether-Goliath", 500, BaseStats::new(1000, 0, 12, 5), 700)
        .with_gold_reward(140);
    let mut io = ScriptedIo::new([SPIN]);
    let mut rng = ScriptedRng::new([SPIN_POWER, HIT]);

    let report =
        run_encounter(&mut player, &mut brute, &Rules::default(), &mut io, &mut rng).unwrap();

    assert_eq!(report.result, EncounterResult::Defeat);
    assert!(report.rewards.is_none());
    assert!(player.entity.effects.is_empty());
    assert_eq!(player.entity.gold, 50);
    assert!(io.saw("You have been unraveled..."));
}

#[test]
fn self_inflicted_death_is_a_defeat_without_enemy_action() {
    let mut player = Player::new("Kael");
    player.entity.hp.set(10);
    let mut enemy = stalker();
    let mut io = ScriptedIo::new([SPIN]);
    let mut rng = ScriptedRng::new([SPIN_SURGE]);

    let report =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    assert_eq!(report.result, EncounterResult::Defeat);
    assert!(io.saw("Corrupted Surge affects Kael! (-15 HP)"));
    assert!(!io.saw("Mist Stalker's turn"));
}

#[test]
fn status_is_published_every_round() {
    let mut player = Player::new("Kael");
    let mut enemy = stalker();
    enemy.entity.hp = ResourceMeter::full(500);
    let mut io = ScriptedIo::new([ATTACK, ATTACK, RETREAT]);
    let mut rng = ScriptedRng::new([HIT, HIT]);

    let report =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap();

    assert_eq!(io.statuses.len() as u32, report.rounds);
    assert_eq!(io.statuses[0].dodge_chance, 16);
    assert_eq!(io.statuses[0].enemy_hp, (500, 500));
}

#[test]
fn closed_input_aborts_the_encounter() {
    let mut player = Player::new("Kael");
    let mut enemy = stalker();
    let mut io = ScriptedIo::new([]);
    let mut rng = ScriptedRng::new([]);

    let error =
        run_encounter(&mut player, &mut enemy, &Rules::default(), &mut io, &mut rng).unwrap_err();
    assert_eq!(error, EncounterError::Interface(InterfaceError::InputClosed));
}
