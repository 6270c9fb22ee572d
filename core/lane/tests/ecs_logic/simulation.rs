use super::super::test_helpers::match_builder::MatchBuilder;
use super::{step_n, take_events};
use lane::domain::core_types::{Faction, Outcome};
use lane::domain::events::GameEvent;
use lane::ecs_logic::economy::request_upgrade;
use lane::ecs_logic::query::{MatchSnapshot, get_elapsed, get_match_snapshot, get_outcome};
use lane::ecs_logic::simulation::step;
use lane::ecs_logic::spawner::request_spawn;
use lane::error::{ErrorKind, MatchError};
use lane::loader_schema::UnitType;

/// 生成即抵達對方基地的攻城單位
fn siege_match(base_health: f32) -> MatchBuilder {
    MatchBuilder::new()
        .lane(0.0, 5.0, 5.0)
        .base_health(base_health)
        .unit_type(UnitType {
            name: "siege".to_string(),
            cost: 10.0,
            hp: 100.0,
            damage: 20.0,
            ..Default::default()
        })
}

// ============================================================================
// 測試：時間推進
// ============================================================================

#[test]
fn test_step_advances_elapsed() {
    let mut world = siege_match(100.0).build().expect("build 應成功");

    step_n(&mut world, 0.25, 8);

    assert_eq!(get_elapsed(&world).expect("get_elapsed 應成功"), 2.0);
}

#[test]
fn test_zero_delta_changes_nothing() {
    let mut world = siege_match(100.0).build().expect("build 應成功");
    request_spawn(&mut world, Faction::Player, "siege").expect("request_spawn 應成功");
    let before = get_match_snapshot(&mut world).expect("get_match_snapshot 應成功");

    let outcome = step(&mut world, 0.0).expect("dt = 0 應成功");

    assert_eq!(outcome, Outcome::InProgress);
    let after = get_match_snapshot(&mut world).expect("get_match_snapshot 應成功");
    assert_eq!(before, after, "dt = 0 不應改變狀態");
}

#[test]
fn test_invalid_delta_is_rejected() {
    let mut world = siege_match(100.0).build().expect("build 應成功");

    for dt in [-0.1, f32::NAN, f32::INFINITY] {
        let err = step(&mut world, dt).unwrap_err();
        assert!(
            matches!(err.kind(), ErrorKind::Match(MatchError::InvalidDelta { .. })),
            "dt = {dt} 應被拒絕"
        );
    }
    assert_eq!(get_elapsed(&world).expect("get_elapsed 應成功"), 0.0, "被拒絕時時間不應前進");
}

// ============================================================================
// 測試：勝負
// ============================================================================

#[test]
fn test_player_wins_when_enemy_base_destroyed() {
    let mut world = siege_match(4.0).build().expect("build 應成功");
    request_spawn(&mut world, Faction::Player, "siege").expect("request_spawn 應成功");
    take_events(&mut world);

    let outcome = step(&mut world, 0.25).expect("step 應成功");

    assert_eq!(outcome, Outcome::PlayerWon);
    assert_eq!(get_outcome(&world).expect("get_outcome 應成功"), Outcome::PlayerWon);
    assert_eq!(
        take_events(&mut world),
        vec![GameEvent::MatchEnded {
            outcome: Outcome::PlayerWon
        }]
    );
}

#[test]
fn test_enemy_wins_when_player_base_destroyed() {
    let mut world = siege_match(4.0).build().expect("build 應成功");
    request_spawn(&mut world, Faction::Enemy, "siege").expect("request_spawn 應成功");

    assert_eq!(step_n(&mut world, 0.25, 1), Outcome::EnemyWon);
}

#[test]
fn test_both_bases_destroyed_counts_as_loss() {
    let mut world = siege_match(4.0).build().expect("build 應成功");
    request_spawn(&mut world, Faction::Player, "siege").expect("request_spawn 應成功");
    request_spawn(&mut world, Faction::Enemy, "siege").expect("request_spawn 應成功");

    assert_eq!(
        step_n(&mut world, 0.25, 1),
        Outcome::EnemyWon,
        "雙方基地同時被摧毀時判玩家落敗"
    );
}

#[test]
fn test_terminal_state_is_frozen() {
    let mut world = siege_match(4.0).build().expect("build 應成功");
    request_spawn(&mut world, Faction::Player, "siege").expect("request_spawn 應成功");
    step_n(&mut world, 0.25, 1);
    take_events(&mut world);
    let frozen = get_match_snapshot(&mut world).expect("get_match_snapshot 應成功");

    let outcome = step_n(&mut world, 1.0, 10);

    assert_eq!(outcome, Outcome::PlayerWon, "終局後 step 應回傳相同結果");
    let after = get_match_snapshot(&mut world).expect("get_match_snapshot 應成功");
    assert_eq!(frozen, after, "終局後狀態不應再變動");
    assert!(take_events(&mut world).is_empty(), "終局後不應再產生事件");
}

#[test]
fn test_requests_rejected_after_match_end() {
    let mut world = siege_match(4.0).build().expect("build 應成功");
    request_spawn(&mut world, Faction::Player, "siege").expect("request_spawn 應成功");
    step_n(&mut world, 0.25, 1);

    let err = request_spawn(&mut world, Faction::Player, "siege").unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Match(MatchError::MatchFinished {
            outcome: Outcome::PlayerWon
        })
    ));
    let err = request_upgrade(&mut world, Faction::Enemy).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Match(MatchError::MatchFinished { .. })
    ));
    assert!(!err.is_recoverable());
}

// ============================================================================
// 測試：決定性
// ============================================================================

/// 雙方互相推進、交戰、攻城的對局，每 tick 依固定腳本下單
fn run_scripted_battle() -> (MatchSnapshot, Vec<GameEvent>) {
    let mut world = MatchBuilder::new()
        .lane(0.0, 60.0, 5.0)
        .base_health(60.0)
        .gold(200.0, 20.0)
        .unit_type(UnitType {
            name: "soldier".to_string(),
            cost: 40.0,
            hp: 50.0,
            damage: 9.0,
            speed: 6.0,
            beats: Some("archer".to_string()),
            ..Default::default()
        })
        .unit_type(UnitType {
            name: "archer".to_string(),
            cost: 50.0,
            hp: 30.0,
            damage: 7.0,
            speed: 4.0,
            range: Some(35.0),
            attack_period: Some(0.9),
            ..Default::default()
        })
        .build()
        .expect("build 應成功");

    let script = [
        (Faction::Player, "soldier"),
        (Faction::Enemy, "archer"),
        (Faction::Player, "archer"),
        (Faction::Enemy, "soldier"),
    ];
    let mut events = Vec::new();
    for tick in 0..600 {
        if tick % 45 == 0 {
            let (faction, type_name) = script[(tick / 45) % script.len()];
            // 金幣不足屬可恢復錯誤，直接略過
            let _ = request_spawn(&mut world, faction, type_name);
        }
        let outcome = step(&mut world, 1.0 / 30.0).expect("step 應成功");
        events.extend(take_events(&mut world));
        if outcome.is_terminal() {
            break;
        }
    }
    let snapshot = get_match_snapshot(&mut world).expect("get_match_snapshot 應成功");
    (snapshot, events)
}

#[test]
fn test_identical_inputs_give_identical_battles() {
    let (first, first_events) = run_scripted_battle();
    let (second, second_events) = run_scripted_battle();

    let killed = first_events
        .iter()
        .filter(|event| matches!(event, GameEvent::UnitKilled { .. }))
        .count();
    assert!(killed > 0, "對局中應有單位陣亡");
    assert_eq!(first, second, "相同輸入與 dt 序列應得到相同結果");
    assert_eq!(first_events, second_events, "事件紀錄也應相同");
}
