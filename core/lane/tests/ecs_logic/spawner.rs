use super::super::test_helpers::match_builder::MatchBuilder;
use super::take_events;
use lane::domain::core_types::{Faction, UnitState};
use lane::domain::events::{GameEvent, Purchase};
use lane::ecs_logic::query::{get_economy_view, get_unit_views};
use lane::ecs_logic::spawner::request_spawn;
use lane::error::{DataError, EconomyError, ErrorKind};
use lane::loader_schema::UnitType;

fn soldier_match(starting_gold: f32) -> MatchBuilder {
    MatchBuilder::new()
        .gold(starting_gold, 0.0)
        .unit("soldier", 50.0, 100.0, 12.0, 40.0)
}

// ============================================================================
// 測試：主要
// ============================================================================

#[test]
fn test_spawn_with_exact_gold() {
    let mut world = soldier_match(50.0).build().expect("build 應成功");

    request_spawn(&mut world, Faction::Player, "soldier").expect("金幣剛好足夠時應成功");

    let economy = get_economy_view(&world, Faction::Player).expect("get_economy_view 應成功");
    assert_eq!(economy.gold, 0.0, "金幣應扣至 0");

    let units = get_unit_views(&mut world);
    assert_eq!(units.len(), 1, "應生成恰好一個單位");
    let unit = &units[0];
    assert_eq!(unit.faction, Faction::Player);
    assert_eq!(unit.type_name, "soldier");
    assert_eq!(unit.health, 100.0, "新單位應為滿血");
    assert_eq!(unit.max_health, 100.0);
    assert_eq!(unit.position, 10.0, "應生成於己方基地前 spawn_offset 處");
    assert_eq!(unit.state, UnitState::Advancing);

    assert_eq!(
        take_events(&mut world),
        vec![GameEvent::UnitTrained {
            faction: Faction::Player,
            type_name: "soldier".to_string(),
            cost: 50.0,
        }]
    );
}

#[test]
fn test_enemy_spawns_in_front_of_own_base() {
    let mut world = soldier_match(100.0).build().expect("build 應成功");

    request_spawn(&mut world, Faction::Enemy, "soldier").expect("request_spawn 應成功");

    let units = get_unit_views(&mut world);
    assert_eq!(units[0].faction, Faction::Enemy);
    assert_eq!(units[0].position, 90.0, "敵方單位應生成於 100 - 10");
    let economy = get_economy_view(&world, Faction::Enemy).expect("get_economy_view 應成功");
    assert_eq!(economy.gold, 50.0, "應扣除敵方金幣");
    let player = get_economy_view(&world, Faction::Player).expect("get_economy_view 應成功");
    assert_eq!(player.gold, 100.0, "不應影響玩家金幣");
}

#[test]
fn test_spawn_order_increases() {
    let mut world = soldier_match(200.0).build().expect("build 應成功");

    request_spawn(&mut world, Faction::Player, "soldier").expect("request_spawn 應成功");
    request_spawn(&mut world, Faction::Enemy, "soldier").expect("request_spawn 應成功");
    request_spawn(&mut world, Faction::Player, "soldier").expect("request_spawn 應成功");

    let orders: Vec<(u64, Faction)> = get_unit_views(&mut world)
        .into_iter()
        .map(|unit| (unit.spawn_order, unit.faction))
        .collect();
    assert_eq!(
        orders,
        vec![(0, Faction::Player), (1, Faction::Enemy), (2, Faction::Player)],
        "單位應依生成序號排列"
    );
}

#[test]
fn test_gatherer_spawns_gathering() {
    let mut world = MatchBuilder::new()
        .unit_type(UnitType {
            name: "miner".to_string(),
            cost: 30.0,
            hp: 60.0,
            gather_rate: Some(0.6),
            ..Default::default()
        })
        .build()
        .expect("build 應成功");

    request_spawn(&mut world, Faction::Player, "miner").expect("request_spawn 應成功");

    let units = get_unit_views(&mut world);
    assert_eq!(units[0].state, UnitState::Gathering, "採集者應處於採集狀態");
}

// ============================================================================
// 測試：錯誤
// ============================================================================

#[test]
fn test_spawn_with_insufficient_gold() {
    let mut world = soldier_match(49.0).build().expect("build 應成功");

    let err = request_spawn(&mut world, Faction::Player, "soldier").unwrap_err();
    assert!(
        matches!(
            err.kind(),
            ErrorKind::Economy(EconomyError::InsufficientResources {
                faction: Faction::Player,
                required,
                available,
            }) if *required == 50.0 && *available == 49.0
        ),
        "應回傳 InsufficientResources，實際: {err}"
    );
    assert!(err.is_recoverable(), "金幣不足應可恢復");

    let economy = get_economy_view(&world, Faction::Player).expect("get_economy_view 應成功");
    assert_eq!(economy.gold, 49.0, "失敗時金幣不應變動");
    assert!(get_unit_views(&mut world).is_empty(), "失敗時不應生成單位");

    assert_eq!(
        take_events(&mut world),
        vec![GameEvent::InsufficientFunds {
            faction: Faction::Player,
            purchase: Purchase::Unit("soldier".to_string()),
            required: 50.0,
            available: 49.0,
        }]
    );
}

#[test]
fn test_spawn_unknown_type() {
    let mut world = soldier_match(1000.0).build().expect("build 應成功");

    let err = request_spawn(&mut world, Faction::Player, "dragon").unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Data(DataError::UnitTypeNotFound { type_name }) if type_name == "dragon"
    ));
    assert!(err.is_recoverable());

    let economy = get_economy_view(&world, Faction::Player).expect("get_economy_view 應成功");
    assert_eq!(economy.gold, 1000.0, "失敗時金幣不應變動");
    assert!(get_unit_views(&mut world).is_empty());
    assert_eq!(
        take_events(&mut world),
        vec![GameEvent::UnknownUnitType {
            faction: Faction::Player,
            type_name: "dragon".to_string(),
        }]
    );
}
