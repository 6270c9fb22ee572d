use super::super::test_helpers::match_builder::MatchBuilder;
use super::step_n;
use lane::domain::core_types::{Faction, Outcome};
use lane::ecs_logic::economy::request_upgrade;
use lane::ecs_logic::match_setup::reset_match;
use lane::ecs_logic::query::{get_match_snapshot, get_outcome, get_unit_views};
use lane::ecs_logic::spawner::request_spawn;
use lane::loader_schema::UnitType;

fn siege_match() -> MatchBuilder {
    MatchBuilder::new()
        .lane(0.0, 5.0, 5.0)
        .base_health(4.0)
        .gold(100.0, 1.0)
        .unit_type(UnitType {
            name: "siege".to_string(),
            cost: 10.0,
            hp: 100.0,
            damage: 20.0,
            ..Default::default()
        })
}

#[test]
fn test_reset_leaves_terminal_state() {
    let mut world = siege_match().build().expect("build 應成功");
    let fresh = get_match_snapshot(&mut world).expect("get_match_snapshot 應成功");

    request_spawn(&mut world, Faction::Player, "siege").expect("request_spawn 應成功");
    request_upgrade(&mut world, Faction::Enemy).expect("request_upgrade 應成功");
    assert_eq!(step_n(&mut world, 0.25, 1), Outcome::PlayerWon);

    reset_match(&mut world).expect("reset_match 應成功");

    assert_eq!(get_outcome(&world).expect("get_outcome 應成功"), Outcome::InProgress);
    assert!(get_unit_views(&mut world).is_empty(), "重新開局後不應有單位");
    assert_eq!(
        get_match_snapshot(&mut world).expect("get_match_snapshot 應成功"),
        fresh,
        "重新開局應回到開局狀態"
    );

    request_spawn(&mut world, Faction::Player, "siege").expect("重新開局後應可再訓練");
    assert_eq!(get_unit_views(&mut world)[0].spawn_order, 0, "生成序號應重新計算");
}
