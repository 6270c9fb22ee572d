//! 無畫面的對戰模擬工具
//!
//! 用法：
//! cargo run -p lane_harness -- --build miner,swordsman,upgrade,archer --duration 300
//!
//! 參數：
//! - `--units <path>` / `--match <path>`：自訂資料檔，省略時使用內建資料
//! - `--build <a,b,...>`：玩家的建造順序（單位類型或 `upgrade`），循環執行
//! - `--duration <秒>`：模擬時間上限（預設 300）
//! - `--dt <秒>`：每步時間（預設 1/60）
//! - `--hud-every <秒>`：HUD 輸出間隔（預設 10）
//! - `--json`：結束時輸出 JSON 快照
//!
//! 事件透過 log 輸出，可用 RUST_LOG 調整。

use anyhow::{Context, Result, bail};
use bevy_ecs::prelude::World;
use lane::domain::core_types::{Faction, Outcome};
use lane::ecs_logic::economy::request_upgrade;
use lane::ecs_logic::match_setup::create_world;
use lane::ecs_logic::query::{
    drain_events, get_archetype, get_base_view, get_economy_view, get_elapsed, get_match_snapshot,
    get_unit_views,
};
use lane::ecs_logic::simulation::step;
use lane::ecs_logic::spawner::request_spawn;
use lane::{DEFAULT_MATCH_TOML, DEFAULT_UNITS_TOML};
use std::env;
use std::fs;
use strum::IntoEnumIterator;

const UPGRADE_ORDER: &str = "upgrade";

struct Options {
    units_toml: String,
    match_toml: String,
    build: Vec<String>,
    duration: f32,
    dt: f32,
    hud_every: f32,
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_options(&args)?;

    let mut world =
        create_world(&options.units_toml, &options.match_toml).context("無法建立對戰")?;

    let outcome = run(&mut world, &options)?;
    println!("結果：{outcome}");

    if options.json {
        let snapshot = get_match_snapshot(&mut world)?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

fn run(world: &mut World, options: &Options) -> Result<Outcome> {
    let mut next_order = 0;
    let mut next_hud = 0.0;
    let mut outcome = Outcome::InProgress;

    while !outcome.is_terminal() {
        let elapsed = get_elapsed(world)?;
        if elapsed >= options.duration {
            log::warn!("已達時間上限 {:.0}s，對戰未分勝負", options.duration);
            break;
        }

        if !options.build.is_empty() {
            let order = &options.build[next_order % options.build.len()];
            if try_order(world, order)? {
                next_order += 1;
            }
        }

        outcome = step(world, options.dt)?;
        drain_events(world)?;

        if elapsed >= next_hud {
            print_hud(world)?;
            next_hud += options.hud_every;
        }
    }

    print_hud(world)?;
    Ok(outcome)
}

/// 金幣足夠時執行一個建造指令，回傳是否執行
fn try_order(world: &mut World, order: &str) -> Result<bool> {
    let economy = get_economy_view(world, Faction::Player)?;
    if order == UPGRADE_ORDER {
        if economy.gold < economy.upgrade_cost {
            return Ok(false);
        }
        request_upgrade(world, Faction::Player)?;
        return Ok(true);
    }

    let archetype = get_archetype(world, order)?;
    if economy.gold < archetype.cost {
        return Ok(false);
    }
    request_spawn(world, Faction::Player, order)?;
    Ok(true)
}

fn print_hud(world: &mut World) -> Result<()> {
    let elapsed = get_elapsed(world)?;
    let economy = get_economy_view(world, Faction::Player)?;
    let player_base = get_base_view(world, Faction::Player)?;
    let enemy_base = get_base_view(world, Faction::Enemy)?;
    let units = get_unit_views(world);
    let counts: Vec<usize> = Faction::iter()
        .map(|faction| units.iter().filter(|unit| unit.faction == faction).count())
        .collect();

    println!(
        "t={elapsed:>7.1}s | 金幣 {:>4.0} ({:>3.0}%) +{:.2}/s 礦場 {} | 基地 {:>3.0}/{:.0} vs {:>3.0}/{:.0} | 單位 {} vs {}",
        economy.display_gold,
        economy.gold_fill * 100.0,
        economy.income,
        economy.mine_level,
        player_base.health,
        player_base.max_health,
        enemy_base.health,
        enemy_base.max_health,
        counts[0],
        counts[1],
    );
    Ok(())
}

fn parse_options(args: &[String]) -> Result<Options> {
    let value_of = |flag: &str| -> Option<&String> {
        args.iter().skip_while(|arg| arg.as_str() != flag).nth(1)
    };
    let number_of = |flag: &str, default: f32| -> Result<f32> {
        let Some(raw) = value_of(flag) else {
            return Ok(default);
        };
        let value = raw
            .parse::<f32>()
            .with_context(|| format!("{flag} 需要數值，收到 {raw}"))?;
        if !value.is_finite() {
            bail!("{flag} 必須是有限數值，收到 {raw}");
        }
        Ok(value)
    };

    let units_toml = match value_of("--units") {
        Some(path) => fs::read_to_string(path).with_context(|| format!("無法讀取 {path}"))?,
        None => DEFAULT_UNITS_TOML.to_string(),
    };
    let match_toml = match value_of("--match") {
        Some(path) => fs::read_to_string(path).with_context(|| format!("無法讀取 {path}"))?,
        None => DEFAULT_MATCH_TOML.to_string(),
    };
    let build = value_of("--build")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|order| !order.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let duration = number_of("--duration", 300.0)?;
    let dt = number_of("--dt", 1.0 / 60.0)?;
    let hud_every = number_of("--hud-every", 10.0)?;
    if dt <= 0.0 || hud_every <= 0.0 {
        bail!("--dt 與 --hud-every 必須大於 0");
    }
    if duration < 0.0 {
        bail!("--duration 不可為負");
    }

    Ok(Options {
        units_toml,
        match_toml,
        build,
        duration,
        dt,
        hud_every,
        json: args.iter().any(|arg| arg == "--json"),
    })
}
