//! sim-runner: headless runner for the gem mine simulation.
//!
//! Usage:
//!   sim-runner --ticks 1000 --players 4 --mines 3
//!   sim-runner --start-tick 500 --spawn-ticks 50 --ticks 2000

use anyhow::Result;
use gemmine_core::{
    clock::GameClock,
    config::GameConfig,
    executor::Executor,
    game::{Game, GameMap},
    gem_mine_execution::GemMineExecution,
    types::{PlayerId, Tick},
};
use std::env;

const MAP_WIDTH: u32 = 32;
const MAP_HEIGHT: u32 = 32;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ticks = parse_arg(&args, "--ticks", 1000u64);
    let players = parse_arg(&args, "--players", 4u32);
    let mines_per_player = parse_arg(&args, "--mines", 3u32);
    let start_tick = parse_arg(&args, "--start-tick", 0u64);
    let spawn_ticks = parse_arg(&args, "--spawn-ticks", 0u64);

    println!("gem mine sim-runner");
    println!("  ticks:       {ticks}");
    println!("  players:     {players}");
    println!("  mines each:  {mines_per_player}");
    println!("  start tick:  {start_tick}");
    println!("  spawn ticks: {spawn_ticks}");
    println!();

    let config = GameConfig {
        spawn_phase_ticks: spawn_ticks,
        ..GameConfig::default()
    };
    let map = GameMap::new(MAP_WIDTH, MAP_HEIGHT);
    let mut game = Game::with_clock(config, map, GameClock::starting_at(start_tick));
    for id in 1..=players {
        game.add_player(id as PlayerId, format!("Player {id}"));
    }

    let mut executor = Executor::new(game);

    // Lay mines out on a deterministic grid, one row per player, so a
    // run is reproducible from its flags alone.
    for player in 1..=players {
        for mine in 0..mines_per_player {
            let tile = executor.game().map().tile(2 + mine * 3, 2 + player * 3);
            executor.add_execution(Box::new(GemMineExecution::new(player as PlayerId, tile)));
        }
    }

    executor.run_ticks(ticks)?;
    print_summary(&executor, ticks);

    Ok(())
}

fn print_summary(executor: &Executor, ticks: u64) {
    let game = executor.game();
    let stats = game.stats();

    println!("=== RUN SUMMARY ===");
    println!("  ticks run:        {ticks}");
    println!("  final tick:       {}", game.ticks());
    println!("  executions alive: {}", executor.active_executions());
    println!("  yield events:     {}", stats.yield_events());
    println!();
    println!("=== GEMS MINED ===");
    for (player, gems) in stats.per_player() {
        let name = game
            .player(player)
            .map(|p| p.name().to_string())
            .unwrap_or_else(|_| format!("player {player}"));
        println!("  {name:<12} {gems}");
    }

    let messages = game.messages();
    println!();
    println!("=== LAST MESSAGES ===");
    if messages.is_empty() {
        println!("  (none)");
    } else {
        for msg in messages.iter().rev().take(5).rev() {
            println!("  tick {:>6} | player {} | {}", msg.tick, msg.player, msg.text);
        }
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
