//! Terminal 2048 runner.
//!
//! Turn-based loop over the pure core: render, read a direction (from the
//! keyboard or the auto-play policy), apply it, spawn a tile. Uses crossterm
//! for input and a framebuffer-based renderer.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::cli::Cli;
use tui_2048::core::{apply_move, new_game, spawn_tile, Grid, SimpleRng};
use tui_2048::input::{map_key, should_quit};
use tui_2048::policy;
use tui_2048::term::{GameView, Hud, TerminalRenderer, Viewport};
use tui_2048::types::AUTO_STEP_DELAY_MS;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli);

    // Always try to restore terminal state.
    let _ = term.exit();

    let final_score = result?;
    println!("Final score: {final_score}");
    Ok(())
}

fn run(term: &mut TerminalRenderer, cli: &Cli) -> Result<u32> {
    let mut rng = SimpleRng::new(cli.seed.unwrap_or_else(seed_from_clock));
    let mut grid = new_game(&mut rng);
    let view = GameView::default();

    if cli.auto {
        run_auto(term, cli, &view, &mut grid, &mut rng)?;
    } else {
        run_human(term, cli, &view, &mut grid, &mut rng)?;
    }

    Ok(grid.sum())
}

fn run_human(
    term: &mut TerminalRenderer,
    cli: &Cli,
    view: &GameView,
    grid: &mut Grid,
    rng: &mut SimpleRng,
) -> Result<()> {
    let mut hint: Option<String> = None;

    loop {
        let game_over = !grid.can_move();
        draw(term, cli, view, grid, game_over, hint.as_deref())?;

        // Turn-based: block until the next key.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key, cli.layout) {
            return Ok(());
        }
        if game_over {
            // Only quitting leaves a finished game.
            continue;
        }

        match map_key(key, cli.layout) {
            Some(dir) => {
                hint = None;
                if apply_move(grid, dir) {
                    spawn_tile(grid, rng);
                } else {
                    hint = Some(format!("nothing slides {}", dir.as_str()));
                }
            }
            None => {
                // Unrecognized key: report it, consume no turn.
                let [up, left, down, right] = cli.layout.keys();
                hint = Some(format!("use {up}/{left}/{down}/{right} or arrows"));
            }
        }
    }
}

fn run_auto(
    term: &mut TerminalRenderer,
    cli: &Cli,
    view: &GameView,
    grid: &mut Grid,
    rng: &mut SimpleRng,
) -> Result<()> {
    for _ in 0..cli.steps {
        // Print-then-move: the seeded starting grid is shown before the
        // first automatic move.
        draw(term, cli, view, grid, false, None)?;
        if !grid.can_move() {
            break;
        }
        if !policy::auto_step(grid, rng) {
            break;
        }

        // Pace the run and allow quitting mid-game.
        if event::poll(Duration::from_millis(AUTO_STEP_DELAY_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key, cli.layout) {
                    return Ok(());
                }
            }
        }
    }

    // Hold the final position until the user quits.
    loop {
        draw(term, cli, view, grid, !grid.can_move(), Some("run finished"))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && should_quit(key, cli.layout) {
                return Ok(());
            }
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    cli: &Cli,
    view: &GameView,
    grid: &Grid,
    game_over: bool,
    hint: Option<&str>,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let hud = Hud {
        score: grid.sum(),
        game_over,
        controls: cli.layout.keys(),
        hint,
    };
    let fb = view.render(grid, &hud, Viewport::new(w, h));
    term.draw(&fb)
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
