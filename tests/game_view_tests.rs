//! GameView rendering tests - pure framebuffer output, no terminal needed

use tui_2048::core::{new_game, Grid, SimpleRng};
use tui_2048::term::{GameView, Hud, Viewport};
use tui_2048::types::KeyLayout;

fn screen_text(grid: &Grid, hud: &Hud<'_>) -> Vec<String> {
    let view = GameView::default();
    let fb = view.render(grid, hud, Viewport::new(80, 24));
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

fn hud(score: u32, game_over: bool) -> Hud<'static> {
    Hud {
        score,
        game_over,
        controls: KeyLayout::Qwerty.keys(),
        hint: None,
    }
}

#[test]
fn test_tile_values_appear_on_screen() {
    let grid = Grid::from_rows([
        [2, 0, 0, 0],
        [0, 128, 0, 0],
        [0, 0, 2048, 0],
        [0, 0, 0, 0],
    ]);
    let screen = screen_text(&grid, &hud(grid.sum(), false));
    let all = screen.join("\n");
    assert!(all.contains('2'), "missing tile 2");
    assert!(all.contains("128"), "missing tile 128");
    assert!(all.contains("2048"), "missing tile 2048");
}

#[test]
fn test_score_panel_shows_the_sum() {
    let grid = Grid::from_rows([
        [4, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 16],
    ]);
    let screen = screen_text(&grid, &hud(grid.sum(), false));
    let all = screen.join("\n");
    assert!(all.contains("SCORE"));
    assert!(all.contains("20"));
}

#[test]
fn test_controls_line_follows_layout() {
    let grid = Grid::new();
    let azerty = Hud {
        controls: KeyLayout::Azerty.keys(),
        ..hud(0, false)
    };
    let all = screen_text(&grid, &azerty).join("\n");
    assert!(all.contains("z q s d"));
}

#[test]
fn test_game_over_overlay() {
    let grid = Grid::from_rows([
        [2, 4, 8, 16],
        [4, 8, 16, 32],
        [8, 16, 32, 64],
        [16, 32, 64, 128],
    ]);
    let running = screen_text(&grid, &hud(grid.sum(), false)).join("\n");
    assert!(!running.contains("GAME OVER"));

    let finished = screen_text(&grid, &hud(grid.sum(), true)).join("\n");
    assert!(finished.contains("GAME OVER"));
    assert!(finished.contains("450"));
}

#[test]
fn test_hint_is_shown_when_present() {
    let grid = Grid::new();
    let with_hint = Hud {
        hint: Some("use w/a/s/d or arrows"),
        ..hud(0, false)
    };
    let all = screen_text(&grid, &with_hint).join("\n");
    assert!(all.contains("use w/a/s/d or arrows"));
}

#[test]
fn test_seeded_start_grid_renders_its_tiles() {
    // A fresh game is renderable as-is, before any move is made.
    let mut rng = SimpleRng::new(77);
    let grid = new_game(&mut rng);
    let screen = screen_text(&grid, &hud(grid.sum(), false)).join("\n");
    let tiles = screen.matches('·').count();
    // 16 cells minus the two starting tiles show the empty marker.
    assert_eq!(tiles, 14);
    assert!(screen.contains('2') || screen.contains('4'));
}

#[test]
fn test_render_survives_a_tiny_viewport() {
    let grid = Grid::from_rows([
        [2, 4, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    let view = GameView::default();
    // Smaller than the board frame in both axes; must clip, not panic.
    let fb = view.render(&grid, &hud(6, false), Viewport::new(10, 4));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 4);
}
