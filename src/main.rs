//! Terminal pairs runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).
//!
//! The app alternates between two screens: the settings menu and the board.
//! Confirming the menu persists the chosen settings and deals a new board;
//! "new game" on the board returns to the menu with the current settings
//! preloaded.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use tui_pairs::core::{GameState, SettingsMenu};
use tui_pairs::input::{handle_game_key, handle_menu_key, should_quit};
use tui_pairs::store::{load_settings, save_settings, FileStore, KeyValueStore};
use tui_pairs::term::{FrameBuffer, GameView, MenuView, TerminalRenderer, Viewport};
use tui_pairs::types::{GameAction, TICK_MS};

enum Screen {
    Menu(SettingsMenu),
    Game(GameState),
}

fn main() -> Result<()> {
    let store = FileStore::new(config_root());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &store);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, store: &dyn KeyValueStore) -> Result<()> {
    let mut screen = Screen::Menu(SettingsMenu::new(load_settings(store)));
    let menu_view = MenuView::default();
    let game_view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        match &screen {
            Screen::Menu(menu) => menu_view.render_into(menu, viewport, &mut fb),
            Screen::Game(state) => game_view.render_into(state, viewport, &mut fb),
        }
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    screen = step_screen(screen, key, store)?;
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Screen::Game(state) = &mut screen {
                state.tick(TICK_MS);
            }
        }
    }
}

fn step_screen(screen: Screen, key: KeyEvent, store: &dyn KeyValueStore) -> Result<Screen> {
    Ok(match screen {
        Screen::Menu(mut menu) => {
            if let Some(action) = handle_menu_key(key) {
                if let Some(settings) = menu.apply(action) {
                    // Settings that fail to persist still start a game.
                    let _ = save_settings(store, settings);
                    return Ok(Screen::Game(GameState::new(settings, entropy_seed())?));
                }
            }
            Screen::Menu(menu)
        }
        Screen::Game(mut state) => {
            if let Some(action) = handle_game_key(key) {
                if action == GameAction::NewGame {
                    return Ok(Screen::Menu(SettingsMenu::new(state.settings())));
                }
                state.apply_action(action);
            }
            Screen::Game(state)
        }
    })
}

/// `$XDG_CONFIG_HOME/tui-pairs`, falling back to `~/.config/tui-pairs`.
fn config_root() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("tui-pairs")
}

fn entropy_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos() ^ elapsed.as_secs() as u32,
        Err(_) => 0x5eed,
    }
}
