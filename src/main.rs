mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;
use tracing::{debug, info, warn};

use extreme_platformer::compute::{advance_level, init_state, tick};
use extreme_platformer::config::GameConfig;
use extreme_platformer::control::LoopControl;
use extreme_platformer::entities::{GameState, GameStatus};
use extreme_platformer::input::InputSnapshot;
use extreme_platformer::render::build_scene;
use extreme_platformer::save::{FileStore, SaveManager};

use display::Viewport;

// ── Key-hold tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// OS key repeat refreshes the entry well before it expires.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

fn is_jump_key(code: &KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W')
    )
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Logs go to a file; stdout belongs to the game screen.
fn init_logging() {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let path = std::path::PathBuf::from(home).join(".extreme_platformer.log");
    let Ok(file) = File::create(&path) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start(u32),
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    saves: &SaveManager<FileStore>,
) -> std::io::Result<MenuResult> {
    out.queue(style::ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;
    let data = saves.data();

    let title = "★  EXTREME  PLATFORMER  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    if data.best_score > 0 {
        let hs_str = format!("Best Score: {}   Coins: {}", data.best_score, data.coins);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(hs_str.chars().count() as u16 / 2),
            cy.saturating_sub(5),
        ))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(&hs_str))?;
    }

    let continue_label = format!("Continue from level {}", data.level);
    let options: &[(&str, &str, Color)] = &[
        ("1", continue_label.as_str(), Color::Green),
        ("2", "New game", Color::Yellow),
        ("Q", "Quit", Color::Red),
    ];
    for (i, (key, label, color)) in options.iter().enumerate() {
        let row = cy.saturating_sub(2) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(12), row))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{}] ", key)))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*label))?;
    }

    let sound = if data.sound_enabled { "on" } else { "off" };
    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 3))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print(format!("Sound cues: {}  (M in game to toggle)", sound)))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        if let Ok(Event::Key(KeyEvent { code, kind, .. })) = rx.recv() {
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char('1') => return Ok(MenuResult::Start(data.level)),
                KeyCode::Char('2') => return Ok(MenuResult::Start(1)),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Persist progress worth keeping after a level ends or the run stops.
fn record_progress(saves: &mut SaveManager<FileStore>, state: &GameState, banked_coins: &mut u32) {
    saves.set_best_score(state.best_score);
    let fresh = state.coins_collected.saturating_sub(*banked_coins);
    if fresh > 0 {
        saves.add_coins(fresh);
        *banked_coins = state.coins_collected;
    }
}

/// Returns `true` → quit program,  `false` → back to menu.
///
/// Input model: a `key_frame` map records the frame of the last press/repeat
/// event for every key, and each frame turns the still-fresh keys into one
/// `InputSnapshot`.  Jump is a one-shot: a press sets it for the next frame
/// only.
fn game_loop<W: Write>(
    out: &mut W,
    mut state: GameState,
    rx: &mpsc::Receiver<Event>,
    saves: &mut SaveManager<FileStore>,
) -> std::io::Result<bool> {
    let mut rng = thread_rng();
    let frame_time = Duration::from_millis(state.config.frame_ms);

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut control = LoopControl::new();
    let mut jump_pending = false;
    let mut back_to_menu = false;
    let mut banked_coins = state.coins_collected;
    let mut frame: u64 = 0;

    while control.is_running() {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code.clone(), frame);
                    if is_jump_key(&code) {
                        jump_pending = true;
                    }
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => control.stop(),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            control.stop()
                        }
                        KeyCode::Char('p') | KeyCode::Char('P') => control.toggle_pause(),
                        KeyCode::Char('m') | KeyCode::Char('M') => {
                            let on = saves.toggle_sound();
                            info!(sound = on, "sound toggled");
                        }
                        KeyCode::Char('n') | KeyCode::Char('N')
                            if state.status == GameStatus::LevelComplete =>
                        {
                            match advance_level(&state, &mut rng) {
                                Ok(next) => state = next,
                                Err(err) => warn!(%err, "staying on current level"),
                            }
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if matches!(state.status, GameStatus::GameOver | GameStatus::Victory) =>
                        {
                            back_to_menu = true;
                            control.stop();
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code.clone(), frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Update ────────────────────────────────────────────────────────────
        if control.should_update() {
            let input = InputSnapshot {
                move_left: any_held(&key_frame, &LEFT_KEYS, frame),
                move_right: any_held(&key_frame, &RIGHT_KEYS, frame),
                jump_pressed: std::mem::take(&mut jump_pending),
                analog_axis: 0.0,
            };
            let prev_status = state.status;
            state = tick(&state, &input, &mut rng);

            if saves.data().sound_enabled {
                for cue in state.events.iter().filter_map(|e| e.sound()) {
                    debug!(cue, "sound");
                }
            }

            if state.status != prev_status {
                match state.status {
                    GameStatus::LevelComplete | GameStatus::Victory => {
                        saves.set_level((state.level.number + 1).min(state.config.max_levels));
                        record_progress(saves, &state, &mut banked_coins);
                    }
                    GameStatus::GameOver => record_progress(saves, &state, &mut banked_coins),
                    GameStatus::Playing => {}
                }
            }
        }

        // ── Draw ──────────────────────────────────────────────────────────────
        let (cols, rows) = terminal::size()?;
        let view = Viewport {
            cols,
            rows,
            view_width: state.config.view_width,
            view_height: state.config.view_height,
        };
        display::render(out, &build_scene(&state), &view, control.is_paused())?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }

    record_progress(saves, &state, &mut banked_coins);
    Ok(!back_to_menu)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to HOLD_WINDOW.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(style::ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let config = GameConfig::load();
    let mut saves = SaveManager::new(FileStore::new(FileStore::default_path()));
    let mut rng = thread_rng();

    loop {
        match show_menu(out, rx, &saves)? {
            MenuResult::Quit => break,
            MenuResult::Start(level) => {
                let state = match init_state(config.clone(), level, saves.data().best_score, &mut rng) {
                    Ok(state) => state,
                    Err(err) => {
                        // A saved level beyond the configured range: start over.
                        warn!(%err, "saved level unusable, starting at level 1");
                        init_state(config.clone(), 1, saves.data().best_score, &mut rng)
                            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
                    }
                };
                if game_loop(out, state, rx, &mut saves)? {
                    break;
                }
                // Otherwise loop back to the menu
            }
        }
    }
    Ok(())
}
