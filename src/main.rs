//! Ironridge Arena - Entry Point
//!
//! Initializes the terminal, performs the one-time skill-tree load, and runs
//! the real-time loop: drain key events, advance the simulation by the
//! clamped elapsed time, draw the snapshot.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ironridge_arena::data::{load_skill_tree, SkillIndex, SKILL_TREE_PATH};
use ironridge_arena::game::{step, InputState, Key, WorldState};
use ironridge_arena::ui;

/// Target frames per second for the render loop
const TARGET_FPS: u64 = 60;
const FRAME_TIME: Duration = Duration::from_millis(1000 / TARGET_FPS);

/// Without key-release reporting, a held key is kept alive by terminal
/// auto-repeat; drop it once no repeat has arrived for this long. Longer
/// than the usual initial repeat delay.
const HOLD_GRACE: Duration = Duration::from_millis(600);

fn main() -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("ironridge-arena.log")
        .unwrap_or_else(|_| OpenOptions::new().write(true).open("/dev/null").unwrap());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("Starting Ironridge Arena v{}", env!("CARGO_PKG_VERSION"));

    // The simulation never starts without its data: no retry, no fallback.
    let doc = match load_skill_tree(SKILL_TREE_PATH) {
        Ok(doc) => doc,
        Err(e) => {
            log::error!("Skill data load failed: {}", e);
            eprintln!("Failed to load skill data: {}", e);
            return Err(e.into());
        }
    };
    let index = SkillIndex::build(&doc);
    let mut world = WorldState::new(&index);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    } else {
        log::warn!("Terminal lacks key-release reporting; falling back to hold decay");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game_loop(&mut terminal, &mut world, &index, release_events);

    // Restore terminal
    if release_events {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Ironridge Arena shut down cleanly");
    result
}

/// Real-time loop driving the fixed-order simulation step
fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    world: &mut WorldState,
    index: &SkillIndex,
    release_events: bool,
) -> Result<()> {
    let mut input = InputState::new();
    let mut last_seen: HashMap<Key, Instant> = HashMap::new();
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last_frame).as_secs_f32();
        last_frame = frame_start;

        // Drain all pending events
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => {
                    if is_quit(&key) {
                        return Ok(());
                    }
                    if let Some(logical) = map_key(key.code) {
                        match key.kind {
                            KeyEventKind::Press | KeyEventKind::Repeat => {
                                input.press(logical);
                                last_seen.insert(logical, frame_start);
                            }
                            KeyEventKind::Release => {
                                input.release(logical);
                                last_seen.remove(&logical);
                            }
                        }
                    }
                }
                // Release events never arrive for keys held across a focus
                // change, so drop everything.
                Event::FocusLost => {
                    input.clear();
                    last_seen.clear();
                }
                _ => {}
            }
        }

        // Synthesize releases when the terminal cannot report them
        if !release_events {
            last_seen.retain(|key, seen| {
                let held = frame_start.duration_since(*seen) < HOLD_GRACE;
                if !held {
                    input.release(*key);
                }
                held
            });
        }

        let snapshot = step(world, index, &mut input, dt);
        terminal.draw(|frame| ui::render(frame, &snapshot))?;

        // Frame rate limiting
        let frame_time = frame_start.elapsed();
        if frame_time < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - frame_time);
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a physical key to the logical game key set
fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(Key::Up),
            's' => Some(Key::Down),
            'a' => Some(Key::Left),
            'd' => Some(Key::Right),
            'j' => Some(Key::Attack1),
            'k' => Some(Key::Attack2),
            'l' => Some(Key::Attack3),
            ';' => Some(Key::Attack4),
            '\'' => Some(Key::Attack5),
            'i' => Some(Key::Inventory),
            _ => None,
        },
        _ => None,
    }
}
