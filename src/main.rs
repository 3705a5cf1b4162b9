use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};

use desk_pet::compute::{fire_tear, init_state, resize, tick};
use desk_pet::config::{self, AppConfig};
use desk_pet::display;
use desk_pet::entities::{InputState, Point};

/// Base polling cadence of the loop; the actual update rate is governed by
/// wall-clock delta time and the optional FPS limiter.
const TICK_SLEEP: Duration = Duration::from_millis(8);

/// Ceiling on a single frame's delta, so a long stall (suspended terminal,
/// debugger pause) doesn't launch the pet across the screen.
const MAX_DELTA: f32 = 1.0;

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to the file named by DESK_PET_LOG, if set.  The screen is in raw
/// mode, so stdout/stderr subscribers are not an option.
fn init_logging() {
    let Ok(path) = std::env::var("DESK_PET_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

// ── Render loop ───────────────────────────────────────────────────────────────

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: AppConfig,
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let (width, height) = display::viewport_size(cols, rows);

    let mut state = init_state(width, height);
    state.tunables = config.tunables;

    // One pixel below centre, so the very first facing computation resolves
    // to a defined direction (down) before the pointer ever moves.
    let mut input = InputState {
        cursor: Point::new(width / 2.0, height / 2.0 + 1.0),
    };

    tracing::info!(cols, rows, skin = %config.skin, "render loop starting");
    let sheet = display::sheet_for(&config.skin);
    if sheet.is_none() {
        tracing::warn!(skin = %config.skin, "unknown skin, drawing blank sprite");
    }

    let mut last_time = Instant::now();
    loop {
        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: KeyEventKind::Press,
                    ..
                }) => match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    _ => {}
                },
                Event::Mouse(MouseEvent { kind, column, row, .. }) => match kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        input.cursor = display::cell_to_world(column, row);
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        input.cursor = display::cell_to_world(column, row);
                        state = fire_tear(&state, &input);
                    }
                    _ => {}
                },
                Event::Resize(new_cols, new_rows) => {
                    let (w, h) = display::viewport_size(new_cols, new_rows);
                    state = resize(&state, w, h);
                }
                _ => {}
            }
        }

        // ── Frame pacing ──────────────────────────────────────────────────────
        let now = Instant::now();
        let delta = (now - last_time).as_secs_f32().min(MAX_DELTA);
        if config.render.limit_fps && delta < 1.0 / config.render.max_fps as f32 {
            // Not enough time has elapsed — skip the frame entirely
            // (last_time stays put so the delta keeps accumulating).
            thread::sleep(TICK_SLEEP);
            continue;
        }
        last_time = now;

        state = tick(&state, &input, delta);
        display::render(out, &state, sheet, &config.backdrop)?;

        thread::sleep(TICK_SLEEP);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();

    let mut config = AppConfig::default();
    config::apply_settings(&mut config, &config::load_settings());

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the render loop never has to block on I/O.
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

    let result = run(&mut out, &rx, config);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
