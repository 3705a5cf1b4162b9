/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the pet
/// state.  No simulation logic is performed; this module only translates
/// state into terminal commands.  The simulation runs in world pixels; one
/// terminal cell stands in for a 10x20-pixel block, close to a typical
/// glyph's aspect ratio.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::compute;
use crate::config::{Backdrop, BackgroundStyle};
use crate::entities::{Direction, PetState, Point};

// ── World <-> cell mapping ────────────────────────────────────────────────────

/// World pixels covered by one terminal cell.
pub const CELL_WIDTH: f32 = 10.0;
pub const CELL_HEIGHT: f32 = 20.0;

/// Centre of a terminal cell in world pixels (pointer events arrive in
/// cell coordinates).
pub fn cell_to_world(column: u16, row: u16) -> Point {
    Point::new(
        column as f32 * CELL_WIDTH + CELL_WIDTH / 2.0,
        row as f32 * CELL_HEIGHT + CELL_HEIGHT / 2.0,
    )
}

/// World extent of a `cols` x `rows` terminal.
pub fn viewport_size(cols: u16, rows: u16) -> (f32, f32) {
    (cols as f32 * CELL_WIDTH, rows as f32 * CELL_HEIGHT)
}

fn world_to_cell(p: Point) -> (i32, i32) {
    (
        (p.x / CELL_WIDTH).floor() as i32,
        (p.y / CELL_HEIGHT).floor() as i32,
    )
}

// ── Sprite sheets ─────────────────────────────────────────────────────────────

/// Sprite-sheet coordinates for one facing: which head column and which
/// body row to sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteCell {
    pub head_col: usize,
    pub body_row: usize,
}

/// Facing -> sheet-cell mapping.  The head strip interleaves a shooting
/// variant after each facing, hence the even columns; the actual head frame
/// index is `head_col + is_shooting`.
pub fn sprite_cell(direction: Direction) -> SpriteCell {
    match direction {
        Direction::Down => SpriteCell { head_col: 0, body_row: 1 },
        Direction::Right => SpriteCell { head_col: 2, body_row: 2 },
        Direction::Up => SpriteCell { head_col: 4, body_row: 0 },
        Direction::Left => SpriteCell { head_col: 6, body_row: 3 },
    }
}

/// A character skin: glyph strips standing in for a pixel sprite sheet.
/// 8 head frames (4 facings x normal/shooting, two rows each), 4 body rows
/// of 9 walk frames, and a tear glyph.
pub struct SpriteSheet {
    head: [[&'static str; 2]; 8],
    body: [[&'static str; 9]; 4],
    tear: &'static str,
    tint: Color,
}

const WALK_VERTICAL: [&str; 9] = [
    " | | ", " |/  ", " |_  ", " |\\  ", " | | ", "  \\| ", "  _| ", "  /| ", " | | ",
];
const WALK_RIGHT: [&str; 9] = [
    "  |> ", "  /> ", "  _> ", "  \\> ", "  |> ", "  \\> ", "  _> ", "  /> ", "  |> ",
];
const WALK_LEFT: [&str; 9] = [
    " <|  ", " <\\  ", " <_  ", " </  ", " <|  ", " </  ", " <_  ", " <\\  ", " <|  ",
];

static ISAAC: SpriteSheet = SpriteSheet {
    head: [
        [" .--. ", "( o_o)"], // down
        [" .--. ", "( O_O)"], // down, shooting
        [" .--. ", "( o_>)"], // right
        [" .--. ", "( O_>)"], // right, shooting
        [" .--. ", "(    )"], // up (back of head)
        [" .--. ", "(    )"], // up, shooting
        [" .--. ", "(<_o )"], // left
        [" .--. ", "(<_O )"], // left, shooting
    ],
    // Body rows indexed by SpriteCell::body_row: up, down, right, left.
    body: [WALK_VERTICAL, WALK_VERTICAL, WALK_RIGHT, WALK_LEFT],
    tear: "o",
    tint: Color::White,
};

static GUPPY: SpriteSheet = SpriteSheet {
    head: [
        ["/\\__/\\", "(=o_o)"],
        ["/\\__/\\", "(=O_O)"],
        ["/\\__/\\", "(=o_>)"],
        ["/\\__/\\", "(=O_>)"],
        ["/\\__/\\", "(====)"],
        ["/\\__/\\", "(====)"],
        ["/\\__/\\", "(<_o=)"],
        ["/\\__/\\", "(<_O=)"],
    ],
    body: [WALK_VERTICAL, WALK_VERTICAL, WALK_RIGHT, WALK_LEFT],
    tear: "o",
    tint: Color::Grey,
};

/// Look up a skin by name.  `None` for unknown skins — the caller draws
/// nothing rather than crashing, same as a sprite image that failed to load.
pub fn sheet_for(skin: &str) -> Option<&'static SpriteSheet> {
    match skin {
        "isaac" => Some(&ISAAC),
        "guppy" => Some(&GUPPY),
        _ => None,
    }
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TEAR: Color = Color::Cyan;
const C_BACKDROP: Color = Color::DarkBlue;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  A `None` sheet draws backdrop and hint only.
pub fn render<W: Write>(
    out: &mut W,
    state: &PetState,
    sheet: Option<&SpriteSheet>,
    backdrop: &Backdrop,
) -> std::io::Result<()> {
    let cols = (state.width / CELL_WIDTH).round() as u16;
    let rows = (state.height / CELL_HEIGHT).round() as u16;

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_backdrop(out, cols, rows, backdrop)?;

    if let Some(sheet) = sheet {
        // When facing up the tears fly behind the character, so the body
        // and head must occlude them; otherwise tears render on top.
        let facing_up = state.character.direction == Direction::Up;
        if facing_up {
            draw_tears(out, state, sheet, cols, rows)?;
        }
        draw_body(out, state, sheet, cols, rows)?;
        draw_head(out, state, sheet, cols, rows)?;
        if !facing_up {
            draw_tears(out, state, sheet, cols, rows)?;
        }
    }

    draw_hint(out, rows)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Glyph placement ───────────────────────────────────────────────────────────

/// Print `text` at a cell position, skipping glyphs that don't fit fully on
/// screen (a clipped sprite simply isn't drawn).
fn put<W: Write>(out: &mut W, col: i32, row: i32, cols: u16, rows: u16, text: &str) -> std::io::Result<()> {
    let width = text.chars().count() as i32;
    if row < 0 || row >= rows as i32 || col < 0 || col + width > cols as i32 {
        return Ok(());
    }
    out.queue(cursor::MoveTo(col as u16, row as u16))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Backdrop ──────────────────────────────────────────────────────────────────

fn draw_backdrop<W: Write>(
    out: &mut W,
    cols: u16,
    rows: u16,
    backdrop: &Backdrop,
) -> std::io::Result<()> {
    // A terminal can't blit the configured image; a dim texture band keeps
    // the style and repeat properties visible.
    if backdrop.image.is_none() {
        return Ok(());
    }
    let (start_col, end_col) = match backdrop.style {
        BackgroundStyle::Fit | BackgroundStyle::Fill => (0, cols),
        BackgroundStyle::Center => (cols / 4, cols - cols / 4),
        BackgroundStyle::Left => (0, cols / 2),
        BackgroundStyle::Right => (cols / 2, cols),
    };
    let (start_row, end_row) = if backdrop.repeat {
        (0, rows)
    } else {
        (rows / 4, rows - rows / 4)
    };
    let band: String = "·".repeat(end_col.saturating_sub(start_col) as usize);
    out.queue(style::SetForegroundColor(C_BACKDROP))?;
    for row in start_row..end_row {
        out.queue(cursor::MoveTo(start_col, row))?;
        out.queue(Print(&band))?;
    }
    Ok(())
}

// ── Character ─────────────────────────────────────────────────────────────────

fn draw_head<W: Write>(
    out: &mut W,
    state: &PetState,
    sheet: &SpriteSheet,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let (cx, cy) = world_to_cell(state.character.position);
    let cell = sprite_cell(state.character.direction);
    let frame = cell.head_col + compute::is_shooting(state) as usize;
    let glyphs = &sheet.head[frame];
    let col = cx - glyphs[0].chars().count() as i32 / 2;

    out.queue(style::SetForegroundColor(sheet.tint))?;
    put(out, col, cy - 1, cols, rows, glyphs[0])?;
    put(out, col, cy, cols, rows, glyphs[1])?;
    Ok(())
}

fn draw_body<W: Write>(
    out: &mut W,
    state: &PetState,
    sheet: &SpriteSheet,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let (cx, cy) = world_to_cell(state.character.position);
    let cell = sprite_cell(state.character.direction);
    let glyph = sheet.body[cell.body_row][state.character.animation_frame as usize];
    let col = cx - glyph.chars().count() as i32 / 2;

    out.queue(style::SetForegroundColor(sheet.tint))?;
    put(out, col, cy + 1, cols, rows, glyph)?;
    Ok(())
}

fn draw_tears<W: Write>(
    out: &mut W,
    state: &PetState,
    sheet: &SpriteSheet,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_TEAR))?;
    for tear in &state.character.tears {
        let (col, row) = world_to_cell(tear.position);
        put(out, col, row, cols, rows, sheet.tear)?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Mouse : Move   Click : Shoot   Q : Quit"))?;
    Ok(())
}
