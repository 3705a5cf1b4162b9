/// All simulation entity types — pure data, no logic.

/// A point (or vector) in world pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Which way the character faces.  Recomputed every frame from the angle
/// toward the cursor; exactly one facing is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Down,
    Right,
    Up,
    Left,
}

// ── Tears ─────────────────────────────────────────────────────────────────────

/// A tear projectile: a position plus a constant velocity, both in world
/// pixels.  Owned exclusively by the character's tear list; culled once its
/// sprite extent fully clears the viewport.
#[derive(Clone, Debug)]
pub struct Tear {
    pub position: Point,
    /// Pixels per second on each axis; fixed at spawn time.
    pub velocity: Point,
}

// ── Character ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Character {
    pub position: Point,
    /// Where the character is walking to.  Only retargeted when the cursor
    /// leaves the dead zone, so the pet parks near the pointer.
    pub destination: Point,
    pub direction: Direction,
    /// Index into the 9-frame body walk strip; cycles 0..=8 then wraps.
    pub animation_frame: u8,
    /// Seconds accumulated toward the next animation step.
    pub step_time: f32,
    /// Simulation-clock instant at which the shoot pose drops.
    pub shoot_until: f32,
    pub tears: Vec<Tear>,
}

// ── Tunables & input ──────────────────────────────────────────────────────────

/// Simulation tunables reachable through the property sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tunables {
    /// Walk speed in pixels per second.
    pub character_speed: f32,
    /// Tear launch speed in pixels per second.
    pub tear_speed: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            character_speed: 320.0,
            tear_speed: 600.0,
        }
    }
}

/// Pointer state passed into each update — the single input to the
/// simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputState {
    /// Cursor position in world pixels.
    pub cursor: Point,
}

// ── Master simulation state ───────────────────────────────────────────────────

/// The entire simulation state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct PetState {
    pub character: Character,
    /// Viewport extent in world pixels.
    pub width: f32,
    pub height: f32,
    /// Seconds of simulation time elapsed; drives the shoot-pose expiry.
    pub clock: f32,
    pub tunables: Tunables,
}
