/// Pure simulation functions.
///
/// Every public function takes an immutable reference to the current state
/// and returns a brand-new state.  No I/O and no clocks — wall time enters
/// the simulation only through the `dt` arguments, so every transition is
/// deterministic and directly testable.

use crate::entities::{Character, Direction, InputState, PetState, Point, Tear, Tunables};
use crate::geometry::{line_angle, point_distance};

// ── Simulation constants ──────────────────────────────────────────────────────

/// Cursor movement within this radius of the character does not retarget
/// the destination.
pub const DEAD_ZONE_RADIUS: f32 = 40.0;

/// Within this distance of the destination the character stops and idles.
pub const ARRIVAL_THRESHOLD: f32 = 8.0;

/// `|cos(angle)|` must exceed this for a horizontal facing.  0.6 rather
/// than 1/sqrt(2), so the horizontal sectors are wider than the vertical
/// ones — the sprite's vertical silhouette is narrower.
pub const HORIZONTAL_DOMINANCE: f32 = 0.6;

/// Seconds between body-animation steps.
pub const ANIMATION_STEP_DELAY: f32 = 0.15;

/// Seconds the shoot pose is held after a click.
pub const SHOOT_ANIMATION_DURATION: f32 = 0.25;

/// Tears aim from this far below the character origin, so shots leave the
/// torso rather than the eyes.
pub const TEAR_SPAWN_DROP: f32 = 10.0;

/// Half extents of the 47x47 tear sprite, used as the cull margin.
pub const TEAR_HALF_WIDTH: f32 = 23.5;
pub const TEAR_HALF_HEIGHT: f32 = 23.5;

/// The walk strip holds frames 0..=8.
const LAST_ANIMATION_FRAME: u8 = 8;

// ── Constructors ──────────────────────────────────────────────────────────────

/// Build the initial state for a viewport: character parked at the centre,
/// no tears, clock at zero.
pub fn init_state(width: f32, height: f32) -> PetState {
    let centre = Point::new((width / 2.0).floor(), (height / 2.0).floor());
    PetState {
        character: Character {
            position: centre,
            destination: centre,
            direction: Direction::Down,
            animation_frame: 0,
            step_time: 0.0,
            shoot_until: 0.0,
            tears: Vec::new(),
        },
        width,
        height,
        clock: 0.0,
        tunables: Tunables::default(),
    }
}

/// Adopt a new viewport extent (terminal resize).
pub fn resize(state: &PetState, width: f32, height: f32) -> PetState {
    PetState {
        width,
        height,
        ..state.clone()
    }
}

// ── Direction selection ───────────────────────────────────────────────────────

/// Map an angle to one of the four facings.  Horizontal wins only strictly
/// above the dominance threshold; ties fall to the vertical branch.
/// Total over (-PI, PI]; no hysteresis, so the facing can flicker near a
/// sector boundary.
pub fn direction_for_angle(angle: f32) -> Direction {
    if angle.cos().abs() > HORIZONTAL_DOMINANCE {
        if angle.cos() > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if angle.sin() > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

// ── Per-phase transitions (pure) ──────────────────────────────────────────────

/// Accumulate `dt` toward the next walk-cycle step; frames run 0..=8 then
/// wrap.  Independent of movement — the character walks in place unless
/// idled by the arrival snap.
pub fn step_animation(character: &Character, dt: f32) -> Character {
    let step_time = character.step_time + dt;
    if step_time < ANIMATION_STEP_DELAY {
        return Character {
            step_time,
            ..character.clone()
        };
    }
    let animation_frame = if character.animation_frame == LAST_ANIMATION_FRAME {
        0
    } else {
        character.animation_frame + 1
    };
    Character {
        animation_frame,
        step_time: 0.0,
        ..character.clone()
    }
}

/// Turn toward the cursor.
pub fn face_cursor(character: &Character, cursor: Point) -> Character {
    let angle = line_angle(character.position, cursor);
    Character {
        direction: direction_for_angle(angle),
        ..character.clone()
    }
}

/// Retarget the destination, unless the cursor sits inside the dead zone —
/// the character parks near the pointer instead of chasing every sub-pixel
/// move.
pub fn retarget(character: &Character, cursor: Point) -> Character {
    if point_distance(character.position, cursor) > DEAD_ZONE_RADIUS {
        Character {
            destination: cursor,
            ..character.clone()
        }
    } else {
        character.clone()
    }
}

/// Walk toward the destination at `speed` px/s, each axis delta rounded to
/// a whole pixel; once within the arrival threshold, stop and snap to the
/// idle pose (frame 0).  No overshoot correction — a large `dt` can step
/// past the destination.
pub fn step_toward_destination(character: &Character, speed: f32, dt: f32) -> Character {
    let angle = line_angle(character.position, character.destination);
    let distance = point_distance(character.position, character.destination);
    if distance > ARRIVAL_THRESHOLD {
        let position = Point::new(
            character.position.x + (angle.cos() * speed * dt).round(),
            character.position.y + (angle.sin() * speed * dt).round(),
        );
        Character {
            position,
            ..character.clone()
        }
    } else {
        Character {
            animation_frame: 0,
            ..character.clone()
        }
    }
}

// ── Tears ─────────────────────────────────────────────────────────────────────

/// Spawn a tear at `origin` aimed at `target`, travelling at `speed` px/s.
pub fn spawn_tear(origin: Point, target: Point, speed: f32) -> Tear {
    let muzzle = Point::new(origin.x, origin.y + TEAR_SPAWN_DROP);
    let angle = line_angle(muzzle, target);
    Tear {
        position: origin,
        velocity: Point::new(angle.cos() * speed, angle.sin() * speed),
    }
}

/// True once the tear's full sprite extent clears the viewport on any one
/// side.  Strict comparisons: a tear exactly on the boundary is still in
/// bounds.
pub fn tear_out_of_bounds(tear: &Tear, width: f32, height: f32, half_w: f32, half_h: f32) -> bool {
    tear.position.x + half_w < 0.0
        || tear.position.x - half_w > width
        || tear.position.y + half_h < 0.0
        || tear.position.y - half_h > height
}

/// Cull out-of-bounds tears, then move the survivors.  Filtering first
/// keeps a tear from being stepped in the same frame it is removed, and
/// preserves the order of the survivors.
pub fn advance_tears(character: &Character, width: f32, height: f32, dt: f32) -> Character {
    let tears: Vec<Tear> = character
        .tears
        .iter()
        .filter(|t| !tear_out_of_bounds(t, width, height, TEAR_HALF_WIDTH, TEAR_HALF_HEIGHT))
        .map(|t| Tear {
            position: Point::new(
                t.position.x + t.velocity.x * dt,
                t.position.y + t.velocity.y * dt,
            ),
            velocity: t.velocity,
        })
        .collect();
    Character {
        tears,
        ..character.clone()
    }
}

// ── Shooting ──────────────────────────────────────────────────────────────────

/// Whether the shoot pose is still being held.
pub fn is_shooting(state: &PetState) -> bool {
    state.clock < state.character.shoot_until
}

/// Handle a pointer-up: fire a tear at the cursor and hold the shoot pose.
/// A click while the pose is already held does not extend it — the earliest
/// pending deadline wins, so the pose always drops 250 ms after the first
/// click of a burst.
pub fn fire_tear(state: &PetState, input: &InputState) -> PetState {
    let character = &state.character;
    let mut tears = character.tears.clone();
    tears.push(spawn_tear(
        character.position,
        input.cursor,
        state.tunables.tear_speed,
    ));
    let shoot_until = if is_shooting(state) {
        character.shoot_until
    } else {
        state.clock + SHOOT_ANIMATION_DURATION
    };
    PetState {
        character: Character {
            tears,
            shoot_until,
            ..character.clone()
        },
        ..state.clone()
    }
}

// ── Per-frame tick (pure) ─────────────────────────────────────────────────────

/// Advance the simulation by `dt` seconds: animation, facing, destination,
/// position, tears — in that order every frame.
pub fn tick(state: &PetState, input: &InputState, dt: f32) -> PetState {
    let character = step_animation(&state.character, dt);
    let character = face_cursor(&character, input.cursor);
    let character = retarget(&character, input.cursor);
    let character = step_toward_destination(&character, state.tunables.character_speed, dt);
    let character = advance_tears(&character, state.width, state.height, dt);
    PetState {
        character,
        clock: state.clock + dt,
        ..state.clone()
    }
}
