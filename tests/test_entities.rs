use desk_pet::entities::*;

#[test]
fn direction_eq_and_copy() {
    // Directions derive Eq + Copy — comparisons must work on copies
    let d = Direction::Left;
    let copied = d;
    assert_eq!(d, copied);
    assert_ne!(Direction::Up, Direction::Down);
    assert_ne!(Direction::Left, Direction::Right);
}

#[test]
fn tunables_defaults() {
    let t = Tunables::default();
    assert_eq!(t.character_speed, 320.0);
    assert_eq!(t.tear_speed, 600.0);
}

#[test]
fn pet_state_clone_is_independent() {
    let original = PetState {
        character: Character {
            position: Point::new(400.0, 300.0),
            destination: Point::new(400.0, 300.0),
            direction: Direction::Down,
            animation_frame: 0,
            step_time: 0.0,
            shoot_until: 0.0,
            tears: Vec::new(),
        },
        width: 800.0,
        height: 600.0,
        clock: 0.0,
        tunables: Tunables::default(),
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.character.position.x = 99.0;
    cloned.clock = 42.0;
    cloned.character.tears.push(Tear {
        position: Point::new(1.0, 2.0),
        velocity: Point::new(3.0, 4.0),
    });

    assert_eq!(original.character.position.x, 400.0);
    assert_eq!(original.clock, 0.0);
    assert!(original.character.tears.is_empty());
}
