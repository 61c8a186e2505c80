use extreme_platformer::powers::*;

#[test]
fn durations() {
    assert_eq!(PowerKind::Shield.duration(), 600);
    assert_eq!(PowerKind::Speed.duration(), 600);
    assert_eq!(PowerKind::DoubleJump.duration(), 800);
    assert_eq!(PowerKind::Invincible.duration(), 300);
}

#[test]
fn shield_expires_on_six_hundredth_tick() {
    let mut powers = PlayerPowers::new();
    powers.activate(PowerKind::Shield);

    for _ in 0..599 {
        assert!(powers.tick().is_empty());
    }
    assert!(powers.shield());
    assert_eq!(powers.remaining(PowerKind::Shield), 1);

    assert_eq!(powers.tick(), vec![PowerKind::Shield]);
    assert!(!powers.shield());
}

#[test]
fn reactivation_resets_instead_of_stacking() {
    let mut powers = PlayerPowers::new();
    powers.activate(PowerKind::Shield);
    for _ in 0..300 {
        powers.tick();
    }
    powers.activate(PowerKind::Shield);
    assert_eq!(powers.remaining(PowerKind::Shield), 600);
}

#[test]
fn powers_run_independently() {
    let mut powers = PlayerPowers::new();
    powers.activate(PowerKind::Shield);
    powers.activate(PowerKind::Invincible);

    for _ in 0..299 {
        powers.tick();
    }
    assert_eq!(powers.tick(), vec![PowerKind::Invincible]);
    assert!(!powers.invincible());
    assert!(powers.shield());
    assert_eq!(powers.remaining(PowerKind::Shield), 300);
}

#[test]
fn inactive_powers_do_not_tick() {
    let mut powers = PlayerPowers::new();
    assert!(powers.tick().is_empty());
    assert_eq!(powers, PlayerPowers::new());
}

#[test]
fn deactivate_clears_timer() {
    let mut powers = PlayerPowers::new();
    powers.activate(PowerKind::Speed);
    powers.deactivate(PowerKind::Speed);
    assert!(!powers.speed_boost());
    assert_eq!(powers.remaining(PowerKind::Speed), 0);
    assert!(powers.tick().is_empty());
}

#[test]
fn advanced_matches_repeated_ticks() {
    let mut start = PlayerPowers::new();
    start.activate(PowerKind::DoubleJump);
    start.activate(PowerKind::Invincible);

    let mut stepped = start.clone();
    for _ in 0..450 {
        stepped.tick();
    }
    let jumped = start.advanced(450);

    assert_eq!(jumped, stepped);
    assert!(jumped.double_jump());
    assert!(!jumped.invincible());
    // The source value is untouched.
    assert!(start.invincible());
}

#[test]
fn active_kinds_in_slot_order() {
    let mut powers = PlayerPowers::new();
    powers.activate(PowerKind::Invincible);
    powers.activate(PowerKind::Shield);
    assert_eq!(
        powers.active_kinds(),
        vec![PowerKind::Shield, PowerKind::Invincible]
    );
}

#[test]
fn names_match_save_keys() {
    let names: Vec<_> = PowerKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names, ["shield", "speed", "doubleJump", "invincible"]);
}
