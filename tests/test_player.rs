use extreme_platformer::input::InputSnapshot;
use extreme_platformer::physics::{Body, GROUND_Y, MAX_FALL_SPEED};
use extreme_platformer::player::*;
use extreme_platformer::powers::PowerKind;

fn grounded_player() -> Player {
    let mut p = Player::new();
    p.body.grounded = true;
    p
}

fn right() -> InputSnapshot {
    InputSnapshot {
        move_right: true,
        ..Default::default()
    }
}

/// Step until the player touches the ground again.
fn fall_to_ground(p: &mut Player) {
    for _ in 0..200 {
        p.step(1.2, GROUND_Y);
        if p.body.grounded {
            return;
        }
    }
    panic!("player never landed");
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[test]
fn input_sets_run_velocity() {
    let mut p = grounded_player();
    p.apply_input(&right(), false);
    assert_eq!(p.body.vx, RUN_SPEED);

    p.apply_input(&InputSnapshot::default(), false);
    assert_eq!(p.body.vx, 0.0);
}

#[test]
fn left_wins_over_right() {
    let mut p = grounded_player();
    let both = InputSnapshot {
        move_left: true,
        move_right: true,
        ..Default::default()
    };
    p.apply_input(&both, false);
    assert_eq!(p.body.vx, -RUN_SPEED);
}

#[test]
fn analog_axis_overrides_buttons() {
    let mut p = grounded_player();
    let input = InputSnapshot {
        move_left: true,
        analog_axis: 0.5,
        ..Default::default()
    };
    p.apply_input(&input, false);
    assert_eq!(p.body.vx, RUN_SPEED * 0.5);
}

#[test]
fn speed_power_boosts_run_speed() {
    let mut p = grounded_player();
    p.powers.activate(PowerKind::Speed);
    p.apply_input(&right(), false);
    assert!((p.body.vx - RUN_SPEED * SPEED_BOOST_MULTIPLIER).abs() < 1e-5);
}

// ── Slippery surfaces ─────────────────────────────────────────────────────────

#[test]
fn slippery_velocity_stays_bounded_while_held() {
    let mut p = grounded_player();
    for _ in 0..1000 {
        p.apply_input(&right(), true);
        p.body.vx *= extreme_platformer::platform::SLIPPERY_GAIN;
        assert!(p.body.vx.is_finite());
        assert!(p.body.vx < RUN_SPEED * 2.0, "vx = {}", p.body.vx);
    }
    assert!(p.body.vx > RUN_SPEED);
}

#[test]
fn slippery_velocity_decays_after_release() {
    let mut p = grounded_player();
    for _ in 0..300 {
        p.apply_input(&right(), true);
        p.body.vx *= extreme_platformer::platform::SLIPPERY_GAIN;
    }
    for _ in 0..500 {
        p.apply_input(&InputSnapshot::default(), true);
        p.body.vx *= extreme_platformer::platform::SLIPPERY_GAIN;
    }
    assert!(p.body.vx.abs() < 0.01, "vx = {}", p.body.vx);
}

#[test]
fn slippery_drift_only_applies_on_the_ground() {
    let mut p = Player::new();
    p.body.grounded = false;
    p.apply_input(&right(), true);
    assert_eq!(p.body.vx, RUN_SPEED);
}

// ── Jumping ───────────────────────────────────────────────────────────────────

#[test]
fn ground_jump_sets_velocity() {
    let mut p = grounded_player();
    assert_eq!(p.jump(), Some(JumpKind::Ground));
    assert_eq!(p.body.vy, JUMP_VELOCITY);
    assert!(!p.body.grounded);
}

#[test]
fn airborne_jump_without_power_is_noop() {
    let mut p = Player::new();
    p.body.vy = 3.0;
    assert_eq!(p.jump(), None);
    assert_eq!(p.body.vy, 3.0);
}

#[test]
fn double_jump_once_per_airborne_period() {
    let mut p = grounded_player();
    p.powers.activate(PowerKind::DoubleJump);

    assert_eq!(p.jump(), Some(JumpKind::Ground));
    p.step(1.2, GROUND_Y);
    assert_eq!(p.jump(), Some(JumpKind::Double));
    p.step(1.2, GROUND_Y);
    assert_eq!(p.jump(), None);

    fall_to_ground(&mut p);
    assert!(!p.double_jump_used);
    assert_eq!(p.jump(), Some(JumpKind::Ground));
    assert_eq!(p.jump(), Some(JumpKind::Double));
}

#[test]
fn platform_landing_rearms_double_jump() {
    let mut p = Player::new();
    p.double_jump_used = true;
    p.landed();
    assert!(!p.double_jump_used);
}

// ── Physics ───────────────────────────────────────────────────────────────────

#[test]
fn step_clamps_left_world_edge() {
    let mut p = grounded_player();
    p.body.x = 1.0;
    p.body.vx = -RUN_SPEED;
    p.step(1.2, GROUND_Y);
    assert_eq!(p.body.x, 0.0);
}

#[test]
fn spawn_settles_on_ground() {
    let mut p = Player::new();
    p.step(1.2, GROUND_Y);
    assert!(p.body.grounded);
    assert_eq!(p.body.bottom(), GROUND_Y);
    assert_eq!(p.body.vy, 0.0);
}

#[test]
fn fall_speed_is_capped() {
    let mut body = Body::new(0.0, -5000.0, 10.0, 10.0);
    for _ in 0..100 {
        body.step(2.0, GROUND_Y);
        assert!(body.vy <= MAX_FALL_SPEED);
    }
}

#[test]
fn respawn_keeps_powers() {
    let mut p = Player::new();
    p.powers.activate(PowerKind::Shield);
    p.body.x = 900.0;
    p.respawn();
    assert_eq!(p.body.x, SPAWN_X);
    assert_eq!(p.body.y, SPAWN_Y);
    assert!(p.powers.shield());
}

#[test]
fn vulnerability_follows_mercy_and_invincible() {
    let mut p = Player::new();
    assert!(p.is_vulnerable());
    p.mercy_frames = 5;
    assert!(!p.is_vulnerable());
    p.mercy_frames = 0;
    p.powers.activate(PowerKind::Invincible);
    assert!(!p.is_vulnerable());
}
