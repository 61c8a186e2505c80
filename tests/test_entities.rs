use extreme_platformer::camera::Camera;
use extreme_platformer::entities::*;
use extreme_platformer::events::FrameEvent;
use extreme_platformer::geometry::{distance, rand_range, rects_intersect, Rect};
use extreme_platformer::particles::ParticleSystem;
use extreme_platformer::powers::PowerKind;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[test]
fn touching_edges_do_not_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!rects_intersect(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!rects_intersect(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
    assert!(rects_intersect(&a, &Rect::new(9.0, 9.0, 10.0, 10.0)));
}

#[test]
fn rand_range_empty_range_returns_min() {
    let mut rng = seeded_rng();
    assert_eq!(rand_range(&mut rng, 5.0, 5.0), 5.0);
    assert_eq!(rand_range(&mut rng, 5.0, 1.0), 5.0);
    for _ in 0..100 {
        let v = rand_range(&mut rng, -2.0, 3.0);
        assert!((-2.0..3.0).contains(&v));
    }
}

#[test]
fn distance_is_euclidean() {
    assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
}

// ── Coins ─────────────────────────────────────────────────────────────────────

#[test]
fn coin_pickup_by_distance_to_player_center() {
    let player = Rect::new(100.0, 100.0, 32.0, 40.0);
    let mut near = Coin::new(116.0 + 20.0, 120.0);
    let mut far = Coin::new(116.0 + 30.0, 120.0);
    assert!(near.check_pickup(&player));
    assert!(!far.check_pickup(&player));
}

#[test]
fn collected_coin_stays_collected() {
    let player = Rect::new(100.0, 100.0, 32.0, 40.0);
    let mut coin = Coin::new(116.0, 120.0);
    assert!(coin.check_pickup(&player));
    assert!(!coin.check_pickup(&player));
    assert!(coin.collected);
}

#[test]
fn coin_bob_is_small() {
    let mut coin = Coin::new(0.0, 0.0);
    for _ in 0..100 {
        coin.update();
        assert!(coin.bob().abs() <= 4.0);
    }
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[test]
fn power_up_pickup_returns_kind_once() {
    let player = Rect::new(100.0, 100.0, 32.0, 40.0);
    let mut p = PowerUp::new(110.0, 110.0, PowerKind::DoubleJump);
    assert_eq!(p.check_pickup(&player), Some(PowerKind::DoubleJump));
    assert_eq!(p.check_pickup(&player), None);
}

#[test]
fn power_up_out_of_reach() {
    let player = Rect::new(100.0, 100.0, 32.0, 40.0);
    let mut p = PowerUp::new(300.0, 100.0, PowerKind::Shield);
    assert_eq!(p.check_pickup(&player), None);
    assert!(!p.collected);
}

// ── Particles ─────────────────────────────────────────────────────────────────

#[test]
fn particles_expire() {
    let mut particles = ParticleSystem::new();
    particles.spawn_coin(10.0, 10.0, &mut seeded_rng());
    assert_eq!(particles.len(), 10);

    for _ in 0..36 {
        particles.update();
    }
    assert!(particles.is_empty());
}

#[test]
fn particle_alpha_fades() {
    let mut particles = ParticleSystem::new();
    particles.spawn_hit(0.0, 0.0, &mut seeded_rng());
    assert_eq!(particles.particles[0].alpha(), 1.0);
    particles.update();
    assert!(particles.particles[0].alpha() < 1.0);
}

// ── Camera ────────────────────────────────────────────────────────────────────

#[test]
fn camera_clamps_to_level() {
    let mut cam = Camera::new();
    for _ in 0..1000 {
        cam.follow(50_000.0, 3000.0);
    }
    assert_eq!(cam.x, 3000.0);
    cam.reset();
    assert_eq!(cam.x, 0.0);
}

// ── Events ────────────────────────────────────────────────────────────────────

#[test]
fn sound_cues() {
    assert_eq!(FrameEvent::Jumped { double: true }.sound(), Some("jump"));
    assert_eq!(FrameEvent::CoinCollected.sound(), Some("coin"));
    assert_eq!(FrameEvent::GameOver.sound(), Some("game_over"));
    assert_eq!(FrameEvent::Landed.sound(), None);
}

#[test]
fn status_equality() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Victory, GameStatus::LevelComplete);
}
