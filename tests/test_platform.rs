use extreme_platformer::physics::Body;
use extreme_platformer::platform::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn body_on(platform: &Platform, vy: f32) -> Body {
    let mut b = Body::new(platform.rect.x + 10.0, platform.top() - 40.0, 32.0, 40.0);
    b.vy = vy;
    b
}

// ── Themes ────────────────────────────────────────────────────────────────────

#[test]
fn theme_bands() {
    assert_eq!(Theme::for_level(1), Theme::Grass);
    assert_eq!(Theme::for_level(19), Theme::Grass);
    assert_eq!(Theme::for_level(20), Theme::Desert);
    assert_eq!(Theme::for_level(39), Theme::Desert);
    assert_eq!(Theme::for_level(40), Theme::Ice);
    assert_eq!(Theme::for_level(60), Theme::Lava);
    assert_eq!(Theme::for_level(80), Theme::Dark);
    assert_eq!(Theme::for_level(99), Theme::Dark);
}

#[test]
fn only_ice_is_slippery() {
    for theme in [Theme::Grass, Theme::Desert, Theme::Ice, Theme::Lava, Theme::Dark] {
        assert_eq!(theme.palette().slippery, theme == Theme::Ice);
    }
    assert!(Theme::Lava.palette().damage);
}

// ── Support test ──────────────────────────────────────────────────────────────

#[test]
fn resting_body_is_supported() {
    let p = Platform::fixed(100.0, 300.0);
    assert!(supports(&body_on(&p, 0.0), &p));
}

#[test]
fn body_well_below_top_is_not_supported() {
    let p = Platform::fixed(100.0, 300.0);
    let mut b = body_on(&p, 5.0);
    b.y += LANDING_TOLERANCE + 1.0;
    assert!(!supports(&b, &p));
}

#[test]
fn body_far_above_is_not_supported() {
    let p = Platform::fixed(100.0, 300.0);
    let mut b = body_on(&p, 2.0);
    b.y -= 50.0;
    assert!(!supports(&b, &p));
}

#[test]
fn body_beside_platform_is_not_supported() {
    let p = Platform::fixed(100.0, 300.0);
    let mut b = body_on(&p, 0.0);
    b.x = p.rect.x + p.rect.w;
    assert!(!supports(&b, &p));
    b.x = p.rect.x - b.w;
    assert!(!supports(&b, &p));
}

// ── Moving platforms ──────────────────────────────────────────────────────────

#[test]
fn moving_platform_reverses_past_range() {
    let mut p = Platform::moving(100.0, 300.0, 2.0, 10.0);
    for _ in 0..6 {
        assert_eq!(p.update(), 2.0);
    }
    assert_eq!(p.rect.x, 112.0);
    match p.kind {
        PlatformKind::Moving { dir, .. } => assert_eq!(dir, -1.0),
        _ => panic!("kind changed"),
    }
    assert_eq!(p.update(), -2.0);
    assert_eq!(p.rect.x, 110.0);
}

#[test]
fn moving_platform_stays_near_range() {
    let mut p = Platform::moving(500.0, 300.0, 1.5, 80.0);
    for _ in 0..1000 {
        p.update();
        assert!((p.rect.x - 500.0).abs() <= 80.0 + 1.5 + 1e-3);
    }
}

// ── Falling platforms ─────────────────────────────────────────────────────────

#[test]
fn idle_falling_platform_does_not_move() {
    let mut p = Platform::falling(100.0, 300.0);
    for _ in 0..50 {
        assert_eq!(p.update(), 0.0);
    }
    assert_eq!(p.top(), 300.0);
    assert_eq!(p.fall_timer(), 0);
}

#[test]
fn triggered_platform_accelerates_down() {
    let mut p = Platform::falling(100.0, 300.0);
    p.trigger_fall();
    assert_eq!(p.fall_timer(), 1);

    p.update();
    assert_eq!(p.fall_timer(), 2);
    assert!((p.top() - 300.8).abs() < 1e-4);

    p.update();
    assert!((p.top() - 302.0).abs() < 1e-4);
}

#[test]
fn second_trigger_does_not_reset_timer() {
    let mut p = Platform::falling(100.0, 300.0);
    p.trigger_fall();
    p.update();
    p.update();
    p.trigger_fall();
    assert_eq!(p.fall_timer(), 3);
}

#[test]
fn trigger_on_static_platform_is_ignored() {
    let mut p = Platform::fixed(100.0, 300.0);
    p.trigger_fall();
    assert_eq!(p.kind, PlatformKind::Static);
    assert!(!p.is_falling_kind());
}

#[test]
fn fall_state_advance_is_pure() {
    assert_eq!(FallState::Idle.advanced(10), (FallState::Idle, 0.0));

    let start = FallState::Falling { timer: 1 };
    let (next, dy) = start.advanced(2);
    assert_eq!(next, FallState::Falling { timer: 3 });
    assert!((dy - 2.0).abs() < 1e-5);
    assert_eq!(start, FallState::Falling { timer: 1 });
}

// ── Generation ────────────────────────────────────────────────────────────────

#[test]
fn early_levels_have_only_static_platforms() {
    let platforms = generate_platforms(3, 2900.0, 11, &mut seeded_rng());
    assert_eq!(platforms.len(), 11);
    assert!(platforms.iter().all(|p| p.kind == PlatformKind::Static));
}

#[test]
fn platform_count_is_capped() {
    let platforms = generate_platforms(50, 17000.0, 500, &mut seeded_rng());
    assert_eq!(platforms.len(), MAX_PLATFORMS);
}

#[test]
fn platforms_spawn_in_reachable_band() {
    let platforms = generate_platforms(30, 11000.0, 40, &mut seeded_rng());
    for p in &platforms {
        assert!(p.top() >= 200.0 && p.top() <= 380.0);
        assert!(p.rect.x >= 200.0 && p.rect.x <= 200.0 + 11000.0);
        assert_eq!(p.rect.w, PLATFORM_W);
        assert_eq!(p.rect.h, PLATFORM_H);
    }
}

#[test]
fn later_levels_mix_platform_kinds() {
    let platforms = generate_platforms(40, 14000.0, 40, &mut seeded_rng());
    assert!(platforms.iter().any(|p| p.is_falling_kind()));
    assert!(platforms
        .iter()
        .any(|p| matches!(p.kind, PlatformKind::Moving { .. })));
}
