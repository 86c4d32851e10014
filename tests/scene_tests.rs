// Host-side tests for the background scene model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::constants::*;
use crate::core::mesh::uv_sphere;
use crate::core::scene::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_scene() -> SceneState {
    let mut rng = StdRng::seed_from_u64(7);
    SceneState::new(&mut rng, 1920, 1080)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn particles_fill_a_hundred_unit_cube() {
    let scene = make_scene();
    assert_eq!(scene.particles.positions.len(), PARTICLE_COUNT);
    let half = PARTICLE_CUBE_SIZE / 2.0;
    for p in &scene.particles.positions {
        for c in p.to_array() {
            assert!((-half..half).contains(&c), "coordinate {c} outside cube");
        }
    }
}

#[test]
fn spheres_alternate_colors_and_spread() {
    let scene = make_scene();
    assert_eq!(scene.spheres.len(), SPHERE_COUNT);
    for (i, s) in scene.spheres.iter().enumerate() {
        assert_eq!(s.color, SPHERE_COLORS[i % 2]);
        assert!(s.position.abs().max_element() <= SPHERE_SPREAD / 2.0);
        assert_eq!(s.rotation, Vec3::ZERO);
    }
    assert_ne!(scene.spheres[0].color, scene.spheres[1].color);
}

#[test]
fn same_seed_builds_same_scene() {
    let a = make_scene();
    let b = make_scene();
    assert_eq!(a.particles.positions, b.particles.positions);
    assert_eq!(a.spheres[3].position, b.spheres[3].position);
}

#[test]
fn tick_advances_particle_rotation_by_fixed_steps() {
    let mut scene = make_scene();
    scene.tick(0.0, Vec2::ZERO);
    assert!(approx(scene.particles.rotation.x, PARTICLE_SPIN_X));
    assert!(approx(scene.particles.rotation.y, PARTICLE_SPIN_Y));
    for _ in 0..9 {
        scene.tick(0.0, Vec2::ZERO);
    }
    assert!(approx(scene.particles.rotation.x, 10.0 * 0.0003));
    assert!(approx(scene.particles.rotation.y, 10.0 * 0.0005));
}

#[test]
fn sphere_rotation_scales_with_index() {
    let mut scene = make_scene();
    scene.tick(0.0, Vec2::ZERO);
    for (i, s) in scene.spheres.iter().enumerate() {
        let k = (i + 1) as f32;
        assert!(approx(s.rotation.x, 0.001 * k));
        assert!(approx(s.rotation.y, 0.002 * k));
    }
}

#[test]
fn spheres_bob_with_phase_offset() {
    let mut scene = make_scene();
    let xs: Vec<f32> = scene.spheres.iter().map(|s| s.position.x).collect();
    let t = 1.25;
    scene.tick(t, Vec2::ZERO);
    for (i, s) in scene.spheres.iter().enumerate() {
        assert!(approx(s.position.y, (t + i as f32).sin() * 2.0));
        // only the vertical axis oscillates
        assert_eq!(s.position.x, xs[i]);
    }
}

#[test]
fn camera_moves_five_percent_toward_pointer_goal() {
    let mut scene = make_scene();
    scene.tick(0.0, Vec2::new(1.0, -1.0));
    assert!(approx(scene.camera.eye.x, 0.1));
    assert!(approx(scene.camera.eye.y, -0.1));
    assert!(approx(scene.camera.eye.z, CAMERA_START_Z));

    for _ in 0..400 {
        scene.tick(0.0, Vec2::new(1.0, -1.0));
    }
    assert!((scene.camera.eye.x - 2.0).abs() < 1e-3);
    assert!((scene.camera.eye.y + 2.0).abs() < 1e-3);
}

#[test]
fn camera_keeps_origin_centered() {
    let mut scene = make_scene();
    for _ in 0..30 {
        scene.tick(0.0, Vec2::new(0.6, 0.4));
    }
    let view_space = scene.camera.view_matrix().transform_point3(Vec3::ZERO);
    assert!(view_space.x.abs() < 1e-4);
    assert!(view_space.y.abs() < 1e-4);
    assert!(view_space.z < 0.0);
}

#[test]
fn resize_updates_aspect_and_viewport_exactly() {
    let mut scene = make_scene();
    assert!(approx(scene.camera.aspect, 1920.0 / 1080.0));
    scene.resize(800, 600);
    assert!(approx(scene.camera.aspect, 800.0 / 600.0));
    assert_eq!(
        scene.viewport,
        Viewport {
            width: 800,
            height: 600
        }
    );
}

#[test]
fn resize_to_zero_is_clamped() {
    let mut scene = make_scene();
    scene.resize(0, 0);
    assert_eq!(scene.viewport, Viewport::new(1, 1));
    assert!(scene.camera.aspect.is_finite());
}

#[test]
fn sphere_model_places_sphere_at_its_position() {
    let mut scene = make_scene();
    scene.tick(0.5, Vec2::ZERO);
    let center = scene.sphere_model(2).transform_point3(Vec3::ZERO);
    assert!((center - scene.spheres[2].position).length() < 1e-5);
}

#[test]
fn uv_sphere_counts_and_radius() {
    let (positions, indices) = uv_sphere(1.0, 32, 32);
    assert_eq!(positions.len(), 33 * 33);
    assert_eq!(indices.len(), 32 * 31 * 6);
    assert!(indices.iter().all(|&i| (i as usize) < positions.len()));
    for p in &positions {
        let r = Vec3::from_array(*p).length();
        assert!((r - 1.0).abs() < 1e-5);
    }
}
