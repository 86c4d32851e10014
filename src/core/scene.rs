use super::constants::*;
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::Rng;
use smallvec::SmallVec;

/// Right-handed perspective camera that always looks at `target`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_START_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Ease the eye 5% of the way toward the pointer-derived goal in x/y.
    /// Depth is left alone.
    pub fn follow(&mut self, pointer_ndc: Vec2) {
        let goal = pointer_ndc * CAMERA_POINTER_SCALE;
        self.eye.x += (goal.x - self.eye.x) * CAMERA_FOLLOW;
        self.eye.y += (goal.y - self.eye.y) * CAMERA_FOLLOW;
    }
}

#[derive(Clone, Debug)]
pub struct ParticleCloud {
    pub positions: Vec<Vec3>,
    /// Euler angles (x, y) in radians.
    pub rotation: Vec2,
}

#[derive(Clone, Debug)]
pub struct Sphere {
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Retained background scene: one particle cloud, a handful of spheres and
/// the camera rig. Mutated once per display frame by [`SceneState::tick`].
#[derive(Clone, Debug)]
pub struct SceneState {
    pub particles: ParticleCloud,
    pub spheres: SmallVec<[Sphere; SPHERE_COUNT]>,
    pub camera: Camera,
    pub viewport: Viewport,
}

impl SceneState {
    pub fn new<R: Rng>(rng: &mut R, width: u32, height: u32) -> Self {
        let positions = (0..PARTICLE_COUNT)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_CUBE_SIZE,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_CUBE_SIZE,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_CUBE_SIZE,
                )
            })
            .collect();

        let spheres = (0..SPHERE_COUNT)
            .map(|i| Sphere {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * SPHERE_SPREAD,
                    (rng.gen::<f32>() - 0.5) * SPHERE_SPREAD,
                    (rng.gen::<f32>() - 0.5) * SPHERE_SPREAD,
                ),
                rotation: Vec3::ZERO,
                color: SPHERE_COLORS[i % SPHERE_COLORS.len()],
            })
            .collect();

        let viewport = Viewport::new(width, height);
        Self {
            particles: ParticleCloud {
                positions,
                rotation: Vec2::ZERO,
            },
            spheres,
            camera: Camera::new(viewport.aspect()),
            viewport,
        }
    }

    /// Advance one display frame. `elapsed_sec` drives the sphere bobbing and
    /// is absolute, so skipped frames do not desynchronize the oscillation.
    pub fn tick(&mut self, elapsed_sec: f32, pointer_ndc: Vec2) {
        self.particles.rotation.x += PARTICLE_SPIN_X;
        self.particles.rotation.y += PARTICLE_SPIN_Y;

        for (i, sphere) in self.spheres.iter_mut().enumerate() {
            let k = (i + 1) as f32;
            sphere.rotation.x += SPHERE_SPIN_X * k;
            sphere.rotation.y += SPHERE_SPIN_Y * k;
            sphere.position.y = (elapsed_sec + i as f32).sin() * SPHERE_BOB_AMPLITUDE;
        }

        self.camera.follow(pointer_ndc);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.camera.aspect = self.viewport.aspect();
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.projection_matrix() * self.camera.view_matrix()
    }

    pub fn particle_model(&self) -> Mat4 {
        let r = self.particles.rotation;
        Mat4::from_euler(EulerRot::XYZ, r.x, r.y, 0.0)
    }

    pub fn sphere_model(&self, index: usize) -> Mat4 {
        let s = &self.spheres[index];
        Mat4::from_translation(s.position)
            * Mat4::from_euler(EulerRot::XYZ, s.rotation.x, s.rotation.y, s.rotation.z)
    }
}
