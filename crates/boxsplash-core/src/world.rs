//! The animated world: particles, their projection and the start/stop state.
//!
//! `WorldSpace` is platform-free. Hosts call [`WorldSpace::update`] once per
//! rendered frame with the elapsed time, forward pointer movement to
//! [`WorldSpace::steer`], and draw [`WorldSpace::draw_order`] back to front.

use std::sync::Arc;
use std::time::Duration;

use glam::{Vec2, Vec3};
use rand::prelude::*;
use smallvec::SmallVec;

use crate::clock::FixedStep;
use crate::color::Rgb;
use crate::config::BoxConfig;
use crate::constants::{
    BORDER_FAR, BORDER_NEAR, DEFAULT_VIEWPORT, FILL_FAR, MAX_CATCH_UP_STEPS, SPAWN_EXTENT_XY,
    STEER_DEGREES_PER_PX, TICK_INTERVAL,
};
use crate::projection::{depth_progress, perspective_scale, rotate_xz};

/// Screen-space result of projecting one particle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectedBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub fill: Rgb,
    pub border: Rgb,
    /// 1 is drawn first (farthest), `n` last (nearest).
    pub z_index: u32,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec3,
    pub width: f32,
    pub height: f32,
    pub projected: ProjectedBox,
}

impl Particle {
    pub fn new(pos: Vec3, width: f32, height: f32) -> Self {
        Self {
            pos,
            width,
            height,
            projected: ProjectedBox::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorldEvent {
    AnimationStateChanged { running: bool },
}

pub type WorldEvents = SmallVec<[WorldEvent; 4]>;

pub struct WorldSpace {
    particles: Vec<Particle>,
    draw_order: Vec<usize>,
    config: Option<Arc<BoxConfig>>,
    focal_length: f32,
    angle: f32,
    vanishing_point: Vec2,
    viewport: Vec2,
    running: bool,
    clock: FixedStep,
    rng: StdRng,
    events: WorldEvents,
}

impl WorldSpace {
    pub fn new(seed: u64) -> Self {
        let viewport = Vec2::from(DEFAULT_VIEWPORT);
        Self {
            particles: Vec::new(),
            draw_order: Vec::new(),
            config: None,
            focal_length: 0.0,
            angle: 0.0,
            vanishing_point: viewport / 2.0,
            viewport,
            running: false,
            clock: FixedStep::new(TICK_INTERVAL, MAX_CATCH_UP_STEPS),
            rng: StdRng::seed_from_u64(seed),
            events: WorldEvents::new(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> Option<&Arc<BoxConfig>> {
        self.config.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Rotation applied per tick, in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    pub fn vanishing_point(&self) -> Vec2 {
        self.vanishing_point
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Particles from back to front.
    pub fn draw_order(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.draw_order.iter().map(move |&i| &self.particles[i])
    }

    pub fn take_events(&mut self) -> WorldEvents {
        std::mem::take(&mut self.events)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
        self.vanishing_point = self.viewport / 2.0;
    }

    /// Replace the world with one built from `config`.
    ///
    /// Returns `false` when `config` is already the current one.
    pub fn set_configuration(&mut self, config: Arc<BoxConfig>) -> bool {
        if self
            .config
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, &config))
        {
            return false;
        }
        self.stop();
        self.particles.clear();
        self.draw_order.clear();
        self.focal_length = config.focal_length;
        self.config = Some(config);
        self.create_world_from_config();
        self.start();
        true
    }

    fn create_world_from_config(&mut self) {
        let Some(config) = self.config.clone() else {
            return;
        };
        let half_xy = SPAWN_EXTENT_XY / 2.0;
        let f = self.focal_length;
        self.particles.reserve(config.count);
        for _ in 0..config.count {
            let pos = Vec3::new(
                self.rng.gen::<f32>() * SPAWN_EXTENT_XY - half_xy,
                self.rng.gen::<f32>() * SPAWN_EXTENT_XY - half_xy,
                self.rng.gen::<f32>() * f - f / 2.0,
            );
            self.particles.push(Particle::new(pos, config.size, config.size));
        }
        // Position everything once so a stopped world is still drawable.
        self.project(1.0, 0.0);
        log::debug!(
            "[world] built {} particles for `{}`",
            self.particles.len(),
            config.label
        );
    }

    pub fn start(&mut self) {
        if self.running || self.particles.is_empty() {
            return;
        }
        self.vanishing_point = self.viewport / 2.0;
        self.clock.reset();
        self.running = true;
        log::info!("[world] animation started");
        self.events
            .push(WorldEvent::AnimationStateChanged { running: true });
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.clock.reset();
        self.angle = 0.0;
        self.running = false;
        log::info!("[world] animation stopped");
        self.events
            .push(WorldEvent::AnimationStateChanged { running: false });
    }

    /// Start when stopped, stop when running. Returns the new running flag.
    pub fn toggle_start_stop(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    /// Set the per-tick rotation from a pointer x position measured from the
    /// world's left edge. Ignored while stopped.
    pub fn steer(&mut self, pointer_x: f32) {
        if !self.running {
            return;
        }
        self.angle = (pointer_x - self.vanishing_point.x) * STEER_DEGREES_PER_PX;
    }

    /// Advance by wall-clock `dt`, running as many fixed ticks as are due.
    pub fn update(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        let steps = self.clock.advance(dt);
        for _ in 0..steps {
            self.tick();
        }
        steps
    }

    /// One animation step: rotate, project, shade and depth-sort.
    pub fn tick(&mut self) {
        let rads = self.angle.to_radians();
        self.project(rads.cos(), rads.sin());
    }

    fn project(&mut self, cos: f32, sin: f32) {
        let f = self.focal_length;
        let vp = self.vanishing_point;
        let color = self.config.as_ref().map(|c| c.color).unwrap_or_default();
        for p in &mut self.particles {
            let (x1, z1) = rotate_xz(p.pos.x, p.pos.z, cos, sin);
            // Scale is taken from the depth before this step's rotation.
            let scale = perspective_scale(f, p.pos.z);
            let progress = depth_progress(z1, f);
            p.pos.x = x1;
            p.pos.z = z1;
            p.projected = ProjectedBox {
                x: vp.x + p.pos.x * scale,
                y: vp.y + p.pos.y * scale,
                width: p.width * scale,
                height: p.height * scale,
                scale,
                fill: color.lerp(FILL_FAR, progress),
                border: BORDER_NEAR.lerp(BORDER_FAR, progress),
                z_index: p.projected.z_index,
            };
        }
        self.sort_z();
    }

    fn sort_z(&mut self) {
        // Ties keep creation order, so start from it every time.
        self.draw_order.clear();
        self.draw_order.extend(0..self.particles.len());
        let particles = &self.particles;
        self.draw_order
            .sort_by(|&a, &b| particles[b].pos.z.total_cmp(&particles[a].pos.z));
        for (slot, &i) in self.draw_order.iter().enumerate() {
            self.particles[i].projected.z_index = slot as u32 + 1;
        }
    }
}
