use itertools::Itertools;
use nalgebra::{vector, Vector2};
use rand_chacha::rand_core::RngCore;

use crate::ParticleSettings;

/// Size of the drawing surface, in CSS pixels.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a new [`Viewport`].
    pub fn new(width: f64, height: f64) -> Viewport {
        Viewport {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Area in square pixels.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Centre of the viewport.
    pub fn center(&self) -> Vector2<f64> {
        vector![self.width / 2.0, self.height / 2.0]
    }

    /// Whether `point` lies within `[0, width] × [0, height]`.
    pub fn contains(&self, point: &Vector2<f64>) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

/// A drifting point of the background.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Particle {
    /// Position in pixels.
    pub position: Vector2<f64>,
    /// Velocity in pixels per frame.
    pub velocity: Vector2<f64>,
    /// Radius in pixels.
    pub radius: f64,
}

impl Particle {
    /// Creates a new [`Particle`].
    pub fn new(position: Vector2<f64>, velocity: Vector2<f64>, radius: f64) -> Particle {
        Particle {
            position,
            velocity,
            radius,
        }
    }

    /// Advances one frame, reflecting off the edges of `viewport`.
    pub fn tick(&mut self, viewport: &Viewport) {
        self.position += self.velocity;

        let (x, vx) = reflect(self.position.x, self.velocity.x, viewport.width);
        let (y, vy) = reflect(self.position.y, self.velocity.y, viewport.height);

        self.position = vector![x, y];
        self.velocity = vector![vx, vy];
    }
}

/// Bounces a coordinate that left `[0, extent]` back inside, reversing its velocity.
fn reflect(position: f64, velocity: f64, extent: f64) -> (f64, f64) {
    if position < 0.0 || position > extent {
        (position.clamp(0.0, extent), -velocity)
    } else {
        (position, velocity)
    }
}

/// A line to draw between two nearby particles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Link {
    /// Start point.
    pub from: Vector2<f64>,
    /// End point.
    pub to: Vector2<f64>,
    /// Stroke width, falling with distance.
    pub width: f64,
}

/// Number of particles for `viewport`: one per `area_per_particle`, capped at `max_count`.
pub fn particle_count(viewport: &Viewport, settings: &ParticleSettings) -> usize {
    let count = (viewport.area() / settings.area_per_particle).floor();

    if count.is_finite() && count > 0.0 {
        (count as usize).min(settings.max_count)
    } else {
        0
    }
}

/// Stroke width of a link between particles `distance_squared` apart, if they are close enough.
///
/// Width decreases linearly in squared distance from `link_width` towards
/// `link_width - link_fade` and no link exists at or past `link_distance`.
pub fn link_width(distance_squared: f64, settings: &ParticleSettings) -> Option<f64> {
    let threshold = settings.link_distance * settings.link_distance;

    if distance_squared < threshold {
        Some(settings.link_width - (distance_squared / threshold) * settings.link_fade)
    } else {
        None
    }
}

/// A uniform sample in `[0, 1)`.
fn unit<R: RngCore>(rng: &mut R) -> f64 {
    rng.next_u32() as f64 / (u32::MAX as f64 + 1.0)
}

/// The set of particles filling a [`Viewport`].
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Fills `viewport` with a fresh set of randomly placed particles.
    pub fn populate<R: RngCore>(
        viewport: Viewport,
        settings: &ParticleSettings,
        rng: &mut R,
    ) -> ParticleField {
        let count = particle_count(&viewport, settings);

        let particles = (0..count)
            .map(|_| {
                let position = vector![unit(rng) * viewport.width, unit(rng) * viewport.height];
                let radius =
                    settings.radius_min + unit(rng) * (settings.radius_max - settings.radius_min);
                let velocity = vector![
                    (unit(rng) - 0.5) * 2.0 * settings.max_speed,
                    (unit(rng) - 0.5) * 2.0 * settings.max_speed
                ];

                Particle::new(position, velocity, radius)
            })
            .collect_vec();

        ParticleField {
            viewport,
            particles,
        }
    }

    /// Wraps an existing set of particles, e.g. for replaying a known layout.
    pub fn from_particles(viewport: Viewport, particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            viewport,
            particles,
        }
    }

    /// The viewport the particles live in.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The particles, in draw order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advances every particle by one frame.
    pub fn tick(&mut self) {
        let viewport = self.viewport;

        for particle in self.particles.iter_mut() {
            particle.tick(&viewport);
        }
    }

    /// Every pair of particles close enough to be linked.
    pub fn links<'a>(&'a self, settings: &'a ParticleSettings) -> impl Iterator<Item = Link> + 'a {
        self.particles
            .iter()
            .tuple_combinations()
            .filter_map(move |(a, b)| {
                let distance_squared = (a.position - b.position).norm_squared();

                link_width(distance_squared, settings).map(|width| Link {
                    from: a.position,
                    to: b.position,
                    width,
                })
            })
    }
}
