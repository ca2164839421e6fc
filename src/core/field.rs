//! Particle field - the full set of particles plus the box they bounce in

use rand::Rng;
use tracing::debug;

use super::config::FieldConfig;
use super::particle::Particle;

/// Ordered particle sequence and the bounds used by the reflection rule.
///
/// Rebuilt wholesale on resize; particle identity is not preserved.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// Empty field with zero bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field from existing particles (scenario setup, benches)
    pub fn from_particles(particles: Vec<Particle>, width: f32, height: f32) -> Self {
        Self {
            particles,
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Fresh random field for a `width x height` surface.
    ///
    /// Size follows the config's width tier; each particle starts inside
    /// `[0,width) x [0,height)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, config: &FieldConfig) -> Self {
        let width = sanitize(width);
        let height = sanitize(height);
        let count = config.count_for_width(width);

        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height, config))
            .collect();

        debug!(count, width, height, "Particle field rebuilt");

        Self { particles, width, height }
    }

    /// Advance every particle by one frame
    pub fn advance(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Negative or non-finite dimensions collapse to 0
fn sanitize(dim: f32) -> f32 {
    if dim.is_finite() {
        dim.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::particle::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tiered_count_and_bounds() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        let desktop = ParticleField::random(&mut rng, 1000.0, 700.0, &config);
        assert_eq!(desktop.len(), 120);
        for p in desktop.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x < 1000.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 700.0);
        }

        let mobile = ParticleField::random(&mut rng, 500.0, 900.0, &config);
        assert_eq!(mobile.len(), 60);
        for p in mobile.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x < 500.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 900.0);
        }

        // Breakpoint itself is the mobile tier
        assert_eq!(ParticleField::random(&mut rng, 768.0, 100.0, &config).len(), 60);
        assert_eq!(ParticleField::random(&mut rng, 769.0, 100.0, &config).len(), 120);
    }

    #[test]
    fn test_same_seed_same_field() {
        let config = FieldConfig::default();
        let a = ParticleField::random(&mut StdRng::seed_from_u64(3), 1024.0, 768.0, &config);
        let b = ParticleField::random(&mut StdRng::seed_from_u64(3), 1024.0, 768.0, &config);
        assert_eq!(a.particles(), b.particles());

        let c = ParticleField::random(&mut StdRng::seed_from_u64(4), 1024.0, 768.0, &config);
        assert_ne!(a.particles(), c.particles());
    }

    #[test]
    fn test_advance_flips_only_escaped_axes() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = ParticleField::random(&mut rng, 300.0, 200.0, &config);

        // Push a few particles right up against the edges
        {
            let particles = field.particles_mut();
            particles[0].pos = Point::new(0.05, 100.0);
            particles[0].vel = Point::new(-0.2, 0.1);
            particles[1].pos = Point::new(150.0, 199.9);
            particles[1].vel = Point::new(0.1, 0.25);
            particles[2].pos = Point::new(299.9, 0.1);
            particles[2].vel = Point::new(0.3, -0.3);
        }

        for _ in 0..2000 {
            let before: Vec<Point> = field.particles().iter().map(|p| p.vel).collect();
            field.advance();
            for (p, prev_vel) in field.particles().iter().zip(before) {
                let out_x = p.pos.x < 0.0 || p.pos.x > 300.0;
                let out_y = p.pos.y < 0.0 || p.pos.y > 200.0;
                assert_eq!(p.vel.x, if out_x { -prev_vel.x } else { prev_vel.x });
                assert_eq!(p.vel.y, if out_y { -prev_vel.y } else { prev_vel.y });
            }
        }
    }

    #[test]
    fn test_particles_stay_near_bounds() {
        let config = FieldConfig::default();
        let mut field = ParticleField::random(&mut StdRng::seed_from_u64(5), 400.0, 300.0, &config);
        for _ in 0..5000 {
            field.advance();
        }
        // Overshoot stays within a frame's travel (plus rounding at the edge)
        let slack = config.max_speed * 2.0;
        for p in field.particles() {
            assert!(p.pos.x >= -slack && p.pos.x <= 400.0 + slack);
            assert!(p.pos.y >= -slack && p.pos.y <= 300.0 + slack);
        }
    }

    #[test]
    fn test_degenerate_dimensions() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let field = ParticleField::random(&mut rng, -50.0, f32::NAN, &config);
        assert_eq!(field.width(), 0.0);
        assert_eq!(field.height(), 0.0);
        assert_eq!(field.len(), 60);
        assert!(field.particles().iter().all(|p| p.pos == Point::new(0.0, 0.0)));
    }
}
