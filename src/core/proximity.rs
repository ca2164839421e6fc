//! Proximity lines between nearby particles
//!
//! Brute-force O(n^2) over unordered pairs. With n in the tens to low
//! hundreds this is cheaper than maintaining a spatial index.

use super::particle::Particle;

/// A pair of particles close enough to be connected
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    /// Index of the first particle (always `< b`)
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// Line opacity for a pair at `distance`.
///
/// 1.0 at distance 0, falling linearly to exactly 0.0 at `threshold`,
/// and 0.0 beyond it.
#[inline]
pub fn line_alpha(distance: f32, threshold: f32) -> f32 {
    if distance >= threshold {
        return 0.0;
    }
    (1.0 - distance / threshold).clamp(0.0, 1.0)
}

/// Iterate over every unordered pair `i < j` closer than `threshold`
pub fn links(particles: &[Particle], threshold: f32) -> impl Iterator<Item = Link> + '_ {
    particles.iter().enumerate().flat_map(move |(a, pa)| {
        particles
            .iter()
            .enumerate()
            .skip(a + 1)
            .filter_map(move |(b, pb)| {
                let distance = pa.pos.distance(pb.pos);
                (distance < threshold).then(|| Link {
                    a,
                    b,
                    distance,
                    alpha: line_alpha(distance, threshold),
                })
            })
    })
}
