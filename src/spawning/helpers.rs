use bevy::prelude::*;
use bevy_prng::WyRand;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Resource)]
pub struct GenRng(WyRand);

impl GenRng {

    pub fn new(seed: u64) -> Self {
        GenRng(WyRand::seed_from_u64(seed))
    }

    /// Seeded when a seed is given, otherwise from the system clock.
    pub fn seeded_or_not(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos() as u64
        });
        GenRng::new(seed)
    }

    pub fn rng_mut(&mut self) -> &mut WyRand {
        &mut self.0
    }
}

/// `count` points scattered uniformly in a cube of side `spread` around the origin.
pub fn scatter_points(rng: &mut impl Rng, count: usize, spread: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
            )
        })
        .collect()
}
