use std::time::{SystemTime, UNIX_EPOCH};

use cgmath::Vector3;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Three independent channels drawn uniformly from `[0, 1]`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Vector3<f32> {
    Vector3::new(
        rng.gen_range(0.0..=1.0),
        rng.gen_range(0.0..=1.0),
        rng.gen_range(0.0..=1.0),
    )
}

/// Generator for colour changes. Without an explicit seed it is seeded once from the clock.
pub fn color_rng(seed: Option<u64>) -> Xoshiro256StarStar {
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });

    Xoshiro256StarStar::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_in_unit_range() {
        let mut rng = color_rng(None);

        for _ in 0..1000 {
            let c = random_color(&mut rng);
            for channel in [c.x, c.y, c.z] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn same_seed_same_colors() {
        let mut a = color_rng(Some(42));
        let mut b = color_rng(Some(42));

        assert_eq!(random_color(&mut a), random_color(&mut b));
    }
}
