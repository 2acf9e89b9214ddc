//! Noise cores.
//!
//! Three colours of noise feed almost every layer in the crate:
//!
//! | core    | spectrum        | slope        | character                  |
//! | ------- | --------------- | ------------ | -------------------------- |
//! | white   | flat            | 0 dB/oct     | hiss, static, spray        |
//! | pink    | 1/f             | -3 dB/oct    | rain, wind, natural beds   |
//! | brown   | 1/f²            | -6 dB/oct    | rumble, surf body, thunder |
//!
//! Each core owns its own RNG. Nothing here is shared between channels,
//! layers or generator instances: independent streams per channel are what
//! give the stereo beds their width.

use rand::{rngs::SmallRng, SeedableRng};

mod brown;
mod pink;
mod white;

pub use brown::BrownNoise;
pub use pink::{PinkNoise, PINK_ROWS};
pub use white::WhiteNoise;

/// Hands out independent RNG streams while a generator is being built.
///
/// In normal playback every stream is seeded from OS entropy. Tests use
/// [`Seeder::fixed`] so that two generators built from the same seed produce
/// identical output, while each layer and channel inside one generator still
/// gets a distinct stream.
#[derive(Debug, Clone)]
pub struct Seeder {
    seed: Option<u64>,
    stream: u64,
}

impl Seeder {
    pub fn entropy() -> Self {
        Self {
            seed: None,
            stream: 0,
        }
    }

    pub fn fixed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            stream: 0,
        }
    }

    /// A fresh RNG, independent of every other one this seeder has produced.
    pub fn rng(&mut self) -> SmallRng {
        self.stream += 1;
        match self.seed {
            Some(seed) => {
                SmallRng::seed_from_u64(seed ^ self.stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
            }
            None => SmallRng::from_os_rng(),
        }
    }

    pub fn white(&mut self) -> WhiteNoise {
        WhiteNoise::new(self.rng())
    }

    pub fn pink(&mut self) -> PinkNoise {
        PinkNoise::new(self.rng())
    }

    pub fn brown(&mut self) -> BrownNoise {
        BrownNoise::new(self.rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn fixed_seeders_are_reproducible() {
        let mut a = Seeder::fixed(42);
        let mut b = Seeder::fixed(42);
        for _ in 0..4 {
            assert_eq!(a.rng().random::<u64>(), b.rng().random::<u64>());
        }
    }

    #[test]
    fn streams_from_one_seeder_differ() {
        let mut seeder = Seeder::fixed(42);
        let first: u64 = seeder.rng().random();
        let second: u64 = seeder.rng().random();
        assert_ne!(first, second);
    }
}
