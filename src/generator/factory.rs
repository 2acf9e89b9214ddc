use std::fmt;
use std::str::FromStr;

use crate::generator::{
    AudioGenerator, ForestGenerator, LofiGenerator, RainGenerator, WavesGenerator,
    WhiteNoiseGenerator,
};
use crate::GeneratorError;

/// The closed set of soundscapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GeneratorType {
    WhiteNoise,
    Rain,
    Forest,
    Waves,
    LofiStudy,
}

impl GeneratorType {
    pub const ALL: [GeneratorType; 5] = [
        GeneratorType::WhiteNoise,
        GeneratorType::Rain,
        GeneratorType::Forest,
        GeneratorType::Waves,
        GeneratorType::LofiStudy,
    ];

    /// Kebab-case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            GeneratorType::WhiteNoise => "white-noise",
            GeneratorType::Rain => "rain",
            GeneratorType::Forest => "forest",
            GeneratorType::Waves => "waves",
            GeneratorType::LofiStudy => "lofi-study",
        }
    }

    /// Build a fresh generator of this type.
    pub fn create(self, sample_rate: f32) -> Result<Box<dyn AudioGenerator>, GeneratorError> {
        Ok(match self {
            GeneratorType::WhiteNoise => Box::new(WhiteNoiseGenerator::new(sample_rate)?),
            GeneratorType::Rain => Box::new(RainGenerator::new(sample_rate)?),
            GeneratorType::Forest => Box::new(ForestGenerator::new(sample_rate)?),
            GeneratorType::Waves => Box::new(WavesGenerator::new(sample_rate)?),
            GeneratorType::LofiStudy => Box::new(LofiGenerator::new(sample_rate)?),
        })
    }

    /// Seeded variant of [`create`](Self::create) for reproducible output.
    pub fn create_seeded(
        self,
        sample_rate: f32,
        seed: u64,
    ) -> Result<Box<dyn AudioGenerator>, GeneratorError> {
        Ok(match self {
            GeneratorType::WhiteNoise => {
                Box::new(WhiteNoiseGenerator::with_seed(sample_rate, seed)?)
            }
            GeneratorType::Rain => Box::new(RainGenerator::with_seed(sample_rate, seed)?),
            GeneratorType::Forest => Box::new(ForestGenerator::with_seed(sample_rate, seed)?),
            GeneratorType::Waves => Box::new(WavesGenerator::with_seed(sample_rate, seed)?),
            GeneratorType::LofiStudy => Box::new(LofiGenerator::with_seed(sample_rate, seed)?),
        })
    }
}

impl fmt::Display for GeneratorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorType {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        GeneratorType::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| GeneratorError::UnknownGenerator(s.to_string()))
    }
}

/// Build a new, independent generator. Never returns a shared instance.
pub fn create_generator(
    kind: GeneratorType,
    sample_rate: f32,
) -> Result<Box<dyn AudioGenerator>, GeneratorError> {
    kind.create(sample_rate)
}
