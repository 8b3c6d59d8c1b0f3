#[cfg(test)]
#[path = "rng_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::RngCore;
use rand::SeedableRng;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub type RngBox = Box<dyn RngCore + Send>;

/// How a session gets its randomness. `Seeded` sessions pick the same delays
/// and replies every run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RngStrategy {
    #[default]
    Default,
    Seeded(u64),
}

impl RngStrategy {
    pub fn from_config() -> Result<RngStrategy> {
        return RngStrategy::parse(&Config::get(ConfigKey::Seed));
    }

    pub fn parse(seed: &str) -> Result<RngStrategy> {
        if seed.is_empty() {
            return Ok(RngStrategy::Default);
        }

        return match seed.parse::<u64>() {
            Ok(val) => Ok(RngStrategy::Seeded(val)),
            Err(_) => bail!(format!("Seed must be a positive integer, got '{seed}'")),
        };
    }

    pub fn build(&self) -> RngBox {
        match self {
            RngStrategy::Default => return Box::new(StdRng::from_entropy()),
            RngStrategy::Seeded(seed) => return Box::new(StdRng::seed_from_u64(*seed)),
        }
    }
}
