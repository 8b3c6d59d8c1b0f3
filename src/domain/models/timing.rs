#[cfg(test)]
#[path = "timing_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use rand::Rng;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// Range the bot's reply delay is drawn from, `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplyTiming {
    min: Duration,
    max: Duration,
}

impl Default for ReplyTiming {
    fn default() -> ReplyTiming {
        return ReplyTiming {
            min: Duration::from_millis(1000),
            max: Duration::from_millis(3000),
        };
    }
}

impl ReplyTiming {
    pub fn new(min: Duration, max: Duration) -> Result<ReplyTiming> {
        if min >= max {
            bail!(format!(
                "Reply delay minimum ({}ms) must be lower than the maximum ({}ms)",
                min.as_millis(),
                max.as_millis()
            ));
        }

        return Ok(ReplyTiming { min, max });
    }

    pub fn from_config() -> Result<ReplyTiming> {
        let min = parse_millis(ConfigKey::ReplyDelayMin)?;
        let max = parse_millis(ConfigKey::ReplyDelayMax)?;

        return ReplyTiming::new(min, max);
    }

    pub fn min(&self) -> Duration {
        return self.min;
    }

    pub fn max(&self) -> Duration {
        return self.max;
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let millis = rng.gen_range(self.min.as_millis() as u64..self.max.as_millis() as u64);
        return Duration::from_millis(millis);
    }
}

fn parse_millis(key: ConfigKey) -> Result<Duration> {
    let val = Config::get(key);
    return match val.parse::<u64>() {
        Ok(millis) => Ok(Duration::from_millis(millis)),
        Err(_) => bail!(format!("{key} must be a number of milliseconds, got '{val}'")),
    };
}
