use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bot::Bot;
use crate::bots::threshold::DEFAULT_MIN_DICE;
use crate::bots::{HumanBot, RandomBot, ThresholdBot};

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a bot instance from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - random[:seed]
/// - threshold[:points]
pub fn create_bot_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<Box<dyn Bot>, Box<dyn Error>> {
    let spec_lower = spec.to_ascii_lowercase();
    let arg = spec.split_once(':').map(|(_, value)| value.trim());
    if spec_lower.starts_with("human") {
        let name = arg
            .map(str::to_string)
            .unwrap_or_else(|| format!("Player {}", index + 1));
        Ok(Box::new(HumanBot::new(name)))
    } else if spec_lower.starts_with("random") {
        let custom_seed = arg
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(seed ^ ((index as u64 + 1) * 0x9E37_79B9));
        Ok(Box::new(RandomBot::new(StdRng::seed_from_u64(custom_seed))))
    } else if spec_lower.starts_with("threshold") {
        match arg {
            Some(value) => {
                let points = value
                    .parse::<u32>()
                    .map_err(|_| format!("invalid threshold value: {value}"))?;
                if points == 0 {
                    return Err("threshold must be positive".into());
                }
                Ok(Box::new(ThresholdBot::new(points, DEFAULT_MIN_DICE)))
            }
            None => Ok(Box::new(ThresholdBot::default())),
        }
    } else {
        Err(format!("unrecognized bot spec: {spec}").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_drop_arguments() {
        assert_eq!(label_for_spec("Threshold:500"), "threshold");
        assert_eq!(label_for_spec("random"), "random");
    }

    #[test]
    fn parses_known_specs_and_rejects_others() {
        assert!(create_bot_from_spec("random:42", 0, 1).is_ok());
        assert!(create_bot_from_spec("threshold", 1, 1).is_ok());
        assert!(create_bot_from_spec("threshold:600", 1, 1).is_ok());
        assert!(create_bot_from_spec("human:Ada", 0, 1).is_ok());
        assert!(create_bot_from_spec("threshold:lots", 0, 1).is_err());
        assert!(create_bot_from_spec("threshold:0", 0, 1).is_err());
        assert!(create_bot_from_spec("oracle", 0, 1).is_err());
    }
}
