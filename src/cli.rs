use clap::Parser;
use particle_trail::TrailConfig;

/// A particle trail that follows the mouse pointer
#[derive(Parser)]
#[command()]
pub struct Args {
    /// Chance that a pointer move spawns a particle, between `0` and `1`
    #[arg(short, long, default_value_t = 0.3f32, value_parser = parse_probability)]
    pub spawn_probability: f32,

    /// Seed for particle randomness, random if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cap the framerate of the trail
    ///
    /// if omitted frames are paced by the display
    #[arg(short, long)]
    pub framerate: Option<u32>,

    /// Show the settings overlay
    #[arg(long)]
    pub hud: bool,

    /// Initial window width
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}

impl Args {
    pub fn trail_config(&self) -> TrailConfig {
        TrailConfig {
            spawn_probability: self.spawn_probability,
            ..Default::default()
        }
    }
}

fn parse_probability(value: &str) -> Result<f32, String> {
    let probability: f32 = value.parse().map_err(|e| format!("{e}"))?;
    if !(0.0..=1.0).contains(&probability) {
        return Err(format!("{probability} is not between 0 and 1"));
    }

    Ok(probability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["particle_trail"]);
        assert_eq!(args.trail_config(), TrailConfig::default());
        assert_eq!(args.framerate, None);
        assert!(!args.hud);
    }

    #[test]
    fn test_probability_is_validated() {
        assert!(Args::try_parse_from(["particle_trail", "-s", "1.5"]).is_err());
        assert!(Args::try_parse_from(["particle_trail", "-s", "abc"]).is_err());

        let args = Args::try_parse_from(["particle_trail", "-s", "0.75", "--seed", "9"]).unwrap();
        assert_eq!(args.trail_config().spawn_probability, 0.75);
        assert_eq!(args.seed, Some(9));
    }
}
