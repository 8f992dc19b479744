use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Simulation steps per second",
        default_value_t = 60.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frames rendered per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // Builds the full command, including the owned version string.
    #[test]
    fn defaults_to_sixty_per_second() {
        let cli = Cli::parse_from(["flappy-rs"]);
        assert_eq!(cli.tick_rate, 60.0);
        assert_eq!(cli.frame_rate, 60.0);
    }
}
