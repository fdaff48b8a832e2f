use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::types::Orientation;

macro_rules! arg_env {
    ($v:literal) => {
        concat!("REELPICK_", $v)
    };
}

/// Pick background stock footage by topic.
/// Search several terms, sample the results, and select the best file of each video.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// The path to the TOML settings file. A missing file is ignored
    #[arg(long, global = true, default_value = "reelpick.toml", env = arg_env!("CONFIG"))]
    pub config: PathBuf,

    /// The Pexels API key. Overrides the settings file
    #[arg(long, global = true, env = "PEXELS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Increase the log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available topics
    Topics,

    /// Pick random videos for a topic and print their best file
    Pick(PickArgs),
}

#[derive(clap::Args, Debug)]
pub struct PickArgs {
    /// The topic id, see the `topics` command
    pub topic: String,

    /// How many videos to pick
    #[arg(short = 'n', long, default_value_t = 5)]
    pub count: usize,

    /// The search query, required by the custom topic
    #[arg(long)]
    pub query: Option<String>,

    /// The wanted video width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// The wanted video orientation
    #[arg(long, value_enum)]
    pub orientation: Option<Orientation>,

    /// How many results to ask for each search term, at least one
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub per_term: Option<u32>,

    /// Seed the shuffle to get the same pick for the same search results
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the picked videos as JSON
    #[arg(long)]
    pub json: bool,

    /// Download the picked files to this directory
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl Args {
    pub fn log_level(&self) -> tracing::Level {
        match (self.quiet, self.verbose) {
            (true, _) => tracing::Level::WARN,
            (false, 0) => tracing::Level::INFO,
            (false, 1) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_pick() {
        let args = Args::try_parse_from([
            "reelpick",
            "-vv",
            "pick",
            "custom",
            "--query",
            "drone shots",
            "-n",
            "3",
            "--orientation",
            "landscape",
        ])
        .unwrap();

        assert_eq!(args.log_level(), tracing::Level::TRACE);
        match args.command {
            Command::Pick(pick) => {
                assert_eq!(pick.topic, "custom");
                assert_eq!(pick.query.as_deref(), Some("drone shots"));
                assert_eq!(pick.count, 3);
                assert_eq!(pick.orientation, Some(Orientation::Landscape));
                assert!(pick.out.is_none());
            }
            other => panic!("Unexpected command {other:?}"),
        }
    }

    #[test]
    fn zero_results_per_term_is_rejected() {
        let res = Args::try_parse_from(["reelpick", "pick", "nature", "--per-term", "0"]);
        assert!(res.is_err());

        let args = Args::try_parse_from(["reelpick", "pick", "nature", "--per-term", "1"]).unwrap();
        match args.command {
            Command::Pick(pick) => assert_eq!(pick.per_term, Some(1)),
            other => panic!("Unexpected command {other:?}"),
        }
    }
}
