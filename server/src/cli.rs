use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "Landfall CLI.")]
pub struct Cli {
    /// Track file to load, repeat for several basins (overrides LANDFALL_TRACK_FILES)
    #[arg(short, long = "track-file")]
    pub track_files: Vec<PathBuf>,
    /// Only parse track files again when their contents change
    #[arg(long)]
    pub cache: bool,
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve hit queries over HTTP
    Http {
        #[arg(env = "LANDFALL_SERVER_ADDRESS")]
        address: std::net::SocketAddr,
    },
    /// Storms that passed over a point
    Hits(HitsArgs),
    /// Summary of every parsed storm
    Storms {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
pub struct HitsArgs {
    /// Decimal degrees, e.g. 25.8 or 25.8N
    #[arg(allow_negative_numbers = true)]
    pub latitude: String,
    /// Decimal degrees, e.g. -80.2 or 80.2W
    #[arg(allow_negative_numbers = true)]
    pub longitude: String,
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hits_negative_longitude() {
        let cli = Cli::try_parse_from(["landfall", "hits", "25.8", "-80.2"]).unwrap();

        assert!(cli.track_files.is_empty());
        match cli.cmd {
            Command::Hits(args) => {
                assert_eq!(args.latitude, "25.8");
                assert_eq!(args.longitude, "-80.2");
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_repeated_track_files() {
        let cli = Cli::try_parse_from([
            "landfall",
            "-t",
            "atl.txt",
            "--track-file",
            "pac.txt",
            "--cache",
            "storms",
            "--json",
        ])
        .unwrap();

        assert_eq!(
            cli.track_files,
            vec![PathBuf::from("atl.txt"), PathBuf::from("pac.txt")]
        );
        assert!(cli.cache);
        assert!(matches!(cli.cmd, Command::Storms { json: true }));
    }

    #[test]
    fn test_parse_http_address() {
        let cli = Cli::try_parse_from(["landfall", "http", "127.0.0.1:8080"]).unwrap();
        match cli.cmd {
            Command::Http { address } => assert_eq!(address.port(), 8080),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
