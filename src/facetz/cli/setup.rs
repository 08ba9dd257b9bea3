use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "facetz", bin_name = "facetz", version)]
#[command(about = "Narrow a catalog one facet at a time", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (overrides the configured one)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Configuration directory (default: $FACETZ_CONFIG_DIR, ./.facetz, or the user config dir)
    #[arg(long, global = true, help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every dimension's values, marking selected and disabled ones
    #[command(alias = "s")]
    Show {
        /// Toggle a value, applied in order (e.g. -s colors=red -s size=9)
        #[arg(short = 's', long = "select", value_name = "DIM=VALUE")]
        select: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the catalog items matching the selection
    #[command(alias = "m")]
    Matches {
        /// Toggle a value, applied in order (e.g. -s colors=red -s size=9)
        #[arg(short = 's', long = "select", value_name = "DIM=VALUE")]
        select: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List dimensions and the record fields they read
    #[command(alias = "dims")]
    Dimensions,

    /// Get or set configuration
    Config {
        /// Configuration key (catalog, collection, field.<dimension>)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_selectors_in_order() {
        let cli = Cli::try_parse_from([
            "facetz", "show", "-s", "colors=red", "--select", "size=9", "--json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Show { select, json }) => {
                assert_eq!(select, ["colors=red", "size=9"]);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["facetz", "--catalog", "shoes.json"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.catalog, Some(PathBuf::from("shoes.json")));
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["facetz", "matches", "-v", "--config-dir", "/tmp/x"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/x")));
    }
}
