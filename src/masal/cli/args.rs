use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "masal")]
#[command(about = "A local library for generated children's stories", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this directory for story records instead of the configured one
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the stories in the library, newest first
    #[command(alias = "ls")]
    List,

    /// Read a story
    #[command(alias = "r")]
    Read {
        /// Library index (e.g. 1) or story id
        selector: String,
    },

    /// Delete one or more stories
    #[command(alias = "rm")]
    Delete {
        /// Library indexes or story ids (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Add a story written by the generation service to the library
    Import {
        /// JSON file with the generated story
        file: PathBuf,

        /// Name of the child the story is for
        #[arg(long, default_value = "")]
        child: String,

        /// Age of the child
        #[arg(long, default_value_t = 0)]
        age: u8,

        /// Story theme
        #[arg(long, default_value = "")]
        theme: String,

        /// Free-text keywords
        #[arg(long, default_value = "")]
        keywords: String,
    },

    /// Print the story store directory
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (store-dir, show-summary)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_takes_many_selectors() {
        let cli = Cli::try_parse_from(["masal", "rm", "1", "abc"]).unwrap();
        match cli.command {
            Some(Commands::Delete { selectors }) => assert_eq!(selectors, vec!["1", "abc"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["masal", "ls", "--store", "/tmp/x", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn import_defaults_generation_parameters() {
        let cli = Cli::try_parse_from(["masal", "import", "s.json", "--child", "Ada"]).unwrap();
        match cli.command {
            Some(Commands::Import {
                file, child, age, ..
            }) => {
                assert_eq!(file, PathBuf::from("s.json"));
                assert_eq!(child, "Ada");
                assert_eq!(age, 0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
