use crate::operations::SearchTerms;
use clap::{Args, Parser, Subcommand};

/// Command-line arguments for itldims
#[derive(Parser, Debug, Clone)]
#[command(name = "itldims")]
#[command(about = "Interact with the etcd API")]
#[command(
    long_about = "A command-line tool to interact with the etcd API and tell if the connection has been made"
)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Without a subcommand, only check that the API is reachable
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search Attributes & Values from etcd API
    Get(GetArgs),
}

/// Arguments for the `get` subcommand
#[derive(Args, Debug, Clone)]
pub struct GetArgs {
    /// Term that must appear as a whole word in the key or the value
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Second term that must also appear (defaults to "servers")
    #[arg(value_name = "SECOND_TERM")]
    pub second_term: Option<String>,

    /// For displaying all the values and components (accepted, not yet applied)
    #[arg(long, value_name = "VALUE", default_value = "")]
    pub all: String,

    /// Output format for matches: text or json
    #[arg(long = "output-format", value_name = "FORMAT", default_value = "text")]
    pub output_format: String,
}

impl GetArgs {
    /// The two search terms, with the default second term filled in
    #[must_use]
    #[inline]
    pub fn search_terms(&self) -> SearchTerms {
        SearchTerms::new(self.term.clone(), self.second_term.clone())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn no_subcommand_is_the_probe() {
        let cli = Cli::try_parse_from(["itldims"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn get_with_one_term_defaults_second() {
        let cli = Cli::try_parse_from(["itldims", "get", "west"]).unwrap();
        let Some(Commands::Get(args)) = cli.command else {
            panic!("expected get subcommand");
        };

        let terms = args.search_terms();
        assert_eq!(terms.first, "west");
        assert_eq!(terms.second, "servers");
        assert_eq!(args.all, "");
        assert_eq!(args.output_format, "text");
    }

    #[test]
    fn get_with_two_terms() {
        let cli = Cli::try_parse_from(["itldims", "get", "west", "active"]).unwrap();
        let Some(Commands::Get(args)) = cli.command else {
            panic!("expected get subcommand");
        };

        assert_eq!(args.search_terms(), SearchTerms::new("west", Some("active".to_owned())));
    }

    #[test]
    fn get_requires_a_term() {
        let err = Cli::try_parse_from(["itldims", "get"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn get_rejects_a_third_term() {
        assert!(Cli::try_parse_from(["itldims", "get", "a", "b", "c"]).is_err());
    }

    #[test]
    fn all_flag_is_accepted() {
        let cli = Cli::try_parse_from(["itldims", "get", "west", "--all", "yes"]).unwrap();
        let Some(Commands::Get(args)) = cli.command else {
            panic!("expected get subcommand");
        };
        assert_eq!(args.all, "yes");
    }
}
