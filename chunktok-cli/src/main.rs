//! chunktok command-line entry point

use chunktok_cli::commands::Commands;
use clap::Parser;

/// Stream large files in bounded chunks and split them into delimiter-separated tokens
#[derive(Debug, Parser)]
#[command(name = "chunktok", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_tokenize_arguments() {
        let cli = Cli::try_parse_from([
            "chunktok", "tokenize", "-i", "a.csv", "-i", "b.csv", "-d", ";", "--threshold", "0",
        ])
        .unwrap();

        match cli.command {
            Commands::Tokenize(args) => {
                assert_eq!(args.common.input, vec!["a.csv", "b.csv"]);
                assert_eq!(args.delimiter, ";");
                assert_eq!(args.common.threshold, Some(0));
            }
            other => panic!("expected tokenize, got {other:?}"),
        }
    }

    #[test]
    fn test_default_delimiter_is_escaped_newline() {
        let cli = Cli::try_parse_from(["chunktok", "tokenize", "-i", "a.txt"]).unwrap();
        match cli.command {
            Commands::Tokenize(args) => assert_eq!(args.delimiter, "\\n"),
            other => panic!("expected tokenize, got {other:?}"),
        }
    }
}
