//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `toolio_core` linkage with a deterministic ping/version check.
//! - Run the text tools over stdin for quick local checks.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::process::ExitCode;
use toolio_core::text::summarizer::DEFAULT_SUMMARY_PERCENT;
use toolio_core::{count_text, summarize_request, Notice};

/// Toolio core smoke check; prints ping/version when no command is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Summarize text read from stdin
    Summarize {
        /// Summary length as a percentage of the sentences
        #[arg(
            default_value_t = DEFAULT_SUMMARY_PERCENT,
            value_parser = clap::value_parser!(u32).range(1..=100)
        )]
        percent: u32,
    },
    /// Print word, character, sentence and paragraph counts for stdin
    Count,
}

fn main() -> ExitCode {
    match Cli::parse().command {
        None => {
            println!("toolio_core ping={}", toolio_core::ping());
            println!("toolio_core version={}", toolio_core::core_version());
            ExitCode::SUCCESS
        }
        Some(Command::Summarize { percent }) => run_summarize(percent),
        Some(Command::Count) => run_count(),
    }
}

fn run_summarize(percent: u32) -> ExitCode {
    let Some(input) = read_stdin() else {
        return ExitCode::FAILURE;
    };

    match summarize_request(&input, percent) {
        Ok(summary) => {
            println!("{}", summary.text);
            eprintln!(
                "kept {} of {} sentences",
                summary.selected_count, summary.sentence_count
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", Notice::from(&err));
            ExitCode::FAILURE
        }
    }
}

fn run_count() -> ExitCode {
    let Some(input) = read_stdin() else {
        return ExitCode::FAILURE;
    };
    let stats = count_text(&input);
    println!("words={}", stats.words);
    println!("characters={}", stats.characters);
    println!("characters_no_spaces={}", stats.characters_no_spaces);
    println!("sentences={}", stats.sentences);
    println!("paragraphs={}", stats.paragraphs);
    println!("reading_time={}", stats.reading_time_label());
    ExitCode::SUCCESS
}

fn read_stdin() -> Option<String> {
    let mut input = String::new();
    match std::io::stdin().read_to_string(&mut input) {
        Ok(_) => Some(input),
        Err(err) => {
            eprintln!("failed to read stdin: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::error::ErrorKind;
    use clap::{CommandFactory, Parser};
    use toolio_core::text::summarizer::DEFAULT_SUMMARY_PERCENT;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_prints_ping_and_version() {
        let cli = Cli::try_parse_from(["toolio_cli"]).expect("bare invocation should parse");
        assert_eq!(cli.command, None);
    }

    #[test]
    fn summarize_percent_defaults_and_is_range_checked() {
        let cli = Cli::try_parse_from(["toolio_cli", "summarize"]).expect("default percent");
        assert_eq!(
            cli.command,
            Some(Command::Summarize {
                percent: DEFAULT_SUMMARY_PERCENT
            })
        );

        let cli = Cli::try_parse_from(["toolio_cli", "summarize", "30"]).expect("explicit percent");
        assert_eq!(cli.command, Some(Command::Summarize { percent: 30 }));

        for bad in ["abc", "0", "101"] {
            let err = Cli::try_parse_from(["toolio_cli", "summarize", bad])
                .expect_err("invalid percent must be rejected");
            assert_eq!(err.kind(), ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn help_and_unknown_commands_are_handled_by_parser() {
        let err = Cli::try_parse_from(["toolio_cli", "--help"]).expect_err("help exits early");
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Cli::try_parse_from(["toolio_cli", "shout"]).expect_err("unknown subcommand");
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);

        let cli = Cli::try_parse_from(["toolio_cli", "count"]).expect("count parses");
        assert_eq!(cli.command, Some(Command::Count));
    }
}
