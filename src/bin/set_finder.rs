use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use set_finder::cards::{all_cards, Card, CardCollection, Deck};
use set_finder::core::{FinderConfig, SearchStrategy, DEFAULT_BOARD_SIZE};
use set_finder::rules::{is_set, SetFinder, SetTriple};

#[derive(Parser)]
#[command(name = "set-finder")]
#[command(about = "Find valid Sets among cards of the game Set")]
struct Cli {
    /// Search algorithm: "exhaustive" or "completion"
    #[arg(long, global = true, default_value = "completion")]
    strategy: SearchStrategy,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find Sets in a fixed three-card sample
    Sample,
    /// Check whether three cards form a Set
    Check {
        /// Three card identifiers, e.g. 1RSO 2GTD 3POS
        #[arg(num_args = 3, required = true)]
        cards: Vec<String>,
    },
    /// Find all Sets among the given cards
    Find {
        /// Card identifiers, e.g. 1RSO 2RSO 3RSO
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// Shuffle a deck, deal a board and find its Sets
    Deal {
        /// Shuffle seed
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Cards to deal
        #[arg(short = 'n', long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
    },
    /// Print every card identifier
    List {
        /// Print long names (1-red-solid-oval) next to identifiers
        #[arg(long)]
        long: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "set_finder=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = FinderConfig::default().with_strategy(cli.strategy);

    match cli.command {
        Commands::Sample => {
            let sample = CardCollection::from_identifiers(["1RSO", "2GTD", "3POS"])?;
            report(out, &SetFinder::new(config), &sample)?;
        }
        Commands::Check { cards } => {
            let [a, b, c] = parse_three(&cards)?;
            let verdict = if is_set(&a, &b, &c)? { "Set" } else { "not a Set" };
            writeln!(
                out,
                "{} {} {}: {verdict}",
                a.to_identifier(),
                b.to_identifier(),
                c.to_identifier()
            )?;
        }
        Commands::Find { cards } => {
            let collection = CardCollection::from_identifiers(&cards)?;
            report(out, &SetFinder::new(config), &collection)?;
        }
        Commands::Deal { seed, size } => {
            let config = config.with_seed(seed).with_board_size(size);
            let (board, deck) = Deck::deal_board(&config)?;
            tracing::info!(seed, remaining = deck.remaining(), "dealt board");
            writeln!(out, "Board: {board}")?;
            report(out, &SetFinder::new(config), &board)?;
        }
        Commands::List { long } => {
            for card in all_cards() {
                if long {
                    writeln!(out, "{}\t{}", card.to_identifier(), card.long_name())?;
                } else {
                    writeln!(out, "{}", card.to_identifier())?;
                }
            }
        }
    }

    Ok(())
}

fn parse_three(ids: &[String]) -> anyhow::Result<[Card; 3]> {
    let cards = ids
        .iter()
        .map(|id| id.parse::<Card>().with_context(|| format!("parsing card {id:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    cards
        .try_into()
        .map_err(|v: Vec<Card>| anyhow::anyhow!("expected 3 cards, got {}", v.len()))
}

fn report(
    out: &mut impl Write,
    finder: &SetFinder,
    collection: &CardCollection,
) -> std::io::Result<()> {
    let sets: Vec<SetTriple> = finder.find_sets(collection);
    writeln!(out, "Sets found: {}", sets.len())?;
    for set in &sets {
        let [a, b, c] = set.identifiers();
        writeln!(out, "{a} {b} {c}\t{set}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use set_finder::core::SetError;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("set-finder").chain(args.iter().copied()))
    }

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = parse(args)?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn set_error(err: &anyhow::Error) -> Option<&SetError> {
        err.chain().find_map(|cause| cause.downcast_ref::<SetError>())
    }

    // =========================================================================
    // Argument Parsing
    // =========================================================================

    #[test]
    fn test_check_takes_exactly_three_cards() {
        assert!(parse(&["check", "1RSO", "2RSO", "3RSO"]).is_ok());
        assert!(parse(&["check", "1RSO", "2RSO"]).is_err());
        assert!(parse(&["check", "1RSO", "2RSO", "3RSO", "1GSO"]).is_err());
    }

    #[test]
    fn test_strategy_flag() {
        let cli = parse(&["--strategy", "exhaustive", "sample"]).unwrap();
        assert_eq!(cli.strategy, SearchStrategy::Exhaustive);

        // Global flag is accepted after the subcommand too
        let cli = parse(&["find", "1RSO", "--strategy", "exhaustive"]).unwrap();
        assert_eq!(cli.strategy, SearchStrategy::Exhaustive);

        let cli = parse(&["sample"]).unwrap();
        assert_eq!(cli.strategy, SearchStrategy::Completion);

        assert!(parse(&["--strategy", "fastest", "sample"]).is_err());
    }

    #[test]
    fn test_find_requires_cards() {
        assert!(parse(&["find"]).is_err());
    }

    #[test]
    fn test_deal_defaults() {
        let cli = parse(&["deal"]).unwrap();
        match cli.command {
            Commands::Deal { seed, size } => {
                assert_eq!(seed, 42);
                assert_eq!(size, DEFAULT_BOARD_SIZE);
            }
            _ => panic!("expected deal"),
        }
    }

    // =========================================================================
    // Card Parsing
    // =========================================================================

    #[test]
    fn test_parse_three() {
        let ids = vec!["1RSO".to_string(), "2GTD".to_string(), "3POS".to_string()];
        let [a, _, c] = parse_three(&ids).unwrap();
        assert_eq!(a.to_identifier(), "1RSO");
        assert_eq!(c.to_identifier(), "3POS");
    }

    #[test]
    fn test_parse_three_rejects_malformed() {
        let ids = vec!["1RSO".to_string(), "1rso".to_string(), "3POS".to_string()];
        let err = parse_three(&ids).unwrap_err();
        assert!(err.to_string().contains("\"1rso\""));
        assert!(matches!(set_error(&err), Some(SetError::MalformedIdentifier { .. })));
    }

    #[test]
    fn test_parse_three_rejects_wrong_count() {
        let ids = vec!["1RSO".to_string(), "2RSO".to_string()];
        let err = parse_three(&ids).unwrap_err();
        assert_eq!(err.to_string(), "expected 3 cards, got 2");
    }

    // =========================================================================
    // Commands
    // =========================================================================

    #[test]
    fn test_sample_finds_one_set() {
        let out = run_args(&["sample"]).unwrap();
        assert!(out.starts_with("Sets found: 1\n"));
        assert!(out.contains("1RSO 2GTD 3POS"));
    }

    #[test]
    fn test_check_verdicts() {
        let out = run_args(&["check", "1RSO", "2RSO", "3RSO"]).unwrap();
        assert_eq!(out, "1RSO 2RSO 3RSO: Set\n");

        let out = run_args(&["check", "1RSO", "1RSD", "1RTS"]).unwrap();
        assert_eq!(out, "1RSO 1RSD 1RTS: not a Set\n");
    }

    #[test]
    fn test_check_degenerate_triple_fails() {
        let err = run_args(&["check", "1RSO", "1RSO", "2RSO"]).unwrap_err();
        assert_eq!(set_error(&err), Some(&SetError::DegenerateTriple));
    }

    #[test]
    fn test_find_malformed_identifier_fails() {
        let err = run_args(&["find", "1RSO", "2RSO", "1rso"]).unwrap_err();
        assert!(matches!(set_error(&err), Some(SetError::MalformedIdentifier { .. })));
    }

    #[test]
    fn test_find_reports_each_set() {
        let out = run_args(&[
            "--strategy",
            "exhaustive",
            "find",
            "1RSO",
            "2RSO",
            "3RSO",
            "1GSO",
            "1PSO",
        ])
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Sets found: 2");
        assert!(lines[1].starts_with("1RSO 2RSO 3RSO\t"));
        assert!(lines[2].starts_with("1RSO 1GSO 1PSO\t"));
    }

    #[test]
    fn test_deal_oversized_board_fails() {
        let err = run_args(&["deal", "-n", "82"]).unwrap_err();
        assert!(matches!(set_error(&err), Some(SetError::InvalidConfig { .. })));
    }

    #[test]
    fn test_deal_is_deterministic() {
        let first = run_args(&["deal", "--seed", "7"]).unwrap();
        let second = run_args(&["deal", "--seed", "7"]).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("Board: 12 cards: ["));
    }

    #[test]
    fn test_list() {
        let out = run_args(&["list"]).unwrap();
        assert_eq!(out.lines().count(), 81);
        assert_eq!(out.lines().next(), Some("1RSD"));

        let out = run_args(&["list", "--long"]).unwrap();
        assert_eq!(out.lines().next(), Some("1RSD\t1-red-solid-diamond"));
    }
}
