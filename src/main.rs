use std::process::ExitCode;

use clap::Parser;
use tongits::game::{parse_hand, validate_hand, AcePolicy, CardError, GroupedHand, GroupingOptions};
use tongits::MeldEngine;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "meldgroup")]
#[command(about = "Group a Tongits hand into straight flushes and sets", long_about = None)]
#[command(version)]
struct Cli {
    /// Cards such as `AS 2S 3S 10H` (separate arguments or one quoted string)
    #[arg(required = true)]
    cards: Vec<String>,
    /// Let an ace close a run above the king (Q-K-A)
    #[arg(long)]
    ace_high: bool,
    /// Stop each run at three cards instead of absorbing the cards that continue it
    #[arg(long)]
    minimal_runs: bool,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn options(&self) -> GroupingOptions {
        let ace = if self.ace_high {
            AcePolicy::LowOrHigh
        } else {
            AcePolicy::LowOnly
        };
        GroupingOptions::new()
            .with_ace(ace)
            .with_extend_runs(!self.minimal_runs)
    }
}

fn run(cli: &Cli) -> Result<GroupedHand, CardError> {
    let hand = parse_hand(&cli.cards.join(" "))?;
    validate_hand(&hand)?;

    info!(cards = hand.len(), "grouping hand");
    Ok(MeldEngine::new(cli.options()).group(&hand, None))
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the JSON result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tongits=info,meldgroup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let grouped = match run(&cli) {
        Ok(grouped) => grouped,
        Err(e) => {
            error!("Invalid hand: {}", e);
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&grouped)
    } else {
        serde_json::to_string(&grouped)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize grouped hand: {}", e);
            ExitCode::FAILURE
        }
    }
}
