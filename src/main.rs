//! headsup — heads-up hold'em equity comparison.
//!
//! Entry point. Loads configuration, initialises structured logging,
//! composes the two hands through the selection state machine, and asks
//! the remote equity service which one is ahead.
//!
//! Usage: `headsup <hero> <villain> [board]`, e.g. `headsup AsKd QcJh`
//! or `headsup AsKd 9c9h QsJsTs`.

use anyhow::{bail, Context, Result};
use tracing::info;

use headsup::cards::{Board, Card};
use headsup::config::AppConfig;
use headsup::hands::HandRole;
use headsup::orchestrator;
use headsup::service::http::HttpEquityClient;
use headsup::service::EquityService;
use headsup::session::{GameState, RequestStatus};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cfg = AppConfig::load_or_default("config.toml")?;
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (hero_arg, villain_arg, board_arg) = match args.as_slice() {
        [hero, villain] => (hero, villain, None),
        [hero, villain, board] => (hero, villain, Some(board)),
        _ => bail!("Usage: headsup <hero> <villain> [board]   e.g. headsup AsKd QcJh"),
    };

    let client = HttpEquityClient::new(&cfg.service)?;
    info!(base_url = %cfg.service.base_url, "Using equity service");

    // Compose both hands through the selection state machine so the
    // dedup/capacity rules apply to CLI input too.
    let mut state = GameState::new();
    for (role, arg) in [(HandRole::Hero, hero_arg), (HandRole::Villain, villain_arg)] {
        for card in parse_hand(arg)? {
            state.set_draft_rank(card.rank);
            state.set_draft_suit(card.suit);
            state.commit(role);
        }
        if !state.hands().hand(role).is_complete() {
            bail!("Could not compose {role} hand from {arg:?}: duplicate card");
        }
    }

    match board_arg {
        None => {
            orchestrator::submit(&mut state, &client).await;
            match state.status() {
                RequestStatus::Succeeded { hero, villain } => {
                    println!(
                        "preflop: {} {:.1}%  vs  {} {:.1}%",
                        state.hands().hero(),
                        hero * 100.0,
                        state.hands().villain(),
                        villain * 100.0,
                    );
                }
                RequestStatus::Failed(msg) => bail!("Equity request failed: {msg}"),
                other => bail!("Unexpected request status: {other:?}"),
            }
        }
        Some(board_str) => {
            let board: Board = board_str
                .parse()
                .with_context(|| format!("Invalid board {board_str:?}"))?;
            let pair = client
                .street_equity(
                    &state.hands().hero().token(),
                    &state.hands().villain().token(),
                    &board,
                )
                .await
                .context("Street equity request failed")?;
            println!(
                "{}: {} {:.1}%  vs  {} {:.1}%",
                board.street(),
                state.hands().hero(),
                pair.hero * 100.0,
                state.hands().villain(),
                pair.villain * 100.0,
            );
        }
    }

    Ok(())
}

/// Parse a 4-character hand argument (`AsKd`) into its two cards.
fn parse_hand(s: &str) -> Result<[Card; 2]> {
    let s = s.trim();
    if !s.is_ascii() || s.len() != 4 {
        bail!("Hand must be exactly 4 characters like 'AsKd', got {s:?}");
    }
    let first: Card = s[..2].parse()?;
    let second: Card = s[2..].parse()?;
    Ok([first, second])
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("headsup=info"));

    if std::env::var("HEADSUP_LOG_JSON").is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}
