//! Judgement score tracker CLI.
//!
//! Each invocation restores the saved game, applies at most one action and
//! prints where the game now stands.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use judgement::telemetry::init_tracing;
use judgement::{AppConfig, AppError, FileSnapshotStore, GameAction, GameSession, TrumpSuit};
use tracing::debug;

#[derive(Parser)]
#[command(name = "judgement")]
#[command(about = "Score tracker for the Judgement (Kachuful) card game")]
struct Args {
    /// Snapshot file (overrides JUDGEMENT_STATE_FILE)
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Print the game snapshot as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current game
    Status,
    /// Set the number of players on the setup form
    Players { count: u8 },
    /// Name a player on the setup form (0-based index)
    Name { index: u8, name: String },
    /// Start the game; with no names, uses the setup form
    Start { names: Vec<String> },
    /// Pick the trump suit for this round (hearts, c, ♠, ...)
    Trump { suit: String },
    /// Confirm trump and open bidding
    ConfirmTrump,
    /// Bid for the player whose turn it is
    Bid { value: u8 },
    /// Re-open a placed bid
    EditBid { seat: u8 },
    /// Finish bidding and start entering hands won
    StartRound,
    /// Enter hands won for a seat
    Won { seat: u8, count: u8 },
    /// Move on to the next round (or finish the game)
    NextRound,
    /// Discard the current game
    Reset {
        /// Confirm that progress will be lost
        #[arg(long)]
        yes: bool,
    },
}

impl Command {
    fn into_action(self) -> Result<Option<GameAction>, AppError> {
        let action = match self {
            Command::Status => return Ok(None),
            Command::Players { count } => GameAction::SetPlayerCount(count),
            Command::Name { index, name } => GameAction::SetPlayerName { index, name },
            Command::Start { names } => GameAction::StartGame { names },
            Command::Trump { suit } => GameAction::SetTrumpSuit(suit.parse::<TrumpSuit>()?),
            Command::ConfirmTrump => GameAction::ConfirmTrump,
            Command::Bid { value } => GameAction::SubmitBid(value),
            Command::EditBid { seat } => GameAction::EditBid(seat),
            Command::StartRound => GameAction::StartRound,
            Command::Won { seat, count } => GameAction::SubmitHandsWon { seat, count },
            Command::NextRound => GameAction::NextRound,
            Command::Reset { yes } => GameAction::ResetGame { confirmed: yes },
        };
        Ok(Some(action))
    }
}

fn run(args: Args, config: AppConfig) -> Result<(), AppError> {
    let store = FileSnapshotStore::new(config.state_file.clone());
    let mut session = GameSession::open(store)?;

    if let Some(action) = args.command.into_action()? {
        let transitions = session.dispatch(action)?;
        debug!(count = transitions.len(), "Action applied");
    }

    let snap = session.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        print!("{}", render::render(&snap));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error [{}]: {}", e.code(), e.detail());
            return ExitCode::from(e.exit_code() as u8);
        }
    };
    if let Some(path) = &args.state_file {
        config.state_file = path.clone();
    }
    if args.verbose {
        config.log_filter = "debug".to_string();
    }
    init_tracing(&config);

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error [{}]: {}", e.code(), e.detail());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
