//! Self-play command - Play the searcher against itself and tally results

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::{
        config::SearchArgs,
        output::{create_games_progress, print_kv, print_section},
    },
    search::{Searcher, SelfPlaySummary, self_play},
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Play optimal moves for both sides and tally outcomes")]
pub struct SelfPlayArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 10)]
    pub games: usize,

    /// Starting position (default: empty board)
    #[arg(long)]
    pub from: Option<String>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    /// Print the move list of every game
    #[arg(long)]
    pub show_games: bool,

    #[command(flatten)]
    pub search: SearchArgs,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let start = match &args.from {
        Some(s) => Board::from_string(s)?,
        None => Board::new(),
    };
    let mut searcher = Searcher::new(args.search.resolve()?);
    let mut summary = SelfPlaySummary::default();

    let progress = if args.quiet {
        None
    } else {
        Some(create_games_progress(args.games as u64)?)
    };

    for i in 0..args.games {
        let game = self_play(&mut searcher, start)?;
        let outcome = game.outcome()?;
        summary.record(outcome);

        if args.show_games {
            let moves: Vec<String> = game.moves.iter().map(ToString::to_string).collect();
            let line = format!("game {}: {} -> {:?}", i + 1, moves.join(" "), outcome);
            match &progress {
                Some(pb) => pb.println(line),
                None => println!("{line}"),
            }
        }
        if let Some(pb) = &progress {
            pb.set_message(format!("{} draws", summary.draws));
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_section("Self-play results");
    print_kv("Games", &summary.games.to_string());
    print_kv("X wins", &summary.x_wins.to_string());
    print_kv("O wins", &summary.o_wins.to_string());
    print_kv("Draws", &summary.draws.to_string());

    if start == Board::new() && !summary.all_draws() {
        bail!("optimal self-play from the empty board must always draw");
    }
    Ok(())
}
