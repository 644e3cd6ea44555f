//! Solve command - Report the minimax value and best move for a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::SearchArgs,
        output::{format_number, print_board, print_kv, print_section, print_subsection},
    },
    search::{MoveScore, Searcher},
    tictactoe::{Board, Move, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for a position")]
pub struct SolveArgs {
    /// Board as 9 cells in row-major order, e.g. "X.O/.X./..." (default: empty board)
    pub board: Option<String>,

    /// Show the value of every legal move
    #[arg(long)]
    pub all: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub search: SearchArgs,
}

#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub board: String,
    pub to_move: Player,
    pub outcome: Outcome,
    pub value: i32,
    pub best_move: Option<Move>,
    pub optimal_moves: Vec<Move>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<MoveScore>>,
    pub nodes: u64,
}

/// Analyse `board` with `searcher`
pub fn solve(searcher: &mut Searcher, board: &Board, include_scores: bool) -> SolveReport {
    let value = searcher.value(board);
    let mut nodes = searcher.last_stats().nodes;

    let optimal_moves = searcher.optimal_moves(board);
    nodes += searcher.last_stats().nodes;

    let best_move = searcher.choose(&optimal_moves);

    let scores = if include_scores {
        let scores = searcher.scored_moves(board);
        nodes += searcher.last_stats().nodes;
        Some(scores)
    } else {
        None
    };

    SolveReport {
        board: board.encode(),
        to_move: board.whose_turn(),
        outcome: board.outcome(),
        value,
        best_move,
        optimal_moves,
        scores,
        nodes,
    }
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = match &args.board {
        Some(s) => Board::from_string(s)?,
        None => Board::new(),
    };
    let mut searcher = Searcher::new(args.search.resolve()?);
    let report = solve(&mut searcher, &board, args.all);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    print_board(&board);
    println!();
    print_kv("To move", &report.to_move.to_string());
    print_kv("Outcome", &describe_outcome(report.outcome));
    print_kv("Value", &describe_value(report.value));
    print_kv("Nodes searched", &format_number(report.nodes));

    match report.best_move {
        Some(mv) => print_kv("Best move", &mv.to_string()),
        None => print_kv("Best move", "none (game over)"),
    }
    if report.optimal_moves.len() > 1 {
        let moves: Vec<String> = report.optimal_moves.iter().map(Move::to_string).collect();
        print_kv("Equally good", &moves.join(" "));
    }

    if let Some(scores) = &report.scores {
        print_subsection("Move values");
        for score in scores {
            print_kv(&score.mv.to_string(), &describe_value(score.value));
        }
    }

    Ok(())
}

fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(player) => format!("{player} has won"),
        Outcome::Draw => "draw".to_string(),
        Outcome::InProgress => "in progress".to_string(),
    }
}

fn describe_value(value: i32) -> String {
    match value {
        1 => "+1 (X wins)".to_string(),
        -1 => "-1 (O wins)".to_string(),
        _ => format!("{value} (draw)"),
    }
}
