//! Subcommands of the `tictactoe` binary

pub mod self_play;
pub mod solve;
