//! Command-line interface for analysing positions and running self-play

pub mod commands;
pub mod config;
pub mod output;
