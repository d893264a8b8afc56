//! Rewind TUI - terminal front end for the rewind tic-tac-toe engine
//!
//! Provides the interactive board with a navigable move history, a
//! headless `replay` mode and the TOML configuration both share.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use replay::{render_json, render_text, replay};
pub use tui::{App, run_tui};
