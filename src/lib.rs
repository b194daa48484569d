//! NHL Statistics Export Library
//!
//! Fetches teams, rosters and year-by-year player statistics from the NHL
//! stats API and flattens them into comma-delimited text files.
//!
//! ## Output
//!
//! - `teams.txt`: `team_id,team_name`
//! - `players.txt`: `playerID,team_id,fullName,posType,position`
//! - `skaters_stats.txt`: `playerID,season,games,timeOnIce,points,goals,assists,shots`
//! - `goalie_stats.txt`: `playerID,season,games,wins,losses,ot_losses,shutouts`
//!
//! Only seasons played in the National Hockey League are exported.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nhl_stats_export::commands::export::{run_export, ExportOptions};
//!
//! # async fn example() -> nhl_stats_export::Result<()> {
//! let summary = run_export(&ExportOptions::default()).await?;
//! println!("{} teams exported", summary.teams);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod nhl;
pub mod output;

// Re-export commonly used types
pub use cli::types::ids::{PlayerId, TeamId};
pub use error::{ExportError, Result};
pub use nhl::types::Role;
