//! Export phases and the driver that sequences them

pub mod common;
pub mod export;
pub mod rosters;
pub mod stats;
pub mod teams;
