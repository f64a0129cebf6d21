pub mod commands;
pub mod config;
pub mod init_config;
pub mod io;
pub mod plotting;
pub mod renderer;
pub mod simulation;
pub mod storage;
pub mod units;

pub mod app;

pub use simulation::{EnergySimulator, Field, RunState};
