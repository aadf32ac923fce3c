pub mod backtest;
pub mod config;
pub mod display;
pub mod pools;
pub mod selection;
pub mod session;
pub mod stats;
