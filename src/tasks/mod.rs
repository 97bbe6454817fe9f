//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the REPL.
//!
//! # Tasks
//! - Cache sweep: Removes expired cache entries at a fixed interval

mod sweep;

pub use sweep::{spawn_sweep_task, spawn_sweep_thread};
