//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Fragment sweeper: drops expired cached fragments at configured intervals

mod sweeper;

pub use sweeper::spawn_sweeper_task;
