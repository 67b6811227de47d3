//! Embassy async tasks

pub mod bridge;
pub mod command_rx;

pub use command_rx::command_rx_task;
