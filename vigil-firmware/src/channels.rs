//! Static handoff cells between tasks
//!
//! Completed command lines travel from the serial receive task to the
//! bridge loop through a single [`Signal`]. A `Signal` holds at most one
//! value and a fresh line overwrites an unconsumed one, so a host that
//! floods commands can never wedge the receiver.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use vigil_protocol::CommandLine;

/// Most recent completed command line awaiting dispatch.
pub static COMMAND_LINE: Signal<CriticalSectionRawMutex, CommandLine> = Signal::new();
