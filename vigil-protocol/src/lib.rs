//! Host Serial Link Protocol
//!
//! This crate defines the ASCII line protocol between the Vigil bridge
//! and the host PC. The protocol is designed for simplicity and for
//! human-readable debugging over a serial console.
//!
//! # Protocol Overview
//!
//! Inbound commands are single lines terminated by `\n` or `\r`,
//! at most 99 bytes of payload per line:
//!
//! ```text
//! RGB:<r>,<g>,<b>    ->  ACK:RGB   | ERR:RGB parse failed
//! L:<line1>[|line2]  ->  ACK:L
//! B:<0|1>            ->  (no reply)
//! anything else      ->  ERR:Invalid format | ERR:Unknown command
//! ```
//!
//! Outbound telemetry is an unsolicited line every sample period:
//!
//! ```text
//! T:<temp>,X:<x>,Y:<y>,Z:<z>
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod telemetry;

pub use command::{Command, ParseError, Reply};
pub use line::{CommandLine, LineAccumulator, MAX_LINE_LEN};
pub use telemetry::{TelemetryRecord, MAX_TELEMETRY_LEN};
