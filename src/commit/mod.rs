// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message handling: reading a message and splitting its header.

mod header;
mod message;

pub use header::ParsedHeader;
pub use message::CommitMessage;
