//! Host side of the contact card exchange: receive-session state, export,
//! contact-book hand-off and the `nfclink` command line.

pub mod cli;
pub mod error;
pub mod host;
