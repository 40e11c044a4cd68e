//! lfmctl: CLI and client library for the Flow Manager RESTCONF API
//!
//! Entities (paths, tree paths, E-Lines, E-Trees, taps) and inventory
//! queries are exposed through [`fm::FmClient`]; the `lfm` binary wires the
//! command line to it. Remote rejections travel inside [`fm::FmResponse`]
//! descriptors, so errors of type [`error::FmError`] always mean a local
//! failure (bad input, bad configuration, unreadable topology file).

pub mod cli;
pub mod config;
pub mod error;
pub mod fm;
pub mod output;
pub mod topology;

pub use error::{FmError, Result};
pub use fm::{ConnectionSettings, FmClient, FmResponse};
