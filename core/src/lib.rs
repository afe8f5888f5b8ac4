//! wyrmgrid-core — the authoritative world model and client-command
//! protocol for the Wyrmgrid server.
//!
//! The crate splits into two halves:
//!   - the spatial model: `grid`, `cell`, `tag`, `entity`, `registry`,
//!     `mapgen` and the `world` aggregate that wires them together;
//!   - the protocol: `protocol` (wire literals), `connection` (framing),
//!     `wire` (per-kind entity serialization) and `command` (dispatch).
//!
//! The server binary in `server/` owns all socket I/O; nothing in this
//! crate opens a socket.

pub mod cell;
pub mod command;
pub mod config;
pub mod connection;
pub mod entity;
pub mod error;
pub mod grid;
pub mod mapgen;
pub mod protocol;
pub mod registry;
pub mod rng;
pub mod tag;
pub mod types;
pub mod wire;
pub mod world;
