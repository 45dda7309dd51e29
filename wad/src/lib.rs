//! This crate contains the structures and tools for reading WAD archives and
//! pulling the raw level records out of them.
//!
//! The structure of a WAD is this:
//!
//! ```text,ignore
//!                        <───── 32 bits ──────>
//!                        ┌────────────────────┐
//!             ┌──── 0x00 |  ASCII WAD Type    | 0x03
//!             |          | ────────────────── |
//!     Header ─┤     0x04 | # of directories   | 0x07
//!             |          | ────────────────── |
//!             └──── 0x08 | offset to listing ───0x0B ──┐
//!             ┌───────── | ────────────────── |        |
//!             |     0x0C | ┌────────────────┐ |        |
//!             |          | |   Lump Bytes   |<─────┐   |
//!     Lumps ──┤          | |       .        | |    |   |
//!             |          | └────────────────┘ |    |   |
//!             |          |         .          |    |   |
//!             └───────── |         .          |    |   |
//!             ┌───────── | ┌────────────────┐<─────────┘
//!             |          | |   Lump Offset  |──────┘
//!             |          | |----------------| |
//!  Directory ─┤          | |   Lump Size    | |
//!     List    |          | |----------------| |
//!             |          | |   Lump Name    | |
//!             |          | └────────────────┘ |
//!             |          |         .          |
//!             └───────── └────────────────────┘
//! ```
//!
//! A level is a *marker* lump (`E1M1`, `MAP01`, ...) followed by a run of
//! component lumps (`THINGS`, `LINEDEFS`, `VERTEXES`, ...). [`WadData::map_lumps`]
//! finds that run and the iterators in [`iterators`] decode its records.

pub use crate::error::*;
pub use crate::map::*;
pub use crate::wad::*;

/// Typed record decoding for the lumps of one map
pub mod iterators;

/// The raw record structures, as laid out in the lumps
pub mod types;

mod error;
mod map;
#[allow(clippy::module_inception)]
mod wad;

#[cfg(any(test, feature = "builder"))]
pub mod builder;
