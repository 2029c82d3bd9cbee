//! XOI protocol handling.
//!
//! This module implements parsing and serialization for the XOI (X-and-O
//! Interface) protocol: the board/side notation used by `position` and
//! state lines, and the command parser for the main loop.

pub mod notation;
pub mod parser;

pub use notation::{encode_cells, parse_cells, parse_side, NotationError};
pub use parser::{parse_command, Command};
