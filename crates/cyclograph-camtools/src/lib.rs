//! # Cyclograph CAM Tools
//!
//! Turns generated patterns into machine programs.
//!
//! ## Tools Included
//!
//! - **Toolpath Encoder**: fits a pattern into a physical box and emits
//!   pen-plotter G-code with configurable start/end blocks, pen commands
//!   and feed rates

pub mod toolpath;

pub use toolpath::{encode, Handedness, OriginCorner, Placement, ToolpathEncoder, ToolpathOptions};
