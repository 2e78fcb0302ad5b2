//! # Cyclograph Core
//!
//! The curve generation engine. A pen is fixed to a moving gear that rolls
//! without slipping along a fixed gear; the engine computes the resulting
//! roulette curve as an ordered list of points.
//!
//! ## Components
//!
//! - **Shapes**: regular polygon and line gears, boundary sampling
//! - **Rolling**: moving gear center and rotation at a sweep parameter
//! - **Pattern**: full parameter sweep producing the pen trace
//!
//! All operations are pure functions of their inputs and safe to run in
//! parallel.
//!
//! ## Usage
//!
//! ```rust
//! use cyclograph_core::{generate_pattern, Design, Shape};
//!
//! let design = Design::new(
//!     Shape::polygon(3, 100.0).unwrap(),
//!     Shape::polygon(3, 30.0).unwrap(),
//! )
//! .with_pen(20.0, 0.0);
//!
//! let pattern = generate_pattern(&design).unwrap();
//! assert_eq!(pattern.points.len(), 500);
//! ```

pub mod design;
pub mod error;
pub mod geometry;
pub mod pattern;
pub mod rolling;
pub mod shapes;

pub use design::{Design, DesignSpec, LineMovementMode, TracingMode};
pub use error::{CyclographError, Result};
pub use geometry::{Bounds, Point};
pub use pattern::{effective_steps, generate_pattern, Pattern, PatternGenerator, MIN_STEPS};
pub use rolling::{rolling_state, RollingModel, RollingState};
pub use shapes::{polygon_vertex, GearSpec, Shape, ShapeKind};
