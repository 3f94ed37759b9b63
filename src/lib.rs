//! A 2D mass-spring sandbox core built on Verlet integration.
//!
//! `verlet_sandbox` owns the physics of a point-and-stick editor: particles are
//! placed and linked with distance constraints, then the scene is stepped under
//! gravity and friction while constraints are relaxed and particles bounce off
//! the walls. Windowing, input decoding and drawing are left to the caller.
//!
//! # Features
//!
//! - **Verlet integration**: velocity implied by position history, no `dt`
//! - **Constraint relaxation**: `stiffness` Gauss-Seidel passes per frame
//! - **Walls**: rectangular bounds with damped reflection
//! - **Stable handles**: generation-checked arenas, cascade deletes
//! - **Editing**: hit tests, cut gestures, cloth grids, an input-driven [`Sandbox`]
//! - **Observable**: monitor steps via the `StepObserver` trait or `tracing`
//! - **`no_std` compatible**: works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod arena;
pub mod particle;
pub mod constraint;
pub mod scene;
pub mod bounds;
pub mod solver;
pub mod query;
pub mod grid;
pub mod sandbox;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use arena::{Arena, Index};
pub use particle::Particle;
pub use constraint::{DistanceConstraint, Relaxation};
pub use scene::{Scene, ParticleHandle, ConstraintHandle};
pub use bounds::{Bounds, Edge};
pub use solver::{step, integrate, relax, resolve_bounds, sweep_fallen};
pub use query::{HitMode, segments_cross};
pub use grid::{build_grid, GridConfig};
pub use sandbox::{Sandbox, Command, Mode, Press, Release, Status};
pub use config::SimConfig;
pub use observer::{StepObserver, NoOpStepObserver, TracingStepObserver};
pub use error::PhysicsError;
