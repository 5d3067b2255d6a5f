//! Animated particle-network backdrop.
//!
//! Renders a field of drifting particles on a full-viewport canvas with:
//! - Soft bounces off the viewport edges
//! - A swirl-and-nudge response to the mouse or first touch point
//! - Links between nearby particles that brighten as they close in
//! - Beams from the pointer to the particles around it
//!
//! The simulation and renderer are plain Rust over the [`Surface`] trait;
//! [`ParticleBackdrop`] plugs them into a browser canvas.
//!
//! # Example
//!
//! ```ignore
//! use particle_backdrop::{BackdropConfig, ParticleBackdrop};
//!
//! let config = BackdropConfig { max_particles: 80, ..Default::default() };
//! view! { <ParticleBackdrop config=config /> }
//! ```

mod component;
mod config;
pub mod geometry;
mod particles;
mod physics;
mod pointer;
pub mod render;
mod scheduler;
mod state;
mod surface;
pub mod theme;
mod viewport;

pub use component::ParticleBackdrop;
pub use config::{BackdropConfig, MAX_PARTICLE_CAP, MAX_SPEED_CAP};
pub use particles::{Particle, ParticleStore};
pub use physics::step;
pub use pointer::{PointerInput, PointerState};
pub use scheduler::FrameLoop;
pub use state::BackdropState;
pub use surface::{Glow, Surface};
pub use theme::Theme;
pub use viewport::CanvasDimensions;
