//! Orrery Core - Camera navigation and motion blending
//!
//! This crate owns the camera rig and decides, every frame, who moves it:
//! - Fly-to transitions toward a selected object (eased, tracking moving anchors)
//! - Keyboard free flight, constrained to a spherical world boundary
//! - The navigator that arbitrates between the two and gates manual orbiting
//!
//! Nothing in here knows about a renderer. Positions of moving objects are
//! looked up through the [`SceneQuery`] capability.

pub mod anchor;
pub mod boundary;
pub mod config;
pub mod easing;
pub mod flight;
pub mod input;
pub mod navigator;
pub mod pose;
pub mod target;
pub mod transition;

pub use anchor::{resolve, NoScene, SceneQuery};
pub use boundary::BoundarySpec;
pub use config::{ConfigError, FlightConfig, NavigationConfig, OrbitConfig, TransitionConfig};
pub use flight::{FlightSettings, FreeFlight};
pub use input::{FlightInput, KeyBindings, MovementState, NavAction};
pub use navigator::{NavEvent, NavState, Navigator};
pub use pose::CameraPose;
pub use target::{AnchorKind, TargetDescriptor, TargetId};
pub use transition::{Transition, TransitionFrame, TransitionSettings};

pub use bevy_math::Vec3;
