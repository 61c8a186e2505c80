//! Side-scrolling platformer engine.
//!
//! The simulation is a pure frame step ([`compute::tick`]) over an explicit
//! [`entities::GameState`].  Rendering, input, persistence and sound are
//! collaborators at the edges: the core emits a [`render::Scene`] and
//! [`events::FrameEvent`]s and reads an [`input::InputSnapshot`].

pub mod camera;
pub mod compute;
pub mod config;
pub mod control;
pub mod enemy;
pub mod entities;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod level;
pub mod particles;
pub mod physics;
pub mod platform;
pub mod player;
pub mod powers;
pub mod render;
pub mod save;
