//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components,
//! systems, and resources. One file per concern; the tick order is fixed by
//! the schedule built in [`crate::game`].

pub mod audio;
pub mod components;
pub mod enemy;
pub mod platform;
pub mod player;
pub mod render;
pub mod score;
pub mod spawn;
pub mod stage;
pub mod terminal;
