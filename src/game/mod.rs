//! Game Module
//!
//! Everything that simulates and draws the tile world.
//!
//! Key concepts:
//! - Entity: actor data plus a generational `EntityId` handle
//! - EntityPool: fixed 1024-slot arena, first-fit allocation
//! - World: the context passed into update and draw (no globals)
//! - FrameState: scratch data rebuilt every frame (current selection)
//!
//! Frame flow: `update(&mut world, &input)` produces a `FrameState`,
//! which `draw_world` consumes.

// Pool and sprite helpers beyond what the frame loop calls (despawn, CardFireball
// art, world_to_screen) stay public for spawning code and tests.
#![allow(dead_code)]

pub mod animate;
pub mod camera;
pub mod entity;
pub mod frame;
pub mod pool;
pub mod renderer;
pub mod sprite;
pub mod tile;
pub mod update;
pub mod world;

// Re-export main types
pub use camera::CameraRig;
pub use frame::FrameInput;
pub use renderer::draw_world;
pub use sprite::SpriteTable;
pub use update::update;
pub use world::World;
