pub mod components;
pub mod config;
pub mod engine;
pub mod field;
pub mod fsm;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use fsm::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let paddle = Paddle::new(side, config.paddle_speed(side), config);
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
