pub mod config;
pub mod constraint;
mod constraint_group;
pub mod controller_message;
pub mod error;
pub mod physical_model;
pub mod point;
mod point_group;
pub mod posbox;
pub mod selection;
pub mod world;

pub type V2 = nalgebra::Vector2<f32>;
