pub mod scene_builder;

pub use scene_builder::*;
