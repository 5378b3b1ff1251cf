pub mod color;
pub mod config;
pub mod frame;
pub mod integrator;
pub mod params;
pub mod simulation;
pub mod trail;
pub mod trajectory;

pub mod cli;
