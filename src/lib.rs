pub mod animation;
pub mod config;
pub mod controllers;
pub mod draw;
pub mod effects;
pub mod models;
pub mod utilities;
pub mod views;
