pub mod app;
pub mod catalog;
pub mod community;
pub mod config;
pub mod data;
pub mod effects;
pub mod error;
pub mod model;
pub mod progress;
pub mod quiz;
pub mod report;
pub mod sequencer;
pub mod store;
pub mod ui;
pub mod view_models;

pub use app::JourneyApp;
