//! hexgrid - hex grid addressing, cursor, selection and edit engine
//!
//! This crate provides the core of a hex editor widget (the [`grid`] module)
//! wrapped in the Elm Architecture: input becomes a [`Msg`], [`update::update`]
//! applies it to a [`HexModel`], and side effects come back as a [`Cmd`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dump;
pub mod export;
pub mod grid;
pub mod input;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::HexConfig;
pub use messages::Msg;
pub use model::HexModel;
