//! Core library for crewgate: configuration, logging, auth client, assets.

pub mod assets;
pub mod auth;
pub mod config;
pub mod logging;
