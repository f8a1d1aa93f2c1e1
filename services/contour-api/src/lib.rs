//! Contour API Service Library
//!
//! HTTP host for the contour-generation engine: request validation, grid
//! sampling against the point-forecast collaborator, and GeoJSON line
//! feature responses.

pub mod config;
pub mod forecast;
pub mod handlers;
pub mod sampler;
pub mod state;
