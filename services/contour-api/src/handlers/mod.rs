//! HTTP request handlers for the contour API.

pub mod contours;
pub mod health;
