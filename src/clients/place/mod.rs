//! Authenticated r/place client.
//!
//! This module provides [`PlaceClient`], which manages the access token and
//! places pixels through the `setPixel` GraphQL mutation.
//!
//! # Overview
//!
//! - [`PlaceClient`]: Token-managing client for authenticated requests
//! - [`SetPixelMutation`]: The request body of a pixel placement
//! - [`PlaceError`]: Error type for client operations

mod client;
mod errors;
pub mod mutation;

pub use client::PlaceClient;
pub use errors::PlaceError;
pub use mutation::{
    SetPixelMutation, CANVAS_INDEX, SET_PIXEL_ACTION, SET_PIXEL_OPERATION, SET_PIXEL_QUERY,
};
