//! Request and Response models for the commitscrape API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP query parameters and response bodies.

pub mod requests;
pub mod responses;

pub use requests::CalendarParams;
pub use responses::{CalendarResponse, ErrorResponse, HealthResponse};
