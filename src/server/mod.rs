//! Server application core modules.
//!
//! This module contains the HTTP routing, request handling, business rules and database access
//! for the holocron API. Requests flow from a controller through a service, which validates
//! input and owns transactions, down to the repositories in `data`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
