//! Core types and trait definitions for the Tassel guest directory.
//!
//! Deliberately free of HTTP and database dependencies; the store and
//! server crates both build on this one.

pub mod error;
pub mod guest;
pub mod info;
pub mod slug;
pub mod store;

pub use error::{Error, Result};
