//! Password generation.

pub mod charset;
mod generate;

pub use generate::{Password, Request, generate, generate_batch};
