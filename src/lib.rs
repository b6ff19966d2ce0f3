// src/lib.rs

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use utils::html::{Sanitizer, strip_all};
