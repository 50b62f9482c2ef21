//! Types and client for the slice of Github's v3 API that collaborator
//! management needs
//! https://developer.github.com/v3/

pub mod client;
mod repo;
mod user;

pub use client::{Client, Error, Result};
pub use repo::*;
pub use user::*;
