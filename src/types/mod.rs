//! Shared response types.

mod links;
mod response;

pub use links::{Link, Links, Resource};
pub use response::{Created, NoContent};
