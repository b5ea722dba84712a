pub mod common;
pub mod manifest;

pub use crate::domain::DomainError;
pub use common::RelativePath;
pub use manifest::{ContentEntry, Manifest};
