pub mod boundary;
pub mod bump;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod history;
pub mod store;
pub mod tag;
pub mod ui;
pub mod validators;

pub use bump::{bump, resolve, update_manifests, BumpReport, BumpResult};
pub use error::{GitBumpError, Result};
pub use history::{list, LogQuery};
pub use tag::{compose, compose_with};
