#![warn(clippy::complexity)]
#![warn(clippy::correctness)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::suspicious)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]

pub mod common;
pub mod err;
pub mod geom;
pub mod meta;

pub use err::UsageErr;
pub use meta::{GridDescriptor, GridMetaInformation};
