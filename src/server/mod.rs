//! Connection acceptance and application-level responders.

pub mod listener;
pub mod static_files;

pub use static_files::StaticFiles;
