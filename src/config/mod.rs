//! Configuration module for EduEasy
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::EduEasyPaths;
pub use settings::{AdvisorSettings, Settings};
