//! EduEasy - student loan and budget tracking
//!
//! This library provides the core functionality for the EduEasy command-line
//! application: a loan collection with debt analytics, a budget planner with
//! savings goals, financial literacy quizzes with badges, and an AI advisor
//! for portfolio reviews and support chat.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (loans, expenses, savings goals, quizzes, badges, money)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic, including the amortization core
//! - `reports`: Dashboard, daily, usage and budget reports
//! - `advisor`: Text generation seam, Gemini client and support chat
//! - `audit`: Activity history
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use edueasy::config::{EduEasyPaths, Settings};
//!
//! let paths = EduEasyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod advisor;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::EduEasyError;
