//! Core library modules for the ponto application.
//!
//! ## Features
//!
//! - **Reporting Core**: timestamp normalization, day-by-day accumulation and
//!   report assembly (`timestamp`, `accumulator`, `day`, `report`)
//! - **Clock Registration**: rules for recording new events (`register`)
//! - **Core Infrastructure**: configuration, data storage, errors, messaging
//! - **User Interface**: console rendering and formatting
//!
//! ## Usage
//!
//! ```rust
//! use ponto::libs::formatter::format_duration;
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&Duration::minutes(90)), "1h 30min");
//! ```

pub mod accumulator;
pub mod config;
pub mod data_storage;
pub mod day;
pub mod error;
pub mod event;
pub mod formatter;
pub mod messages;
pub mod register;
pub mod report;
pub mod timestamp;
pub mod view;
