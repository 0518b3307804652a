//! # Classroom Bots
//!
//! Three small Telegram bots sharing one library.
//!
//! ## Features
//! - Attendance bot: students register, a teacher opens a session for a class,
//!   every student is prompted and check-ins are appended to one live message
//! - Request/response bot: echo, quadratic solver and random cat pictures
//! - Alert bot: polls a page and messages one chat whenever a marker shows up
//! - All state is in memory and lost on restart

/// Bot commands, handlers and the outbound messaging seam
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Error type shared by handlers and the notifier
pub mod error;
/// Background services: page-change notifier and health endpoint
pub mod services;
/// Roster, identity cache and attendance sessions
pub mod store;
/// Feedback formatting, logging helpers and input validation
pub mod utils;
