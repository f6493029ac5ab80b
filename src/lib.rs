//! Shift Pay Engine
//!
//! This crate calculates the pay of shift-work scenarios on a three-shift
//! rotation (morning, afternoon, night) with night and rest-day bonuses, and
//! ranks alternative scenarios by total pay.

#![warn(missing_docs)]

pub mod api;
pub mod cache;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
