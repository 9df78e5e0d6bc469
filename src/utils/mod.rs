//! Utility modules for common functionality
//!
//! This module provides various utility functions and types used throughout the application.

pub mod format_utils;
pub mod logger;
pub mod progress;
