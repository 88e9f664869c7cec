//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod profile;
pub mod report;

// Re-export repositories
pub use profile::ProfileRepository;
pub use report::ReportRepository;
