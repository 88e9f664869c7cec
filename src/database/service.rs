//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{DatabasePool, ProfileRepository, ReportRepository};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub profiles: ProfileRepository,
    pub reports: ReportRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            profiles: ProfileRepository::new(pool.clone()),
            reports: ReportRepository::new(pool),
        }
    }
}
