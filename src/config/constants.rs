//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (file-backed SQLite, created on first use)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://restful_web_service.db?mode=rwc";

/// Default size of the database connection pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Validation
// =============================================================================

/// Minimum user name length, in characters
pub const MIN_NAME_LENGTH: u64 = 2;

// =============================================================================
// Admin projections
// =============================================================================

/// Membership grade reported by the v2 admin user view
pub const ADMIN_USER_GRADE: &str = "VIP";
