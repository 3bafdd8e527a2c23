/// All database primary keys are PostgreSQL BIGSERIAL, except cars
/// (keyed by plate number) and violations (keyed by a sequential code).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
