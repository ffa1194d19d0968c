/// Project and task ids are opaque strings (UUID v4 when generated here).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
