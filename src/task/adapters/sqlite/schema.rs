//! Diesel schema for task persistence.

diesel::table! {
    /// Scheduled task rows.
    scheduler (id) {
        /// Storage-assigned task identifier.
        id -> BigInt,
        /// Due date as `YYYYMMDD`.
        date -> Text,
        /// Task title.
        title -> Text,
        /// Free-text comment. NULL in databases created by older schemas.
        comment -> Nullable<Text>,
        /// Recurrence rule, empty or NULL for one-off tasks.
        repeat -> Nullable<Text>,
    }
}
