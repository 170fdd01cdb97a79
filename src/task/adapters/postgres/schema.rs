//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with their workflow flags.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task name.
        #[max_length = 255]
        title -> Varchar,
        /// Issuing unit.
        #[max_length = 100]
        sending_unit -> Varchar,
        /// Assigned account; deleting the account deletes the task.
        assignee_id -> Uuid,
        /// Deadline.
        due_at -> Timestamptz,
        /// Received flag.
        received -> Bool,
        /// Completed flag.
        completed -> Bool,
        /// When the task was received.
        received_at -> Nullable<Timestamptz>,
        /// When the task was completed.
        completed_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
