//! Diesel schema for account persistence.

diesel::table! {
    /// Login-capable accounts.
    accounts (id) {
        /// Account identifier.
        id -> Uuid,
        /// Unique login name.
        #[max_length = 150]
        username -> Varchar,
        /// Optional contact address.
        #[max_length = 254]
        email -> Nullable<Varchar>,
        /// Given name.
        #[max_length = 150]
        first_name -> Varchar,
        /// Family name.
        #[max_length = 150]
        last_name -> Varchar,
        /// Whether the account may act.
        is_active -> Bool,
        /// Whether the account holds administrator privileges.
        is_administrator -> Bool,
        /// Opaque credential digest.
        password_hash -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
