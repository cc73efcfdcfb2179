//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Homeowner lead profiles, one row per submission.
    public_user_info (id) {
        /// Primary key shared with the paired `user_location` row.
        id -> Uuid,
        /// Homeowner's name.
        name -> Varchar,
        /// Contact email, lower-cased.
        email -> Varchar,
        /// E.164 phone, empty string when not provided.
        phone -> Varchar,
        /// Free-text project description.
        project -> Text,
        /// Budget in whole dollars; NULL means no budget was provided.
        budget -> Nullable<Int8>,
        /// Ready-to-hire flag.
        ready_to_hire -> Bool,
        /// Urgency flag.
        urgent -> Bool,
        /// Consent flag, true for every stored lead.
        consent -> Bool,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Resolved locations, keyed by the same id as `public_user_info`.
    /// The link is application-level; there is no foreign key.
    user_location (id) {
        /// Primary key shared with the paired `public_user_info` row.
        id -> Uuid,
        /// Denormalized copy of the homeowner's name.
        name -> Varchar,
        /// Always false for records created through the homeowner form.
        contractor -> Bool,
        /// Latitude in WGS84.
        latitude -> Float8,
        /// Longitude in WGS84.
        longitude -> Float8,
        /// Fixed at zero; the geocoder does not resolve elevation.
        altitude -> Float8,
        /// State or region short code, possibly empty.
        state -> Varchar,
        /// Town or locality name, possibly empty.
        town -> Varchar,
        /// Five-digit ZIP the lead was filed under.
        zip -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
