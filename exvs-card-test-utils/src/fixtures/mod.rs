//! Test fixture modules for database records.
//!
//! - `card` - card profiles, their JSON documents, tag teams and online pairs

pub mod card;
