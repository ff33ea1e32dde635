pub mod codes;
pub mod error;
pub mod roles;
pub mod types;
