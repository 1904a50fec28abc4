//! Request and response DTOs

pub mod posts;
