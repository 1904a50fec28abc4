//! Request handlers

pub mod posts;
