//! API layer - REST and in-process entry points

pub mod native;
pub mod rest;
