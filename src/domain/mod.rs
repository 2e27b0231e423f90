// src/domain/mod.rs
pub mod errors;
pub mod page;
pub mod user;
