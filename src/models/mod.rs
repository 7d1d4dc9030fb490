// src/models/mod.rs

pub mod category;
pub mod flex;
pub mod question;
pub mod quiz;
