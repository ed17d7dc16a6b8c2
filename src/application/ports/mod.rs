// src/application/ports/mod.rs
pub mod email;
pub mod security;
pub mod time;
pub mod util;
