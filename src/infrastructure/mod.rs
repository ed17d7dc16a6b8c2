pub mod database;
pub mod email;
pub mod repositories;
pub mod security;
pub mod time;
pub mod util;
