// tests/support/mocks/mod.rs
//! In-memory stand-ins for every port the services depend on.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod email;
pub mod repos;
pub mod security;
pub mod time;

pub use email::RecordingEmailDispatcher;
pub use repos::{
    InMemoryCategories, InMemoryEnquiries, InMemoryProducts, InMemoryTestimonials, InMemoryUsers,
};
pub use security::{
    ADMIN_TOKEN, DummyPasswordHasher, DummyTokenManager, USER_TOKEN, admin_user, plain_user,
};
pub use time::{FixedClock, SequenceReferences, fixed_now};
