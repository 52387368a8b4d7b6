// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod time;
pub mod user_repo;

pub use security::{
    DummyTokenVerifier, EXPIRED_TOKEN, GHOST_TOKEN, TEST_TOKEN, alice_id, ghost_id,
};
pub use time::{FixedClock, fixed_now};
pub use user_repo::{FailingUserRepo, InMemoryUserRepo};
