// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod page_store;
pub mod security;
pub mod time;
pub mod user_repo;

pub use page_store::InMemoryPageStore;
pub use security::{
    ADMIN_TOKEN, DummyPasswordHasher, DummyTokenManager, TEST_TOKEN, VIEWER_TOKEN, admin, editor,
    viewer,
};
pub use time::{DummyClock, SteppingClock, fixed_now};
pub use user_repo::{ADMIN_ID, EDITOR_ID, InMemoryUserRepo, VIEWER_ID};
