//! User Service Library
//!
//! Looks up and persists users through the [`UserRepository`] capability,
//! never through a concrete storage type. Any implementation of the trait
//! can be injected into [`UserManager`].

pub mod repository;
pub mod service;

pub use repository::{InMemoryUserStore, UserRepository};
pub use service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
