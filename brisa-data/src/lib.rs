//! Brisa Data - smart-cart data access layer
//!
//! # Architecture overview
//!
//! This crate is the storage boundary of the Brisa smart-cart application.
//! It runs in the same process as the front-end and exposes typed access to
//! the document store:
//!
//! - **Database** (`db`): SurrealDB connection lifecycle, entity models and
//!   one repository per collection
//! - **Live feeds** (`live`): push-based change subscriptions with explicit
//!   cancellation handles
//! - **Auth** (`auth`): allow-list user resolution (CPF)
//!
//! # Module structure
//!
//! ```text
//! brisa-data/src/
//! ├── core/          # configuration
//! ├── db/            # connection, models, repositories
//! ├── live/          # change subscriptions
//! ├── auth/          # allow-list users
//! ├── seed.rs        # demo data fixture (used by the brisa-seed tool)
//! └── utils/         # logging, time helpers
//! ```

pub mod auth;
pub mod core;
pub mod db;
pub mod live;
pub mod seed;
pub mod utils;

// Re-export public types
pub use auth::{User, lookup_by_cpf};
pub use core::Config;
pub use db::DbService;
pub use db::repository::{
    CartRepository, HotspotRepository, OfferRepository, RepoError, RepoResult, Repository,
    SupermarketRepository,
};
pub use live::Subscription;

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
