//! PostgreSQL persistence adapters built on Diesel.

pub mod pool;
pub mod schema;

mod diesel_user_repository;
mod models;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
