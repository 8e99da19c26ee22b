//! tutorhub: a small user-roster REST API backed by Postgres.
//!
//! The served surface is two endpoints under `/api/v1`: creating a user and
//! fetching one by id. Everything else here is wiring: config from env,
//! a shared [`state::AppState`] holding the connection pool, and a seed
//! binary (`src/bin/seed.rs`) that resets the table with demo data.

pub mod app;
pub mod config;
pub mod state;
pub mod users;
