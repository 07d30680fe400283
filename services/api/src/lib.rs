//! Bookbay API service
//!
//! A small marketplace backend: reader, author and admin identities, a
//! book catalog with uploaded cover images, a demand approve/reject
//! workflow and append-only purchase records.

pub mod auth;
pub mod config;
pub mod error;
pub mod images;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
