//! # API crate: HTTP access to the user registry
//!
//! The registry backend is a separate service. This crate is the browser's
//! side of that contract:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`HttpApi`], the `reqwest` implementation of [`registration::UserApi`] (multipart create/update, JSON fetch) |
//! | [`config`] | [`ClientConfig`]: API origin and the base URL uploaded files are served from |
//!
//! Endpoints used:
//!
//! - `POST /api/users` (multipart) → `{"userId": n}`
//! - `GET /api/users/{id}` → user record with nested address
//! - `PUT /api/users/{id}` (multipart, uploads optional)

pub mod client;
pub mod config;

pub use client::HttpApi;
pub use config::ClientConfig;
pub use registration::{FetchError, SubmitError, UserApi, UserId, UserRecord};
