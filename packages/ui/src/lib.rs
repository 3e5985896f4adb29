//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const VIEWS_CSS: Asset = asset!("/assets/views.css");

mod api_context;
pub use api_context::{use_api, ApiProvider};

mod notice;
pub use notice::notify;

mod fields;
pub use fields::{FileField, TextField};

mod user_form;
pub use user_form::{submit_form, UserForm};

pub mod views;
