//! StayEase: a server-rendered listings site.
//!
//! Visitors browse, create, edit and delete property listings and attach
//! reviews to them. Handlers live in [`api`], the store in [`db`], the HTML
//! views in [`components`].

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod utils;
pub mod validation;
