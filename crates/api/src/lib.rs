//! `catalog-api` — HTTP surface for the catalog service.

pub mod app;
pub mod config;
