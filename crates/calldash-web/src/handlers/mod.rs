//! HTTP handlers for the dashboard

pub mod actions;
pub mod api;
pub mod pages;
