pub mod app;
pub mod common;
pub mod components;
pub mod data;
pub mod i18n;
pub mod middlewares;
pub mod routes;
pub mod views;
