pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod i18n;
pub mod meta;
pub mod models;
pub mod pages;
pub mod render;
pub mod routing;
pub mod search;
pub mod server;
pub mod session;
pub mod slug;
