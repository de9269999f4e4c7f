#![cfg_attr(test, allow(dead_code))]

pub mod auth;
pub mod clients;
pub mod config;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod relay;
pub mod routes;
pub mod server;
pub mod state;
