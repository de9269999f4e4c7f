#![cfg_attr(test, allow(dead_code))]

pub mod config;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod ranking;
pub mod routes;
pub mod state;
pub mod store;
