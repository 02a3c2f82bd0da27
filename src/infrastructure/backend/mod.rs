//! Tracker backend REST client.

mod client;
mod dto;

pub use client::BackendClient;
