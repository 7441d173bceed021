#![deny(warnings)]

pub mod config;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod score;
pub mod sentiment;
pub mod text;
pub mod transcript;
