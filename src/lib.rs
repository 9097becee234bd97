#[macro_use]
extern crate tracing;

pub mod api;
pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod publication;
pub mod routes;
pub mod startup;
pub mod templates;
pub mod views;

#[cfg(test)]
mod test_support;
