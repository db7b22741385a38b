//! EcoImpact - Carbon Intelligence Companion Service
//!
//! This crate backs the EcoImpact experience: a multi-step transport
//! emission calculator, insight pages fed by a peripheral backend with
//! fixture fallback, a scripted sustainability assistant, an NGO
//! directory, and an append-only result log.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
