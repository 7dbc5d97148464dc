//! Core business logic for Cambio.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, the rate-resolution fallback chain, and
//! the conversion arithmetic live here.
//!
//! # Modules
//!
//! - `currency` - Currency domain types, rate resolution, and conversion

pub mod currency;
