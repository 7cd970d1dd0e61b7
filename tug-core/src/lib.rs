//! Tug Core
//!
//! Core types for the tug data-integration client.
//!
//! This crate contains:
//! - Domain types: credentials, sessions, task codes, job runs, activity entries
//! - DTOs: wire shapes for the remote JSON API

pub mod domain;
pub mod dto;
