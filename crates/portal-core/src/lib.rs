//! # portal-core
//!
//! Core record types, feed items, and parsing helpers for the intranet portal.
//!
//! This crate provides the types shared across all portal crates:
//! - Record structs for every table (posts, circulars, events, holidays, ...)
//! - Kind and tab enums with their SQL string forms
//! - The [`feed::FeedItem`] sum type and the feed filter context
//! - Submission request structs and slug derivation
//! - Holiday CSV parsing
//! - Search and archive result shapes

pub mod entities;
pub mod enums;
pub mod errors;
pub mod feed;
pub mod holiday_csv;
pub mod requests;
pub mod responses;
