//! Parcel service library following hexagonal architecture pattern
//!
//! This library provides the read side of the parcel store (filtered listing, single record
//! lookup and GeoJSON projection) and can be composed into the http server or the seed loader.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod sample;
