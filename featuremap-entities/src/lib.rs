#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # featuremap-entities
//!
//! Reusable, agnostic domain entities for featuremap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod feature;
pub mod geo;
pub mod id;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
