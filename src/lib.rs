//! # namedfields
//!
//! Builds named-fields resources from Bro/Zeek scripts.
//!
//! A Bro package declares the layout of its log in a record type:
//!
//!     module Conn;
//!
//!     export {
//!         type Info: record {
//!             ts:    time    &log;
//!             id:    conn_id &log;
//!             proto: transport_proto &log;
//!         };
//!     }
//!
//! [extraction] turns such a script into a [`Group`] mapping each field name to the column it
//! occupies in the log (`ts` → 0, `src` → 1, ... `proto` → 5; the connection id spans four
//! columns). [resource] collects the groups of many scripts into a versioned [`Resource`] that
//! field-extraction engines load. [scan] ties both together over a directory tree.
//!
//! The pipeline is sequential: one document is extracted, its group is added, then the next
//! document is read. The resource is written once, at the end.

pub mod error;
pub mod extraction;
pub mod lexing;
pub mod resource;
pub mod scan;
pub mod token;

pub use error::{ExtractError, Missing, ResourceError, ScanError, ValidationError};
pub use extraction::{extract, ExtractOptions, Extractor};
pub use resource::{Engine, Field, Group, Resource, ResourceBuilder, SCHEMA_VERSION};
pub use scan::{collect, ScanOptions, Summary};
