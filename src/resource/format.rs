//! Resource document encoding
//!
//! Resources are JSON documents indented with tabs and terminated by a newline. Keys keep the
//! names consumers already know: `Version`, `Set`, `Delim`, `Engine`, `Name`, `Subs`,
//! `DataType`, `Index`. Empty and default values are left out.

use super::Resource;
use crate::error::ResourceError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Encode a resource. No validation happens here.
pub fn to_string(resource: &Resource) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    resource.serialize(&mut serializer)?;
    buf.push(b'\n');
    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Decode a resource and check it against the current schema
pub fn from_str(source: &str) -> Result<Resource, ResourceError> {
    let resource: Resource = serde_json::from_str(source)?;
    resource.validate()?;
    Ok(resource)
}
