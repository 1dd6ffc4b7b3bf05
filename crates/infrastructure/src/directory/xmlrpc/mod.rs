//! XML-RPC node directory (PlanetLab Central `GetNodes` style).
//!
//! The call is a single HTTP POST:
//! ```text
//! GetNodes(auth: struct, filter: struct, return_fields: array<string>)
//!   -> array<struct { hostname: string, ... }>
//! ```

pub mod client;
pub mod codec;

pub use client::{nodes_from_value, XmlRpcNodeDirectory};
pub use codec::{decode_response, encode_call, XmlRpcError, XmlRpcValue};
