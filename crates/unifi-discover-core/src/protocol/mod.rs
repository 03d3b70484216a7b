//! Discovery wire protocol: probe construction and response decoding.

pub mod field;
pub mod probe;
pub mod response;

pub use field::FieldTag;
pub use probe::{build_probe, DISCOVERY_HEADER, DISCOVERY_PORT};
pub use response::decode;
