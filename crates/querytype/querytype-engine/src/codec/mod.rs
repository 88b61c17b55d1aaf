//! JSON codec for the stdin request and stdout response documents.

pub mod decode;
pub mod encode;
pub mod python_formatter;

pub use decode::{decode_request, request_from_value};
pub use encode::encode_response;
pub use python_formatter::PythonFormatter;
