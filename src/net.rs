//! Transport-facing types: the raw response record handed to the DSL and
//! the header parsing it relies on.
mod content_type;
mod response;

pub use content_type::MediaType;
pub use response::{BodyReader, RawResponse};
