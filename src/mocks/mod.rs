//! Mock implementations for testing.

mod transport;

pub use transport::MockHttpTransport;
