//! Cross-layer integration tests
//!
//! Full entity lifecycle scenarios through the controller façade.

mod lifecycle;
