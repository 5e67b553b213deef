//! Error classification and distribution aggregation - pure business logic only
//!
//! Nothing in here performs I/O or touches session state.

pub mod distribution;
pub mod error_classifier;

pub use distribution::aggregate;
pub use error_classifier::{
    ErrorClassifier, ErrorClassifierImpl, CONNECTIVITY_MESSAGE, EMPTY_TEXT_MESSAGE,
    IN_FLIGHT_MESSAGE, PROTOCOL_MESSAGE,
};
