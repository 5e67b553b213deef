//! Structural checks on payloads received from the scoring service

pub mod response_validator;

pub use response_validator::ResponseValidatorImpl;
