//! Unit tests for the SMS module

mod adapter_tests;
mod create_service_tests;
