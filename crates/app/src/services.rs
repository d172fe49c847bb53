//! Application services.

pub mod home_service;
