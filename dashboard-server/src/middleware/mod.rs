//! Request middleware

pub mod session;
