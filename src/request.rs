//! The request payload builders

pub mod message;
pub mod notification;
pub mod payload;
