//! HTTP pipeline layer — `FocusFlowHttp` plus the rate gate it runs behind.

pub mod client;
pub mod rate;

pub use client::FocusFlowHttp;
pub use rate::{RateGate, RateLimit};
