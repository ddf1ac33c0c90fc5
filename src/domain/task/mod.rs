//! Task domain — CRUD over `/tasks`.

pub mod client;
pub mod wire;

pub use wire::{CreateTaskRequest, Task, TaskStatus, UpdateTaskRequest};
