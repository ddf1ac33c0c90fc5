//! Authentication — login/register/logout and the session token lifecycle.
//!
//! ## Security Model
//!
//! - Tokens live only in the injected [`SessionStore`](crate::session::SessionStore);
//!   the SDK never writes them anywhere else.
//! - Login is the single unencrypted, unauthenticated call. Everything else
//!   runs the full pipeline.
//! - Refresh happens inside the pipeline on 401; application code never
//!   calls it directly.
//! - Logout clears the local session even when the server call fails.

pub mod client;
pub mod wire;

pub use wire::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, RegisterRequest, UserSummary,
};
