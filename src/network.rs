//! Network URL constants for the FocusFlow SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.focusflow.app/api";

/// Default base URL for the conversational runtime (chat widget backend).
pub const DEFAULT_CHAT_RUNTIME_URL: &str = "https://general-runtime.voiceflow.com";
