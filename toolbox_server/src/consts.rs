pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_BODY_SIZE_MB: usize = 16;

/// Longest text accepted by the token counter, in UTF-16 code units.
pub const MAX_TOKEN_TEXT_LENGTH: usize = 1_000_000;

pub const ANTHROPIC_API_KEY_VARIABLES: &[&str] = &["ANTHROPIC_API_KEY"];
pub const GOOGLE_API_KEY_VARIABLES: &[&str] = &["GOOGLE_API_KEY", "GEMINI_API_KEY"];
