pub fn default_model() -> String {
    // Structured-output capable model
    "gemini-2.5-flash".to_string()
}

pub fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

pub fn default_timeout_sec() -> u64 {
    120
}

pub fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}
