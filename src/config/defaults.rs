use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_timeout_sec() -> u64 {
    180
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from("itineraries")
}

pub fn default_max_trip_styles() -> usize {
    3
}

pub fn default_claude_binary() -> PathBuf {
    // Check common install location first
    if let Some(home) = std::env::var_os("HOME") {
        let local_path = PathBuf::from(home).join(".claude/local/claude");
        if local_path.exists() {
            return local_path;
        }
    }
    // Fall back to PATH lookup
    PathBuf::from("claude")
}

pub fn default_claude_model() -> String {
    "sonnet".to_string()
}

pub fn default_codex_binary() -> PathBuf {
    PathBuf::from("codex")
}

pub fn default_codex_model() -> String {
    "gpt-4.1".to_string()
}

pub fn default_min_query_len() -> usize {
    2
}

pub fn default_max_results() -> usize {
    8
}

pub fn default_debounce_ms() -> u64 {
    300
}
