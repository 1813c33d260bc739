//! Shared utility functions.

use chrono::Utc;

/// Current Unix timestamp in whole seconds.
pub fn current_timestamp() -> u64 {
    // Clamped so a clock set before 1970 yields 0 rather than wrapping.
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}

/// Truncates a string to a maximum number of characters with ellipsis.
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Masks a secret for display, keeping only its last four characters.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{tail}", "*".repeat(count - 4))
}
