use crate::config::Settings;

/// True for blank lines and lines starting with `#`, `//` or `;`.
fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// Split `key = value` on the first `=`, trimming both sides.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    line.trim()
        .split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
}

/// What: Remove a trailing `#` or `//` comment from a value.
///
/// Inputs:
/// - `s`: Raw value text.
///
/// Output:
/// - Comment-free, trimmed value.
///
/// Details:
/// - `//` inside a URL scheme (`http://`) is kept; only `//` preceded by
///   whitespace starts a comment.
fn strip_inline_comment(s: &str) -> &str {
    let mut end = s.len();
    if let Some(i) = s.find(" //") {
        end = end.min(i);
    }
    if let Some(i) = s.find('#') {
        end = end.min(i);
    }
    s[..end].trim()
}

/// Interpret common truthy spellings.
fn parse_bool(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Apply `settings.conf` content onto `settings`.
///
/// Inputs:
/// - `content`: File content.
/// - `settings`: Settings to update in place.
///
/// Output:
/// - None (modifies `settings`).
///
/// Details:
/// - Keys are lowercased and `.`, `-` and spaces become `_`.
/// - Unknown keys and unparsable values are ignored so a bad line never
///   discards the defaults.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, raw_val)) = split_key_value(line) else {
            continue;
        };
        let key = raw_key.to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val);
        match key.as_str() {
            "api_base_url" | "base_url" | "api_url" => {
                if !val.is_empty() {
                    settings.api_base_url = val.trim_end_matches('/').to_string();
                }
            }
            "connect_timeout_secs" | "connect_timeout" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.connect_timeout_secs = v;
                }
            }
            "request_timeout_secs" | "request_timeout" | "timeout" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.request_timeout_secs = v;
                }
            }
            "log_level" => {
                if !val.is_empty() {
                    settings.log_level = val.to_ascii_lowercase();
                }
            }
            "log_to_file" => {
                if let Some(b) = parse_bool(val) {
                    settings.log_to_file = b;
                }
            }
            _ => {}
        }
    }
}
