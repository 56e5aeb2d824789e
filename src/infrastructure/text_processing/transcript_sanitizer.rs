use regex::Regex;
use std::sync::LazyLock;

static MARKER_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[-–—_=*#{}<>\[\]"'`|]"#).unwrap());

static OVERRIDE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\an\d+\\?").unwrap());

static TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2,}[:.]\d{2,}[:.]\d{2,}").unwrap());

static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\S\n]{2,}").unwrap());

static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Idempotent; applying it to its own output changes nothing.
pub fn sanitize_transcript(raw: &str) -> String {
    let stripped = MARKER_CHARS.replace_all(raw, "");

    // Removing one override tag can splice the surrounding text into a new
    // tag, so strip until none remain.
    let mut text = OVERRIDE_TAG.replace_all(&stripped, "").into_owned();
    while OVERRIDE_TAG.is_match(&text) {
        text = OVERRIDE_TAG.replace_all(&text, "").into_owned();
    }

    let text = TIMESTAMP.replace_all(&text, "");
    let text = SPACE_RUN.replace_all(&text, " ");
    let text = NEWLINE_RUN.replace_all(&text, "\n");

    text.trim().to_string()
}
