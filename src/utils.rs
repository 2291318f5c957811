use chrono::{Local, NaiveDateTime};

/// Format shared by the report header and page metadata
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time as a report timestamp
pub fn now_timestamp() -> String {
    format_timestamp(Local::now().naive_local())
}

/// Format a timestamp the way reports display it
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Escape text for embedding in report markup
pub fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Whether a filename ends in `.{extension}`
pub fn has_extension(name: &str, extension: &str) -> bool {
    name.strip_suffix(extension)
        .is_some_and(|stem| stem.ends_with('.'))
}
