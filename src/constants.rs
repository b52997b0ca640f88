/// Prefix carried by every log line this service emits.
pub const API_NAME: &str = "[cars-api-rust]";
