use url::Url;

/// True when `input` parses as an absolute URL. No network access.
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}
