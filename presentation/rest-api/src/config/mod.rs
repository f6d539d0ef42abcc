pub mod app_config;
pub mod cors_config;
pub mod serpapi_config;
pub mod server_config;
pub mod veryfi_config;

/// Reads one variable, treating blank values as unset.
pub fn non_blank(lookup: &dyn Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|value| !value.trim().is_empty())
}
