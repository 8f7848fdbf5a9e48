/// Parse a module identifier passed on the command line.
///
/// Identifiers are matched verbatim against import specifiers, so they
/// cannot be empty or contain whitespace.
///
/// # Errors
///
/// Returns an error message if the identifier is invalid.
pub fn parse_module_id(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Module identifier cannot be empty".to_string());
    }

    if s.chars().any(char::is_whitespace) {
        return Err(format!(
            "Module identifier cannot contain whitespace: '{}'",
            s
        ));
    }

    Ok(s.to_string())
}
