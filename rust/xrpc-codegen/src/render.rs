//! Naming rules shared by the Java target and the plugin front end.

/// Suffix identifying generated service interfaces.
pub const CLASS_NAME_SUFFIX: &str = "Xrpc";

/// Convert a dotted package name into a directory prefix.
///
/// `com.example.api` becomes `com/example/api/`; the empty package stays
/// empty.
pub fn package_to_path(package: &str) -> String {
    if package.is_empty() {
        return String::new();
    }
    let mut path = package.replace('.', "/");
    path.push('/');
    path
}

/// Adjust an identifier to follow the JavaBean spec:
///   - decapitalize the first letter
///   - remove embedded underscores and capitalize the following letter
///
/// Callers must never pass an empty identifier. Note this deliberately
/// leaves interior capitalization alone (`helloWORLD` stays `helloWORLD`),
/// so a generic camel-case helper is not a substitute.
pub fn mixed_lower(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_lowercase());
    }
    let mut after_underscore = false;
    for c in chars {
        if c == '_' {
            after_underscore = true;
        } else {
            if after_underscore {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            after_underscore = false;
        }
    }
    out
}

/// The substring after the last `.`, or the whole name if there is none.
pub fn simple_name(full: &str) -> &str {
    match full.rfind('.') {
        Some(dot) => &full[dot + 1..],
        None => full,
    }
}

/// Name of the generated interface for a service.
pub fn service_class_name(service_name: &str) -> String {
    format!("{service_name}{CLASS_NAME_SUFFIX}")
}
