use url::form_urlencoded;

/// Name of the one query parameter the site consumes: the contact-form
/// message preset.
pub const PREFILL_PARAM: &str = "msg";

/// Recover a query parameter from the document location.
///
/// Checks the standard query string first, then a query string embedded
/// after the fragment identifier (`#/contact?msg=...`), which is where
/// shared links land when the router keeps the virtual path in the
/// fragment. An explicitly empty value is a present value, not an absent
/// one.
pub fn recover_param(search: &str, fragment: &str, name: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    if let Some(value) = first_value(search, name) {
        return Some(value);
    }

    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    match fragment.find('?') {
        Some(idx) => first_value(&fragment[idx + 1..], name),
        None => None,
    }
}

/// First matching pair wins, like `URLSearchParams::get`.
fn first_value(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
