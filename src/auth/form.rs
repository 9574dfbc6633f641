//! Hidden-field extraction for form-post authorization responses.
//!
//! The authorize endpoint answers with an auto-submitting page such as
//!
//! ```text
//! <form method="post" action="https://www.ecobee.com/home/authCallback">
//!   <input type="hidden" name="access_token" value="eyJ..."/>
//!   <input type="hidden" name="scope" value="smartWrite"/>
//!   <input type="hidden" name="expires_in" value="3600"/>
//! </form>
//! ```
//!
//! Fields are located by literal marker search, not by parsing HTML. Any change
//! in quoting or attribute order on the vendor side surfaces as a missing field.

/// Value of the hidden input named `field`, if the page contains one.
///
/// Returns the text between `name="<field>" value="` and the next `"`. The first
/// occurrence wins; a marker with no closing quote counts as absent.
pub fn hidden_input_value<'a>(html: &'a str, field: &str) -> Option<&'a str> {
    let marker = format!("name=\"{field}\" value=\"");
    let start = html.find(&marker)? + marker.len();
    let rest = &html[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}
