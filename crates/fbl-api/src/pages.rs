//! Inline HTML fragments returned by handlers.
//!
//! Every value interpolated into markup goes through [`escape`]; there is no
//! unescaped interpolation path.

use crate::facebook::models::UserProfile;

pub const DATA_DELETED: &str = "<h1>Your data has been deleted from this application.</h1>";

pub const DELETE_FAILED: &str = "<h1>Failed to delete data. Please try again later.</h1>";

pub const DELETION_CONFIRMATION: &str =
    "<h1>Your data deletion request has been received and is being processed.</h1>";

/// Profile page shown after a successful login, with the provider-mandated
/// delete button. The access token rides along in a hidden field because the
/// delete action needs it back on the next request; the service itself
/// stores nothing.
pub fn profile_page(profile: &UserProfile, access_token: &str) -> String {
    format!(
        r#"<h1>Welcome, {name}</h1>
<p>Email: {email}</p>
<form action="/delete-data" method="POST">
  <input type="hidden" name="access_token" value="{token}" />
  <button type="submit">Delete My Email/Phone</button>
</form>
"#,
        name = escape(&profile.name),
        email = escape(profile.email.as_deref().unwrap_or("")),
        token = escape(access_token),
    )
}

/// Minimal HTML escaping, safe for text nodes and double-quoted attributes.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
