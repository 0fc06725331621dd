//! Core Airtable identifier types.
//!
//! These types enforce identifier invariants at construction time, so a
//! malformed id is rejected before any request is built.

mod api_url;
mod base_id;
mod record_id;
mod table_ref;

pub use api_url::ApiUrl;
pub use base_id::BaseId;
pub use record_id::RecordId;
pub use table_ref::TableRef;

/// Length of the alphanumeric body that follows an Airtable id prefix.
const ID_BODY_LEN: usize = 14;

/// Checks the `<prefix><14 alphanumerics>` shape shared by Airtable ids.
fn check_airtable_id(s: &str, prefix: &str) -> Result<(), String> {
    let Some(body) = s.strip_prefix(prefix) else {
        return Err(format!("must start with '{}'", prefix));
    };

    if body.len() != ID_BODY_LEN {
        return Err(format!(
            "must be '{}' followed by {} characters",
            prefix, ID_BODY_LEN
        ));
    }

    if !body.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("must contain only ASCII letters and digits".to_string());
    }

    Ok(())
}
