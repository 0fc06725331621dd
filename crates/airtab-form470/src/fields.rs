//! The Form 470 table schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use airtab_core::error::SchemaError;
use airtab_core::{Fields, Result};

/// Parsed `Line Items JSON`: manufacturer, then product type, then quantity.
pub type LineItems = BTreeMap<String, BTreeMap<String, f64>>;

/// Fields of a Form 470 record.
///
/// Every field is optional: Airtable omits empty cells from the response.
/// A field that is present with the wrong JSON type fails deserialization.
/// Fields outside this schema are kept in [`extra`](Self::extra).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Form470Fields {
    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "Application Number", default, skip_serializing_if = "Option::is_none")]
    pub application_number: Option<String>,

    #[serde(rename = "Buyer", default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<String>,

    /// Two-letter state abbreviation.
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(rename = "Level", default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(rename = "Date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "Funding Year", default, skip_serializing_if = "Option::is_none")]
    pub funding_year: Option<String>,

    #[serde(
        rename = "Total Pre Discount Funding",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_pre_discount_funding: Option<f64>,

    #[serde(
        rename = "Total Funding Commitment",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_funding_commitment: Option<f64>,

    #[serde(rename = "Urban/Rural Status", default, skip_serializing_if = "Option::is_none")]
    pub urban_rural_status: Option<String>,

    #[serde(
        rename = "Category 1 Discount Rate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category_1_discount_rate: Option<f64>,

    #[serde(
        rename = "Category 2 Discount Rate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category_2_discount_rate: Option<f64>,

    #[serde(rename = "Contact Name", default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,

    #[serde(rename = "Contact Email", default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    #[serde(rename = "Contact Phone Number", default, skip_serializing_if = "Option::is_none")]
    pub contact_phone_number: Option<String>,

    #[serde(rename = "Funding Narrative", default, skip_serializing_if = "Option::is_none")]
    pub funding_narrative: Option<String>,

    #[serde(
        rename = "Funding Request Number",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub funding_request_number: Option<String>,

    #[serde(rename = "Service Provider Name", default, skip_serializing_if = "Option::is_none")]
    pub service_provider_name: Option<String>,

    #[serde(
        rename = "Service Provider Number",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub service_provider_number: Option<String>,

    #[serde(rename = "Establishing 470", default, skip_serializing_if = "Option::is_none")]
    pub establishing_470: Option<String>,

    #[serde(rename = "Service Dates", default, skip_serializing_if = "Option::is_none")]
    pub service_dates: Option<String>,

    #[serde(rename = "Term of Service", default, skip_serializing_if = "Option::is_none")]
    pub term_of_service: Option<String>,

    /// Attached Form 471 documents.
    #[serde(rename = "Form 471", default, skip_serializing_if = "Option::is_none")]
    pub form_471: Option<Vec<Attachment>>,

    #[serde(rename = "Categories", default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,

    #[serde(rename = "Link", default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(rename = "Created", default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    #[serde(rename = "Size", default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,

    #[serde(rename = "Extracted Text", default, skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,

    /// Raw JSON text; decode with [`line_items`](Self::line_items).
    #[serde(rename = "Line Items JSON", default, skip_serializing_if = "Option::is_none")]
    pub line_items_json: Option<String>,

    #[serde(rename = "Extraction Date", default, skip_serializing_if = "Option::is_none")]
    pub extraction_date: Option<String>,

    #[serde(rename = "Extraction Status", default, skip_serializing_if = "Option::is_none")]
    pub extraction_status: Option<String>,

    #[serde(
        rename = "Test Extraction Status",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub test_extraction_status: Option<String>,

    /// Fields not covered by the schema above.
    #[serde(flatten)]
    pub extra: Fields,
}

impl Form470Fields {
    /// Decode `Line Items JSON`.
    ///
    /// Returns `Ok(None)` when the field is absent or blank.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the text is not a
    /// manufacturer → product type → quantity object.
    pub fn line_items(&self) -> Result<Option<LineItems>> {
        let Some(raw) = self.line_items_json.as_deref() else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(raw).map(Some).map_err(|e| {
            SchemaError::EmbeddedJson {
                field: "Line Items JSON".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// A file attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub url: String,
    pub filename: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type.
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Thumbnails>,
}

/// Preview renderings Airtable generates for images and documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}
