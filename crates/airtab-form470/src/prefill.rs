//! Payloads derived from a Form 470 for outreach forms.
//!
//! These are plain data. Submitting them anywhere is up to the caller.

use serde::Serialize;
use thiserror::Error;

use crate::record::Form470;

const NOT_PROVIDED: &str = "Not provided";
const DEFAULT_HELP: &str = "Infrastructure support";
const DEFAULT_CONTACT_TITLE: &str = "Authorized Person";

/// A Form 470 lacks data a payload needs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefillError {
    /// Every required field that is absent or blank, in form order.
    #[error("missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },
}

/// A general contact/inquiry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub company_url: String,
    pub email: String,
    pub help_needed: String,
}

impl ContactForm {
    /// Build a contact form; never fails, missing values get placeholders.
    pub fn from_form470(form: &Form470) -> Self {
        let fields = &form.fields;
        let help_needed = match present(&fields.title) {
            Some(title) => format!(
                "E-Rate Form 470 - {} - {}",
                title,
                present(&fields.funding_narrative).unwrap_or(DEFAULT_HELP)
            ),
            None => format!(
                "E-Rate Form 470 - {}",
                present(&fields.funding_narrative).unwrap_or(DEFAULT_HELP)
            ),
        };

        Self {
            name: present(&fields.contact_name)
                .unwrap_or(NOT_PROVIDED)
                .to_string(),
            company_url: present(&fields.buyer)
                .map(company_url)
                .unwrap_or_else(|| NOT_PROVIDED.to_string()),
            email: present(&fields.contact_email)
                .unwrap_or(NOT_PROVIDED)
                .to_string(),
            help_needed,
        }
    }
}

/// A partner deal registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRegistration {
    pub customer_name: String,
    pub state: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub phone: String,
    pub email: String,
    pub funding_year: String,
    pub deal_value: f64,
    pub project_name: String,
    pub project_description: String,
}

impl DealRegistration {
    /// Build a registration, checking every required field first.
    ///
    /// Required: Buyer, Contact Name, Contact Email, Contact Phone Number,
    /// State, Funding Year and Total Funding Commitment.
    ///
    /// # Errors
    ///
    /// Returns [`PrefillError::MissingFields`] naming all absent fields. A
    /// zero funding commitment counts as absent.
    pub fn from_form470(form: &Form470) -> Result<Self, PrefillError> {
        let fields = &form.fields;
        let mut missing = Vec::new();

        let mut require = |name: &'static str, value: &Option<String>| match present(value) {
            Some(v) => v.to_string(),
            None => {
                missing.push(name);
                String::new()
            }
        };
        let buyer = require("Buyer", &fields.buyer);
        let contact = require("Contact Name", &fields.contact_name);
        let email = require("Contact Email", &fields.contact_email);
        let phone = require("Contact Phone Number", &fields.contact_phone_number);
        let state = require("State", &fields.state);
        let funding_year = require("Funding Year", &fields.funding_year);

        let deal_value = fields.total_funding_commitment.filter(|v| *v != 0.0);
        if deal_value.is_none() {
            missing.push("Total Funding Commitment");
        }

        if !missing.is_empty() {
            return Err(PrefillError::MissingFields { fields: missing });
        }

        let (first_name, last_name) = split_name(&contact);
        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            title: DEFAULT_CONTACT_TITLE.to_string(),
            project_name: format!("E-Rate Opportunity with {}", buyer),
            project_description: format!(
                "E-Rate Opportunity with {}. This is a Cat2 Ruckus named 470.",
                buyer
            ),
            customer_name: buyer,
            state,
            phone,
            email,
            funding_year,
            deal_value: deal_value.unwrap_or_default(),
        })
    }
}

/// Returns the value if it is set and not blank.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Lowercase the buyer name, drop whitespace, append `.org`.
fn company_url(buyer: &str) -> String {
    let mut url: String = buyer
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    url.push_str(".org");
    url
}

/// Split on the first space: first name, then everything else.
fn split_name(full: &str) -> (&str, &str) {
    match full.trim().split_once(' ') {
        Some((first, rest)) => (first, rest.trim()),
        None => (full.trim(), ""),
    }
}
