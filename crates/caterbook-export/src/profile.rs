//! Issuer identity printed on exported documents.
//!
//! Loaded from a TOML file so the same build serves any catering
//! business:
//!
//! ```toml
//! name = "Hilltop Catering"
//! tagline = "Premium event catering"
//! location = "Howick, KwaZulu-Natal"
//! email = "bookings@hilltop.example"
//! phone = "+27 78 000 0000"
//! website = "www.hilltop.example"
//! service_description = "3 Course Catering Services"
//!
//! [banking]
//! account_name = "Hilltop Catering (Pty) Ltd"
//! bank = "First National Bank"
//! account_number = "6300000000"
//! branch_code = "250655"
//! reference_note = "Name & Date Of Event"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// EFT details shown in the banking section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankingDetails {
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub bank: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub branch_code: String,
    /// What the payer should put in the payment reference field.
    #[serde(default)]
    pub reference_note: String,
}

/// The issuing business as it appears on every document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub website: String,
    /// Description used for the catering line item.
    #[serde(default = "default_service_description")]
    pub service_description: String,
    /// Due-date line printed in the document header.
    #[serde(default = "default_due_note")]
    pub due_note: String,
    #[serde(default)]
    pub banking: BankingDetails,
}

fn default_service_description() -> String {
    "Catering Services".into()
}

fn default_due_note() -> String {
    "Payment required immediately".into()
}

impl BusinessProfile {
    /// A profile with just a name; everything else at its default.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tagline: String::new(),
            location: String::new(),
            email: String::new(),
            phone: String::new(),
            whatsapp: String::new(),
            website: String::new(),
            service_description: default_service_description(),
            due_note: default_due_note(),
            banking: BankingDetails::default(),
        }
    }

    /// Load a profile from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ExportError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// The footer contact strip: phone/whatsapp and website, skipping
    /// whatever is unset.
    pub fn contact_line(&self) -> String {
        let mut parts = Vec::new();
        if !self.whatsapp.is_empty() {
            parts.push(format!("WhatsApp: {}", self.whatsapp));
        } else if !self.phone.is_empty() {
            parts.push(self.phone.clone());
        }
        if !self.website.is_empty() {
            parts.push(self.website.clone());
        }
        parts.join(" | ")
    }
}

/// Default per-user location of the profile file.
pub fn default_profile_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("caterbook/profile.toml")
}
