use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use super::RegistrationRecord;
use crate::app::domain::{
    validation::{format_phone, validate_categories},
    Email, FieldError, FieldKind, IdentityNumber, PersonName, PhoneNumber, RegistrationId,
};
use crate::app::error::AppError;

/// One entry of the registry seed file.
#[derive(Debug, Deserialize, Validate)]
pub struct RegistrationSeed {
    /// Generated when absent.
    #[serde(default)]
    pub id: Option<RegistrationId>,

    #[validate(custom(function = "name_field"))]
    pub first_name: String,

    #[validate(custom(function = "name_field"))]
    pub last_name: String,

    #[validate(custom(function = "email_field"))]
    pub email: String,

    #[validate(custom(function = "phone_field"))]
    pub phone: String,

    #[serde(default)]
    #[validate(custom(function = "identity_number_field"))]
    pub identity_number: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "categories_field"))]
    pub categories: Vec<String>,
}

fn name_field(value: &str) -> Result<(), ValidationError> {
    PersonName::new(value).map(|_| ())
}

fn email_field(value: &str) -> Result<(), ValidationError> {
    Email::new(value).map(|_| ())
}

fn phone_field(value: &str) -> Result<(), ValidationError> {
    PhoneNumber::new(value).map(|_| ())
}

fn identity_number_field(value: &str) -> Result<(), ValidationError> {
    IdentityNumber::new(value).map(|_| ())
}

fn categories_field(value: &[String]) -> Result<(), ValidationError> {
    if validate_categories(value) {
        Ok(())
    } else {
        Err(FieldError::required(FieldKind::Categories).into())
    }
}

impl RegistrationSeed {
    /// Validate and normalize into a stored record.
    pub fn into_record(self) -> Result<RegistrationRecord, validator::ValidationErrors> {
        self.validate()?;
        // validate() already ran the identity rule, so this cannot fail.
        let identity_number = self
            .identity_number
            .as_deref()
            .and_then(|raw| IdentityNumber::new(raw).ok());
        Ok(RegistrationRecord {
            id: self.id.unwrap_or_default(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: format_phone(&self.phone),
            identity_number,
            categories: self.categories,
        })
    }
}

/// Parse a JSON array of seeds. Fails on the first invalid entry.
/// Parse a JSON array of seeds. Fails on the first invalid entry, and on any
/// id or identity number that an earlier entry already uses.
pub fn parse_seed(json: &str) -> Result<Vec<RegistrationRecord>, AppError> {
    let seeds: Vec<RegistrationSeed> =
        serde_json::from_str(json).map_err(|e| AppError::Seed(e.to_string()))?;

    let mut ids = HashSet::new();
    let mut identity_numbers = HashSet::new();
    let mut records = Vec::with_capacity(seeds.len());
    for (i, seed) in seeds.into_iter().enumerate() {
        let record = seed
            .into_record()
            .map_err(|e| AppError::Seed(format!("entry {}: {}", i, e)))?;
        if !ids.insert(record.id) {
            return Err(AppError::Seed(format!("entry {}: duplicate id {}", i, record.id)));
        }
        if let Some(identity_number) = &record.identity_number {
            if !identity_numbers.insert(identity_number.clone()) {
                return Err(AppError::Seed(format!(
                    "entry {}: duplicate identity number {}",
                    i, identity_number
                )));
            }
        }
        records.push(record);
    }
    Ok(records)
}

pub async fn load_seed_file(path: &Path) -> Result<Vec<RegistrationRecord>, AppError> {
    let json = tokio::fs::read_to_string(path).await?;
    let records = parse_seed(&json)?;
    tracing::info!(path = %path.display(), count = records.len(), "loaded registry seed");
    Ok(records)
}
