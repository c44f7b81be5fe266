use crate::{OnboardingError, Result as OnboardingResult, SaveRequest};

use cr_config::ValidationConfig;
use cr_core::{NewCompany, ProfileFields};

/// Validates dashboard submissions before any store call is made.
pub struct ProfileValidator {
    max_field_length: usize,
}

impl ProfileValidator {
    pub fn new(max_field_length: usize) -> Self {
        Self { max_field_length }
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(config.max_field_length)
    }

    /// Validate a (trimmed) save request
    #[track_caller]
    pub fn validate(&self, request: &SaveRequest) -> OnboardingResult<()> {
        self.validate_profile(&request.profile)?;

        if let Some(company) = &request.new_company {
            if company.has_name() && !request.selected_company_ids.is_empty() {
                return Err(OnboardingError::validation(
                    "new_company",
                    "choose existing companies or create a new one, not both",
                ));
            }
            self.validate_company(company)?;
        }

        if let Some(id) = request.selected_company_ids.iter().find(|id| **id <= 0) {
            return Err(OnboardingError::validation(
                "selected_company_ids",
                format!("company id must be positive, got {}", id),
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_profile(&self, profile: &ProfileFields) -> OnboardingResult<()> {
        self.validate_string(&profile.first_name, "first_name")?;
        self.validate_string(&profile.last_name, "last_name")?;
        self.validate_string(&profile.telegram_handle, "telegram_handle")?;
        self.validate_url(&profile.linkedin_url, "linkedin_url")
    }

    #[track_caller]
    pub fn validate_company(&self, company: &NewCompany) -> OnboardingResult<()> {
        self.validate_string(&company.name, "new_company.name")?;
        self.validate_url(&company.website, "new_company.website")?;
        self.validate_string(&company.twitter_handle, "new_company.twitter_handle")?;
        self.validate_string(&company.telegram_channel, "new_company.telegram_channel")?;
        self.validate_url(&company.linkedin_url, "new_company.linkedin_url")?;
        self.validate_string(&company.category, "new_company.category")
    }

    /// Length in characters, not bytes
    #[track_caller]
    pub fn validate_string(&self, value: &str, field_name: &str) -> OnboardingResult<()> {
        if value.chars().count() > self.max_field_length {
            return Err(OnboardingError::validation(
                field_name,
                format!(
                    "{} must not exceed {} characters",
                    field_name, self.max_field_length
                ),
            ));
        }

        if value.chars().any(char::is_control) {
            return Err(OnboardingError::validation(
                field_name,
                format!("{} must not contain control characters", field_name),
            ));
        }

        Ok(())
    }

    /// Empty, or an http(s) URL with a host
    #[track_caller]
    pub fn validate_url(&self, value: &str, field_name: &str) -> OnboardingResult<()> {
        self.validate_string(value, field_name)?;

        if value.is_empty() {
            return Ok(());
        }

        let rest = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"));

        match rest {
            Some(rest) if !rest.is_empty() && !rest.starts_with('/') && !rest.contains(' ') => {
                Ok(())
            }
            _ => Err(OnboardingError::validation(
                field_name,
                format!("{} must be an http or https URL", field_name),
            )),
        }
    }
}
