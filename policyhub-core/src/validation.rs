use crate::policy::{Category, PolicyDraft};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Please select a valid category.")]
    UnknownCategory,
}

fn all_filled(fields: &[&str]) -> Result<(), ValidationError> {
    if fields.iter().all(|f| !f.trim().is_empty()) {
        Ok(())
    } else {
        Err(ValidationError::MissingFields)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] if either field is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        all_filled(&[&self.username, &self.password])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
}

impl SignupForm {
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] if any field is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        all_filled(&[
            &self.first_name,
            &self.last_name,
            &self.username,
            &self.password,
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolicyForm {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl PolicyForm {
    /// Validate the form and build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] if any field is blank and
    /// [`ValidationError::UnknownCategory`] if the category is not offered.
    pub fn to_draft(&self) -> Result<PolicyDraft, ValidationError> {
        self.validate()?;
        let category =
            Category::from_label(self.category.trim()).ok_or(ValidationError::UnknownCategory)?;
        Ok(PolicyDraft::new(
            self.title.clone(),
            self.description.clone(),
            category,
        ))
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] if any field is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        all_filled(&[&self.title, &self.description, &self.category])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_fields_are_missing() {
        let form = LoginForm {
            username: "x@y.com".into(),
            password: "   ".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn signup_requires_every_field() {
        let mut form = SignupForm {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            username: "jane@x.edu".into(),
            password: "pw".into(),
        };
        assert!(form.validate().is_ok());
        form.last_name.clear();
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "All fields are required."
        );
    }

    #[test]
    fn policy_form_builds_draft_with_known_category() {
        let form = PolicyForm {
            title: "Quiet hours".into(),
            description: "After 9pm".into(),
            category: "Academic".into(),
        };
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.category, "Academic");
        assert_eq!(draft.title, "Quiet hours");
    }

    #[test]
    fn policy_form_rejects_unknown_category_and_blanks() {
        let mut form = PolicyForm {
            title: "t".into(),
            description: "d".into(),
            category: "Sports".into(),
        };
        assert_eq!(form.to_draft(), Err(ValidationError::UnknownCategory));
        form.category.clear();
        assert_eq!(form.to_draft(), Err(ValidationError::MissingFields));
    }
}
