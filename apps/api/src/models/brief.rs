use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Business description collected by the landing page form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessBrief {
    pub niche: String,
    pub business_description: String,
    pub target_audience: String,
    pub content_goals: String,
    pub unique_value: String,
}

impl BusinessBrief {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.niche.trim().is_empty() {
            return Err(AppError::Validation("niche cannot be empty".to_string()));
        }
        if self.business_description.trim().is_empty() {
            return Err(AppError::Validation(
                "businessDescription cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief() -> BusinessBrief {
        BusinessBrief {
            niche: "Fitness Coaching".to_string(),
            business_description: "Online coaching for busy parents".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_brief_with_optional_fields_blank() {
        assert!(brief().validate().is_ok());
    }

    #[test]
    fn test_blank_niche_rejected() {
        let b = BusinessBrief {
            niche: "   ".to_string(),
            ..brief()
        };
        assert!(matches!(b.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_blank_description_rejected() {
        let b = BusinessBrief {
            business_description: String::new(),
            ..brief()
        };
        assert!(matches!(b.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_deserializes_form_field_names() {
        let json = r#"{"niche":"Pets","businessDescription":"Dog grooming","targetAudience":"Owners"}"#;
        let b: BusinessBrief = serde_json::from_str(json).unwrap();
        assert_eq!(b.business_description, "Dog grooming");
        assert_eq!(b.target_audience, "Owners");
        assert_eq!(b.content_goals, "");
    }
}
