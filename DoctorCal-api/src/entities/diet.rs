use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationErrors};

use doctor_cal_domain::entities::diet::{DietPatient, FoodItem, Region};

/// Patient plus the foods added during the session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DietRequest {
    pub patient: DietPatient,

    /// Custom foods, newest first
    #[serde(default)]
    pub custom_foods: Vec<FoodItem>,
}

impl DietRequest {
    /// Validate the patient and every custom food
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.patient.validate()?;
        for food in &self.custom_foods {
            food.validate()?;
        }
        Ok(())
    }
}

/// Query parameters for the food list
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct FoodQuery {
    /// Regional table, south by default
    pub region: Option<Region>,

    /// Case-insensitive name filter
    pub q: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_foods_optional() {
        let request: DietRequest = serde_json::from_value(serde_json::json!({
            "patient": {
                "age": 45,
                "sex": "male",
                "height_cm": 170.0,
                "weight_kg": 70.0
            }
        }))
        .unwrap();

        assert!(request.custom_foods.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_custom_food_rejected() {
        let request: DietRequest = serde_json::from_value(serde_json::json!({
            "patient": {
                "age": 45,
                "sex": "male",
                "height_cm": 170.0,
                "weight_kg": 70.0
            },
            "custom_foods": [{"name": "", "kcal": 100.0}]
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }
}
