use thiserror::Error;
use tracing::{debug, warn};

use crate::entities::ascvd::{AscvdInput, AscvdResult, AscvdRiskCategory, Race};
use crate::entities::common::Sex;

/// Advisory attached to results for ages outside the validated range
pub const AGE_RANGE_WARNING: &str =
    "Pooled Cohort Equations are validated for ages 40-79. Results outside this range are unreliable.";

/// ASCVD calculation errors
#[derive(Debug, Error, PartialEq)]
pub enum AscvdError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// A model variable, evaluated against the log-transformed inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Term {
    LnAge,
    LnAgeSquared,
    LnTotalChol,
    LnAgeLnTotalChol,
    LnHdl,
    LnAgeLnHdl,
    LnTreatedSbp,
    LnAgeLnTreatedSbp,
    LnUntreatedSbp,
    LnAgeLnUntreatedSbp,
    Smoker,
    LnAgeSmoker,
    Diabetes,
}

/// Log-transformed inputs shared by every term
struct LogInputs {
    ln_age: f64,
    ln_total_chol: f64,
    ln_hdl: f64,
    ln_sbp: f64,
    treated: bool,
    smoker: f64,
    diabetes: f64,
}

impl Term {
    fn value(self, x: &LogInputs) -> f64 {
        match self {
            Term::LnAge => x.ln_age,
            Term::LnAgeSquared => x.ln_age * x.ln_age,
            Term::LnTotalChol => x.ln_total_chol,
            Term::LnAgeLnTotalChol => x.ln_age * x.ln_total_chol,
            Term::LnHdl => x.ln_hdl,
            Term::LnAgeLnHdl => x.ln_age * x.ln_hdl,
            // Treated and untreated SBP terms are mutually exclusive
            Term::LnTreatedSbp if x.treated => x.ln_sbp,
            Term::LnAgeLnTreatedSbp if x.treated => x.ln_age * x.ln_sbp,
            Term::LnUntreatedSbp if !x.treated => x.ln_sbp,
            Term::LnAgeLnUntreatedSbp if !x.treated => x.ln_age * x.ln_sbp,
            Term::LnTreatedSbp
            | Term::LnAgeLnTreatedSbp
            | Term::LnUntreatedSbp
            | Term::LnAgeLnUntreatedSbp => 0.0,
            Term::Smoker => x.smoker,
            Term::LnAgeSmoker => x.ln_age * x.smoker,
            Term::Diabetes => x.diabetes,
        }
    }
}

/// Coefficients, mean and baseline survival of one sex/race model
struct CoefficientSet {
    terms: &'static [(f64, Term)],
    mean: f64,
    baseline_survival: f64,
}

const FEMALE_WHITE: CoefficientSet = CoefficientSet {
    terms: &[
        (-29.799, Term::LnAge),
        (4.884, Term::LnAgeSquared),
        (13.540, Term::LnTotalChol),
        (-3.114, Term::LnAgeLnTotalChol),
        (-13.578, Term::LnHdl),
        (3.149, Term::LnAgeLnHdl),
        (2.019, Term::LnTreatedSbp),
        (1.957, Term::LnUntreatedSbp),
        (7.574, Term::Smoker),
        (-1.665, Term::LnAgeSmoker),
        (0.661, Term::Diabetes),
    ],
    mean: -29.18,
    baseline_survival: 0.9665,
};

const FEMALE_BLACK: CoefficientSet = CoefficientSet {
    terms: &[
        (17.114, Term::LnAge),
        (0.94, Term::LnTotalChol),
        (-18.92, Term::LnHdl),
        (4.475, Term::LnAgeLnHdl),
        (29.291, Term::LnTreatedSbp),
        (-6.432, Term::LnAgeLnTreatedSbp),
        (27.82, Term::LnUntreatedSbp),
        (-6.087, Term::LnAgeLnUntreatedSbp),
        (0.691, Term::Smoker),
        (0.874, Term::Diabetes),
    ],
    mean: 86.61,
    baseline_survival: 0.9533,
};

const MALE_WHITE: CoefficientSet = CoefficientSet {
    terms: &[
        (12.344, Term::LnAge),
        (11.853, Term::LnTotalChol),
        (-2.664, Term::LnAgeLnTotalChol),
        (-7.990, Term::LnHdl),
        (1.769, Term::LnAgeLnHdl),
        (1.797, Term::LnTreatedSbp),
        (1.764, Term::LnUntreatedSbp),
        (7.837, Term::Smoker),
        (-1.795, Term::LnAgeSmoker),
        (0.658, Term::Diabetes),
    ],
    mean: 61.18,
    baseline_survival: 0.9144,
};

const MALE_BLACK: CoefficientSet = CoefficientSet {
    terms: &[
        (2.469, Term::LnAge),
        (0.302, Term::LnTotalChol),
        (-0.307, Term::LnHdl),
        (1.916, Term::LnTreatedSbp),
        (1.809, Term::LnUntreatedSbp),
        (0.549, Term::Smoker),
        (0.645, Term::Diabetes),
    ],
    mean: 19.54,
    baseline_survival: 0.8954,
};

fn coefficient_set(sex: Sex, race: Race) -> &'static CoefficientSet {
    match (sex, race) {
        (Sex::Female, Race::White) => &FEMALE_WHITE,
        (Sex::Female, Race::Black) => &FEMALE_BLACK,
        (Sex::Male, Race::White) => &MALE_WHITE,
        (Sex::Male, Race::Black) => &MALE_BLACK,
    }
}

/// Estimate the 10-year ASCVD risk with the 2013 ACC/AHA Pooled Cohort Equations.
///
/// Cholesterol, HDL and systolic pressure must be positive. Ages outside 40-79
/// still produce a result, flagged with an advisory.
pub fn compute_ascvd_risk(input: &AscvdInput) -> Result<AscvdResult, AscvdError> {
    validate_input(input)?;

    let age_warning = if !(40..=79).contains(&input.age) {
        warn!("ASCVD risk requested for age {} outside the validated 40-79 range", input.age);
        Some(AGE_RANGE_WARNING.to_string())
    } else {
        None
    };

    let model = coefficient_set(input.sex, input.race);
    let inputs = LogInputs {
        ln_age: (input.age as f64).ln(),
        ln_total_chol: input.total_cholesterol.ln(),
        ln_hdl: input.hdl.ln(),
        ln_sbp: input.systolic_bp.ln(),
        treated: input.on_hypertension_treatment,
        smoker: if input.smoker { 1.0 } else { 0.0 },
        diabetes: if input.diabetes { 1.0 } else { 0.0 },
    };

    let sum: f64 = model
        .terms
        .iter()
        .map(|(coefficient, term)| coefficient * term.value(&inputs))
        .sum();

    let risk = 1.0 - model.baseline_survival.powf((sum - model.mean).exp());
    let risk_percent = round_one_decimal((risk * 100.0).clamp(0.0, 100.0));

    debug!(
        "ASCVD {:?}/{:?}: sum={:.4}, risk={}%",
        input.sex, input.race, sum, risk_percent
    );

    Ok(AscvdResult {
        risk_percent,
        category: AscvdRiskCategory::from_percent(risk_percent),
        age_warning,
    })
}

fn validate_input(input: &AscvdInput) -> Result<(), AscvdError> {
    let checks = [
        ("Total cholesterol", input.total_cholesterol),
        ("HDL cholesterol", input.hdl),
        ("Systolic blood pressure", input.systolic_bp),
    ];

    for (name, value) in checks {
        if !value.is_finite() || value <= 0.0 {
            return Err(AscvdError::ValidationError(format!(
                "{} must be a positive number",
                name
            )));
        }
    }

    if input.age == 0 {
        return Err(AscvdError::ValidationError("Age must be a positive number".to_string()));
    }

    Ok(())
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(sex: Sex, race: Race) -> AscvdInput {
        AscvdInput {
            age: 55,
            sex,
            race,
            total_cholesterol: 213.0,
            hdl: 50.0,
            systolic_bp: 120.0,
            on_hypertension_treatment: false,
            diabetes: false,
            smoker: false,
        }
    }

    fn all_branches() -> [(Sex, Race); 4] {
        [
            (Sex::Female, Race::White),
            (Sex::Female, Race::Black),
            (Sex::Male, Race::White),
            (Sex::Male, Race::Black),
        ]
    }

    #[test]
    fn test_reference_values_untreated_non_smoker() {
        let expected = [2.1, 3.0, 5.4, 6.1];
        for ((sex, race), want) in all_branches().into_iter().zip(expected) {
            let result = compute_ascvd_risk(&input(sex, race)).unwrap();
            assert_eq!(result.risk_percent, want, "{:?}/{:?}", sex, race);
            assert!(result.age_warning.is_none());
        }
    }

    #[test]
    fn test_reference_values_treated_smoker_diabetic() {
        let expected = [16.6, 32.0, 27.0, 37.1];
        for ((sex, race), want) in all_branches().into_iter().zip(expected) {
            let mut request = input(sex, race);
            request.systolic_bp = 140.0;
            request.on_hypertension_treatment = true;
            request.smoker = true;
            request.diabetes = true;

            let result = compute_ascvd_risk(&request).unwrap();
            assert_eq!(result.risk_percent, want, "{:?}/{:?}", sex, race);
            assert_eq!(result.category, AscvdRiskCategory::Elevated);
        }
    }

    #[test]
    fn test_reference_values_older_treated_smoker() {
        let expected = [17.4, 27.6, 27.5, 31.8];
        for ((sex, race), want) in all_branches().into_iter().zip(expected) {
            let request = AscvdInput {
                age: 60,
                total_cholesterol: 240.0,
                hdl: 40.0,
                systolic_bp: 150.0,
                on_hypertension_treatment: true,
                smoker: true,
                ..input(sex, race)
            };
            assert_eq!(compute_ascvd_risk(&request).unwrap().risk_percent, want);
        }
    }

    #[test]
    fn test_category_bands() {
        assert_eq!(AscvdRiskCategory::from_percent(4.9), AscvdRiskCategory::Low);
        assert_eq!(AscvdRiskCategory::from_percent(5.0), AscvdRiskCategory::Borderline);
        assert_eq!(AscvdRiskCategory::from_percent(7.4), AscvdRiskCategory::Borderline);
        assert_eq!(AscvdRiskCategory::from_percent(7.5), AscvdRiskCategory::Elevated);

        let result = compute_ascvd_risk(&input(Sex::Male, Race::White)).unwrap();
        assert_eq!(result.category, AscvdRiskCategory::Borderline);
    }

    #[test]
    fn test_monotonic_in_systolic_pressure() {
        for (sex, race) in all_branches() {
            let low = compute_ascvd_risk(&input(sex, race)).unwrap();
            let high = compute_ascvd_risk(&AscvdInput {
                systolic_bp: 160.0,
                ..input(sex, race)
            })
            .unwrap();
            assert!(high.risk_percent > low.risk_percent, "{:?}/{:?}", sex, race);
        }
    }

    #[test]
    fn test_monotonic_in_total_cholesterol() {
        for (sex, race) in all_branches() {
            let base = AscvdInput {
                systolic_bp: 130.0,
                ..input(sex, race)
            };
            let low = compute_ascvd_risk(&AscvdInput {
                total_cholesterol: 150.0,
                ..base.clone()
            })
            .unwrap();
            let high = compute_ascvd_risk(&AscvdInput {
                total_cholesterol: 250.0,
                ..base
            })
            .unwrap();
            assert!(high.risk_percent > low.risk_percent, "{:?}/{:?}", sex, race);
        }
    }

    #[test]
    fn test_extreme_inputs_stay_in_range() {
        for (sex, race) in all_branches() {
            let request = AscvdInput {
                age: 90,
                total_cholesterol: 1000.0,
                hdl: 10.0,
                systolic_bp: 300.0,
                on_hypertension_treatment: true,
                smoker: true,
                diabetes: true,
                ..input(sex, race)
            };
            let result = compute_ascvd_risk(&request).unwrap();
            assert!((0.0..=100.0).contains(&result.risk_percent));
        }
    }

    #[test]
    fn test_age_outside_range_warns_but_computes() {
        let request = AscvdInput {
            age: 30,
            ..input(Sex::Female, Race::White)
        };
        let result = compute_ascvd_risk(&request).unwrap();
        assert_eq!(result.age_warning.as_deref(), Some(AGE_RANGE_WARNING));
        assert_eq!(result.risk_percent, 0.6);

        let request = AscvdInput {
            age: 79,
            ..input(Sex::Female, Race::White)
        };
        assert!(compute_ascvd_risk(&request).unwrap().age_warning.is_none());
    }

    #[test]
    fn test_non_positive_lab_values_rejected() {
        let request = AscvdInput {
            hdl: 0.0,
            ..input(Sex::Male, Race::Black)
        };
        let err = compute_ascvd_risk(&request).unwrap_err();
        assert!(err.to_string().contains("HDL"));

        let request = AscvdInput {
            systolic_bp: -120.0,
            ..input(Sex::Male, Race::Black)
        };
        assert!(compute_ascvd_risk(&request).is_err());
    }

    #[test]
    fn test_repeated_calls_identical() {
        let request = input(Sex::Female, Race::Black);
        assert_eq!(
            compute_ascvd_risk(&request).unwrap(),
            compute_ascvd_risk(&request).unwrap()
        );
    }
}
