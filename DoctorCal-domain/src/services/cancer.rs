use tracing::debug;

use crate::entities::cancer::{Alcohol, CancerInput, CancerRiskBand, CancerScore, PhysicalActivity, ProcessedDiet, Tobacco};
use crate::entities::common::Sex;

fn age_points(age: u32) -> u32 {
    match age {
        0..=39 => 0,
        40..=59 => 2,
        _ => 4,
    }
}

fn tobacco_points(tobacco: Tobacco) -> u32 {
    match tobacco {
        Tobacco::Current => 4,
        Tobacco::Former => 2,
        Tobacco::Never => 0,
    }
}

fn alcohol_points(alcohol: Alcohol) -> u32 {
    match alcohol {
        Alcohol::Daily => 2,
        Alcohol::Occasional => 1,
        Alcohol::None => 0,
    }
}

fn activity_points(activity: PhysicalActivity) -> u32 {
    match activity {
        PhysicalActivity::Sedentary => 2,
        PhysicalActivity::Moderate => 1,
        PhysicalActivity::Active => 0,
    }
}

fn diet_points(diet: ProcessedDiet) -> u32 {
    match diet {
        ProcessedDiet::Frequent => 2,
        ProcessedDiet::Occasional => 1,
        ProcessedDiet::Rare => 0,
    }
}

fn bmi_points(bmi: f64) -> u32 {
    if bmi < 18.5 || bmi > 30.0 {
        2
    } else {
        0
    }
}

fn flag(condition: bool, points: u32) -> u32 {
    if condition {
        points
    } else {
        0
    }
}

/// Band of a composite cancer score
pub fn categorize_cancer_score(score: u32) -> CancerRiskBand {
    match score {
        0..=5 => CancerRiskBand::Low,
        6..=10 => CancerRiskBand::Moderate,
        _ => CancerRiskBand::High,
    }
}

/// Score the composite cancer risk questionnaire.
///
/// Nulliparity and hormone therapy only count for females.
pub fn compute_cancer_score(input: &CancerInput) -> CancerScore {
    let mut score = age_points(input.age)
        + flag(input.sex == Sex::Male, 1)
        + flag(input.family_history, 3)
        + tobacco_points(input.tobacco)
        + alcohol_points(input.alcohol)
        + activity_points(input.physical_activity)
        + diet_points(input.diet)
        + bmi_points(input.bmi)
        + flag(input.environmental, 2)
        + flag(input.inflammatory, 2)
        + flag(input.diabetes, 1);

    if input.sex == Sex::Female {
        score += flag(input.nulliparity, 2) + flag(input.hormone_therapy, 1);
    }

    let band = categorize_cancer_score(score);
    debug!("Cancer composite score {} ({:?})", score, band);

    CancerScore {
        score,
        band,
        label: band.label().to_string(),
        advice: band.advice().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline(sex: Sex) -> CancerInput {
        CancerInput {
            age: 35,
            sex,
            family_history: false,
            tobacco: Tobacco::Never,
            alcohol: Alcohol::None,
            physical_activity: PhysicalActivity::Active,
            diet: ProcessedDiet::Rare,
            bmi: 24.0,
            environmental: false,
            inflammatory: false,
            diabetes: false,
            nulliparity: false,
            hormone_therapy: false,
        }
    }

    #[test]
    fn test_healthy_female_scores_zero() {
        let result = compute_cancer_score(&baseline(Sex::Female));
        assert_eq!(result.score, 0);
        assert_eq!(result.band, CancerRiskBand::Low);
        assert_eq!(result.advice, "Routine screening per guidelines");
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(categorize_cancer_score(5), CancerRiskBand::Low);
        assert_eq!(categorize_cancer_score(6), CancerRiskBand::Moderate);
        assert_eq!(categorize_cancer_score(10), CancerRiskBand::Moderate);
        assert_eq!(categorize_cancer_score(11), CancerRiskBand::High);
    }

    #[test]
    fn test_band_labels_and_advice() {
        // 2 (age) + 1 (male) + 2 (former smoker) = 5
        let low = CancerInput {
            age: 45,
            tobacco: Tobacco::Former,
            ..baseline(Sex::Male)
        };
        let result = compute_cancer_score(&low);
        assert_eq!(result.score, 5);
        assert_eq!(result.label, "Low risk");

        // 5 + 1 (occasional alcohol) = 6
        let moderate = CancerInput {
            alcohol: Alcohol::Occasional,
            ..low.clone()
        };
        let result = compute_cancer_score(&moderate);
        assert_eq!(result.score, 6);
        assert_eq!(result.label, "Moderate risk");
        assert_eq!(result.advice, "Lifestyle modification and annual check-up");

        // 6 + 3 (family history) + 2 (sedentary) = 11
        let high = CancerInput {
            family_history: true,
            physical_activity: PhysicalActivity::Sedentary,
            ..moderate
        };
        let result = compute_cancer_score(&high);
        assert_eq!(result.score, 11);
        assert_eq!(result.label, "High risk");
        assert_eq!(
            result.advice,
            "Physician consultation; consider targeted cancer screening"
        );
    }

    #[test]
    fn test_age_and_bmi_thresholds() {
        let score = |age: u32, bmi: f64| {
            compute_cancer_score(&CancerInput {
                age,
                bmi,
                ..baseline(Sex::Female)
            })
            .score
        };
        assert_eq!(score(39, 24.0), 0);
        assert_eq!(score(40, 24.0), 2);
        assert_eq!(score(59, 24.0), 2);
        assert_eq!(score(60, 24.0), 4);
        assert_eq!(score(35, 18.4), 2);
        assert_eq!(score(35, 18.5), 0);
        assert_eq!(score(35, 30.0), 0);
        assert_eq!(score(35, 30.1), 2);
    }

    #[test]
    fn test_female_only_factors() {
        let female = CancerInput {
            nulliparity: true,
            hormone_therapy: true,
            ..baseline(Sex::Female)
        };
        assert_eq!(compute_cancer_score(&female).score, 3);

        let male = CancerInput {
            sex: Sex::Male,
            ..female
        };
        assert_eq!(compute_cancer_score(&male).score, 1);
    }

    #[test]
    fn test_all_factors_add_up() {
        let input = CancerInput {
            age: 65,
            family_history: true,
            tobacco: Tobacco::Current,
            alcohol: Alcohol::Daily,
            physical_activity: PhysicalActivity::Sedentary,
            diet: ProcessedDiet::Frequent,
            bmi: 32.0,
            environmental: true,
            inflammatory: true,
            diabetes: true,
            nulliparity: true,
            hormone_therapy: true,
            ..baseline(Sex::Female)
        };
        assert_eq!(compute_cancer_score(&input).score, 4 + 3 + 4 + 2 + 2 + 2 + 2 + 2 + 2 + 1 + 2 + 1);
    }

    #[test]
    fn test_unknown_categories_score_zero() {
        let input: CancerInput = serde_json::from_str(
            r#"{"age": 30, "sex": "female", "bmi": 22.0, "tobacco": "vaping", "alcohol": "weekly"}"#,
        )
        .unwrap();
        assert_eq!(input.tobacco, Tobacco::Never);
        assert_eq!(input.alcohol, Alcohol::None);
        assert_eq!(compute_cancer_score(&input).score, 0);
    }

    type Factor = fn(&mut CancerInput);

    fn risk_factors() -> [Factor; 6] {
        [
            |i| i.age = 45,
            |i| i.family_history = true,
            |i| i.tobacco = Tobacco::Current,
            |i| i.alcohol = Alcohol::Daily,
            |i| i.bmi = 32.0,
            |i| i.nulliparity = true,
        ]
    }

    #[test]
    fn test_score_independent_of_factor_order() {
        let per_factor: Vec<u32> = risk_factors()
            .iter()
            .map(|factor| {
                let mut single = baseline(Sex::Female);
                factor(&mut single);
                compute_cancer_score(&single).score
            })
            .collect();
        let total: u32 = per_factor.iter().sum();
        assert_eq!(total, 2 + 3 + 4 + 2 + 2 + 2);
        assert_eq!(per_factor.iter().rev().sum::<u32>(), total);

        for order in [[0, 1, 2, 3, 4, 5], [5, 4, 3, 2, 1, 0], [2, 5, 0, 4, 1, 3]] {
            let mut input = baseline(Sex::Female);
            for index in order {
                risk_factors()[index](&mut input);
            }
            assert_eq!(compute_cancer_score(&input).score, total, "order {:?}", order);
        }
    }

    #[test]
    fn test_repeated_scoring_is_stable() {
        let mut input = baseline(Sex::Female);
        for factor in risk_factors() {
            factor(&mut input);
        }

        let first = compute_cancer_score(&input);
        let second = compute_cancer_score(&input);
        assert_eq!(first, second);
        assert_eq!(first.band, CancerRiskBand::High);
    }
}
