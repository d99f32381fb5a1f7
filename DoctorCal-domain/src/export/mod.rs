//! Export formatters
//!
//! Each formatter returns the document as a string; writing files, printing
//! and downloads are left to the caller.

use chrono::NaiveDate;
use serde::Serialize;

use crate::entities::cycle::{CycleForecast, CycleRequest};
use crate::entities::diet::{DietPatient, DietPlan, MacroTargets, MealPlan};
use crate::entities::wellness::WellnessLog;

/// File name offered for the wellness CSV download
pub const WELLNESS_CSV_FILENAME: &str = "wellness_data.csv";

fn optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Quote a field when it holds a delimiter, quote or line break (RFC 4180)
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Wellness log as CSV: Employees, Roles, Metrics and Claims sections
/// separated by a blank line, each with a title row and a header row
pub fn wellness_csv(log: &WellnessLog) -> String {
    let mut rows: Vec<Vec<String>> = Vec::new();

    rows.push(vec!["Employees".to_string()]);
    rows.push(["id", "name", "dept", "roleId", "bmi", "hbA1c"].map(String::from).to_vec());
    rows.extend(log.employees.iter().map(|e| {
        vec![
            e.id.clone(),
            e.name.clone(),
            e.dept.clone(),
            e.role_id.to_string(),
            optional_number(e.bmi),
            optional_number(e.hba1c),
        ]
    }));
    rows.push(Vec::new());

    rows.push(vec!["Roles".to_string()]);
    rows.push(["id", "name", "avgLossPerDay"].map(String::from).to_vec());
    rows.extend(
        log.roles
            .iter()
            .map(|r| vec![r.id.to_string(), r.name.clone(), r.avg_loss_per_day.to_string()]),
    );
    rows.push(Vec::new());

    rows.push(vec!["Metrics".to_string()]);
    rows.push(["id", "date", "absenteeismDays"].map(String::from).to_vec());
    rows.extend(
        log.metrics
            .iter()
            .map(|m| vec![m.id.clone(), m.date.to_string(), m.absenteeism_days.to_string()]),
    );
    rows.push(Vec::new());

    rows.push(vec!["Claims".to_string()]);
    rows.push(["id", "date", "totalClaimsCost"].map(String::from).to_vec());
    rows.extend(
        log.claims
            .iter()
            .map(|c| vec![c.id.clone(), c.date.to_string(), c.total_claims_cost.to_string()]),
    );

    rows.iter()
        .map(|row| row.iter().map(|field| csv_field(field)).collect::<Vec<_>>().join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn pretty_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Printable patient record for a cycle forecast
pub fn cycle_record_html(request: &CycleRequest, forecast: &CycleForecast, generated_on: NaiveDate) -> String {
    let last_period = forecast
        .cycles
        .first()
        .map(|c| pretty_date(c.period_start))
        .unwrap_or_else(|| pretty_date(forecast.next_period));

    let cycles: String = forecast
        .cycles
        .iter()
        .map(|c| {
            format!(
                "<h3>Cycle {}</h3>\n<ul>\n<li><strong>Period start:</strong> {}</li>\n\
                 <li><strong>Predicted ovulation:</strong> {}</li>\n\
                 <li><strong>Fertile window:</strong> {} to {}</li>\n</ul>\n",
                c.cycle_number,
                pretty_date(c.period_start),
                pretty_date(c.ovulation),
                pretty_date(c.fertile_window_start),
                pretty_date(c.fertile_window_end),
            )
        })
        .collect();

    let note = if request.note.trim().is_empty() {
        String::new()
    } else {
        format!("<p><strong>Notes:</strong> {}</p>\n", escape_html(&request.note))
    };

    format!(
        "<html>\n<head>\n<title>Menstrual Cycle Patient Record</title>\n\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\" />\n\
         <style>body{{font-family: Arial, Helvetica, sans-serif; padding:20px}}</style>\n\
         </head>\n<body>\n<h2>Menstrual Cycle Patient Record</h2>\n\
         <p><strong>Last period (1st day):</strong> {}</p>\n\
         <p><strong>Average cycle length:</strong> {} days</p>\n\
         <p><strong>Luteal phase:</strong> {} days</p>\n{}<hr />\n{}<hr />\n\
         <p>Generated on {}</p>\n</body>\n</html>\n",
        last_period,
        request.cycle_length,
        request.luteal_phase,
        note,
        cycles,
        pretty_date(generated_on),
    )
}

#[derive(Serialize)]
struct DietExport<'a> {
    patient: &'a DietPatient,
    bmr: f64,
    tdee: f64,
    macros: &'a MacroTargets,
    plan: &'a MealPlan,
}

/// Diet prescription as pretty-printed JSON
pub fn diet_plan_json(patient: &DietPatient, plan: &DietPlan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&DietExport {
        patient,
        bmr: plan.bmr,
        tdee: plan.tdee,
        macros: &plan.macros,
        plan: &plan.plan,
    })
}

/// Download name for a diet prescription, `<name or patient>-diet-prescription.json`.
///
/// Control characters are dropped from the name.
pub fn diet_plan_filename(patient: &DietPatient) -> String {
    let name: String = patient.name.chars().filter(|c| !c.is_control()).collect();
    let name = name.trim();
    let name = if name.is_empty() { "patient" } else { name };
    format!("{}-diet-prescription.json", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::common::Sex;
    use crate::entities::diet::{ActivityLevel, DiseasePreset, Region};
    use crate::entities::wellness::{AbsenteeismMetric, ClaimsMetric, Employee, Role};
    use crate::services::cycle::predict_cycles;
    use crate::services::diet::DietCalculator;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_wellness_csv_layout() {
        let log = WellnessLog {
            employees: vec![Employee {
                id: "e1".to_string(),
                name: "Asha".to_string(),
                dept: "ICU".to_string(),
                role_id: 1,
                bmi: Some(24.5),
                hba1c: None,
            }],
            roles: vec![Role {
                id: 1,
                name: "Clinical".to_string(),
                avg_loss_per_day: 3000.0,
            }],
            metrics: vec![AbsenteeismMetric {
                id: "m1".to_string(),
                date: date(2024, 1, 31),
                absenteeism_days: 10.0,
            }],
            claims: vec![ClaimsMetric {
                id: "c1".to_string(),
                date: date(2024, 1, 31),
                total_claims_cost: 52000.5,
            }],
        };

        let expected = "Employees\n\
                        id,name,dept,roleId,bmi,hbA1c\n\
                        e1,Asha,ICU,1,24.5,\n\
                        \n\
                        Roles\n\
                        id,name,avgLossPerDay\n\
                        1,Clinical,3000\n\
                        \n\
                        Metrics\n\
                        id,date,absenteeismDays\n\
                        m1,2024-01-31,10\n\
                        \n\
                        Claims\n\
                        id,date,totalClaimsCost\n\
                        c1,2024-01-31,52000.5";
        assert_eq!(wellness_csv(&log), expected);
    }

    #[test]
    fn test_wellness_csv_quotes_awkward_fields() {
        let log = WellnessLog {
            employees: vec![Employee {
                id: "e1".to_string(),
                name: "Rao, Asha".to_string(),
                dept: "ICU \"B\"\nNights".to_string(),
                role_id: 1,
                bmi: None,
                hba1c: None,
            }],
            ..WellnessLog::default()
        };

        let csv = wellness_csv(&log);
        assert!(csv.contains("\ne1,\"Rao, Asha\",\"ICU \"\"B\"\"\nNights\",1,,\n"));
        assert_eq!(csv_field("Clinical"), "Clinical");
        assert_eq!(csv_field("a\rb"), "\"a\rb\"");
    }

    #[test]
    fn test_empty_wellness_csv_keeps_headers() {
        let csv = wellness_csv(&WellnessLog::default());
        assert_eq!(csv.lines().count(), 11);
        assert!(csv.ends_with("id,date,totalClaimsCost"));
    }

    #[test]
    fn test_cycle_record_html() {
        let request = CycleRequest {
            last_period: Some("2024-01-01".to_string()),
            cycle_length: 28,
            luteal_phase: 14,
            count: 2,
            note: "Irregular <spotting>".to_string(),
        };
        let forecast = predict_cycles(date(2024, 1, 1), 28, 14, 2).unwrap();
        let html = cycle_record_html(&request, &forecast, date(2024, 1, 5));

        assert!(html.contains("<p><strong>Last period (1st day):</strong> 1 Jan 2024</p>"));
        assert!(html.contains("<h3>Cycle 2</h3>"));
        assert!(html.contains("<li><strong>Predicted ovulation:</strong> 15 Jan 2024</li>"));
        assert!(html.contains("<li><strong>Fertile window:</strong> 10 Jan 2024 to 16 Jan 2024</li>"));
        assert!(html.contains("Irregular &lt;spotting&gt;"));
        assert!(html.contains("Generated on 5 Jan 2024"));
    }

    #[test]
    fn test_diet_plan_json() {
        let patient = DietPatient {
            name: String::new(),
            age: 30,
            sex: Sex::Female,
            height_cm: 160.0,
            weight_kg: 60.0,
            activity: ActivityLevel::Light,
            disease: DiseasePreset::Diabetes,
            region: Region::North,
            vegetarian: true,
        };
        let plan = DietCalculator::default().compute_diet_plan(&patient, &[]);
        let json = diet_plan_json(&patient, &plan).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["patient"]["disease"], "diabetes");
        assert_eq!(value["bmr"], 1289.0);
        assert_eq!(value["plan"]["breakfast"]["name"], "Phulka (1)");
        assert!(json.contains("\n  "));

        assert_eq!(diet_plan_filename(&patient), "patient-diet-prescription.json");

        let patient = DietPatient {
            name: " Meera\r\n K ".to_string(),
            ..patient
        };
        assert_eq!(diet_plan_filename(&patient), "Meera K-diet-prescription.json");
    }
}
