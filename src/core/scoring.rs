use crate::models::{DoctorProfile, RankingQuery, RankingWeights, SeverityTier};

/// Calculate a recommendation score for one doctor
///
/// Scoring formula (default weights):
/// score = rating * 10
///       + 20 if the requested language is spoken
///       + 15 if the location preference matches (only when one is given)
///       + severity-specific specialty bonuses
///       + experience_years * 2
///       + min(patients_treated / 100, 20)
///
/// Returns the score together with the human-readable reasons, in the order
/// the components were applied.
pub fn calculate_doctor_score(
    doctor: &DoctorProfile,
    query: &RankingQuery,
    weights: &RankingWeights,
) -> (f64, Vec<String>) {
    let mut reasons = Vec::new();

    // Base: rating
    let base = doctor.rating * weights.rating;
    reasons.push(format!("रेटिंग: {} ({:.0} अंक)", doctor.rating, base));

    // Language
    let language_bonus = if doctor.speaks(&query.language) {
        reasons.push(format!("भाषा मैच: {} (+{:.0} अंक)", query.language, weights.language));
        weights.language
    } else {
        reasons.push(format!("भाषा मैच नहीं: {} (0 अंक)", query.language));
        0.0
    };

    // Location
    let location_bonus = match preference(query.location.as_deref()) {
        Some(wanted) if location_matches(&doctor.location, wanted) => {
            reasons.push(format!("स्थान मैच: {} (+{:.0} अंक)", wanted, weights.location));
            weights.location
        }
        Some(wanted) => {
            reasons.push(format!("स्थान मैच नहीं: {} (0 अंक)", wanted));
            0.0
        }
        None => 0.0,
    };

    let specialty_bonus = severity_bonus(doctor, query.severity, weights, &mut reasons);

    // Experience
    let experience_bonus = doctor.experience_years as f64 * weights.experience_per_year;
    reasons.push(format!(
        "अनुभव बोनस: {} वर्ष (+{:.0} अंक)",
        doctor.experience_years, experience_bonus
    ));

    // Patient volume
    let patient_bonus = patient_volume_bonus(doctor.patients_treated, weights.patient_cap);
    reasons.push(format!(
        "मरीज अनुभव: {} मरीज (+{:.0} अंक)",
        doctor.patients_treated, patient_bonus
    ));

    let total = base + language_bonus + location_bonus + specialty_bonus + experience_bonus + patient_bonus;

    (total, reasons)
}

/// A blank text preference counts as no preference
#[inline]
pub fn preference(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Case-insensitive substring match of a location preference
#[inline]
pub fn location_matches(location: &str, wanted: &str) -> bool {
    location.to_lowercase().contains(&wanted.to_lowercase())
}

/// min(patients / 100, cap)
#[inline]
fn patient_volume_bonus(patients_treated: u32, cap: f64) -> f64 {
    (patients_treated as f64 / 100.0).min(cap)
}

/// Specialty bonuses that depend on the assessed severity
///
/// No severity is treated like mild.
fn severity_bonus(
    doctor: &DoctorProfile,
    severity: Option<SeverityTier>,
    weights: &RankingWeights,
    reasons: &mut Vec<String>,
) -> f64 {
    let mut bonus = 0.0;

    match severity {
        Some(SeverityTier::Severe) => {
            if doctor.has_specialty("CBT-I") {
                bonus += weights.severe_cbti;
                reasons.push(format!("CBT-I विशेषज्ञता (+{:.0} अंक)", weights.severe_cbti));
            }
            if doctor.experience_years >= weights.severe_experience_years {
                bonus += weights.severe_experience;
                reasons.push(format!(
                    "{}+ वर्ष अनुभव (+{:.0} अंक)",
                    weights.severe_experience_years, weights.severe_experience
                ));
            }
            if doctor.has_specialty("Neurological Sleep Disorders") {
                bonus += weights.severe_neurological;
                reasons.push(format!(
                    "न्यूरोलॉजिकल नींद विकार विशेषज्ञता (+{:.0} अंक)",
                    weights.severe_neurological
                ));
            }
        }
        Some(SeverityTier::Moderate) => {
            if doctor.has_specialty("CBT-I") {
                bonus += weights.moderate_cbti;
                reasons.push(format!("CBT-I विशेषज्ञता (+{:.0} अंक)", weights.moderate_cbti));
            }
            if doctor.has_specialty("Sleep Psychology") {
                bonus += weights.moderate_psychology;
                reasons.push(format!(
                    "नींद मनोविज्ञान विशेषज्ञता (+{:.0} अंक)",
                    weights.moderate_psychology
                ));
            }
        }
        Some(SeverityTier::Mild) | None => {
            if doctor.has_specialty("Sleep Hygiene") {
                bonus += weights.mild_hygiene;
                reasons.push(format!("नींद स्वच्छता विशेषज्ञता (+{:.0} अंक)", weights.mild_hygiene));
            }
            if doctor.has_specialty("Behavioral Sleep Therapy") {
                bonus += weights.mild_behavioral;
                reasons.push(format!("व्यवहार नींद चिकित्सा (+{:.0} अंक)", weights.mild_behavioral));
            }
        }
    }

    bonus
}
