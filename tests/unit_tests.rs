// Unit tests for the SleepMitra decision logic

use sleepmitra::catalog;
use sleepmitra::core::{
    calculate_doctor_score, calculate_sleep_metrics, create_therapy_plan, filter_doctors, rank_doctors,
    score_severity, CoreError, SessionState,
};
use sleepmitra::models::{
    DiaryEntry, DoctorFilter, ModuleState, RankingQuery, RankingWeights, ReminderLead, SeverityTier,
};
use chrono::{NaiveDate, NaiveTime};
use std::collections::{HashMap, HashSet};

fn responses(values: [i32; 7]) -> HashMap<String, i32> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("isi_{}", i + 1), *v))
        .collect()
}

fn ids(recommendations: &[sleepmitra::DoctorRecommendation]) -> Vec<&str> {
    recommendations.iter().map(|r| r.doctor.id.as_str()).collect()
}

#[test]
fn test_score_example_questionnaire() {
    let result = score_severity(&responses([2, 1, 2, 1, 1, 1, 1])).unwrap();

    assert_eq!(result.total_score, 9);
    assert_eq!(result.max_score, 28);
    assert_eq!(result.severity, SeverityTier::Moderate);
    assert_eq!(result.severity_label, "मध्यम");
    assert_eq!(result.recommendations.len(), 4);
}

#[test]
fn test_score_equals_sum_of_answers() {
    let cases = [
        [0, 0, 0, 0, 0, 0, 0],
        [4, 4, 4, 4, 4, 4, 4],
        [1, 2, 3, 4, 0, 1, 2],
        [3, 3, 3, 3, 3, 0, 0],
    ];

    for values in cases {
        let result = score_severity(&responses(values)).unwrap();
        assert_eq!(result.total_score as i32, values.iter().sum::<i32>());
        assert!(result.total_score <= 28);
    }
}

#[test]
fn test_tier_thresholds() {
    let tier = |values| score_severity(&responses(values)).unwrap().severity;

    assert_eq!(tier([1, 1, 1, 1, 1, 1, 1]), SeverityTier::Mild); // 7
    assert_eq!(tier([2, 1, 1, 1, 1, 1, 1]), SeverityTier::Moderate); // 8
    assert_eq!(tier([2, 2, 2, 2, 2, 2, 2]), SeverityTier::Moderate); // 14
    assert_eq!(tier([3, 2, 2, 2, 2, 2, 2]), SeverityTier::Severe); // 15
}

#[test]
fn test_missing_answer_is_invalid_input() {
    let mut answers = responses([1, 1, 1, 1, 1, 1, 1]);
    answers.remove("isi_4");

    assert!(matches!(score_severity(&answers), Err(CoreError::InvalidInput(_))));
}

#[test]
fn test_out_of_range_answer_is_invalid_input() {
    assert!(matches!(
        score_severity(&responses([1, 1, 5, 1, 1, 1, 1])),
        Err(CoreError::InvalidInput(_))
    ));
    assert!(matches!(
        score_severity(&responses([1, 1, -1, 1, 1, 1, 1])),
        Err(CoreError::InvalidInput(_))
    ));
}

#[test]
fn test_ranking_limit_and_uniqueness() {
    for limit in 0..8 {
        let result = rank_doctors(catalog::doctors(), Some(SeverityTier::Moderate), "हिंदी", None, limit);
        assert!(result.len() <= limit);

        let unique: HashSet<&str> = ids(&result).into_iter().collect();
        assert_eq!(unique.len(), result.len());
    }
}

#[test]
fn test_moderate_ranking_on_catalog() {
    let result = rank_doctors(catalog::doctors(), Some(SeverityTier::Moderate), "हिंदी", None, 3);

    assert_eq!(ids(&result), vec!["dr_vikram_jain", "dr_rajesh_kumar", "dr_priya_sharma"]);
    assert!((result[0].score - 145.0).abs() < 1e-9);
}

#[test]
fn test_telugu_speaker_gets_language_bonus() {
    let result = rank_doctors(catalog::doctors(), None, "तेलुगु", None, 6);
    let position = result
        .iter()
        .position(|r| r.doctor.id == "dr_sunita_reddy")
        .unwrap();

    // Only Telugu speaker; the bonus lifts her from last to fourth
    assert_eq!(position, 3);
    assert!(result
        .iter()
        .filter(|r| r.doctor.id != "dr_sunita_reddy")
        .all(|r| r.reasons[1].contains("मैच नहीं")));

    let unmatched = rank_doctors(catalog::doctors(), None, "कन्नड़", None, 6);
    assert_eq!(unmatched[5].doctor.id, "dr_sunita_reddy");
    assert!((result[position].score - unmatched[5].score - 20.0).abs() < 1e-9);
}

#[test]
fn test_location_reason_only_when_requested() {
    let doctor = catalog::find_doctor("dr_priya_sharma").unwrap();
    let weights = RankingWeights::default();

    let mut query = RankingQuery {
        severity: None,
        language: "हिंदी".to_string(),
        location: None,
        limit: 3,
    };
    let (without_location, reasons) = calculate_doctor_score(doctor, &query, &weights);
    assert_eq!(reasons.len(), 4);

    query.location = Some("मुंबई".to_string());
    let (with_location, reasons) = calculate_doctor_score(doctor, &query, &weights);
    assert_eq!(reasons.len(), 5);
    assert!((with_location - without_location - 15.0).abs() < 1e-9);
}

#[test]
fn test_ranking_empty_catalog() {
    assert!(rank_doctors(&[], Some(SeverityTier::Severe), "हिंदी", Some("दिल्ली"), 3).is_empty());
}

#[test]
fn test_blank_location_ranks_like_no_location() {
    let baseline = rank_doctors(catalog::doctors(), None, "हिंदी", None, 6);

    for blank in ["", "  "] {
        let result = rank_doctors(catalog::doctors(), None, "हिंदी", Some(blank), 6);

        assert_eq!(ids(&result), ids(&baseline));
        for (with_blank, without) in result.iter().zip(&baseline) {
            assert_eq!(with_blank.score, without.score);
            assert_eq!(with_blank.reasons, without.reasons);
        }
    }
}

#[test]
fn test_filter_preserves_catalog_order() {
    let filter = DoctorFilter {
        specialty: None,
        location: None,
        min_rating: Some(4.8),
    };

    let result = filter_doctors(catalog::doctors(), &filter);
    let expected: Vec<&str> = catalog::doctors()
        .iter()
        .filter(|d| d.rating >= 4.8)
        .map(|d| d.id.as_str())
        .collect();
    let actual: Vec<&str> = result.iter().map(|d| d.id.as_str()).collect();

    // A strict subsequence, so reordering would show
    assert!(actual.len() > 1 && actual.len() < catalog::doctors().len());
    assert_eq!(actual, expected);
}

#[test]
fn test_sleep_efficiency_definition() {
    let entry = |bed: (u32, u32), wake: (u32, u32), latency, wake_ups| DiaryEntry {
        date: NaiveDate::from_ymd_opt(2026, 10, 10).unwrap(),
        bedtime: NaiveTime::from_hms_opt(bed.0, bed.1, 0).unwrap(),
        wake_time: NaiveTime::from_hms_opt(wake.0, wake.1, 0).unwrap(),
        sleep_latency: latency,
        wake_ups,
        sleep_quality: 5,
        notes: String::new(),
    };

    // 8h and 7.5h in bed; asleep 8 - 0.5 - 0.5 = 7 and 7.5 - 0.25 - 0.25 = 7
    let metrics = calculate_sleep_metrics(&[entry((23, 0), (7, 0), 30, 2), entry((22, 30), (6, 0), 15, 1)]).unwrap();

    assert!((metrics.sleep_efficiency - 14.0 / 15.5 * 100.0).abs() < 1e-9);
    assert!((metrics.avg_sleep_duration - 7.0).abs() < 1e-9);
}

#[test]
fn test_module_progression_is_forward_only() {
    let mut plan = create_therapy_plan(SeverityTier::Severe);
    let now = NaiveDate::from_ymd_opt(2026, 10, 10)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap();

    let ids: Vec<String> = plan.modules.iter().map(|m| m.module_id.clone()).collect();
    for (i, id) in ids.iter().enumerate() {
        plan.complete_module(id, now).unwrap();

        assert!(plan.modules[..=i].iter().all(|m| m.state == ModuleState::Completed));
        if let Some(next) = plan.modules.get(i + 1) {
            assert_eq!(next.state, ModuleState::Unlocked);
        }
        assert!(plan.complete_module(id, now).is_err());
    }
}

#[test]
fn test_reminder_time_is_session_time_minus_lead() {
    let now = NaiveDate::from_ymd_opt(2026, 10, 10)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let scheduled_at = now + chrono::Duration::days(3);

    for lead in [
        ReminderLead::FifteenMinutes,
        ReminderLead::ThirtyMinutes,
        ReminderLead::OneHour,
        ReminderLead::TwoHours,
        ReminderLead::OneDay,
    ] {
        let mut state = SessionState::new();
        let (_, reminder) = state
            .schedule_therapy_session("sleep_hygiene", scheduled_at, lead, String::new(), now)
            .unwrap();
        assert_eq!(reminder.remind_at, scheduled_at - lead.duration());
    }
}
