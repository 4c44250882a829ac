use crate::core::error::CoreError;
use crate::models::{DiaryEntry, InsightKind, SleepInsight, SleepMetrics};

/// Time lost per night-time awakening, in hours
const HOURS_PER_WAKE_UP: f64 = 0.25;

pub const MAX_SLEEP_LATENCY: u16 = 120;
pub const MAX_WAKE_UPS: u8 = 10;

/// Reject values outside the diary form's ranges
pub fn validate_entry(entry: &DiaryEntry) -> Result<(), CoreError> {
    if entry.sleep_latency > MAX_SLEEP_LATENCY {
        return Err(CoreError::InvalidInput(format!(
            "sleep latency must be at most {} minutes",
            MAX_SLEEP_LATENCY
        )));
    }
    if entry.wake_ups > MAX_WAKE_UPS {
        return Err(CoreError::InvalidInput(format!(
            "wake-ups must be at most {}",
            MAX_WAKE_UPS
        )));
    }
    if !(1..=10).contains(&entry.sleep_quality) {
        return Err(CoreError::InvalidInput(
            "sleep quality must be between 1 and 10".to_string(),
        ));
    }
    Ok(())
}

/// Hours between bedtime and wake time, crossing midnight when needed
pub fn time_in_bed_hours(entry: &DiaryEntry) -> f64 {
    let mut seconds = (entry.wake_time - entry.bedtime).num_seconds();
    if seconds < 0 {
        seconds += 24 * 3600;
    }
    seconds as f64 / 3600.0
}

/// Estimated hours actually asleep, never negative
pub fn sleep_duration_hours(entry: &DiaryEntry) -> f64 {
    let asleep = time_in_bed_hours(entry)
        - entry.sleep_latency as f64 / 60.0
        - entry.wake_ups as f64 * HOURS_PER_WAKE_UP;
    asleep.max(0.0)
}

/// Aggregate metrics over the diary; `None` when there are no entries
pub fn calculate_sleep_metrics(entries: &[DiaryEntry]) -> Option<SleepMetrics> {
    if entries.is_empty() {
        return None;
    }

    let count = entries.len() as f64;
    let total_in_bed: f64 = entries.iter().map(time_in_bed_hours).sum();
    let total_asleep: f64 = entries.iter().map(sleep_duration_hours).sum();

    let sleep_efficiency = if total_in_bed > 0.0 {
        total_asleep / total_in_bed * 100.0
    } else {
        0.0
    };

    Some(SleepMetrics {
        sleep_efficiency,
        avg_sleep_duration: total_asleep / count,
        avg_sleep_latency: entries.iter().map(|e| e.sleep_latency as f64).sum::<f64>() / count,
        avg_wake_ups: entries.iter().map(|e| e.wake_ups as f64).sum::<f64>() / count,
        avg_sleep_quality: entries.iter().map(|e| e.sleep_quality as f64).sum::<f64>() / count,
    })
}

/// Trend and continuity feedback for the analytics view
pub fn sleep_insights(metrics: &SleepMetrics) -> Vec<SleepInsight> {
    let trend = if metrics.avg_sleep_duration >= 7.0 && metrics.avg_sleep_quality >= 7.0 {
        SleepInsight {
            kind: InsightKind::PositiveTrend,
            title: "सकारात्मक रुझान".to_string(),
            message: format!(
                "पिछले सप्ताह में आपकी नींद की गुणवत्ता में सुधार हुआ है। औसत नींद की अवधि {:.1} घंटे है।",
                metrics.avg_sleep_duration
            ),
        }
    } else {
        SleepInsight {
            kind: InsightKind::NeedsImprovement,
            title: "सुधार की आवश्यकता".to_string(),
            message: "नींद की गुणवत्ता में सुधार की आवश्यकता है। नियमित दिनचर्या बनाए रखें।".to_string(),
        }
    };

    let continuity = if metrics.avg_wake_ups <= 2.0 {
        SleepInsight {
            kind: InsightKind::GoodContinuity,
            title: "अच्छी नींद की निरंतरता".to_string(),
            message: "आपकी नींद में कम व्यवधान है। यह अच्छी नींद की गुणवत्ता का संकेत है।".to_string(),
        }
    } else {
        SleepInsight {
            kind: InsightKind::SleepDisruption,
            title: "नींद में व्यवधान".to_string(),
            message: "रात में जागने की संख्या को कम करने के लिए नियमित दिनचर्या बनाए रखें।".to_string(),
        }
    };

    vec![trend, continuity]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn entry(bed: (u32, u32), wake: (u32, u32), latency: u16, wake_ups: u8, quality: u8) -> DiaryEntry {
        DiaryEntry {
            date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            bedtime: NaiveTime::from_hms_opt(bed.0, bed.1, 0).unwrap(),
            wake_time: NaiveTime::from_hms_opt(wake.0, wake.1, 0).unwrap(),
            sleep_latency: latency,
            wake_ups,
            sleep_quality: quality,
            notes: String::new(),
        }
    }

    #[test]
    fn test_time_in_bed_crosses_midnight() {
        assert_eq!(time_in_bed_hours(&entry((23, 0), (7, 0), 0, 0, 7)), 8.0);
        assert_eq!(time_in_bed_hours(&entry((1, 0), (7, 30), 0, 0, 7)), 6.5);
    }

    #[test]
    fn test_sleep_duration() {
        // 8h in bed - 30min latency - 2 * 15min
        let e = entry((23, 0), (7, 0), 30, 2, 7);
        assert!((sleep_duration_hours(&e) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_sleep_duration_floored() {
        let e = entry((23, 0), (23, 0), 30, 2, 7);
        assert_eq!(sleep_duration_hours(&e), 0.0);
    }

    #[test]
    fn test_metrics() {
        let entries = vec![entry((23, 0), (7, 0), 30, 2, 8), entry((22, 0), (6, 0), 0, 0, 6)];
        let m = calculate_sleep_metrics(&entries).unwrap();

        // asleep 7 + 8 = 15 out of 16 in bed
        assert!((m.sleep_efficiency - 93.75).abs() < 1e-9);
        assert!((m.avg_sleep_duration - 7.5).abs() < 1e-9);
        assert_eq!(m.avg_sleep_latency, 15.0);
        assert_eq!(m.avg_wake_ups, 1.0);
        assert_eq!(m.avg_sleep_quality, 7.0);
    }

    #[test]
    fn test_no_entries_no_metrics() {
        assert!(calculate_sleep_metrics(&[]).is_none());
    }

    #[test]
    fn test_insights() {
        let good = calculate_sleep_metrics(&[entry((22, 0), (6, 0), 0, 1, 8)]).unwrap();
        let kinds: Vec<_> = sleep_insights(&good).into_iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![InsightKind::PositiveTrend, InsightKind::GoodContinuity]);

        let poor = calculate_sleep_metrics(&[entry((1, 0), (6, 0), 60, 4, 4)]).unwrap();
        let kinds: Vec<_> = sleep_insights(&poor).into_iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![InsightKind::NeedsImprovement, InsightKind::SleepDisruption]);
    }

    #[test]
    fn test_validate_entry() {
        assert!(validate_entry(&entry((23, 0), (7, 0), 15, 1, 7)).is_ok());
        assert!(validate_entry(&entry((23, 0), (7, 0), 121, 1, 7)).is_err());
        assert!(validate_entry(&entry((23, 0), (7, 0), 15, 11, 7)).is_err());
        assert!(validate_entry(&entry((23, 0), (7, 0), 15, 1, 0)).is_err());
    }
}
