use crate::core::scoring::{location_matches, preference};
use crate::models::{DoctorFilter, DoctorProfile};

/// Check if a doctor satisfies every provided filter
///
/// Absent or blank filters match everything.
#[inline]
pub fn matches_filter(doctor: &DoctorProfile, filter: &DoctorFilter) -> bool {
    // Specialty tag, exact
    if let Some(specialty) = preference(filter.specialty.as_deref()) {
        if !doctor.has_specialty(specialty) {
            return false;
        }
    }

    // Location, case-insensitive substring
    if let Some(location) = preference(filter.location.as_deref()) {
        if !location_matches(&doctor.location, location) {
            return false;
        }
    }

    // Minimum rating, inclusive
    if let Some(min_rating) = filter.min_rating {
        if doctor.rating < min_rating {
            return false;
        }
    }

    true
}

/// The "view all doctors" listing: catalog order, no ranking
pub fn filter_doctors(catalog: &[DoctorProfile], filter: &DoctorFilter) -> Vec<DoctorProfile> {
    catalog
        .iter()
        .filter(|doctor| matches_filter(doctor, filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn ids(doctors: &[DoctorProfile]) -> Vec<&str> {
        doctors.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_returns_catalog() {
        let result = filter_doctors(catalog::doctors(), &DoctorFilter::default());
        assert_eq!(result, catalog::doctors().to_vec());
    }

    #[test]
    fn test_specialty_filter() {
        let filter = DoctorFilter {
            specialty: Some("Sleep Apnea".to_string()),
            ..Default::default()
        };

        let result = filter_doctors(catalog::doctors(), &filter);
        assert_eq!(ids(&result), vec!["dr_rajesh_kumar", "dr_amit_singh"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let filter = DoctorFilter {
            specialty: Some("CBT-I".to_string()),
            location: None,
            min_rating: Some(4.8),
        };

        let result = filter_doctors(catalog::doctors(), &filter);
        assert_eq!(ids(&result), vec!["dr_rajesh_kumar", "dr_priya_sharma", "dr_vikram_jain"]);
    }

    #[test]
    fn test_location_filter() {
        let filter = DoctorFilter {
            location: Some("जयपुर".to_string()),
            ..Default::default()
        };

        let result = filter_doctors(catalog::doctors(), &filter);
        assert_eq!(ids(&result), vec!["dr_vikram_jain"]);
    }

    #[test]
    fn test_blank_filters_match_everything() {
        let filter = DoctorFilter {
            specialty: Some(String::new()),
            location: Some("  ".to_string()),
            min_rating: None,
        };

        assert_eq!(filter_doctors(catalog::doctors(), &filter).len(), catalog::doctors().len());
    }

    #[test]
    fn test_nothing_matches() {
        let filter = DoctorFilter {
            min_rating: Some(5.0),
            ..Default::default()
        };

        assert!(filter_doctors(catalog::doctors(), &filter).is_empty());
    }
}
