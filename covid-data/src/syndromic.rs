//! Series names in `syndromic_data.csv`.
//!
//! The file is wide: one `Date` column plus one column per
//! `Visit`/`Admit` x age band combination.

pub const DATE_COLUMN: &str = "Date";

/// Age bands reported in the syndromic data, youngest first.
pub const AGE_BANDS: [&str; 5] = ["0-17", "18-44", "45-64", "65-74", "75+"];

pub const VISIT_ALL_AGES: &str = "Visit All ages";
pub const ADMIT_ALL_AGES: &str = "Admit All ages";

/// Column holding emergency department visits for an age band.
pub fn visit_series(band: &str) -> String {
    format!("Visit {}", band)
}

/// Column holding hospital admissions for an age band.
pub fn admit_series(band: &str) -> String {
    format!("Admit {}", band)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_names_match_csv_headers() {
        assert_eq!(visit_series(AGE_BANDS[4]), "Visit 75+");
        assert_eq!(admit_series(AGE_BANDS[0]), "Admit 0-17");
        assert_eq!(visit_series("All ages"), VISIT_ALL_AGES);
        assert_eq!(admit_series("All ages"), ADMIT_ALL_AGES);
    }
}
