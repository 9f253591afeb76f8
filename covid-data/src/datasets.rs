//! Catalog of the NYC Health CSV resources the dashboard reads.

use serde::Serialize;
use std::fmt;

/// Raw file root of the nychealth/coronavirus-data repository.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/nychealth/coronavirus-data/master";

/// One of the source CSV files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dataset {
    Summary,
    Tests,
    CaseHospDeath,
    ByBoro,
    BySex,
    ByRace,
    ByPoverty,
    ByAge,
    Syndromic,
}

impl Dataset {
    /// Every dataset, in the order the dashboard loads them.
    pub const ALL: [Dataset; 9] = [
        Dataset::Summary,
        Dataset::Tests,
        Dataset::CaseHospDeath,
        Dataset::ByBoro,
        Dataset::BySex,
        Dataset::ByRace,
        Dataset::ByPoverty,
        Dataset::ByAge,
        Dataset::Syndromic,
    ];

    /// File name in the upstream repository (and in local data directories).
    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::Summary => "summary.csv",
            Dataset::Tests => "tests.csv",
            Dataset::CaseHospDeath => "case-hosp-death.csv",
            Dataset::ByBoro => "by-boro.csv",
            Dataset::BySex => "by-sex.csv",
            Dataset::ByRace => "by-race.csv",
            Dataset::ByPoverty => "by-poverty.csv",
            Dataset::ByAge => "by-age.csv",
            Dataset::Syndromic => "syndromic_data.csv",
        }
    }

    /// Full URL of this dataset under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.file_name())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
