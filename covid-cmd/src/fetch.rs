//! Download the source CSVs into a local directory.

use anyhow::Context;
use covid_data::datasets::Dataset;
use covid_data::fetch::DatasetClient;
use log::info;
use std::path::Path;
use std::time::Duration;

/// Pause between consecutive downloads.
const REQUEST_PAUSE: Duration = Duration::from_millis(250);

/// Fetch every dataset from `base_url` and write it to `out_dir/<file name>`.
///
/// Stops at the first dataset that still fails after retries; files already
/// written are left in place.
pub async fn run_fetch(out_dir: &str, base_url: &str) -> anyhow::Result<()> {
    let out = Path::new(out_dir);
    std::fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory {}", out_dir))?;

    let client = DatasetClient::new(base_url)?;
    info!("Fetching {} datasets from {}", Dataset::ALL.len(), base_url);

    for (i, dataset) in Dataset::ALL.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(REQUEST_PAUSE).await;
        }
        let body = client
            .fetch(*dataset)
            .await
            .with_context(|| format!("Failed to fetch {}", dataset))?;
        let path = out.join(dataset.file_name());
        std::fs::write(&path, &body)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {} ({} bytes)", path.display(), body.len());
    }

    info!("Fetch complete. Output: {}", out_dir);
    Ok(())
}
