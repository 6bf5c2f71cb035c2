//! VP Template Ingest
//!
//! Reads the configured resource metadata template and reports what it
//! holds per resource kind.

use anyhow::{Context, Result};
use tracing::{debug, error, info};
use vp_utils::{init_logging, AppConfig, TemplateContents, TemplateFile, TemplateReader};

fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;
    info!("Starting VP Template Ingest");

    let mut template = TemplateFile::from_config(&config.template);
    info!(
        input_file = %template.path().display(),
        catalog_url = %config.template.catalog_url,
        "Reading resource metadata template"
    );

    let reader = TemplateReader::from_config(&config.template);
    let contents = match reader.read_all(&mut template) {
        Ok(contents) => contents,
        Err(err) => {
            error!(error = %err, code = err.error_code(), "Template read failed");
            return Err(err).with_context(|| {
                format!("Failed to read template {}", template.path().display())
            });
        }
    };

    report(&contents);
    Ok(())
}

fn report(contents: &TemplateContents) {
    let kinds = [
        ("organisations", contents.organisations.keys().collect::<Vec<_>>()),
        ("biobanks", contents.biobanks.keys().collect()),
        ("patient_registries", contents.patient_registries.keys().collect()),
        ("datasets", contents.datasets.keys().collect()),
        ("distributions", contents.distributions.keys().collect()),
    ];

    for (kind, titles) in kinds {
        info!(kind, records = titles.len(), "Resource kind read");
        for title in titles {
            debug!(kind, title = %title, "Record");
        }
    }

    info!(total = contents.total_records(), "Template ingest complete");
}
