use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use reqwest::Client;
use serde::Serialize;
use tokio::fs;
use tracing::{info, warn};

use crate::config::config::AppConfig;
use crate::config::products::ProductSpec;
use crate::error::ScrapeError;
use crate::scraping::extract_data::extract_data;
use crate::utilities::clean_image_url::clean_image_url;
use crate::utilities::download_image::download_image;
use crate::utilities::fetch_page::fetch_page;
use crate::utilities::generate_random_delay::generate_random_delay;
use crate::utilities::write_products_json::write_products_json;

/// Written to `price` when the page had no price token.
pub const PRICE_PLACEHOLDER: &str = "N/A";

/// One successfully downloaded product, serialized verbatim into the results file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub id: usize,
    pub name: String,
    pub url: String,
    pub price: String,
    pub image: String,
    pub image_url: String,
}

#[derive(Debug)]
pub struct ProductFailure {
    pub id: usize,
    pub name: String,
    pub reason: String,
}

#[derive(Debug)]
pub struct RunReport {
    pub total: usize,
    pub records: Vec<ResultRecord>,
    pub failures: Vec<ProductFailure>,
    pub results_path: PathBuf,
}

pub fn image_filename(id: usize) -> String {
    format!("shirt-{}.jpg", id)
}

/// Scrapes every product in order, one at a time, then writes the results file.
///
/// Per-product failures are reported and skipped. Only creating the output
/// directory or writing the results file aborts the run.
pub async fn process_products(
    client: &Client,
    config: &AppConfig,
    products: &[ProductSpec<'_>],
) -> Result<RunReport> {
    let output_dir = Path::new(&config.output.dir);
    fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    println!("{}", "Downloading product images...".bold());

    let total = products.len();
    let mut records = Vec::new();
    let mut failures = Vec::new();

    for (index, product) in products.iter().enumerate() {
        let id = index + 1;
        println!("\n[{}/{}] Processing: {}", id, total, product.display_name);
        println!("URL: {}", product.page_url);

        match process_product(client, config, output_dir, id, product).await {
            Ok(record) => records.push(record),
            Err(e) => failures.push(ProductFailure {
                id,
                name: product.display_name.to_string(),
                reason: e.to_string(),
            }),
        }

        if id < total {
            generate_random_delay(config.http.delay_min_ms, config.http.delay_max_ms).await;
        }
    }

    let results_path = output_dir.join(&config.output.results_file);
    write_products_json(&results_path, &records)
        .await
        .with_context(|| format!("Failed to write {}", results_path.display()))?;

    info!(succeeded = records.len(), total, path = %results_path.display(), "Run complete");

    Ok(RunReport {
        total,
        records,
        failures,
        results_path,
    })
}

async fn process_product(
    client: &Client,
    config: &AppConfig,
    output_dir: &Path,
    id: usize,
    product: &ProductSpec<'_>,
) -> Result<ResultRecord, ScrapeError> {
    let html = fetch_page(client, product.page_url).await.map_err(|e| {
        eprintln!("{}", format!("Error fetching {}: {}", product.page_url, e).red());
        e
    })?;

    let Some(extraction) = extract_data(&html) else {
        eprintln!(
            "{}",
            format!("✗ Could not extract image URL for {}", product.display_name).red()
        );
        return Err(ScrapeError::NoMatch {
            url: product.page_url.to_string(),
        });
    };

    let image_url = clean_image_url(&extraction.image_url);
    let filename = image_filename(id);
    let destination = output_dir.join(&filename);

    let size = download_image(client, &image_url, &destination)
        .await
        .map_err(|e| {
            eprintln!("{}", format!("✗ Failed to download {}: {}", filename, e).red());
            e
        })?;

    let size_kb = size as f64 / 1024.0;
    if (size as u64) < config.download.min_expected_bytes {
        warn!(image_url = %image_url, bytes = size, "Downloaded image is smaller than expected");
        println!(
            "{}",
            format!(
                "⚠ Downloaded {} but file is small ({:.1} KB), might be a thumbnail",
                filename, size_kb
            )
            .yellow()
        );
    } else {
        println!("{}", format!("✓ Downloaded: {} ({:.1} KB)", filename, size_kb).green());
    }

    Ok(ResultRecord {
        id,
        name: product.display_name.to_string(),
        url: product.page_url.to_string(),
        price: extraction
            .price
            .unwrap_or_else(|| PRICE_PLACEHOLDER.to_string()),
        image: filename,
        image_url,
    })
}

pub fn print_summary(report: &RunReport) {
    let rule = "=".repeat(60);
    println!("\n{}", rule);
    println!(
        "{}",
        format!("Downloaded {}/{} images successfully", report.records.len(), report.total).bold()
    );
    println!("{}\n", rule);

    if !report.records.is_empty() {
        println!("\nProduct Summary:");
        println!("{}", "-".repeat(60));
        for item in &report.records {
            println!("\n{}. {}", item.id, item.name);
            if item.price == PRICE_PLACEHOLDER {
                println!("   Price: {}", PRICE_PLACEHOLDER);
            } else {
                println!("   Price: ${}", item.price);
            }
            println!("   URL: {}", item.url);
            println!("   Image: {}", item.image);
        }
    }

    if !report.failures.is_empty() {
        println!("\n{}", "Failed:".red());
        for failure in &report.failures {
            println!("  - {}: {} ({})", image_filename(failure.id), failure.name, failure.reason);
        }
    }

    println!(
        "\n{}",
        format!("✓ Saved product data to: {}", report.results_path.display()).green()
    );
}
