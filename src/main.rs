// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! flag-colors command line tool.
//!
//! `generate` (the default) rebuilds the color manifest from the flag image
//! directory; `cluster` groups the colors of an existing manifest.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use flag_colors::io::serialization;
use flag_colors::{cluster_catalog, CatalogBuilder, Config};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Average-color manifest for a directory of flag images")]
struct Cli {
    /// YAML or JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Average every flag image and write the color manifest
    Generate(GenerateArgs),
    /// Group the colors of a manifest with k-means
    Cluster(ClusterArgs),
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Directory holding the flag images
    #[arg(long)]
    image_dir: Option<PathBuf>,

    /// Prefix used for thumbnail paths
    #[arg(long)]
    thumbnail_dir: Option<String>,

    /// Manifest output path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Image extension to include (repeatable)
    #[arg(short, long = "extension")]
    extensions: Vec<String>,
}

#[derive(Args, Debug)]
struct ClusterArgs {
    /// Manifest to read (defaults to the configured manifest output)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Report output path, YAML for .yaml/.yml and JSON otherwise
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of clusters
    #[arg(short)]
    k: Option<usize>,

    /// Number of k-means iterations
    #[arg(long)]
    iterations: Option<usize>,

    /// RNG seed for reproducible centroids
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    match cli
        .command
        .unwrap_or(Command::Generate(GenerateArgs::default()))
    {
        Command::Generate(args) => generate(config, args),
        Command::Cluster(args) => cluster(config, args),
    }
}

fn generate(mut config: Config, args: GenerateArgs) -> Result<()> {
    if let Some(dir) = args.image_dir {
        config.image_dir = dir;
    }
    if let Some(dir) = args.thumbnail_dir {
        config.thumbnail_dir = dir;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if !args.extensions.is_empty() {
        config.extensions = args.extensions;
    }

    let builder = CatalogBuilder::new(config)?;
    builder.run().with_context(|| {
        format!(
            "Failed to build catalog from {}",
            builder.config().image_dir.display()
        )
    })?;

    println!(
        "{} has been updated with accurate, unrounded, normalized values.",
        builder.config().output.display()
    );
    Ok(())
}

fn cluster(mut config: Config, args: ClusterArgs) -> Result<()> {
    if let Some(k) = args.k {
        config.clustering.k = k;
    }
    if let Some(iterations) = args.iterations {
        config.clustering.iterations = iterations;
    }
    if args.seed.is_some() {
        config.clustering.seed = args.seed;
    }
    if let Some(output) = args.output {
        config.clustering.output = output;
    }
    config.clustering.validate()?;

    let input = args.input.unwrap_or_else(|| config.output.clone());
    let catalog = serialization::import_json(&input)
        .with_context(|| format!("Failed to read manifest {}", input.display()))?;
    log::info!("Loaded {} entries from {}", catalog.len(), input.display());

    let report = cluster_catalog(&catalog, &config.clustering)?;
    for cluster in &report.clusters {
        log::info!(
            "Cluster {} ({}): {}",
            cluster.index + 1,
            cluster.rgb_string,
            cluster.members.join(", ")
        );
    }

    let output = &config.clustering.output;
    serialization::export_report(&report, output)
        .with_context(|| format!("Failed to write cluster report {}", output.display()))?;

    println!("Wrote {} clusters to {}", report.clusters.len(), output.display());
    Ok(())
}
