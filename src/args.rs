// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use clap::Parser;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

/// One image conversion job: the source path plus the C identifiers to
/// emit.
///
/// Parsed from a `PATH[:ARRAY[:RECORD]]` argument. When `ARRAY` is omitted
/// it is derived from the file stem (lowercased, non-alphanumerics replaced
/// with `_`, prefixed with `img_`), and `RECORD` defaults to `ARRAY`. The
/// generated file declares the data array as `<ARRAY>_map` and the
/// descriptor as `<RECORD>`.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetSpec {
    /// Path of the source image.
    pub image: PathBuf,
    /// Base name of the generated data array (and of the output file).
    pub array_ident: String,
    /// Name of the generated `lv_img_dsc_t` variable.
    pub record_ident: String,
}

impl FromStr for AssetSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let image = PathBuf::from(parts.next().unwrap_or_default());
        if image.as_os_str().is_empty() {
            return Err("empty image path".to_string());
        }
        let array_ident = match parts.next() {
            Some(a) if !a.is_empty() => a.to_string(),
            _ => default_ident(&image)?,
        };
        let record_ident = match parts.next() {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => array_ident.clone(),
        };
        Ok(AssetSpec {
            image,
            array_ident,
            record_ident,
        })
    }
}

fn default_ident(path: &Path) -> Result<String, String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("cannot derive an identifier from {}", path.display()))?;
    let mut ident: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if !ident.starts_with("img_") {
        ident.insert_str(0, "img_");
    }
    Ok(ident)
}

/// Command-line arguments for the asset generator.
///
/// The generator itself is a pure (image, identifier) -> file
/// transformation; everything batch-shaped lives here. Arguments can be
/// given on the command line or via environment variables.
///
/// # Example
///
/// ```bash
/// # Derive identifiers from the file names
/// edgefirst-assetgen --out-dir src/ui/assets drinks/cocacola.png drinks/ron.png
///
/// # Explicit identifiers, keep converting after a failure
/// edgefirst-assetgen -k logo.png:img_logo:img_logo_dsc
/// ```
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Images to convert, each as PATH[:ARRAY[:RECORD]]
    #[arg(required = true)]
    pub assets: Vec<AssetSpec>,

    /// Directory the generated .c files are written into (must exist)
    #[arg(short, long, env = "ASSET_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Keep converting the remaining images after a failure
    #[arg(short, long, env = "ASSET_KEEP_GOING")]
    pub keep_going: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
