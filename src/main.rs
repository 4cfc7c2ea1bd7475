// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use clap::Parser;
use edgefirst_assetgen::{
    args::{Args, AssetSpec},
    emit::{emit, ColorFormat},
    error::AssetError,
    transcode::Pixmap,
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut failures = 0usize;
    for spec in &args.assets {
        if let Err(e) = convert(spec, &args) {
            error!("{e}");
            failures += 1;
            if !args.keep_going {
                return ExitCode::FAILURE;
            }
        }
    }

    if failures > 0 {
        error!("{failures} of {} assets failed", args.assets.len());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn convert(spec: &AssetSpec, args: &Args) -> Result<(), AssetError> {
    let pixmap = Pixmap::open(&spec.image)?;
    let output = args.out_dir.join(format!("{}.c", spec.array_ident));
    emit(
        &spec.array_ident,
        &spec.record_ident,
        ColorFormat::Argb8888,
        &pixmap,
        &output,
    )?;
    info!("{} -> {} ({})", spec.image.display(), output.display(), pixmap);
    Ok(())
}
