// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! # EdgeFirst Display Asset Generator Library
//!
//! This library converts raster images into statically-linkable C source
//! files for LVGL-based display firmware. Each input image becomes one
//! generated `.c` file containing the pixel data as a `uint8_t` array plus
//! an `lv_img_dsc_t` descriptor referencing it, ready to be compiled into
//! the firmware image.
//!
//! ## Pipeline
//!
//! - **Transcode**: decode any raster image into 8-bit RGBA samples and
//!   reorder each pixel to the B,G,R,A byte layout LVGL expects for
//!   `LV_COLOR_FORMAT_ARGB8888` on a little-endian target.
//! - **Emit**: render the reordered buffer as a hex array literal together
//!   with a fixed-layout descriptor record, and write the result to the
//!   output file.
//!
//! Each (image, identifier) pair is an independent, repeatable
//! transformation: no state is carried between pairs and re-running the
//! pipeline on identical inputs produces byte-identical output files.
//!
//! ## Example
//!
//! ```no_run
//! use edgefirst_assetgen::emit::{emit, ColorFormat};
//! use edgefirst_assetgen::transcode::Pixmap;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), edgefirst_assetgen::error::AssetError> {
//! let pixmap = Pixmap::open("drinks/cocacola.png")?;
//! emit(
//!     "img_cocacola",
//!     "img_cocacola",
//!     ColorFormat::Argb8888,
//!     &pixmap,
//!     Path::new("src/ui/assets/img_cocacola.c"),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod emit;
pub mod error;
pub mod transcode;
