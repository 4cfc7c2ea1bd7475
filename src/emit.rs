// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use crate::{error::AssetError, transcode::Pixmap};
use std::{fmt::Write as _, fs, path::Path};
use tracing::debug;

/// Pixel format tag written into the descriptor header.
///
/// Only ARGB8888 is produced today. This is an enum rather than a hardcoded
/// string so that adding a second target format forces every call site to
/// state which layout it wants instead of inheriting an assumption.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorFormat {
    /// 32-bit color, stored in memory as B,G,R,A per pixel.
    Argb8888,
}

impl ColorFormat {
    /// The LVGL enumerator spelled into the generated descriptor.
    pub fn c_name(self) -> &'static str {
        match self {
            ColorFormat::Argb8888 => "LV_COLOR_FORMAT_ARGB8888",
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            ColorFormat::Argb8888 => 4,
        }
    }
}

// Hex literals per row in the emitted array. Formatting only; rewrapping at
// a different width decodes to the same bytes.
const VALUES_PER_ROW: usize = 16;

/// Renders the C source for one image: the pixel data array followed by the
/// `lv_img_dsc_t` descriptor referencing it.
///
/// The array is named `<array_ident>_map` and holds every byte of the
/// pixmap as a lowercase two-digit hex literal, 16 per row, with a trailing
/// comma on every row. The descriptor is named `<record_ident>` and lists
/// its fields in fixed order: format tag, width, height, data_size, data
/// pointer. `data_size` is derived from the dimensions rather than measured,
/// so the descriptor and the array can never disagree.
pub fn render(
    array_ident: &str,
    record_ident: &str,
    format: ColorFormat,
    pixmap: &Pixmap,
) -> String {
    let data = pixmap.data();
    let data_size =
        pixmap.width() as usize * pixmap.height() as usize * format.bytes_per_pixel();

    // 6 characters per value ("0x00, ") dominates the output size
    let mut out = String::with_capacity(data.len() * 6 + 256);
    out.push_str("#include \"lvgl.h\"\n\n");

    let _ = writeln!(out, "const uint8_t {array_ident}_map[] = {{");
    for row in data.chunks(VALUES_PER_ROW) {
        out.push_str("  ");
        for (i, byte) in row.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "0x{byte:02x}");
        }
        out.push_str(",\n");
    }
    out.push_str("};\n\n");

    let _ = writeln!(out, "const lv_img_dsc_t {record_ident} = {{");
    let _ = writeln!(out, "  .header.cf = {},", format.c_name());
    let _ = writeln!(out, "  .header.w = {},", pixmap.width());
    let _ = writeln!(out, "  .header.h = {},", pixmap.height());
    let _ = writeln!(out, "  .data_size = {data_size},");
    let _ = writeln!(out, "  .data = {array_ident}_map,");
    out.push_str("};\n");

    out
}

/// Renders the asset source and writes it to `output_path`, truncating any
/// existing content. Parent directories are not created.
///
/// The text is rendered fully in memory before the file is touched, so a
/// failure during rendering or decoding never leaves an output file behind.
///
/// # Errors
///
/// Returns [`AssetError::Io`] when the destination cannot be opened for
/// writing (missing directory, permission denied).
pub fn emit(
    array_ident: &str,
    record_ident: &str,
    format: ColorFormat,
    pixmap: &Pixmap,
    output_path: &Path,
) -> Result<(), AssetError> {
    let text = render(array_ident, record_ident, format, pixmap);
    fs::write(output_path, &text).map_err(|e| AssetError::Io {
        path: output_path.to_path_buf(),
        source: e,
    })?;
    debug!("wrote {} ({} bytes)", output_path.display(), text.len());
    Ok(())
}
