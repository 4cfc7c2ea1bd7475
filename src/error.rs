// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use std::{io, path::PathBuf};

/// Error raised while converting a single (image, identifier) pair.
///
/// Each variant carries the path of the file that failed so a batch driver
/// can report which asset broke and decide on its own whether to abort or
/// carry on with the remaining assets. Errors are terminal for the pair that
/// raised them; there is no retry or partial-recovery path.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The source image could not be opened or parsed.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        /// Path of the image that failed to decode.
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output file could not be opened or written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Path of the output file that failed.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
