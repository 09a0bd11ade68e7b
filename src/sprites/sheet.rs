//! Sprite sheet geometry and decoding.
//!
//! A sheet is a `cols x rows` grid of equally sized frames. Frames are
//! addressed by a flattened offset `row * cols + col`, with row 0 being the
//! bottom band of the image.

use bevy::prelude::*;
use image::{DynamicImage, ImageError, ImageReader};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::movement::Direction;

/// Error type for sprite sheet loading failures.
#[derive(Debug)]
pub enum SheetLoadError {
    Open { path: PathBuf, source: io::Error },
    Decode { path: PathBuf, source: ImageError },
    Layout {
        width: u32,
        height: u32,
        cols: usize,
        rows: usize,
    },
}

impl std::fmt::Display for SheetLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "Failed to open {}: {}", path.display(), source)
            }
            Self::Decode { path, source } => {
                write!(f, "Failed to decode {}: {}", path.display(), source)
            }
            Self::Layout {
                width,
                height,
                cols,
                rows,
            } => write!(
                f,
                "Cannot split a {}x{} image into {} columns and {} rows",
                width, height, cols, rows
            ),
        }
    }
}

impl std::error::Error for SheetLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Layout { .. } => None,
        }
    }
}

/// Grid dimensions of a sheet in frames and pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    pub cols: usize,
    pub rows: usize,
    pub width: f32,
    pub height: f32,
}

impl SheetLayout {
    /// Validate a grid against the decoded image size.
    ///
    /// Needs an idle column plus at least one walk column, a row per
    /// facing direction, and at least one pixel per cell.
    pub fn new(width: u32, height: u32, cols: usize, rows: usize) -> Result<Self, SheetLoadError> {
        let fits = cols >= 2
            && rows >= Direction::ALL.len()
            && width as usize >= cols
            && height as usize >= rows;
        if !fits {
            return Err(SheetLoadError::Layout {
                width,
                height,
                cols,
                rows,
            });
        }

        Ok(Self {
            cols,
            rows,
            width: width as f32,
            height: height as f32,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.cols * self.rows
    }

    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(
            self.width / self.cols as f32,
            self.height / self.rows as f32,
        )
    }

    /// Rectangle of frame `offset` with the origin at the sheet's bottom-left.
    pub fn frame_rect(&self, offset: usize) -> Rect {
        debug_assert!(offset < self.frame_count(), "frame offset out of range");
        let cell = self.cell_size();
        let min = Vec2::new(
            (offset % self.cols) as f32 * cell.x,
            (offset / self.cols) as f32 * cell.y,
        );
        Rect::from_corners(min, min + cell)
    }

    /// Same frame as [`Self::frame_rect`], in image space (origin top-left, y down).
    pub fn image_rect(&self, offset: usize) -> Rect {
        let rect = self.frame_rect(offset);
        Rect::new(
            rect.min.x,
            self.height - rect.max.y,
            rect.max.x,
            self.height - rect.min.y,
        )
    }
}

/// The decoded sheet shared by every drawn frame.
#[derive(Resource, Debug, Clone)]
pub struct SpriteSheet {
    pub image: Handle<Image>,
    pub layout: SheetLayout,
}

impl SpriteSheet {
    pub fn image_rect(&self, offset: usize) -> Rect {
        self.layout.image_rect(offset)
    }
}

/// Open and fully decode the sheet image. The file is closed before returning.
pub fn load_sheet_image(path: &Path) -> Result<DynamicImage, SheetLoadError> {
    let open_error = |source| SheetLoadError::Open {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_error)?;
    ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(open_error)?
        .decode()
        .map_err(|source| SheetLoadError::Decode {
            path: path.to_path_buf(),
            source,
        })
}
