//! Core types and operations for the `pngdump` tool.
//!
//! This crate knows nothing about process arguments or exit codes. It
//! provides:
//! - a flat grayscale buffer model (`GrayImage` / `GrayImageView`),
//! - ROI parsing and bounds resolution (`RoiSpec` -> `Roi`),
//! - the two output transforms (`write_dump`, `write_histogram`),
//! - the PNG loader (`load_gray_image`).

mod image;
mod load;
mod render;
mod roi;

pub use crate::image::{GrayImage, GrayImageView};
pub use crate::load::{load_gray_image, LoadError};
pub use crate::render::{histogram, write_dump, write_histogram, Command};
pub use crate::roi::{ParseRoiError, Roi, RoiError, RoiSpec};
