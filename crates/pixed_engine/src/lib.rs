#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]
//! Palette indexed pixmaps and their XPM representation, the document model of the pixed editor.

mod color;
pub use color::*;

mod pixmap;
pub use pixmap::*;

mod error;
pub use error::*;

pub mod formats;
pub use formats::*;
