pub(crate) mod io;

mod save_options;
pub use save_options::*;

use std::path::Path;

use crate::{Pixmap, Result};

impl Pixmap {
    /// Reads an XPM image from its text.
    ///
    /// Both the usual C source form (`static char * name[] = { "...", ... };`)
    /// and a bare list of XPM lines are accepted.
    ///
    /// # Errors
    ///
    /// This function will return an error if the text violates the XPM structure,
    /// the contained `ParseError` describes which rule failed.
    pub fn from_xpm(text: &str) -> Result<Self> {
        if io::c_source::is_c_source(text) {
            Self::from_xpm_lines(io::c_source::extract_strings(text))
        } else {
            Self::from_xpm_lines(text.lines())
        }
    }

    /// Reads an XPM image from its already split lines.
    ///
    /// # Errors
    ///
    /// This function will return an error if the lines violate the XPM structure.
    pub fn from_xpm_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match io::xpm::load_xpm(lines) {
            Ok(pixmap) => {
                log::debug!(
                    "loaded xpm {}x{} with {} colors",
                    pixmap.width(),
                    pixmap.height(),
                    pixmap.color_count()
                );
                Ok(pixmap)
            }
            Err(err) => {
                log::warn!("invalid xpm: {err}");
                Err(err.into())
            }
        }
    }

    /// Writes the image as bare XPM lines, using as few chars per pixel as possible.
    pub fn to_xpm(&self) -> String {
        let chars_per_pixel = io::xpm::chars_per_pixel_for(self.color_count());
        io::xpm::join_lines(&io::xpm::xpm_lines(self, chars_per_pixel))
    }

    /// # Errors
    ///
    /// This function will return an error if `options.chars_per_pixel` is too small for the palette.
    pub fn to_xpm_with_options(&self, options: &XpmOptions) -> Result<String> {
        let text = io::xpm::save_xpm(self, options)?;
        log::debug!("saved xpm {}x{} with {} colors", self.width(), self.height(), self.color_count());
        Ok(text)
    }

    /// # Errors
    ///
    /// This function will return an error if the file can't be read, is no UTF-8 text or no valid XPM.
    pub fn load_xpm_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        let text = String::from_utf8(data)?;
        Self::from_xpm(&text)
    }

    /// # Errors
    ///
    /// This function will return an error if the image can't be encoded with the options or the file can't be written.
    pub fn save_xpm_file(&self, path: impl AsRef<Path>, options: &XpmOptions) -> Result<()> {
        let text = self.to_xpm_with_options(options)?;
        std::fs::write(path.as_ref(), text)?;
        Ok(())
    }
}
