//! Options for writing XPM files.

use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XpmOptions {
    /// Characters used for one pixel.
    /// When unset the smallest count able to key the whole palette is used.
    pub chars_per_pixel: Option<usize>,

    /// When set the output is wrapped in a C array declaration, as XPM files usually are.
    pub c_source: bool,

    /// Name of the C array, only used together with `c_source`.
    pub image_name: String,
}

impl Default for XpmOptions {
    fn default() -> Self {
        Self {
            chars_per_pixel: None,
            c_source: false,
            image_name: "image".to_string(),
        }
    }
}

impl XpmOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chars_per_pixel(mut self, chars_per_pixel: usize) -> Self {
        self.chars_per_pixel = Some(chars_per_pixel);
        self
    }

    pub fn with_c_source(mut self, image_name: impl Into<String>) -> Self {
        self.c_source = true;
        self.image_name = image_name.into();
        self
    }

    /// Reads options from a toml document, missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// This function will return an error if the document is no valid toml or has wrongly typed keys.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// # Errors
    ///
    /// This function will return an error if the options can't be represented as toml.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}
