use std::path::{Path, PathBuf};

use crate::media::{CodecOptions, Image, Persist};
use crate::StegImgError;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<Vec<u8>>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message<M: AsRef<[u8]>>(mut self, message: M) -> Self {
        self.message = Some(message.as_ref().to_vec());
        self
    }

    pub fn use_message<M: AsRef<[u8]>>(mut self, message: Option<M>) -> Self {
        self.message = message.map(|m| m.as_ref().to_vec());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Write the result to `output` instead of overwriting the carrier image
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Reads the carrier, hides the message and writes the image.
    ///
    /// Nothing is written unless the message fits.
    pub fn execute(self) -> Result<(), StegImgError> {
        let Some(image) = self.image else {
            return Err(StegImgError::CarrierNotSet);
        };
        let Some(message) = self.message else {
            return Err(StegImgError::MissingMessage);
        };
        let output = self.output.unwrap_or_else(|| image.clone());

        Image::from_file(&image)?
            .hide_message(&message, &self.options)?
            .save_as(&output)
    }
}
