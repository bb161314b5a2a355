use std::path::{Path, PathBuf};

use crate::media::Image;
use crate::StegImgError;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and return the raw message bytes, no charset is assumed
    pub fn execute(self) -> Result<Vec<u8>, StegImgError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegImgError::CarrierNotSet);
        };

        Image::from_file(&secret_media)?.unveil_message()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::StegImgError;

    #[test]
    fn should_report_images_without_a_message() {
        let temp_dir = tempdir().unwrap();
        let carrier = temp_dir.path().join("plain.ppm");
        let mut file = b"P6\n8 8\n255\n".to_vec();
        file.resize(file.len() + 8 * 8 * 3, 0xff);
        fs::write(&carrier, file).unwrap();

        let result = crate::api::unveil::prepare()
            .from_secret_file(&carrier)
            .execute();
        assert!(matches!(result, Err(StegImgError::DecodeOutOfRange { .. })));
    }

    #[test]
    fn should_require_a_secret_file() {
        let result = crate::api::unveil::prepare().execute();
        assert!(matches!(result, Err(StegImgError::CarrierNotSet)));
    }
}
