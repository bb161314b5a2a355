use std::path::Path;

use crate::media::{Image, ImageInfo};
use crate::{CodecOptions, StegImgError};

/// filename, size on disk, dimensions and magic number of an image
pub fn info(media: &Path) -> Result<ImageInfo, StegImgError> {
    Ok(Image::from_file(media)?.info())
}

/// Tells if `message` could be hidden in `media`. A message that does not fit is
/// `Ok(false)`, errors are reserved for files that cannot be read.
pub fn check(media: &Path, message: &[u8], options: CodecOptions) -> Result<bool, StegImgError> {
    Ok(Image::from_file(media)?.can_hide(message.len(), &options))
}

/// hides `message` in `media` and overwrites it
pub fn hide(media: &Path, message: &[u8], options: CodecOptions) -> Result<(), StegImgError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_message(message)
        .execute()
}

pub fn unveil(secret_media: &Path) -> Result<Vec<u8>, StegImgError> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn check_follows_the_compatible_inequality() {
        let dir = TempDir::new().unwrap();
        let carrier = dir.path().join("c.ppm");
        // 3x3 pixels = 27 pixel bytes, fits a message of up to 2 bytes (4 + 16 < 27)
        let mut file = b"P6\n3 3\n255\n".to_vec();
        file.resize(file.len() + 27, 0);
        fs::write(&carrier, file).unwrap();

        assert!(check(&carrier, b"ab", CodecOptions::default()).unwrap());
        assert!(!check(&carrier, b"abc", CodecOptions::default()).unwrap());
    }

    #[test]
    fn commands_fail_on_unsupported_files() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("c.gif");
        fs::write(&file, b"GIF89a").unwrap();

        assert!(matches!(
            info(&file),
            Err(StegImgError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            unveil(&file),
            Err(StegImgError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            hide(&file, b"x", CodecOptions::default()),
            Err(StegImgError::UnsupportedFormat { .. })
        ));
        assert_eq!(fs::read(&file).unwrap(), b"GIF89a");
    }
}
