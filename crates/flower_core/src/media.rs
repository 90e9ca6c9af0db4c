//! Image selection plumbing: MIME detection, validation, preview encoding.

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::fs;
use std::path::Path;

/// Previewable representation of the selected image: the raw bytes plus a
/// base64 `data:` URI derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub data_uri: String,
    pub bytes: Vec<u8>,
}

/// Declared content type for a picked file, derived from its extension.
///
/// The desktop stand-in for the MIME type a browser attaches to a file
/// handle. Unknown extensions yield `None` and fail validation downstream.
pub fn mime_for_path(path: impl AsRef<Path>) -> Option<&'static str> {
    let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}

/// A selection is acceptable iff its declared content type is an image type.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Encodes raw bytes as a `data:<mime>;base64,...` URI.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

/// Reads the file in full and builds its preview. Single-shot; the caller is
/// responsible for discarding completions that a newer selection superseded.
pub fn load_preview(path: impl AsRef<Path>, mime: &str) -> Result<Preview> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .with_context(|| format!("cannot read image: {}", path.display()))?;
    let data_uri = data_uri(mime, &bytes);
    Ok(Preview { data_uri, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    #[rstest]
    #[case("flower.jpg", Some("image/jpeg"))]
    #[case("flower.JPEG", Some("image/jpeg"))]
    #[case("flower.png", Some("image/png"))]
    #[case("flower.webp", Some("image/webp"))]
    #[case("notes.txt", None)]
    #[case("archive.tar.gz", None)]
    #[case("no_extension", None)]
    fn mime_detection_follows_extension(#[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(mime_for_path(name), expected);
    }

    #[test]
    fn image_mime_prefix_check() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/jpeg"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime("application/octet-stream"));
    }

    #[test]
    fn data_uri_encodes_bytes() {
        assert_eq!(data_uri("image/png", b"abc"), "data:image/png;base64,YWJj");
    }

    #[test]
    fn load_preview_reads_full_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("a.png");
        File::create(&path)?.write_all(b"not really a png")?;

        let preview = load_preview(&path, "image/png")?;
        assert_eq!(preview.bytes, b"not really a png");
        assert!(preview.data_uri.starts_with("data:image/png;base64,"));
        assert!(preview.data_uri.len() > "data:image/png;base64,".len());
        Ok(())
    }

    #[test]
    fn load_preview_missing_file_is_an_error() {
        let err = load_preview("/nonexistent/zzz.png", "image/png").unwrap_err();
        assert!(err.to_string().contains("zzz.png"));
    }
}
