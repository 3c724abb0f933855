//! Pure URL classification from host and path shape.
//!
//! Classification never consults the filesystem or the network. It is a
//! total function of `(host, path)`, which is what makes the resolver
//! testable without any I/O.

/// Host serving reddit-native image uploads directly.
pub const DIRECT_IMAGE_HOST: &str = "i.redd.it";

/// Imgur's image subdomain; paths here point at literal image bytes.
pub const SINGLE_IMAGE_HOST: &str = "i.imgur.com";

/// Imgur's root host; paths here are HTML landing pages, not images.
pub const INDIRECT_IMAGE_HOST: &str = "imgur.com";

/// Path prefix marking a multi-image album on the imgur root host.
pub const ALBUM_PATH_PREFIX: &str = "/a/";

/// Recognized image extensions for URLs on unknown hosts.
const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".gif", ".png", ".jpeg"];

/// What kind of image source a URL points at.
///
/// Determined purely from host and path shape; no network call is required
/// to classify. Host comparison is exact equality, never substring matching,
/// so `evil-i.redd.it.example.com` does not classify as a direct link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Direct reddit image link; the path already names the image bytes.
    DirectHost,
    /// Direct imgur image link; the path already names the image bytes.
    SingleImageHost,
    /// Imgur album landing page holding multiple images.
    AlbumPath,
    /// Imgur landing page for a single image; the real asset lives at a
    /// rewritten URL on the image subdomain.
    IndirectImageHost,
    /// Unknown host, but the path ends in a recognized image extension.
    UnknownWithImageExtension,
    /// Nothing downloadable can be derived from this URL.
    Unsupported,
}

/// Classifies a URL by its host and path.
///
/// Precedence is fixed: known hosts are matched exactly first, then the
/// extension heuristic, then [`Classification::Unsupported`]. The album
/// check runs before the indirect check because both share the imgur root
/// host.
#[must_use]
pub fn classify(host: &str, path: &str) -> Classification {
    if host == DIRECT_IMAGE_HOST {
        Classification::DirectHost
    } else if host == SINGLE_IMAGE_HOST {
        Classification::SingleImageHost
    } else if host == INDIRECT_IMAGE_HOST {
        if path.starts_with(ALBUM_PATH_PREFIX) {
            Classification::AlbumPath
        } else {
            Classification::IndirectImageHost
        }
    } else if has_image_extension(path) {
        Classification::UnknownWithImageExtension
    } else {
        Classification::Unsupported
    }
}

/// Returns true if the path ends in a recognized image extension.
///
/// Matching is case-insensitive, so `.JPG` and `.Gif` are accepted alongside
/// their lowercase forms.
#[must_use]
pub fn has_image_extension(path: &str) -> bool {
    let lowered = path.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_direct_reddit_host() {
        assert_eq!(
            classify("i.redd.it", "/abc123.png"),
            Classification::DirectHost
        );
    }

    #[test]
    fn test_classify_single_imgur_host() {
        assert_eq!(
            classify("i.imgur.com", "/qqrr.jpg"),
            Classification::SingleImageHost
        );
    }

    #[test]
    fn test_classify_imgur_album_path() {
        assert_eq!(classify("imgur.com", "/a/xyz789"), Classification::AlbumPath);
    }

    #[test]
    fn test_classify_imgur_indirect_path() {
        assert_eq!(
            classify("imgur.com", "/qqrr"),
            Classification::IndirectImageHost
        );
    }

    #[test]
    fn test_classify_album_prefix_must_lead_path() {
        // "/gallery/a/x" is not an album path; prefix match is anchored.
        assert_eq!(
            classify("imgur.com", "/gallery/a/x"),
            Classification::IndirectImageHost
        );
    }

    #[test]
    fn test_classify_unknown_host_with_extension() {
        assert_eq!(
            classify("example.com", "/images/photo.jpeg"),
            Classification::UnknownWithImageExtension
        );
    }

    #[test]
    fn test_classify_unknown_host_without_extension() {
        assert_eq!(classify("example.com", "/page"), Classification::Unsupported);
    }

    #[test]
    fn test_classify_host_equality_is_exact() {
        // Substring or suffix matches must not promote unknown hosts.
        assert_eq!(
            classify("i.redd.it.evil.example.com", "/abc"),
            Classification::Unsupported
        );
        assert_eq!(
            classify("notimgur.com", "/a/xyz"),
            Classification::Unsupported
        );
    }

    #[test]
    fn test_has_image_extension_lowercase() {
        assert!(has_image_extension("/a.jpg"));
        assert!(has_image_extension("/a.gif"));
        assert!(has_image_extension("/a.png"));
        assert!(has_image_extension("/a.jpeg"));
    }

    #[test]
    fn test_has_image_extension_uppercase_and_mixed() {
        assert!(has_image_extension("/photo.JPG"));
        assert!(has_image_extension("/photo.Gif"));
        assert!(has_image_extension("/photo.PNG"));
        assert!(has_image_extension("/photo.JpEg"));
    }

    #[test]
    fn test_has_image_extension_rejects_other_suffixes() {
        assert!(!has_image_extension("/doc.pdf"));
        assert!(!has_image_extension("/archive.jpg.zip"));
        assert!(!has_image_extension("/page"));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let first = classify("imgur.com", "/qqrr");
        let second = classify("imgur.com", "/qqrr");
        assert_eq!(first, second);
    }
}
