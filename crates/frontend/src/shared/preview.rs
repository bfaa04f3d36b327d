/// Preview classification for artifact rows
///
/// Derived purely from the filename suffix, case-insensitively; the
/// server-provided content-type is never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// Rendered as an inline `<img>`
    Image,
    /// Rendered in a sandboxed `<iframe>`
    Html,
    /// No preview, filename and open-link only
    None,
}

const IMAGE_SUFFIXES: [&str; 4] = [".png", ".jpg", ".jpeg", ".gif"];

pub fn preview_kind(filename: &str) -> PreviewKind {
    let lower = filename.to_ascii_lowercase();
    if IMAGE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
        PreviewKind::Image
    } else if lower.ends_with(".html") {
        PreviewKind::Html
    } else {
        PreviewKind::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_suffixes() {
        assert_eq!(preview_kind("summary.png"), PreviewKind::Image);
        assert_eq!(preview_kind("beeswarm.jpg"), PreviewKind::Image);
        assert_eq!(preview_kind("waterfall.jpeg"), PreviewKind::Image);
        assert_eq!(preview_kind("anim.gif"), PreviewKind::Image);
    }

    #[test]
    fn test_html_suffix() {
        assert_eq!(preview_kind("force_plot.html"), PreviewKind::Html);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(preview_kind("SUMMARY.PNG"), PreviewKind::Image);
        assert_eq!(preview_kind("Force_Plot.Html"), PreviewKind::Html);
        assert_eq!(preview_kind("photo.JpEg"), PreviewKind::Image);
    }

    #[test]
    fn test_no_preview_for_other_files() {
        assert_eq!(preview_kind("values.json"), PreviewKind::None);
        assert_eq!(preview_kind("notes.txt"), PreviewKind::None);
        assert_eq!(preview_kind("archive"), PreviewKind::None);
        // Suffix must be at the very end
        assert_eq!(preview_kind("summary.png.tmp"), PreviewKind::None);
        assert_eq!(preview_kind("page.html.bak"), PreviewKind::None);
    }
}
