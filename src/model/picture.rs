//! Embedded pictures.
//!
//! RTF carries pictures as hex digits or a `\bin` payload inside `\pict`.
//! Supported formats:
//! - Windows Metafile (WMF)
//! - Enhanced Metafile (EMF)
//! - PNG
//! - JPEG
//! - DIB (Device Independent Bitmap)
//! - Mac PICT

/// Image type in RTF documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageType {
    /// Enhanced Metafile
    Emf,
    /// Windows Metafile
    Wmf,
    /// PNG image
    Png,
    /// JPEG image
    Jpeg,
    /// DIB (Device Independent Bitmap)
    Dib,
    /// Device-dependent bitmap (`\wbitmap`)
    Bitmap,
    /// Mac PICT format
    Pict,
    /// OS/2 metafile
    Os2Metafile,
    /// Unknown or unsupported format
    #[default]
    Unknown,
}

impl ImageType {
    /// Map the picture-format property value to an image type.
    pub const fn from_property(value: i32) -> Self {
        match value {
            1 => ImageType::Emf,
            2 => ImageType::Png,
            3 => ImageType::Jpeg,
            4 => ImageType::Wmf,
            5 => ImageType::Pict,
            6 => ImageType::Dib,
            7 => ImageType::Bitmap,
            8 => ImageType::Os2Metafile,
            _ => ImageType::Unknown,
        }
    }

    /// Control word declaring this format, if there is one.
    pub const fn control_word(self) -> Option<&'static str> {
        match self {
            ImageType::Emf => Some("emfblip"),
            ImageType::Png => Some("pngblip"),
            ImageType::Jpeg => Some("jpegblip"),
            ImageType::Wmf => Some("wmetafile"),
            ImageType::Pict => Some("macpict"),
            ImageType::Dib => Some("dibitmap"),
            ImageType::Bitmap => Some("wbitmap"),
            ImageType::Os2Metafile => Some("pmmetafile"),
            ImageType::Unknown => None,
        }
    }
}

/// Extracted picture from RTF document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Picture {
    /// Image type
    pub image_type: ImageType,
    /// Image data, decoded from hex when needed
    pub data: Vec<u8>,
    /// Picture width (in pixels or twips, depending on format)
    pub width: Option<i32>,
    /// Picture height
    pub height: Option<i32>,
    /// Goal width (desired width in twips)
    pub goal_width: Option<i32>,
    /// Goal height (desired height in twips)
    pub goal_height: Option<i32>,
    /// Horizontal scaling percentage
    pub scale_x: Option<i32>,
    /// Vertical scaling percentage
    pub scale_y: Option<i32>,
}

impl Picture {
    /// Create a new picture with minimal information.
    #[inline]
    pub fn new(image_type: ImageType, data: Vec<u8>) -> Self {
        Self {
            image_type,
            data,
            ..Self::default()
        }
    }

    /// Get the image data as a byte slice.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the computed width in twips, considering scaling.
    #[inline]
    pub fn computed_width(&self) -> Option<i32> {
        self.goal_width.or(self.width).map(|w| match self.scale_x {
            Some(scale) => (w * scale) / 100,
            None => w,
        })
    }

    /// Get the computed height in twips, considering scaling.
    #[inline]
    pub fn computed_height(&self) -> Option<i32> {
        self.goal_height
            .or(self.height)
            .map(|h| match self.scale_y {
                Some(scale) => (h * scale) / 100,
                None => h,
            })
    }

    /// Convert width from twips to pixels at given DPI.
    #[inline]
    pub fn width_pixels(&self, dpi: u32) -> Option<u32> {
        self.computed_width()
            .and_then(|tw| u32::try_from(tw).ok())
            .map(|tw| (tw * dpi) / 1440)
    }

    /// Convert height from twips to pixels at given DPI.
    #[inline]
    pub fn height_pixels(&self, dpi: u32) -> Option<u32> {
        self.computed_height()
            .and_then(|tw| u32::try_from(tw).ok())
            .map(|tw| (tw * dpi) / 1440)
    }
}

/// Detect image type from binary signature.
pub fn detect_image_type(data: &[u8]) -> ImageType {
    if data.starts_with(&[0xFF, 0xD8]) {
        return ImageType::Jpeg;
    }
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return ImageType::Png;
    }
    // EMF header record with " EMF" at offset 40
    if data.len() >= 44 && data[0..4] == [0x01, 0x00, 0x00, 0x00] && data[40..44] == *b" EMF" {
        return ImageType::Emf;
    }
    // Aldus placeable metafile, or a bare WMF header
    if data.starts_with(&[0xD7, 0xCD, 0xC6, 0x9A]) || data.starts_with(&[0x01, 0x00, 0x09, 0x00]) {
        return ImageType::Wmf;
    }
    if data.starts_with(b"BM") {
        return ImageType::Dib;
    }
    ImageType::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_signatures() {
        assert_eq!(
            detect_image_type(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
            ImageType::Png
        );
        assert_eq!(detect_image_type(&[0xFF, 0xD8, 0xFF, 0xE0]), ImageType::Jpeg);
        assert_eq!(detect_image_type(b"BM\x00\x00"), ImageType::Dib);
        assert_eq!(detect_image_type(&[]), ImageType::Unknown);

        let mut emf = vec![0u8; 44];
        emf[0] = 1;
        emf[40..44].copy_from_slice(b" EMF");
        assert_eq!(detect_image_type(&emf), ImageType::Emf);
    }

    #[test]
    fn test_picture_dimensions() {
        let pic = Picture {
            width: Some(1440),
            height: Some(1440),
            scale_x: Some(200),
            scale_y: Some(200),
            ..Picture::new(ImageType::Png, Vec::new())
        };

        assert_eq!(pic.computed_width(), Some(2880));
        assert_eq!(pic.width_pixels(96), Some(192));
        assert_eq!(pic.computed_height(), Some(2880));
    }

    #[test]
    fn test_format_words() {
        assert_eq!(ImageType::from_property(2), ImageType::Png);
        assert_eq!(ImageType::Png.control_word(), Some("pngblip"));
        assert_eq!(ImageType::Unknown.control_word(), None);
    }
}
