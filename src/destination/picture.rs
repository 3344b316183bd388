//! The `\pict` destination.

use super::{Destination, TextChunk};
use crate::encoding::hex_nibble;
use crate::model::{ImageType, Picture, detect_image_type};
use crate::property::{PropertyKey, PropertyTable};

/// Collects embedded pictures.
///
/// Picture data is either hex digits (whitespace ignored) or a `\bin`
/// payload. The picture is finished when its `\pict` group closes; nested
/// groups such as `\*\picprop` do not contribute data.
#[derive(Debug, Default)]
pub struct PictureSink {
    pictures: Vec<Picture>,
    data: Vec<u8>,
    high_nibble: Option<u8>,
    depth: usize,
}

impl PictureSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pictures(&self) -> &[Picture] {
        &self.pictures
    }

    pub fn into_pictures(self) -> Vec<Picture> {
        self.pictures
    }

    fn push_hex(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            let Some(nibble) = hex_nibble(byte) else {
                continue;
            };
            match self.high_nibble.take() {
                Some(high) => self.data.push((high << 4) | nibble),
                None => self.high_nibble = Some(nibble),
            }
        }
    }

    fn finish(&mut self, properties: &PropertyTable) {
        let data = std::mem::take(&mut self.data);
        if self.high_nibble.take().is_some() {
            tracing::debug!("odd number of hex digits in picture data");
        }

        let declared = ImageType::from_property(properties.int_or(PropertyKey::PictureFormat, 0));
        let image_type = match declared {
            ImageType::Unknown => detect_image_type(&data),
            declared => declared,
        };
        tracing::trace!(?image_type, len = data.len(), "picture");

        self.pictures.push(Picture {
            width: properties.int(PropertyKey::PictureWidth),
            height: properties.int(PropertyKey::PictureHeight),
            goal_width: properties.int(PropertyKey::PictureGoalWidth),
            goal_height: properties.int(PropertyKey::PictureGoalHeight),
            scale_x: properties.int(PropertyKey::PictureScaleX),
            scale_y: properties.int(PropertyKey::PictureScaleY),
            ..Picture::new(image_type, data)
        });
    }
}

impl Destination for PictureSink {
    fn on_enter(&mut self, _properties: &PropertyTable) {
        self.depth += 1;
        if self.depth == 1 {
            self.data.clear();
            self.high_nibble = None;
        }
    }

    fn on_text(&mut self, chunk: TextChunk<'_>, _properties: &PropertyTable) {
        if self.depth != 1 {
            return;
        }
        match chunk {
            TextChunk::Bytes(bytes) => self.push_hex(bytes),
            TextChunk::Binary(payload) => self.data.extend_from_slice(payload),
            TextChunk::Unicode(_) => {},
        }
    }

    fn on_exit(&mut self, properties: &PropertyTable) {
        if self.depth == 1 {
            self.finish(properties);
        }
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserOptions;
    use crate::destination::{SinkId, SinkSet};
    use crate::interpreter::Interpreter;
    use crate::lexer::Lexer;

    impl SinkSet for PictureSink {
        fn sink(&mut self, id: SinkId) -> Option<&mut dyn Destination> {
            match id {
                SinkId::Picture => Some(self),
                _ => None,
            }
        }
    }

    fn parse(input: &[u8]) -> Vec<Picture> {
        let mut sink = PictureSink::new();
        Interpreter::new(&mut sink, ParserOptions::default())
            .run(Lexer::new(input))
            .unwrap();
        sink.into_pictures()
    }

    #[test]
    fn test_hex_picture() {
        let pictures = parse(
            b"{\\rtf1{\\pict{\\*\\picprop{\\sp 00}}\\pngblip\\picw10\\pich20\\picwgoal150\\pichgoal300\n8950 4e47\r\n0d0a1a0a}}",
        );
        assert_eq!(pictures.len(), 1);
        let pic = &pictures[0];
        assert_eq!(pic.image_type, ImageType::Png);
        assert_eq!(pic.data(), &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
        assert_eq!(pic.width, Some(10));
        assert_eq!(pic.goal_height, Some(300));
    }

    #[test]
    fn test_binary_picture_detected() {
        let pictures = parse(b"{\\rtf1{\\pict\\bin4 \xff\xd8\xff\xe0}{\\pict 424d}}");
        assert_eq!(pictures.len(), 2);
        assert_eq!(pictures[0].image_type, ImageType::Jpeg);
        assert_eq!(pictures[0].data(), &[0xFF, 0xD8, 0xFF, 0xE0]);
        assert_eq!(pictures[1].image_type, ImageType::Dib);
    }
}
