//! Document model built by the concrete destinations and consumed by the
//! writer.

pub mod info;
pub mod list;
pub mod picture;
pub mod stylesheet;
pub mod table;
pub mod types;

pub use info::{DocumentInfo, RtfDateParts};
pub use list::{LevelFollow, List, ListLevel, ListLevelType, ListOverride, ListOverrideTable, ListTable};
pub use picture::{ImageType, Picture, detect_image_type};
pub use stylesheet::{Style, StyleSheet, StyleType};
pub use table::{Cell, Row, RowProperties, Table};
pub use types::{
    Alignment, Color, ColorRef, ColorTable, DocumentElement, Font, FontFamily, FontRef, FontTable,
    Formatting, Indentation, ListMembership, Paragraph, ParagraphContent, Run, Spacing, StyleRef,
    UnderlineStyle, VerticalPosition,
};
