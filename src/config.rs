//! Configuration for reading and writing RTF.
//!
//! Both option structs follow the same shape: `Default` carries the values
//! used when nothing is configured, `new()` is an alias for it, and `with_*`
//! methods adjust one field at a time.
//!
//! ```rust
//! use rtfkit::{ParserOptions, WriterOptions};
//!
//! let parse = ParserOptions::new().with_max_depth(64).with_require_header(true);
//! let write = WriterOptions::new().with_code_page(1251).with_generator(None);
//! assert_eq!(parse.max_depth, 64);
//! assert!(write.generator.is_none());
//! ```

/// Options controlling how RTF input is interpreted.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Maximum group nesting depth before parsing is aborted.
    ///
    /// Guards against brace bombs; real documents rarely nest beyond a few dozen levels.
    pub max_depth: usize,
    /// Whether unknown words, unrecognized destinations and skipped groups are recorded
    pub collect_diagnostics: bool,
    /// Code page used for text when the document declares none
    pub default_code_page: u16,
    /// Reject input that does not start with `{\rtf`
    pub require_header: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: 512,
            collect_diagnostics: true,
            default_code_page: 1252,
            require_header: false,
        }
    }
}

impl ParserOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum group nesting depth.
    #[inline]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether diagnostics are collected.
    #[inline]
    pub fn with_diagnostics(mut self, collect: bool) -> Self {
        self.collect_diagnostics = collect;
        self
    }

    /// Set the fallback code page.
    #[inline]
    pub fn with_default_code_page(mut self, code_page: u16) -> Self {
        self.default_code_page = code_page;
        self
    }

    /// Set whether the `{\rtf` signature is required.
    #[inline]
    pub fn with_require_header(mut self, require: bool) -> Self {
        self.require_header = require;
        self
    }
}

/// Options controlling RTF output.
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// ANSI code page declared with `\ansicpg` and used for `\'hh` escapes
    pub code_page: u16,
    /// Default font index (`\deff`)
    pub default_font: u16,
    /// Default tab width in twips (`\deftab`)
    pub default_tab_width: i32,
    /// Text of the `{\*\generator ...}` group; when `None` the document's own
    /// generator is written, if it has one
    pub generator: Option<String>,
    /// Emit the footnote settings block
    pub footnote_settings: bool,
    /// Insert line breaks between header blocks and paragraphs for readability
    pub line_breaks: bool,
    /// Placeholder shown by a table of contents until the reader updates it
    pub toc_default_text: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            code_page: 1252,
            default_font: 0,
            default_tab_width: 720, // 0.5 inch
            generator: Some(concat!("rtfkit ", env!("CARGO_PKG_VERSION")).to_string()),
            footnote_settings: true,
            line_breaks: false,
            toc_default_text: "Update this field to build the table of contents.".to_string(),
        }
    }
}

impl WriterOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output code page.
    #[inline]
    pub fn with_code_page(mut self, code_page: u16) -> Self {
        self.code_page = code_page;
        self
    }

    /// Set the default font index.
    #[inline]
    pub fn with_default_font(mut self, font: u16) -> Self {
        self.default_font = font;
        self
    }

    /// Set the default tab width in twips.
    #[inline]
    pub fn with_default_tab_width(mut self, twips: i32) -> Self {
        self.default_tab_width = twips;
        self
    }

    /// Set or clear the generator tag.
    #[inline]
    pub fn with_generator(mut self, generator: Option<String>) -> Self {
        self.generator = generator;
        self
    }

    /// Set whether footnote settings are written.
    #[inline]
    pub fn with_footnote_settings(mut self, enabled: bool) -> Self {
        self.footnote_settings = enabled;
        self
    }

    /// Set whether readability line breaks are written.
    #[inline]
    pub fn with_line_breaks(mut self, enabled: bool) -> Self {
        self.line_breaks = enabled;
        self
    }

    /// Set the table of contents placeholder.
    #[inline]
    pub fn with_toc_default_text(mut self, text: impl Into<String>) -> Self {
        self.toc_default_text = text.into();
        self
    }
}
