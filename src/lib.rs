//! rtfkit - reading and writing Rich Text Format
//!
//! RTF is a stream of groups, control words and text. This crate interprets
//! that stream with a table-driven engine: every control word is looked up in
//! a static catalog that says what the word does (set a property, toggle a
//! flag, insert a symbol, open a destination), and the interpreter applies
//! that description to a stack of group-scoped property tables while routing
//! content to the destination that owns it.
//!
//! # Layers
//!
//! - [`lexer`]: bytes to tokens (groups, control words, text, `\bin` blobs)
//! - [`catalog`]: the control-word vocabulary
//! - [`stack`] and [`property`]: group nesting and inherited properties
//! - [`destination`]: sinks receiving content, and the router choosing one
//! - [`interpreter`]: the dispatch loop tying the above together
//! - [`model`] and [`document`]: the document built by the concrete sinks
//! - [`writer`]: serialization back to RTF
//!
//! # Example - Reading a document
//!
//! ```rust
//! use rtfkit::RtfDocument;
//!
//! let doc = RtfDocument::parse(r"{\rtf1\ansi{\info{\title Notes}}\b Hello\b0  World\par}")?;
//! assert_eq!(doc.info().title.as_deref(), Some("Notes"));
//! assert_eq!(doc.text(), "Hello World");
//!
//! let hello = &doc.paragraphs()[0].runs()[0];
//! assert!(hello.bold());
//! # Ok::<(), rtfkit::RtfError>(())
//! ```
//!
//! # Example - Driving the interpreter with custom sinks
//!
//! ```rust
//! use rtfkit::destination::{Destination, SinkId, SinkSet, TextChunk};
//! use rtfkit::property::PropertyTable;
//! use rtfkit::{Interpreter, Lexer, ParserOptions};
//!
//! #[derive(Default)]
//! struct Collect(Vec<u8>);
//!
//! impl Destination for Collect {
//!     fn on_text(&mut self, chunk: TextChunk<'_>, _properties: &PropertyTable) {
//!         if let TextChunk::Bytes(bytes) = chunk {
//!             self.0.extend_from_slice(bytes);
//!         }
//!     }
//! }
//!
//! impl SinkSet for Collect {
//!     fn sink(&mut self, id: SinkId) -> Option<&mut dyn Destination> {
//!         (id == SinkId::Document).then_some(self as &mut dyn Destination)
//!     }
//! }
//!
//! let mut sink = Collect::default();
//! Interpreter::new(&mut sink, ParserOptions::default())
//!     .run(Lexer::new(br"{\rtf1 plain {\fonttbl{\f0 Arial;}}text}"))?;
//! assert_eq!(sink.0, b"plain text");
//! # Ok::<(), rtfkit::RtfError>(())
//! ```
//!
//! # Example - Writing
//!
//! ```rust
//! use rtfkit::model::{Formatting, Paragraph, ParagraphContent, Run};
//! use rtfkit::{RtfDocument, RtfWriter};
//!
//! let mut doc = RtfDocument::new();
//! let bold = Formatting { bold: true, ..Formatting::default() };
//! doc.add_paragraph(ParagraphContent::new(Paragraph::default(), vec![Run::new("Hi", bold)]));
//!
//! let mut out = Vec::new();
//! RtfWriter::new(&mut out).write_document(&doc)?;
//! assert!(String::from_utf8_lossy(&out).contains(r"{\b Hi}\par"));
//! # Ok::<(), rtfkit::RtfError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod destination;
pub mod detection;
pub mod document;
pub mod encoding;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod model;
pub mod property;
pub mod stack;
pub mod writer;

pub use config::{ParserOptions, WriterOptions};
pub use destination::{Destination, SinkId, SinkRegistry, SinkSet};
pub use detection::{RtfSignature, detect_rtf};
pub use document::RtfDocument;
pub use error::{RtfError, RtfResult};
pub use interpreter::{Diagnostic, Interpreter};
pub use lexer::{Lexer, Token};
pub use writer::RtfWriter;
