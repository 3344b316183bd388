//! Header emitters: everything between `{\rtf1` and the first paragraph.

use super::RtfWriter;
use crate::document::RtfDocument;
use crate::encoding::encoding_or_default;
use crate::error::RtfResult;
use crate::model::{Alignment, List, ListLevel, Style, StyleType};
use chrono::{Datelike, Timelike};
use std::io::Write;

impl<W: Write> RtfWriter<W> {
    /// Document prologue, tables and metadata, in the order readers expect.
    pub(super) fn write_header(&mut self, doc: &RtfDocument) -> RtfResult<()> {
        self.font_code_pages = doc
            .fonts()
            .iter()
            .filter_map(|(index, font)| font.effective_code_page().map(|cp| (index, cp)))
            .collect();

        self.open_group();
        self.push_word("rtf", Some(1));
        self.push_word("ansi", None);
        self.push_word("ansicpg", Some(i32::from(self.options.code_page)));
        self.push_word("deff", Some(i32::from(self.default_font)));
        self.push_word("deftab", Some(self.options.default_tab_width));
        self.line_break();

        self.push_font_table(doc);
        self.push_color_table(doc);
        self.push_stylesheet(doc);
        self.push_list_table(doc);
        self.push_list_override_table(doc);
        self.push_info(doc);
        self.push_generator(doc);
        if self.options.footnote_settings {
            self.push_footnote_settings();
        }
        self.drain()
    }

    fn push_font_table(&mut self, doc: &RtfDocument) {
        if doc.fonts().is_empty() {
            return;
        }
        self.open_group();
        self.push_word("fonttbl", None);
        for (index, font) in doc.fonts().iter() {
            self.open_group();
            self.push_word("f", Some(i32::from(index)));
            self.push_word(font.family.control_word(), None);
            if let Some(charset) = font.charset {
                self.push_word("fcharset", Some(i32::from(charset)));
            }
            if let Some(pitch) = font.pitch {
                self.push_word("fprq", Some(i32::from(pitch)));
            }
            if let Some(code_page) = font.code_page {
                self.push_word("cpg", Some(code_page as i32));
            }
            let encoding = font
                .effective_code_page()
                .map_or(self.encoding, encoding_or_default);
            self.push_text(&font.name, encoding);
            self.buffer.push(b';');
            self.close_group();
        }
        self.close_group();
        self.line_break();
    }

    fn push_color_table(&mut self, doc: &RtfDocument) {
        if doc.colors().is_empty() {
            return;
        }
        self.open_group();
        self.push_word("colortbl", None);
        for entry in doc.colors().entries() {
            if let Some(color) = entry {
                self.push_word("red", Some(i32::from(color.red)));
                self.push_word("green", Some(i32::from(color.green)));
                self.push_word("blue", Some(i32::from(color.blue)));
            }
            self.buffer.push(b';');
        }
        self.close_group();
        self.line_break();
    }

    fn push_stylesheet(&mut self, doc: &RtfDocument) {
        if doc.stylesheet().is_empty() {
            return;
        }
        self.open_group();
        self.push_word("stylesheet", None);
        for style in doc.stylesheet().styles() {
            self.push_style(style);
        }
        self.close_group();
        self.line_break();
    }

    fn push_style(&mut self, style: &Style) {
        self.open_group();
        match style.style_type {
            // Paragraph style 0 is implied by its position
            StyleType::Paragraph if style.id == 0 => {},
            StyleType::Paragraph => self.push_word("s", Some(i32::from(style.id))),
            other => self.push_ignorable(other.control_word(), Some(i32::from(style.id))),
        }
        if let Some(based_on) = style.based_on {
            self.push_word("sbasedon", Some(i32::from(based_on)));
        }
        if let Some(next) = style.next_style {
            self.push_word("snext", Some(i32::from(next)));
        }
        if style.additive {
            self.push_word("additive", None);
        }
        if style.hidden {
            self.push_word("shidden", None);
        }
        if let Some(paragraph) = &style.paragraph {
            self.push_paragraph_properties(paragraph);
        }
        self.push_formatting(&style.formatting);
        self.push_text(&style.name, self.encoding);
        self.buffer.push(b';');
        self.close_group();
    }

    fn push_list_table(&mut self, doc: &RtfDocument) {
        if doc.lists().is_empty() {
            return;
        }
        self.open_group();
        self.push_word("listtable", None);
        for list in doc.lists().lists() {
            self.push_list(list);
        }
        self.close_group();
        self.line_break();
    }

    fn push_list(&mut self, list: &List) {
        self.open_group();
        self.push_word("list", None);
        if let Some(template) = list.template_id {
            self.push_word("listtemplateid", Some(template));
        }
        if list.simple {
            self.push_word("listsimple", Some(1));
        }
        if list.hybrid {
            self.push_word("listhybrid", None);
        }
        for level in &list.levels {
            self.push_list_level(level);
        }
        if let Some(name) = &list.name {
            self.open_group();
            self.push_word("listname", None);
            self.push_text(name, self.encoding);
            self.buffer.push(b';');
            self.close_group();
        }
        self.push_word("listid", Some(list.id));
        self.close_group();
    }

    fn push_list_level(&mut self, level: &ListLevel) {
        self.open_group();
        self.push_word("listlevel", None);
        self.push_word("levelnfc", Some(level.level_type.nfc()));
        let justification = match level.justification {
            Alignment::Center => 1,
            Alignment::Right => 2,
            _ => 0,
        };
        self.push_word("leveljc", Some(justification));
        self.push_word("levelfollow", Some(level.follow.as_property()));
        self.push_word("levelstartat", Some(level.start_at));
        if level.legal {
            self.push_word("levellegal", Some(1));
        }
        if level.no_restart {
            self.push_word("levelnorestart", Some(1));
        }

        // Length-prefixed template; placeholders are the level numbers 0-8
        self.open_group();
        self.push_word("leveltext", None);
        let length = level.number_text.chars().count().min(255) as u8;
        self.buffer.extend_from_slice(b"\\'");
        super::push_hex(&mut self.buffer, length);
        for c in level.number_text.chars() {
            if c <= '\u{8}' {
                self.buffer.extend_from_slice(b"\\'");
                super::push_hex(&mut self.buffer, c as u8);
            } else {
                let mut utf8 = [0u8; 4];
                self.push_text(c.encode_utf8(&mut utf8), self.encoding);
            }
        }
        self.buffer.push(b';');
        self.close_group();

        self.open_group();
        self.push_word("levelnumbers", None);
        for &position in &level.number_positions {
            self.buffer.extend_from_slice(b"\\'");
            super::push_hex(&mut self.buffer, position);
        }
        self.buffer.push(b';');
        self.close_group();

        if let Some(font) = level.font_ref {
            self.push_word("f", Some(i32::from(font)));
        }
        if level.first_line_indent != 0 {
            self.push_word("fi", Some(level.first_line_indent));
        }
        if level.indent != 0 {
            self.push_word("li", Some(level.indent));
        }
        self.close_group();
    }

    fn push_list_override_table(&mut self, doc: &RtfDocument) {
        if doc.list_overrides().is_empty() {
            return;
        }
        self.open_group();
        self.push_word("listoverridetable", None);
        for entry in doc.list_overrides().overrides() {
            self.open_group();
            self.push_word("listoverride", None);
            self.push_word("listid", Some(entry.list_id));
            self.push_word("listoverridecount", Some(entry.override_count));
            self.push_word("ls", Some(entry.index));
            self.close_group();
        }
        self.close_group();
        self.line_break();
    }

    fn push_info(&mut self, doc: &RtfDocument) {
        let info = doc.info();
        let texts: Vec<_> = info
            .text_fields()
            .into_iter()
            .filter_map(|(word, value)| value.map(|v| (word, v)))
            .collect();
        let times: Vec<_> = info
            .time_fields()
            .into_iter()
            .filter_map(|(word, value)| value.map(|v| (word, v)))
            .collect();
        let numbers: Vec<_> = info
            .numeric_fields()
            .into_iter()
            .filter_map(|(word, value)| value.map(|v| (word, v)))
            .collect();
        if texts.is_empty() && times.is_empty() && numbers.is_empty() && info.password.is_none() {
            return;
        }

        self.open_group();
        self.push_word("info", None);
        for (word, value) in texts {
            self.open_group();
            self.push_word(word, None);
            self.push_text(value, self.encoding);
            self.close_group();
        }
        for (word, time) in times {
            self.open_group();
            self.push_word(word, None);
            self.push_word("yr", Some(time.year()));
            self.push_word("mo", Some(time.month() as i32));
            self.push_word("dy", Some(time.day() as i32));
            self.push_word("hr", Some(time.hour() as i32));
            self.push_word("min", Some(time.minute() as i32));
            self.push_word("sec", Some(time.second() as i32));
            self.close_group();
        }
        for (word, value) in numbers {
            self.open_group();
            self.push_word(word, Some(value));
            self.close_group();
        }
        if let Some(password) = &info.password {
            self.open_group();
            self.push_ignorable("password", None);
            self.push_text(password, self.encoding);
            self.close_group();
        }
        self.close_group();
        self.line_break();
    }

    /// The configured generator wins; without one the document's own tag is
    /// kept.
    fn push_generator(&mut self, doc: &RtfDocument) {
        let generator = self
            .options
            .generator
            .clone()
            .or_else(|| doc.info().generator.clone());
        if let Some(generator) = generator {
            self.open_group();
            self.push_ignorable("generator", None);
            self.push_text(&generator, self.encoding);
            self.buffer.push(b';');
            self.close_group();
            self.line_break();
        }
    }

    fn push_footnote_settings(&mut self) {
        self.push_word("ftnbj", None);
        self.push_word("ftnstart", Some(1));
        self.push_word("ftnrscont", None);
        self.push_word("ftnnar", None);
        self.open_group();
        self.push_ignorable("ftnsep", None);
        self.push_word("chftnsep", None);
        self.close_group();
        self.line_break();
    }
}
