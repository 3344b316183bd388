//! RTF document information and properties.
//!
//! Metadata from the `\info` group: title, author, subject, keywords and the
//! other document properties, plus the `\*\generator` tag.

use chrono::{NaiveDate, NaiveDateTime};

/// Document information/metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document manager
    pub manager: Option<String>,
    /// Company name
    pub company: Option<String>,
    /// Operator (last person to modify)
    pub operator: Option<String>,
    /// Document category
    pub category: Option<String>,
    /// Keywords
    pub keywords: Option<String>,
    /// Comments
    pub comment: Option<String>,
    /// Document comments (`\doccomm`)
    pub doc_comment: Option<String>,
    /// Base address for relative hyperlinks
    pub hyperlink_base: Option<String>,
    /// Application that wrote the file (`\*\generator`)
    pub generator: Option<String>,
    /// Password hash (`\*\password`), as written
    pub password: Option<String>,
    /// Document version
    pub version: Option<i32>,
    /// Internal version number (`\vern`)
    pub internal_version: Option<i32>,
    /// Creation time
    pub creation_time: Option<NaiveDateTime>,
    /// Revision time (last modified)
    pub revision_time: Option<NaiveDateTime>,
    /// Print time (last printed)
    pub print_time: Option<NaiveDateTime>,
    /// Backup time
    pub backup_time: Option<NaiveDateTime>,
    /// Total editing time (in minutes)
    pub editing_time: Option<i32>,
    /// Number of pages
    pub pages: Option<i32>,
    /// Number of words
    pub words: Option<i32>,
    /// Number of characters
    pub characters: Option<i32>,
    /// Number of characters including spaces
    pub characters_with_spaces: Option<i32>,
    /// Document ID (internal identifier)
    pub id: Option<i32>,
}

impl DocumentInfo {
    /// Create a new document info
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author
    #[inline]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the subject
    #[inline]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set keywords
    #[inline]
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Set comments
    #[inline]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set the creation time
    #[inline]
    pub fn with_creation_time(mut self, time: NaiveDateTime) -> Self {
        self.creation_time = Some(time);
        self
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// String fields paired with the control word that writes them, in
    /// `\info` group order.
    pub fn text_fields(&self) -> [(&'static str, Option<&str>); 11] {
        [
            ("title", self.title.as_deref()),
            ("subject", self.subject.as_deref()),
            ("author", self.author.as_deref()),
            ("manager", self.manager.as_deref()),
            ("company", self.company.as_deref()),
            ("operator", self.operator.as_deref()),
            ("category", self.category.as_deref()),
            ("keywords", self.keywords.as_deref()),
            ("comment", self.comment.as_deref()),
            ("doccomm", self.doc_comment.as_deref()),
            ("hlinkbase", self.hyperlink_base.as_deref()),
        ]
    }

    /// Mutable slot of a string field by control word name.
    pub(crate) fn text_field_mut(&mut self, word: &str) -> Option<&mut Option<String>> {
        Some(match word {
            "title" => &mut self.title,
            "subject" => &mut self.subject,
            "author" => &mut self.author,
            "manager" => &mut self.manager,
            "company" => &mut self.company,
            "operator" => &mut self.operator,
            "category" => &mut self.category,
            "keywords" => &mut self.keywords,
            "comment" => &mut self.comment,
            "doccomm" => &mut self.doc_comment,
            "hlinkbase" => &mut self.hyperlink_base,
            "generator" => &mut self.generator,
            "password" => &mut self.password,
            _ => return None,
        })
    }

    /// Mutable slot of a timestamp by its destination word.
    pub(crate) fn time_field_mut(&mut self, word: &str) -> Option<&mut Option<NaiveDateTime>> {
        Some(match word {
            "creatim" => &mut self.creation_time,
            "revtim" => &mut self.revision_time,
            "printim" => &mut self.print_time,
            "buptim" => &mut self.backup_time,
            _ => return None,
        })
    }

    /// Timestamps paired with their destination word.
    pub fn time_fields(&self) -> [(&'static str, Option<NaiveDateTime>); 4] {
        [
            ("creatim", self.creation_time),
            ("revtim", self.revision_time),
            ("printim", self.print_time),
            ("buptim", self.backup_time),
        ]
    }

    /// Numeric fields paired with their control word.
    pub fn numeric_fields(&self) -> [(&'static str, Option<i32>); 8] {
        [
            ("version", self.version),
            ("vern", self.internal_version),
            ("edmins", self.editing_time),
            ("nofpages", self.pages),
            ("nofwords", self.words),
            ("nofchars", self.characters),
            ("nofcharsws", self.characters_with_spaces),
            ("id", self.id),
        ]
    }

    pub(crate) fn numeric_field_mut(&mut self, word: &str) -> Option<&mut Option<i32>> {
        Some(match word {
            "version" => &mut self.version,
            "vern" => &mut self.internal_version,
            "edmins" => &mut self.editing_time,
            "nofpages" => &mut self.pages,
            "nofwords" => &mut self.words,
            "nofchars" => &mut self.characters,
            "nofcharsws" => &mut self.characters_with_spaces,
            "id" => &mut self.id,
            _ => return None,
        })
    }
}

/// Date components collected from `\yr\mo\dy\hr\min\sec`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RtfDateParts {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
    pub hour: Option<i32>,
    pub minute: Option<i32>,
    pub second: Option<i32>,
}

impl RtfDateParts {
    /// Record one component by control word. Returns `false` for other words.
    pub fn set(&mut self, word: &str, value: i32) -> bool {
        let slot = match word {
            "yr" => &mut self.year,
            "mo" => &mut self.month,
            "dy" => &mut self.day,
            "hr" => &mut self.hour,
            "min" => &mut self.minute,
            "sec" => &mut self.second,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Build the timestamp. Year, month and day are required; missing time
    /// components are zero. Out-of-range values yield `None`.
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(
            self.year?,
            u32::try_from(self.month?).ok()?,
            u32::try_from(self.day?).ok()?,
        )?;
        let component = |value: Option<i32>| u32::try_from(value.unwrap_or(0)).ok();
        date.and_hms_opt(
            component(self.hour)?,
            component(self.minute)?,
            component(self.second)?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_parts() {
        let mut parts = RtfDateParts::default();
        assert!(parts.set("yr", 2024));
        assert!(parts.set("mo", 2));
        assert!(parts.set("dy", 29));
        assert!(parts.set("hr", 13));
        assert!(!parts.set("nofpages", 3));

        let time = parts.to_datetime().unwrap();
        assert_eq!(time.to_string(), "2024-02-29 13:00:00");

        parts.set("mo", 13);
        assert_eq!(parts.to_datetime(), None);
        assert_eq!(RtfDateParts::default().to_datetime(), None);
    }

    #[test]
    fn test_field_slots() {
        let mut info = DocumentInfo::new().with_title("Report");
        assert!(!info.is_empty());
        *info.text_field_mut("author").unwrap() = Some("Ann".to_string());
        *info.numeric_field_mut("nofpages").unwrap() = Some(4);
        assert!(info.text_field_mut("pict").is_none());

        assert_eq!(info.author.as_deref(), Some("Ann"));
        assert_eq!(info.pages, Some(4));
        assert_eq!(info.text_fields()[0], ("title", Some("Report")));
    }
}
