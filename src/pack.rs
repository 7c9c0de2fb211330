use std::fmt;

use crate::extract::ScrapedPage;

pub const SEPARATOR: &str = "================";

pub const HEADER: &str = "\
================================================================
WebpagePack Output File
================================================================

Purpose:
--------
This file contains a packed content of the multiple web pages' contents about a specific topic.
It is designed to be easily consumable by AI systems for analysis, summarize, or other automated processes.

File Format:
------------
The content is organized as follows:
1. This header section
2. Multiple web page entries, each consisting of:
  a. A separator line (================)
  b. The title of web page (Title: )
  c. The URL of web page (URL: )
  d. Another separator line
  e. The full text contents of the web page formatted with Markdown
  f. A blank line

Usage Guidelines:
-----------------
1. This file should be treated as read-only.
2. When processing this file, use the separators and \"Title:\" and \"URL:\" markers to distinguish contexts between different web pages in this analysis.

Notes:
------
- Some pages may have useless information such as page header, page footer, website menus and links to other pages. You should ignore these as needed.
- Binary data are not included in this packed representation.

================================================================
Web Pages Contents
================================================================
";

/// Header plus one block per page, in order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackedDocument(String);

impl PackedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for PackedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn pack_pages(pages: &[ScrapedPage]) -> PackedDocument {
    let mut text = HEADER.to_owned();
    for page in pages {
        text.push_str(&format!(
            "\n{SEPARATOR}\nTitle: {}\nURL: {}\n{SEPARATOR}\n\n{}\n\n",
            page.title, page.source_url, page.markdown_content
        ));
    }
    PackedDocument(text)
}
