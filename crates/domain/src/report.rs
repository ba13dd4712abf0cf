// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only structured renderings of entities.
//!
//! A `Report` is plain data: entities build one on request and callers decide
//! how to present it. The `Display` implementation produces the text form.

use serde::{Deserialize, Serialize};

/// Anything that can render itself as a report.
pub trait Reportable {
    /// Builds a report describing this entity.
    fn report(&self) -> Report;
}

/// A single `label: value` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// The line label.
    pub label: String,
    /// The rendered value.
    pub value: String,
}

/// A group of lines under an optional heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportBlock {
    /// Heading printed above the lines.
    pub heading: Option<String>,
    /// The lines in this block, in insertion order.
    pub lines: Vec<ReportLine>,
}

impl ReportBlock {
    /// Creates an empty block with a heading.
    #[must_use]
    pub fn titled(heading: &str) -> Self {
        Self {
            heading: Some(heading.to_owned()),
            lines: Vec::new(),
        }
    }

    /// Creates an empty block without a heading.
    #[must_use]
    pub const fn untitled() -> Self {
        Self {
            heading: None,
            lines: Vec::new(),
        }
    }

    /// Appends a line and returns the block.
    #[must_use]
    pub fn line(mut self, label: &str, value: impl ToString) -> Self {
        self.lines.push(ReportLine {
            label: label.to_owned(),
            value: value.to_string(),
        });
        self
    }
}

/// A structured rendering of one entity or an aggregate of entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The report title.
    pub title: String,
    /// Blocks of the report body.
    pub blocks: Vec<ReportBlock>,
    /// Nested reports, rendered after the body.
    pub children: Vec<Report>,
}

impl Report {
    /// Creates an empty report with the given title.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_owned(),
            blocks: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends a block and returns the report.
    #[must_use]
    pub fn block(mut self, block: ReportBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Appends a nested report and returns the report.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Builds an aggregate report: a header carrying the total count,
    /// followed by each entry's individual report.
    #[must_use]
    pub fn aggregate(title: &str, entries: Vec<Self>) -> Self {
        let header: ReportBlock = ReportBlock::untitled().line("Total", entries.len());
        Self {
            title: title.to_owned(),
            blocks: vec![header],
            children: entries,
        }
    }

    /// Returns the value of the first line with the given label, searching
    /// this report's own blocks only.
    #[must_use]
    pub fn value(&self, label: &str) -> Option<&str> {
        self.blocks
            .iter()
            .flat_map(|block| block.lines.iter())
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }

    fn render(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        let indent: String = "  ".repeat(depth);
        writeln!(f, "{indent}== {} ==", self.title)?;
        for block in &self.blocks {
            let line_indent: String = if let Some(heading) = &block.heading {
                writeln!(f, "{indent}{heading}")?;
                format!("{indent}  ")
            } else {
                indent.clone()
            };
            for line in &block.lines {
                writeln!(f, "{line_indent}{}: {}", line.label, line.value)?;
            }
        }
        for child in &self.children {
            writeln!(f)?;
            child.render(f, depth + 1)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(f, 0)
    }
}
