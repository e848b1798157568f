//! Document-stream splitting.
//!
//! A scene file is a stream of YAML documents, each opened by a header line
//! of the form:
//!
//! ```text
//! --- !u!114 &8926484042661614526
//! ```
//!
//! where `!u!<n>` is the numeric class tag and `&<id>` the local handle.
//! Prefab-instance placeholders append a `stripped` marker. The stream is
//! preceded by `%YAML` / `%TAG` directives, which carry no record data.
//! Header parsing is line-oriented and hand-rolled; bodies stay untouched
//! text for the YAML loader.

use tracing::warn;

use crate::base::{ClassId, FileHandle};

/// Parsed `--- !u!<class> &<handle> [stripped]` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentHeader {
    pub class: ClassId,
    pub handle: FileHandle,
    pub stripped: bool,
}

/// One split-off document: its header plus the raw body text.
#[derive(Clone, Debug)]
pub struct RawDocument<'a> {
    pub header: DocumentHeader,
    pub body: &'a str,
}

/// Split a scene stream into headed documents.
///
/// Directives, blank lines between documents, and documents whose header
/// does not parse are skipped (with a warning for the latter); splitting
/// never fails outright.
pub fn split_documents(input: &str) -> Vec<RawDocument<'_>> {
    let mut documents = Vec::new();
    let mut header: Option<DocumentHeader> = None;
    let mut body_start = 0;

    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        if !line.starts_with("---") {
            continue;
        }
        if let Some(h) = header.take() {
            documents.push(RawDocument {
                header: h,
                body: &input[body_start..line_start],
            });
        }
        match parse_header(line.trim_end()) {
            Some(h) => {
                header = Some(h);
                body_start = offset;
            }
            None => warn!(line = line.trim_end(), "unrecognized document header, skipping"),
        }
    }
    if let Some(h) = header {
        documents.push(RawDocument {
            header: h,
            body: &input[body_start..],
        });
    }
    documents
}

/// Parse one header line. Returns `None` when the tag or anchor is missing
/// or malformed.
pub fn parse_header(line: &str) -> Option<DocumentHeader> {
    let rest = line.strip_prefix("---")?.trim_start();
    let rest = rest.strip_prefix("!u!")?;
    let tag_end = rest.find(|c: char| !c.is_ascii_digit())?;
    let class: u32 = rest[..tag_end].parse().ok()?;

    let rest = rest[tag_end..].trim_start();
    let rest = rest.strip_prefix('&')?;
    let anchor_end = rest
        .find(|c: char| c.is_whitespace())
        .unwrap_or(rest.len());
    let anchor = &rest[..anchor_end];
    if anchor.is_empty() {
        return None;
    }

    let stripped = rest[anchor_end..].trim() == "stripped";
    Some(DocumentHeader {
        class: ClassId(class),
        handle: FileHandle::new(anchor),
        stripped,
    })
}
