#![forbid(unsafe_code)]

//! Markup fragment parsing for tests.
//!
//! A small hand-written parser that turns a view fragment into a
//! [`scrim_core::Element`] tree, enabling query assertions against a
//! component's markup without a renderer. It understands exactly what
//! test fixtures need: elements, attributes (quoted and bare), comments,
//! self-closing and void tags. Text content is skipped; queries work on
//! elements only.
//!
//! Malformed markup is a configuration error ([`Error::Markup`] with the
//! byte offset), not something to recover from.
//!
//! # Example
//! ```
//! use scrim_harness::parse_fragment;
//!
//! let root = parse_fragment(r#"<dialog id="ask"><button class="ok"/></dialog>"#).unwrap();
//! assert!(root.query("#ask").is_some());
//! assert!(root.query(".ok").is_some());
//! ```

use scrim_core::{Element, Error};

/// Tags that never have children or a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Remove `<template ...>` and `</template>` tags, keeping everything
/// between them. View files wrap markup in a template element that is
/// not part of the component's own tree.
pub fn strip_template(input: &str) -> String {
    let lower = input.to_ascii_lowercase();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        let rest = &lower[i..];
        let tag_len = if rest.starts_with("</template") {
            10
        } else if rest.starts_with("<template") {
            9
        } else {
            0
        };
        let at_boundary = tag_len > 0
            && matches!(
                lower.as_bytes().get(i + tag_len),
                None | Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r')
            );

        if at_boundary {
            match input.as_bytes()[i..].iter().position(|&b| b == b'>') {
                Some(offset) => {
                    i += offset + 1;
                    continue;
                }
                // Unterminated template tag swallows the rest.
                None => break,
            }
        }

        match input[i..].chars().next() {
            Some(c) => {
                out.push(c);
                i += c.len_utf8();
            }
            None => break,
        }
    }

    out
}

/// Parse a markup fragment into an element tree.
///
/// Returns a synthetic `fragment` root element holding the fragment's
/// top-level elements as children.
pub fn parse_fragment(input: &str) -> Result<Element, Error> {
    Parser::new(input).parse()
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn error(&self, at: usize, message: impl Into<String>) -> Error {
        Error::Markup {
            offset: at,
            message: message.into(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.src[self.pos..].starts_with(prefix)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// Advance past the next occurrence of `needle`, or fail.
    fn skip_past(&mut self, needle: &str, what: &str) -> Result<(), Error> {
        let start = self.pos;
        match self.src[self.pos..].find(needle) {
            Some(offset) => {
                self.pos += offset + needle.len();
                Ok(())
            }
            None => Err(self.error(start, format!("unterminated {what}"))),
        }
    }

    fn read_name(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        &self.src[start..self.pos]
    }

    fn parse(mut self) -> Result<Element, Error> {
        let root = Element::new("fragment")?;
        let mut stack: Vec<Element> = vec![root.clone()];

        while self.pos < self.src.len() {
            if self.peek() != Some(b'<') {
                // Text content is not modeled; skip to the next tag.
                match self.src[self.pos..].find('<') {
                    Some(offset) => self.pos += offset,
                    None => break,
                }
                continue;
            }

            if self.starts_with("<!--") {
                self.pos += 4;
                self.skip_past("-->", "comment")?;
            } else if self.starts_with("</") {
                self.close_tag(&mut stack)?;
            } else if self.starts_with("<!") {
                // Doctype and friends: skip the whole declaration.
                self.skip_past(">", "markup declaration")?;
            } else {
                self.open_tag(&mut stack)?;
            }
        }

        if stack.len() > 1 {
            let tag = stack[stack.len() - 1].tag();
            return Err(self.error(self.src.len(), format!("unclosed element <{tag}>")));
        }
        Ok(root)
    }

    fn close_tag(&mut self, stack: &mut Vec<Element>) -> Result<(), Error> {
        let at = self.pos;
        self.pos += 2;
        let name = self.read_name().to_string();
        self.skip_whitespace();
        if self.peek() != Some(b'>') {
            return Err(self.error(at, format!("malformed closing tag </{name}")));
        }
        self.pos += 1;

        if stack.len() == 1 {
            return Err(self.error(at, format!("unexpected closing tag </{name}>")));
        }
        let top_tag = stack[stack.len() - 1].tag();
        if top_tag != name {
            return Err(self.error(
                at,
                format!("mismatched closing tag </{name}>, expected </{top_tag}>"),
            ));
        }
        stack.pop();
        Ok(())
    }

    fn open_tag(&mut self, stack: &mut Vec<Element>) -> Result<(), Error> {
        let at = self.pos;
        self.pos += 1;
        let name = self.read_name();
        if name.is_empty() {
            return Err(self.error(at, "expected tag name after '<'"));
        }
        let element = Element::new(name)?;
        let tag = name.to_string();

        let self_closing = loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'>') => {
                    self.pos += 1;
                    break false;
                }
                Some(b'/') => {
                    self.pos += 1;
                    if self.peek() != Some(b'>') {
                        return Err(self.error(self.pos, "expected '>' after '/'"));
                    }
                    self.pos += 1;
                    break true;
                }
                Some(_) => self.attribute(&element)?,
                None => return Err(self.error(at, format!("unterminated tag <{tag}"))),
            }
        };

        if let Some(parent) = stack.last() {
            parent.append_child(&element);
        }
        if !self_closing && !VOID_TAGS.contains(&tag.as_str()) {
            stack.push(element);
        }
        Ok(())
    }

    fn attribute(&mut self, element: &Element) -> Result<(), Error> {
        let at = self.pos;
        let name = {
            let start = self.pos;
            while let Some(b) = self.peek() {
                if b.is_ascii_whitespace() || matches!(b, b'=' | b'>' | b'/') {
                    break;
                }
                self.pos += 1;
            }
            self.src[start..self.pos].to_string()
        };
        if name.is_empty() {
            return Err(self.error(at, "expected attribute name"));
        }

        self.skip_whitespace();
        if self.peek() != Some(b'=') {
            // Valueless attribute, e.g. `disabled`.
            element.set_attr(name, "");
            return Ok(());
        }
        self.pos += 1;
        self.skip_whitespace();

        let value = match self.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                self.pos += 1;
                let start = self.pos;
                match self.src.as_bytes()[self.pos..].iter().position(|&b| b == quote) {
                    Some(offset) => {
                        self.pos += offset + 1;
                        self.src[start..self.pos - 1].to_string()
                    }
                    None => {
                        return Err(self.error(start, format!("unterminated value for {name}")));
                    }
                }
            }
            Some(_) => {
                let start = self.pos;
                while let Some(b) = self.peek() {
                    if b.is_ascii_whitespace() || matches!(b, b'>' | b'/') {
                        break;
                    }
                    self.pos += 1;
                }
                self.src[start..self.pos].to_string()
            }
            None => return Err(self.error(at, format!("unterminated value for {name}"))),
        };

        element.set_attr(name, value);
        Ok(())
    }
}
