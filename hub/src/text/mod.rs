//! Minimal structured rich text.
//!
//! [`Text`] is the structured message payload carried by the text channels.
//! It is a tree: each node has literal content, a [`Style`], and sibling
//! nodes appended after it. Rendering with [`Text::get_string()`] concatenates
//! content depth-first and ignores styles; [`Text::legacy_string()`] renders
//! styles back into `§` codes.
//!
//! Content may itself contain `§` codes (servers often send pre-formatted
//! literals). [`strip_formatting`] removes them.

mod formatting;
mod strip;

use crate::event::Event;

pub use formatting::{CODE_PREFIX, Formatting};
pub use strip::strip_formatting;

/// Presentation attributes of a text node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// One of the sixteen color codes, if any.
    pub color: Option<Formatting>,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub strikethrough: bool,
    pub obfuscated: bool,
}

impl Style {
    pub const EMPTY: Style = Style {
        color: None,
        bold: false,
        italic: false,
        underlined: false,
        strikethrough: false,
        obfuscated: false,
    };

    /// Returns this style with `formatting` applied.
    ///
    /// Color codes replace the color, decoration codes switch the decoration
    /// on, and [`Formatting::Reset`] yields the empty style.
    pub fn apply(mut self, formatting: Formatting) -> Style {
        match formatting {
            Formatting::Reset => return Style::EMPTY,
            Formatting::Obfuscated => self.obfuscated = true,
            Formatting::Bold => self.bold = true,
            Formatting::Strikethrough => self.strikethrough = true,
            Formatting::Underline => self.underlined = true,
            Formatting::Italic => self.italic = true,
            color => self.color = Some(color),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Style::EMPTY
    }

    /// The codes that reproduce this style from the empty one, color first.
    pub fn codes(&self) -> Vec<Formatting> {
        let decorations = [
            (self.obfuscated, Formatting::Obfuscated),
            (self.bold, Formatting::Bold),
            (self.strikethrough, Formatting::Strikethrough),
            (self.underlined, Formatting::Underline),
            (self.italic, Formatting::Italic),
        ];
        self.color
            .into_iter()
            .chain(decorations.into_iter().filter(|(on, _)| *on).map(|(_, f)| f))
            .collect()
    }
}

/// A structured rich-text message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Text {
    content: String,
    style: Style,
    siblings: Vec<Text>,
}

impl Event for Text {}

impl Text {
    /// A text node with no content, used as a container for siblings.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn literal(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Appends a sibling rendered after this node and its earlier siblings.
    pub fn append(mut self, sibling: impl Into<Text>) -> Self {
        self.siblings.push(sibling.into());
        self
    }

    /// Applies a formatting code to this node's style.
    pub fn formatted(mut self, formatting: Formatting) -> Self {
        self.style = self.style.apply(formatting);
        self
    }

    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[inline]
    pub fn siblings(&self) -> &[Text] {
        &self.siblings
    }

    /// Renders the text as a plain string: own content, then siblings, depth-first.
    ///
    /// Styles are not rendered. `§` codes inside literal content are kept.
    pub fn get_string(&self) -> String {
        let mut out = String::new();
        self.visit(&mut |node, _| out.push_str(&node.content));
        out
    }

    /// Renders the text with its styles as `§` codes.
    ///
    /// Every styled node is preceded by a reset followed by the codes of its
    /// effective style, so the output does not depend on what precedes it.
    /// Siblings inherit the style of their parent unless they set their own.
    pub fn legacy_string(&self) -> String {
        let mut out = String::new();
        self.visit(&mut |node, inherited| {
            if node.content.is_empty() {
                return;
            }
            let effective = if node.style.is_empty() { inherited } else { node.style };
            if !effective.is_empty() {
                out.push_str(&Formatting::Reset.to_string());
                for code in effective.codes() {
                    out.push_str(&code.to_string());
                }
            }
            out.push_str(&node.content);
        });
        out
    }

    /// Shorthand for `strip_formatting(&self.get_string())`.
    pub fn stripped(&self) -> String {
        strip_formatting(&self.get_string())
    }

    fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Text, Style)) {
        self.visit_with(Style::EMPTY, f);
    }

    fn visit_with<'a>(&'a self, inherited: Style, f: &mut impl FnMut(&'a Text, Style)) {
        f(self, inherited);
        let inherited = if self.style.is_empty() { inherited } else { self.style };
        for sibling in &self.siblings {
            sibling.visit_with(inherited, f);
        }
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Text::literal(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Text::literal(content)
    }
}
