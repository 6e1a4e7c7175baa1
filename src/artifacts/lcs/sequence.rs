//! Comparable elements and sequences
//!
//! An [`Element`] is a slice of the input text together with its comparison
//! [`Key`]. Two elements are equal iff their keys are equal. Keys up to
//! [`INLINE_KEY_LEN`] bytes hold the content verbatim, longer contents are
//! hashed down to 128 bits so comparisons and histogram lookups stay cheap for
//! long lines.

use regex::Regex;
use sha1::{Digest, Sha1};
use std::fmt;
use std::sync::LazyLock;

pub const INLINE_KEY_LEN: usize = 8;

/// Strings longer than this are split into words instead of characters
pub const CHAR_SPLIT_LIMIT: usize = 100;

pub const WORD_REGEX: &str = concat!(
    r"(?s)",
    r"[[:alpha:]]{1,12}", // alphabets, capped at 12
    r"|[[:digit:]]{1,3}", // digits, capped at 3
    r"|.",                // anything else as a single-char word
);

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_REGEX).expect("word pattern is a valid regex"));

/// A function splitting a string into the words of a [`Sequence`]
pub type Split = for<'a> fn(&'a str) -> Vec<&'a str>;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Inline {
        len: u8,
        bytes: [u8; INLINE_KEY_LEN],
    },
    Digest(u128),
}

impl Key {
    pub fn of(s: &str) -> Self {
        if s.len() <= INLINE_KEY_LEN {
            let mut bytes = [0; INLINE_KEY_LEN];
            bytes[..s.len()].copy_from_slice(s.as_bytes());

            return Key::Inline {
                len: s.len() as u8,
                bytes,
            };
        }

        let digest = Sha1::digest(s.as_bytes());
        let mut truncated = [0; 16];
        truncated.copy_from_slice(&digest[..16]);

        Key::Digest(u128::from_be_bytes(truncated))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Inline { len, bytes } => {
                write!(f, "{:?}", String::from_utf8_lossy(&bytes[..*len as usize]))
            }
            Key::Digest(digest) => write!(f, "#{digest:032x}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    key: Key,
    text: &'a str,
}

impl<'a> Element<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            key: Key::of(text),
            text,
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn text(&self) -> &'a str {
        self.text
    }
}

/// What an element of a sequence stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Chars,
    Words,
    Lines,
}

impl Granularity {
    /// Plural name of the elements
    pub fn unit(self) -> &'static str {
        match self {
            Granularity::Chars => "chars",
            Granularity::Words => "words",
            Granularity::Lines => "lines",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence<'a> {
    granularity: Granularity,
    elements: Vec<Element<'a>>,
}

impl<'a> Sequence<'a> {
    pub fn new(granularity: Granularity, elements: Vec<Element<'a>>) -> Self {
        Self {
            granularity,
            elements,
        }
    }

    /// One element per character
    pub fn chars(s: &'a str) -> Self {
        Self::new(
            Granularity::Chars,
            split_chars(s).into_iter().map(Element::new).collect(),
        )
    }

    /// One element per word, as cut by `split`
    pub fn words(split: Split, s: &'a str) -> Self {
        Self::new(
            Granularity::Words,
            split(s).into_iter().map(Element::new).collect(),
        )
    }

    /// One element per line
    ///
    /// A trailing newline yields a final empty line, so that `"a\n"` and `"a"`
    /// differ. A `\r` right before a newline is dropped.
    pub fn lines(s: &'a str) -> Self {
        if s.is_empty() {
            return Self::new(Granularity::Lines, Vec::new());
        }

        let elements = s
            .split('\n')
            .map(|line| Element::new(line.strip_suffix('\r').unwrap_or(line)))
            .collect();

        Self::new(Granularity::Lines, elements)
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn elements(&self) -> &[Element<'a>] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Element<'a>> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element<'a>> {
        self.elements.iter()
    }

    /// Contiguous sub-sequence `[from, to)`
    pub fn slice(&self, from: usize, to: usize) -> Self {
        Self::new(self.granularity, self.elements[from..to].to_vec())
    }

    /// Elements at the given positions, in the given order
    pub fn sub(&self, indices: &[usize]) -> Self {
        Self::new(
            self.granularity,
            indices.iter().map(|&i| self.elements[i]).collect(),
        )
    }

    pub fn is_subsequence_of(&self, other: &Sequence<'_>) -> bool {
        let mut others = other.iter();

        self.iter()
            .all(|element| others.any(|candidate| candidate.key == element.key))
    }
}

impl<'s, 'a> IntoIterator for &'s Sequence<'a> {
    type Item = &'s Element<'a>;
    type IntoIter = std::slice::Iter<'s, Element<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = match self.granularity {
            Granularity::Lines => "\n",
            Granularity::Chars | Granularity::Words => "",
        };

        let texts = self.iter().map(Element::text).collect::<Vec<_>>();
        write!(f, "{}", texts.join(separator))
    }
}

pub fn split_chars(s: &str) -> Vec<&str> {
    s.char_indices()
        .map(|(i, c)| &s[i..i + c.len_utf8()])
        .collect()
}

/// Split into words: runs of up to 12 ASCII letters, runs of up to 3 ASCII
/// digits, and every other character on its own
pub fn split_words(s: &str) -> Vec<&str> {
    WORD.find_iter(s).map(|m| m.as_str()).collect()
}

/// Split short strings per character and long strings per word
pub fn split(s: &str) -> Vec<&str> {
    if s.len() <= CHAR_SPLIT_LIMIT {
        split_chars(s)
    } else {
        split_words(s)
    }
}
