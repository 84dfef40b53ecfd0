//! Sentence splitting and word tokenization.
//!
//! Tokens always cover their input exactly: concatenating the text of every
//! token of a sentence yields the sentence text, byte for byte. Whitespace
//! and punctuation are tokens too; [`Token::is_word`] tells them apart.

use std::cell::OnceCell;
use std::ops::Range;

use crate::sanitize::strip_html_tags;

/// Characters that end a sentence when followed by whitespace or the end of text.
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', '…', '؟', '۔'];
/// Full-width terminators end a sentence regardless of what follows.
const CJK_TERMINATORS: &[char] = &['。', '！', '？'];
/// Closing quotes and brackets that stay with the sentence they close.
const SENTENCE_CLOSERS: &[char] = &[
    '"', '\'', '’', '”', '»', '›', ')', ']', '}', '」', '』', '〟', '〞', '）',
];

/// A token with its byte range in the text it was produced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub source_range: Range<usize>,
}

impl Token {
    /// Returns true for tokens carrying at least one letter or digit.
    pub fn is_word(&self) -> bool {
        self.text.chars().any(is_word_char)
    }

    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// A sentence with its byte range in the block text it came from.
///
/// Tokens are computed on first access and cached.
#[derive(Debug, Clone)]
pub struct Sentence {
    pub text: String,
    pub source_range: Range<usize>,
    tokens: OnceCell<Vec<Token>>,
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.source_range == other.source_range
    }
}

impl Eq for Sentence {}

impl Sentence {
    pub fn new(text: impl Into<String>, source_range: Range<usize>) -> Self {
        Self {
            text: text.into(),
            source_range,
            tokens: OnceCell::new(),
        }
    }

    /// Tokens of this sentence, with ranges relative to the block text.
    pub fn tokens(&self) -> &[Token] {
        self.tokens.get_or_init(|| split_into_tokens(self))
    }

    /// Word tokens only.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens()
            .iter()
            .filter(|t| t.is_word())
            .map(|t| t.text.as_str())
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }
}

/// Split plain text into sentences.
///
/// The whitespace between two sentences is the start of the second one.
/// Whitespace-only sentences are dropped, and the last sentence carries no
/// trailing whitespace.
pub fn split_into_sentences(text: &str) -> Vec<Sentence> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(b, _)| b);

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i].1;
        if !is_terminator(c) {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j < chars.len() && is_terminator(chars[j].1) {
            j += 1;
        }
        while j < chars.len() && SENTENCE_CLOSERS.contains(&chars[j].1) {
            j += 1;
        }
        if ends_sentence(&chars, i, j) {
            let end = byte_at(j);
            push_sentence(&mut sentences, text, start..end);
            start = end;
        }
        i = j;
    }
    let end = start + text[start..].trim_end().len();
    push_sentence(&mut sentences, text, start..end);
    sentences
}

fn push_sentence(sentences: &mut Vec<Sentence>, text: &str, range: Range<usize>) {
    let slice = &text[range.clone()];
    if !slice.trim().is_empty() {
        sentences.push(Sentence::new(slice, range));
    }
}

fn is_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c) || CJK_TERMINATORS.contains(&c)
}

/// Decide whether the terminator run `chars[start..end]` closes a sentence.
fn ends_sentence(chars: &[(usize, char)], start: usize, end: usize) -> bool {
    if chars[start..end].iter().any(|&(_, c)| CJK_TERMINATORS.contains(&c)) {
        return true;
    }
    let Some(&(_, next)) = chars.get(end) else {
        return true;
    };
    if !next.is_whitespace() {
        return false;
    }
    // A period followed by a lowercase word is an abbreviation, not an ending.
    let only_periods = chars[start..end]
        .iter()
        .all(|&(_, c)| c == '.' || SENTENCE_CLOSERS.contains(&c));
    if only_periods {
        let following = chars[end..].iter().map(|&(_, c)| c).find(|c| !c.is_whitespace());
        if following.is_some_and(char::is_lowercase) {
            return false;
        }
    }
    true
}

/// Tokenize a sentence. Token ranges are offset by the sentence's own range.
pub fn split_into_tokens(sentence: &Sentence) -> Vec<Token> {
    let offset = sentence.source_range.start;
    tokenize(&sentence.text)
        .into_iter()
        .map(|t| Token {
            source_range: t.source_range.start + offset..t.source_range.end + offset,
            text: t.text,
        })
        .collect()
}

/// Tokenize plain text into words, whitespace and punctuation.
///
/// - Every whitespace character is its own token.
/// - Hyphens and apostrophes join letters on both sides (`well-known`, `it's`).
/// - Periods and commas join digits on both sides (`3.14`, `3,14`).
/// - An `@` between word characters starts an email address, in which
///   periods between word characters also join (`hugo@yoast.com`).
/// - Every other character is a single token. Emoji keep their variation
///   selectors, skin tone modifiers and zero-width-joined sequences.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(b, _)| b);
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i].1;
        let end = if is_word_char(c) {
            scan_word(&chars, i)
        } else if c.is_whitespace() {
            i + 1
        } else {
            scan_symbol(&chars, i)
        };
        let range = byte_at(i)..byte_at(end);
        tokens.push(Token {
            text: text[range.clone()].to_string(),
            source_range: range,
        });
        i = end;
    }
    tokens
}

fn scan_word(chars: &[(usize, char)], start: usize) -> usize {
    let mut email = false;
    let mut j = start + 1;
    while j < chars.len() {
        let c = chars[j].1;
        if is_word_char(c) {
            j += 1;
            continue;
        }
        let prev = chars[j - 1].1;
        let next = chars.get(j + 1).map(|&(_, n)| n);
        let joins = match c {
            '-' | '\u{2010}' | '\u{2011}' | '\'' | '’' => next.is_some_and(is_word_char),
            ',' => prev.is_numeric() && next.is_some_and(char::is_numeric),
            '.' => {
                (prev.is_numeric() && next.is_some_and(char::is_numeric))
                    || (email && next.is_some_and(is_word_char))
            }
            '@' => !email && next.is_some_and(is_word_char),
            _ => false,
        };
        if !joins {
            break;
        }
        email |= c == '@';
        j += 1;
    }
    j
}

fn scan_symbol(chars: &[(usize, char)], start: usize) -> usize {
    let mut j = start + 1;
    while j < chars.len() {
        let c = chars[j].1;
        if is_emoji_modifier(c) {
            j += 1;
        } else if c == '\u{200D}' && j + 1 < chars.len() {
            j += 2;
        } else {
            break;
        }
    }
    j
}

/// Letters, digits, underscore and combining marks.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_combining_mark(c)
}

fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}'
        | '\u{0483}'..='\u{0489}'
        | '\u{0591}'..='\u{05BD}'
        | '\u{0610}'..='\u{061A}'
        | '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06ED}'
        | '\u{0900}'..='\u{0903}'
        | '\u{093A}'..='\u{094F}'
        | '\u{0E31}'
        | '\u{0E34}'..='\u{0E3A}'
        | '\u{0E47}'..='\u{0E4E}'
        | '\u{3099}'..='\u{309A}'
    )
}

fn is_emoji_modifier(c: char) -> bool {
    matches!(c, '\u{FE0E}' | '\u{FE0F}' | '\u{20E3}' | '\u{1F3FB}'..='\u{1F3FF}')
}

/// Words of an HTML or plain-text string, tags stripped, in order.
pub fn get_words(text: &str) -> Vec<String> {
    let plain = strip_html_tags(text);
    tokenize(&plain)
        .into_iter()
        .filter(Token::is_word)
        .map(|t| t.text)
        .collect()
}

pub fn count_words(text: &str) -> usize {
    get_words(text).len()
}
