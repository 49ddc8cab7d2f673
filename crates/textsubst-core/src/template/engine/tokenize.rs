//! Tokenization for the substitution engine
//!
//! Finds every marker occurrence in one forward pass. Literal text between
//! tokens is not materialised; a template keeps byte offsets into the
//! text it was parsed from instead.

use crate::config::consts::{CLOSE_BRACE, OPEN_BRACE};
use crate::config::Marker;

/// Token classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind<'t> {
    /// `@@`
    Escape,

    /// `@x` or `@{name}`
    Reference { name: &'t str },

    /// `@` as the final byte
    UnterminatedMarker,

    /// `@{` with no `}` after it
    UnterminatedBrace,
}

/// A single marker occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'t> {
    pub kind: TokenKind<'t>,
    /// Byte offset of the marker
    pub start: usize,
    /// Byte offset where scanning resumes
    pub end: usize,
}

impl<'t> Token<'t> {
    /// The token's source text
    pub fn excerpt<'s>(&self, text: &'s str) -> &'s str {
        &text[self.start..self.end]
    }
}

/// Iterator over marker tokens in template text
///
/// # Performance
///
/// - **Forward-only**: position never moves backward
/// - **Zero-copy**: names borrow from the input
///
/// After an unterminated `@{` scanning resumes right after the brace, so
/// later problems in the same text are still reported.
pub(crate) struct TokenStream<'t> {
    text: &'t str,
    marker: u8,
    pos: usize,
}

impl<'t> TokenStream<'t> {
    pub fn new(text: &'t str, marker: Marker) -> Self {
        Self {
            text,
            marker: marker.as_byte(),
            pos: 0,
        }
    }

    fn finish(&mut self) {
        self.pos = self.text.len();
    }

    fn braced(&mut self, start: usize) -> Token<'t> {
        let bytes = self.text.as_bytes();
        let name_start = start + 2;
        match bytes[name_start..].iter().position(|&b| b == CLOSE_BRACE) {
            Some(len) => {
                let end = name_start + len + 1;
                self.pos = end;
                Token {
                    kind: TokenKind::Reference {
                        name: &self.text[name_start..name_start + len],
                    },
                    start,
                    end,
                }
            }
            None => {
                self.pos = name_start;
                Token {
                    kind: TokenKind::UnterminatedBrace,
                    start,
                    end: name_start,
                }
            }
        }
    }

    fn compact(&mut self, start: usize) -> Token<'t> {
        let name_start = start + 1;
        let width = self.text[name_start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        let end = name_start + width;
        self.pos = end;
        Token {
            kind: TokenKind::Reference {
                name: &self.text[name_start..end],
            },
            start,
            end,
        }
    }
}

impl<'t> Iterator for TokenStream<'t> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        let start = self.pos + bytes[self.pos..].iter().position(|&b| b == self.marker)?;

        let Some(&next) = bytes.get(start + 1) else {
            self.finish();
            return Some(Token {
                kind: TokenKind::UnterminatedMarker,
                start,
                end: bytes.len(),
            });
        };

        if next == OPEN_BRACE {
            return Some(self.braced(start));
        }

        if next == self.marker {
            self.pos = start + 2;
            return Some(Token {
                kind: TokenKind::Escape,
                start,
                end: start + 2,
            });
        }

        Some(self.compact(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<Token<'_>> {
        TokenStream::new(text, Marker::default()).collect()
    }

    fn kinds(text: &str) -> Vec<TokenKind<'_>> {
        tokens(text).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_no_markers() {
        assert!(tokens("plain text, no references").is_empty());
        assert!(tokens("").is_empty());
    }

    #[test]
    fn test_compact_reference() {
        let toks = tokens("a@xb");
        assert_eq!(
            toks,
            vec![Token {
                kind: TokenKind::Reference { name: "x" },
                start: 1,
                end: 3,
            }]
        );
    }

    #[test]
    fn test_braced_reference() {
        let text = "<@{long name}>";
        let toks = tokens(text);
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::Reference { name: "long name" });
        assert_eq!(toks[0].excerpt(text), "@{long name}");
        assert_eq!(toks[0].end, text.len() - 1);
    }

    #[test]
    fn test_empty_braced_name() {
        assert_eq!(kinds("@{}"), vec![TokenKind::Reference { name: "" }]);
    }

    #[test]
    fn test_escape() {
        let toks = tokens("100% @@ done");
        assert_eq!(
            toks,
            vec![Token {
                kind: TokenKind::Escape,
                start: 5,
                end: 7,
            }]
        );
    }

    #[test]
    fn test_triple_marker_is_escape_then_reference() {
        assert_eq!(
            kinds("@@@x"),
            vec![TokenKind::Escape, TokenKind::Reference { name: "x" }]
        );
    }

    #[test]
    fn test_unterminated_marker() {
        let toks = tokens("abc@");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::UnterminatedMarker);
        assert_eq!(toks[0].start, 3);
    }

    #[test]
    fn test_unterminated_brace_resumes_after_brace() {
        assert_eq!(
            kinds("@{x @y"),
            vec![
                TokenKind::UnterminatedBrace,
                TokenKind::Reference { name: "y" }
            ]
        );
    }

    #[test]
    fn test_brace_search_spans_later_markers() {
        // The first `}` closes the reference, whatever lies before it.
        assert_eq!(
            kinds("@{a @{b} c"),
            vec![TokenKind::Reference { name: "a @{b" }]
        );
    }

    #[test]
    fn test_compact_multibyte_name() {
        let text = "@éa";
        let toks = tokens(text);
        assert_eq!(toks[0].kind, TokenKind::Reference { name: "é" });
        assert_eq!(toks[0].end, 1 + 'é'.len_utf8());
    }

    #[test]
    fn test_compact_brace_close_is_a_name() {
        assert_eq!(kinds("@}"), vec![TokenKind::Reference { name: "}" }]);
    }

    #[test]
    fn test_custom_marker() {
        let marker = Marker::new('$').unwrap();
        let kinds: Vec<_> = TokenStream::new("@x $x $$ ${y}", marker)
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Reference { name: "x" },
                TokenKind::Escape,
                TokenKind::Reference { name: "y" },
            ]
        );
    }

    #[test]
    fn test_tokens_are_ordered_and_disjoint() {
        let toks = tokens("@a@b@@@{cd}x@{e");
        for pair in toks.windows(2) {
            assert!(pair[0].end <= pair[1].start, "{:?}", pair);
        }
    }
}
