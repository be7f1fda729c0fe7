//! Logos-based lexer for type spellings.
//!
//! Used to split block signatures such as `NSString *(^)(int, void (^)(BOOL))`
//! into their return spelling and parameter list.

use logos::Logos;

/// Tokens of a C/Objective-C type spelling.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellingToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Number,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("^")]
    Caret,

    #[token("*")]
    Star,

    #[token(",")]
    Comma,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("...")]
    Ellipsis,
}

/// A token with its kind and byte range in the source spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub kind: Option<SpellingToken>,
    pub start: usize,
    pub end: usize,
}

/// Tokenize a spelling. Unrecognized characters yield `kind: None`.
pub fn tokenize(spelling: &str) -> Vec<SpannedToken> {
    let mut lexer = SpellingToken::lexer(spelling);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        tokens.push(SpannedToken {
            kind: result.ok(),
            start: span.start,
            end: span.end,
        });
    }
    tokens
}

/// Split of a block spelling around its `(^)` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpelling {
    /// Return type spelling (`void`, `NSString *`, ...).
    pub returns: String,
    /// Parameter list between the outer parentheses, without them.
    pub params: String,
}

/// Parse a block signature into its return spelling and parameter list.
///
/// Returns `None` when the spelling has no `(^)(` marker.
///
/// # Example
/// ```
/// use metabase::base::spelling::parse_block_spelling;
///
/// let parsed = parse_block_spelling("NSString *(^)(int, void (^)(BOOL))").unwrap();
/// assert_eq!(parsed.returns, "NSString *");
/// assert_eq!(parsed.params, "int, void (^)(BOOL)");
/// ```
pub fn parse_block_spelling(spelling: &str) -> Option<BlockSpelling> {
    let tokens: Vec<SpannedToken> = tokenize(spelling)
        .into_iter()
        .filter(|t| t.kind != Some(SpellingToken::Whitespace))
        .collect();

    let marker = tokens.windows(4).position(|w| {
        w[0].kind == Some(SpellingToken::LParen)
            && w[1].kind == Some(SpellingToken::Caret)
            && w[2].kind == Some(SpellingToken::RParen)
            && w[3].kind == Some(SpellingToken::LParen)
    })?;

    let marker_start = tokens[marker].start;
    let params_start = tokens[marker + 3].end;

    let mut depth = 1usize;
    let mut close = None;
    for token in &tokens[marker + 4..] {
        match token.kind {
            Some(SpellingToken::LParen) => depth += 1,
            Some(SpellingToken::RParen) => {
                depth -= 1;
                if depth == 0 {
                    close = Some(token);
                    break;
                }
            }
            _ => {}
        }
    }

    // Unbalanced spellings keep whatever follows the marker as parameters.
    let (params_end, rest_start) = match close {
        Some(token) => (token.start, token.end),
        None => (spelling.len(), spelling.len()),
    };

    let returns = format!("{}{}", &spelling[..marker_start], &spelling[rest_start..]);
    Some(BlockSpelling {
        returns: returns.trim().to_string(),
        params: spelling[params_start..params_end].trim().to_string(),
    })
}

/// Return type spelling of a block signature, or an empty string.
pub fn block_return_spelling(spelling: &str) -> String {
    parse_block_spelling(spelling)
        .map(|parsed| parsed.returns)
        .unwrap_or_default()
}

/// True when the spelling contains the block pointer marker `(^)`.
pub fn is_block_spelling(spelling: &str) -> bool {
    spelling.contains("(^)")
}

/// True when the spelling contains a function pointer marker `(*)`.
pub fn is_function_pointer_spelling(spelling: &str) -> bool {
    spelling.contains("(*)")
}

/// True when the spelling contains a double function pointer marker `(**)`.
pub fn is_double_function_pointer_spelling(spelling: &str) -> bool {
    spelling.contains("(**)")
}
