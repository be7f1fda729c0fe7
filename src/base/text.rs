//! Text manipulation utilities for type spellings and selectors.

/// Qualifier noise removed from every spelling, applied in order.
const CLEANUPS: &[(&str, &str)] = &[
    ("_Nonnull", ""),
    ("_Nullable", ""),
    ("__restrict", ""),
    (" *restrict", " *"),
    (" restrict", ""),
    ("volatile", ""),
    ("  ,", " ,"),
    (" *  *", " **"),
    (" *  ", " *"),
    ("(^ )", "(^)"),
    (" , ", ", "),
    (" )", ")"),
    ("__kindof", ""),
    (" const", ""),
    ("const ", ""),
    ("_Null_unspecified", ""),
];

/// Clean a type spelling of nullability, `const`, `volatile`, `restrict`
/// and `__kindof` qualifiers, normalizing the whitespace they leave behind.
///
/// # Example
/// ```
/// use metabase::base::text::clean_spelling;
///
/// assert_eq!(clean_spelling("NSString * _Nonnull"), "NSString *");
/// assert_eq!(clean_spelling("const char *"), "char *");
/// assert_eq!(clean_spelling("void (^ )(int)"), "void (^)(int)");
/// ```
pub fn clean_spelling(spelling: &str) -> String {
    let cleaned = CLEANUPS
        .iter()
        .fold(spelling.to_string(), |acc, (from, to)| acc.replace(from, to));
    cleaned.trim().to_string()
}

/// Camel-case a selector: `setValue:forKey:` becomes `setValueForKey`.
///
/// # Example
/// ```
/// use metabase::base::text::camel_case;
///
/// assert_eq!(camel_case("setA:"), "setA");
/// assert_eq!(camel_case("initWithFrame:style:"), "initWithFrameStyle");
/// ```
pub fn camel_case(selector: &str) -> String {
    let spaced = selector.replace(':', " ");
    let mut tokens = spaced.split(' ');
    let mut output = tokens.next().unwrap_or_default().to_string();
    for token in tokens {
        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            output.extend(first.to_uppercase());
            output.push_str(chars.as_str());
        }
    }
    output
}

/// Remove template-style argument lists (`NSArray<NSString *> *` becomes
/// `NSArray *`), including nested ones.
pub fn strip_template_args(spelling: &str) -> String {
    let mut depth = 0usize;
    let mut output = String::with_capacity(spelling.len());
    for c in spelling.chars() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            _ if depth == 0 => output.push(c),
            _ => {}
        }
    }
    collapse_spaces(&output)
}

/// Collapse runs of spaces into one and trim the ends.
pub fn collapse_spaces(text: &str) -> String {
    text.split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip any run of leading underscores: `__Foo` becomes `Foo`.
pub fn trim_leading_underscores(name: &str) -> &str {
    name.trim_start_matches('_')
}

/// Strip a leading keyword such as `struct ` or `enum `, trimming the rest.
pub fn strip_keyword<'a>(spelling: &'a str, keyword: &str) -> &'a str {
    spelling
        .trim_start()
        .strip_prefix(keyword)
        .map(str::trim)
        .unwrap_or(spelling)
}

/// Number of `*` pointer markers in a spelling.
pub fn pointer_depth(spelling: &str) -> usize {
    spelling.matches('*').count()
}

/// The spelling with every `*` removed and the remainder trimmed.
pub fn without_pointers(spelling: &str) -> String {
    spelling.replace('*', "").trim().to_string()
}

/// Check if a spelling is a single identifier (Unicode XID rules).
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(|c| c == '$' || unicode_ident::is_xid_continue(c))
        }
        _ => false,
    }
}
