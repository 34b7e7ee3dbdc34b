use anyhow::{anyhow, bail, Result};

/// Patterns protected when nothing else is configured
pub const DEFAULT_PROTECTED_ROUTES: &[&str] = &["/dashboard(.*)"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    /// `:name`, one non-empty path segment
    Segment,
    /// `(.*)`, anything including `/` and nothing at all
    Wildcard,
}

/// A single compiled route pattern.
///
/// Literals compare ASCII case-insensitively, the whole path must be consumed
/// and one trailing `/` on the request path is tolerated.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: String,
    tokens: Vec<Token>,
}

impl RoutePattern {
    pub fn parse(source: &str) -> Result<Self> {
        if !source.starts_with('/') {
            bail!("Route pattern must start with '/': {}", source);
        }

        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(c) = rest.chars().next() {
            if let Some(after) = rest.strip_prefix("(.*)") {
                flush_literal(&mut literal, &mut tokens);
                tokens.push(Token::Wildcard);
                rest = after;
                continue;
            }

            match c {
                ':' => {
                    let name_len = rest[1..]
                        .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
                        .unwrap_or(rest.len() - 1);
                    if name_len == 0 {
                        bail!("Route pattern has a parameter without a name: {}", source);
                    }
                    flush_literal(&mut literal, &mut tokens);
                    tokens.push(Token::Segment);
                    rest = &rest[1 + name_len..];
                }
                '(' | ')' | '*' | '?' | '+' => {
                    return Err(anyhow!(
                        "Unsupported '{}' in route pattern: {} (only '(.*)' and ':name' are allowed)",
                        c,
                        source
                    ));
                }
                _ => {
                    literal.push(c.to_ascii_lowercase());
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        flush_literal(&mut literal, &mut tokens);

        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, path: &str) -> bool {
        let path = path.to_ascii_lowercase();

        if match_tokens(&self.tokens, &path) {
            return true;
        }

        match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => match_tokens(&self.tokens, trimmed),
            _ => false,
        }
    }
}

fn flush_literal(literal: &mut String, tokens: &mut Vec<Token>) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}

fn match_tokens(tokens: &[Token], path: &str) -> bool {
    match tokens.split_first() {
        None => path.is_empty(),
        Some((Token::Literal(lit), rest)) => path
            .strip_prefix(lit.as_str())
            .is_some_and(|tail| match_tokens(rest, tail)),
        Some((Token::Segment, rest)) => {
            let end = path.find('/').unwrap_or(path.len());
            (1..=end)
                .filter(|&i| path.is_char_boundary(i))
                .any(|i| match_tokens(rest, &path[i..]))
        }
        Some((Token::Wildcard, rest)) => (0..=path.len())
            .filter(|&i| path.is_char_boundary(i))
            .any(|i| match_tokens(rest, &path[i..])),
    }
}

/// Classifies request paths as protected or not. Built once at startup and
/// shared read-only between requests.
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    patterns: Vec<RoutePattern>,
}

impl RouteMatcher {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| RoutePattern::parse(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(RoutePattern::as_str)
    }
}
