#![deny(missing_docs)]

//! # Path Template Matching
//!
//! Maps a concrete request path (`/api/pets/7?verbose=1`) onto the template
//! that declares it (`/pets/{id}`).

use crate::swagger::document::SwaggerDocument;
use tracing::trace;

impl SwaggerDocument {
    /// Finds the declared template matching `request_path`.
    ///
    /// The query string and fragment are ignored and `basePath` is stripped.
    /// When several templates match, the one with the most literal segments
    /// wins; ties go to declaration order.
    pub fn find_path_template(&self, request_path: &str) -> Option<&str> {
        let path = request_path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = self.strip_base_path(path);
        let actual = split_segments(path);

        let mut best: Option<(&str, usize)> = None;
        for template in self.paths.keys() {
            let Some(literals) = match_template(template, &actual) else {
                continue;
            };
            trace!(template = %template, literals, "template candidate");
            if best.is_none_or(|(_, n)| literals > n) {
                best = Some((template.as_str(), literals));
            }
        }
        best.map(|(t, _)| t)
    }

    fn strip_base_path<'p>(&self, path: &'p str) -> &'p str {
        let Some(base) = self.base_path.as_deref() else {
            return path;
        };
        let base = base.trim_end_matches('/');
        if base.is_empty() {
            return path;
        }
        match path.strip_prefix(base) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        }
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Returns the number of literal segments when `template` matches.
fn match_template(template: &str, actual: &[&str]) -> Option<usize> {
    let expected = split_segments(template);
    if expected.len() != actual.len() {
        return None;
    }

    let mut literals = 0;
    for (tpl, seg) in expected.iter().zip(actual) {
        if !tpl.contains('{') {
            if tpl != seg {
                return None;
            }
            literals += 1;
        } else if !segment_matches(tpl, seg) {
            return None;
        }
    }
    Some(literals)
}

/// Matches a templated segment such as `{id}` or `{name}.{ext}`.
///
/// Each placeholder stands for a non-empty run of characters; an unclosed
/// `{` is taken literally.
fn segment_matches(template: &str, segment: &str) -> bool {
    let pieces = literal_pieces(template);
    let [first, middle @ .., last] = pieces.as_slice() else {
        return template == segment;
    };

    let Some(mut rest) = segment.strip_prefix(*first) else {
        return false;
    };
    for piece in middle {
        // The placeholder before `piece` takes at least one character.
        let Some(skip) = rest.chars().next().map(char::len_utf8) else {
            return false;
        };
        let Some(at) = rest[skip..].find(*piece) else {
            return false;
        };
        rest = &rest[skip + at + piece.len()..];
    }
    rest.len() > last.len() && rest.ends_with(last)
}

/// Splits `template` into the literal text around its placeholders.
fn literal_pieces(template: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };
        pieces.push(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    pieces.push(rest);
    pieces
}
