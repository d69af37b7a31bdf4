//! Template tokenizer - tags and placeholders to a flat token stream

use crate::tooltip::{Operator, Placeholder, PlaceholderOp, Token};
use crate::types::HighlightKind;

/// Split a raw template into literal, marker and placeholder tokens
///
/// Passes run in a fixed order: entity decoding, tag classification, then
/// per-line placeholder scanning. Unknown tags are dropped with their
/// content kept; text that only resembles a placeholder stays literal.
pub fn tokenize(raw: &str) -> Vec<Token> {
    let decoded = decode_entities(raw);
    let events = scan_tags(&decoded);

    let mut tokens = Vec::new();
    for event in events {
        match event {
            TagEvent::Start(kind) => tokens.push(Token::HighlightStart(kind)),
            TagEvent::End => tokens.push(Token::HighlightEnd),
            TagEvent::Text(text) => {
                for (line_index, line) in text.split('\n').enumerate() {
                    if line_index > 0 {
                        tokens.push(Token::LineBreak);
                    }
                    scan_placeholders(line, &mut tokens);
                }
            }
        }
    }
    tokens
}

/// Decode the escape forms the backend uses for angle brackets and friends
///
/// Both raw and escaped tags must tokenize identically, so this runs before
/// any tag is looked at.
fn decode_entities(raw: &str) -> String {
    raw.replace("\\u003C", "<")
        .replace("\\u003E", ">")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

enum TagEvent {
    Text(String),
    Start(HighlightKind),
    End,
}

/// The fixed tag-pair vocabulary mapped to highlight kinds
fn highlight_for_tag(name: &str) -> Option<HighlightKind> {
    match name {
        "magicDamage" => Some(HighlightKind::Magic),
        "shield" => Some(HighlightKind::Shield),
        "speed" => Some(HighlightKind::Speed),
        "attackSpeed" => Some(HighlightKind::AttackSpeed),
        "scaleAP" => Some(HighlightKind::Ap),
        _ => None,
    }
}

/// Trailing glyph for the single-sided decorative tags
fn glyph_for_tag(name: &str) -> Option<&'static str> {
    match name {
        "spellPassive" => Some(" \u{1F31F}"),
        "spellName" => Some(" \u{1F4DC}"),
        "recast" => Some(" \u{1F504}"),
        _ => None,
    }
}

/// Walk the decoded text classifying every `<...>` span
///
/// Line-break tags become embedded newlines so the later line split treats
/// them and literal newlines the same way. A `<` with no closing `>` is
/// plain text.
fn scan_tags(decoded: &str) -> Vec<TagEvent> {
    let mut events = Vec::new();
    let mut text = String::new();
    let mut rest = decoded;

    while let Some(open) = rest.find('<') {
        let (before, from_tag) = rest.split_at(open);
        text.push_str(before);

        let Some(close) = from_tag.find('>') else {
            // Unterminated tag, keep the rest as literal text
            text.push_str(from_tag);
            rest = "";
            break;
        };
        let body = &from_tag[1..close];
        rest = &from_tag[close + 1..];

        let closing = body.starts_with('/');
        let name = body
            .trim_start_matches('/')
            .trim_end_matches('/')
            .trim();

        if name == "br" && !closing {
            text.push('\n');
        } else if let Some(kind) = highlight_for_tag(name) {
            if !text.is_empty() {
                events.push(TagEvent::Text(std::mem::take(&mut text)));
            }
            if closing {
                events.push(TagEvent::End);
            } else {
                events.push(TagEvent::Start(kind));
            }
        } else if let Some(glyph) = glyph_for_tag(name) {
            if closing {
                text.push_str(glyph);
            }
            // The opening decorative tag is dropped, content kept
        }
        // Any other tag is stripped
    }
    text.push_str(rest);
    if !text.is_empty() {
        events.push(TagEvent::Text(text));
    }
    events
}

/// Find `{{ key [op operand] }}` expressions in one line of text
fn scan_placeholders(line: &str, tokens: &mut Vec<Token>) {
    let mut literal = String::new();
    let mut rest = line;

    while let Some(start) = rest.find("{{") {
        match parse_placeholder(&rest[start..]) {
            Some((placeholder, len)) => {
                literal.push_str(&rest[..start]);
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Placeholder(placeholder));
                rest = &rest[start + len..];
            }
            None => {
                // Not a well-formed placeholder; emit through the first
                // brace and keep scanning
                literal.push_str(&rest[..start + 1]);
                rest = &rest[start + 1..];
            }
        }
    }
    literal.push_str(rest);
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
}

/// Parse one placeholder at the start of `s`, returning it and its length
fn parse_placeholder(s: &str) -> Option<(Placeholder, usize)> {
    let chars: Vec<char> = s.chars().collect();
    let mut i = 2; // past "{{"

    let skip_ws = |i: &mut usize| {
        while *i < chars.len() && chars[*i].is_whitespace() {
            *i += 1;
        }
    };

    skip_ws(&mut i);
    let key_start = i;
    while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
        i += 1;
    }
    if i == key_start {
        return None;
    }
    let key: String = chars[key_start..i].iter().collect();
    skip_ws(&mut i);

    let mut op = None;
    if i < chars.len() {
        if let Some(operator) = Operator::from_char(chars[i]) {
            i += 1;
            skip_ws(&mut i);
            let number_start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i > number_start && i < chars.len() && chars[i] == '.' {
                let fraction_start = i + 1;
                let mut j = fraction_start;
                while j < chars.len() && chars[j].is_ascii_digit() {
                    j += 1;
                }
                if j > fraction_start {
                    i = j;
                }
            }
            if i == number_start {
                return None;
            }
            let operand: f64 = chars[number_start..i]
                .iter()
                .collect::<String>()
                .parse()
                .ok()?;
            op = Some(PlaceholderOp { operator, operand });
            skip_ws(&mut i);
        }
    }

    if i + 1 < chars.len() && chars[i] == '}' && chars[i + 1] == '}' {
        let len = i + 2;
        let raw: String = chars[..len].iter().collect();
        // Byte length for slicing the source line
        Some((Placeholder { key, op, raw: raw.clone() }, raw.len()))
    } else {
        None
    }
}
