//! Tooltip rendering - composes tokenizer and resolver into styled lines

use crate::model::{AbilityVar, DamageComponent};
use crate::stats::ResolvedStats;
use crate::tooltip::{resolve, tokenize, Token};
use crate::types::HighlightKind;
use serde::{Deserialize, Serialize};

/// A run of text sharing one highlight kind (or none)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub highlight: Option<HighlightKind>,
}

impl Segment {
    fn new(text: String, highlight: Option<HighlightKind>) -> Self {
        Segment { text, highlight }
    }
}

/// A fully rendered tooltip: logical lines of styled segments
///
/// A line with no segments is a deliberate blank, kept so consumers can
/// draw a visual rule. Placeholders no rule resolved are listed in
/// `unresolved` (their verbatim text also appears inline).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedTooltip {
    pub lines: Vec<Vec<Segment>>,
    pub unresolved: Vec<String>,
}

impl RenderedTooltip {
    /// All segments in order, ignoring line structure
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.lines.iter().flatten()
    }

    /// The text with styling dropped, lines joined with newlines
    pub fn plain_text(&self) -> String {
        let lines: Vec<String> = self
            .lines
            .iter()
            .map(|line| line.iter().map(|s| s.text.as_str()).collect())
            .collect();
        lines.join("\n")
    }
}

/// Render a template against an ability's data and the stat snapshot
///
/// Drives the tokenizer, resolves every placeholder, groups text into
/// styled runs, then applies the textual clean-ups: whitespace collapse
/// within lines, at most one consecutive blank line, no space after a
/// break, no literal "seconds" after an "Ns" value, no doubled "%".
pub fn render(
    template: &str,
    components: &[DamageComponent],
    vars: &[AbilityVar],
    rank: u8,
    stats: &ResolvedStats,
) -> RenderedTooltip {
    let mut lines: Vec<Vec<Segment>> = vec![Vec::new()];
    let mut unresolved = Vec::new();
    let mut highlight: Option<HighlightKind> = None;
    let mut run = String::new();

    macro_rules! flush_run {
        () => {
            if !run.is_empty() {
                let text = std::mem::take(&mut run);
                lines
                    .last_mut()
                    .expect("at least one line")
                    .push(Segment::new(text, highlight));
            }
        };
    }

    for token in tokenize(template) {
        match token {
            Token::Literal(text) => run.push_str(&text),
            Token::Placeholder(placeholder) => {
                let resolution = resolve(&placeholder, rank, vars, components, stats);
                if !resolution.is_resolved() {
                    unresolved.push(placeholder.raw.clone());
                }
                run.push_str(&resolution.text);
            }
            Token::HighlightStart(kind) => {
                flush_run!();
                highlight = Some(kind);
            }
            Token::HighlightEnd => {
                flush_run!();
                highlight = None;
            }
            Token::LineBreak => {
                flush_run!();
                lines.push(Vec::new());
            }
        }
    }
    flush_run!();

    let lines = collapse_blank_lines(lines.into_iter().map(clean_line).collect());
    RenderedTooltip { lines, unresolved }
}

/// Clean one line's segments and merge adjacent same-highlight runs
fn clean_line(segments: Vec<Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::new();
    for segment in segments {
        let mut text = dedup_percent(&dedup_seconds(&collapse_whitespace(&segment.text)));

        if let Some(prev) = out.last() {
            // The clean-ups above work within a segment; repeat them across
            // the boundary to the previous run
            if prev.text.ends_with(' ') {
                text = text.trim_start().to_string();
            }
            if ends_with_digit_percent(&prev.text) && text.starts_with('%') {
                text.remove(0);
            }
            if ends_with_value_s(&prev.text) {
                if let Some(rest) = text.strip_prefix(" seconds") {
                    text = rest.to_string();
                } else if let Some(rest) = text.strip_prefix("seconds") {
                    text = rest.to_string();
                }
            }
        }

        if text.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(prev) if prev.highlight == segment.highlight => prev.text.push_str(&text),
            _ => out.push(Segment::new(text, segment.highlight)),
        }
    }

    // No stray spaces at either edge of a line
    if let Some(first) = out.first_mut() {
        first.text = first.text.trim_start().to_string();
    }
    if let Some(last) = out.last_mut() {
        last.text = last.text.trim_end().to_string();
    }
    out.retain(|segment| !segment.text.is_empty());
    out
}

/// At most one consecutive blank line, none at either end
fn collapse_blank_lines(lines: Vec<Vec<Segment>>) -> Vec<Vec<Segment>> {
    let mut out: Vec<Vec<Segment>> = Vec::new();
    for line in lines {
        if line.is_empty() && out.last().is_some_and(|prev| prev.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.first().is_some_and(|line| line.is_empty()) {
        out.remove(0);
    }
    while out.last().is_some_and(|line| line.is_empty()) {
        out.pop();
    }
    out
}

/// Collapse every whitespace run to a single space
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// Drop a literal " seconds" directly after a value already ending in "s"
fn dedup_seconds(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        out.push(chars[i]);
        if chars[i] == 's' && i >= 1 && chars[i - 1].is_ascii_digit() {
            let following: String = chars[i + 1..].iter().take(8).collect();
            if following == " seconds" {
                i += 8;
            }
        }
        i += 1;
    }
    out
}

/// Collapse "N%%" to "N%"
fn dedup_percent(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        out.push(chars[i]);
        if chars[i] == '%'
            && i >= 1
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1) == Some(&'%')
        {
            i += 1;
        }
        i += 1;
    }
    out
}

fn ends_with_digit_percent(text: &str) -> bool {
    let mut chars = text.chars().rev();
    chars.next() == Some('%') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

fn ends_with_value_s(text: &str) -> bool {
    let mut chars = text.chars().rev();
    chars.next() == Some('s') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ValueType, VarCoeff};

    fn q_component() -> DamageComponent {
        DamageComponent {
            component_key: "e1".to_string(),
            base_values: vec![80.0, 115.0, 150.0, 185.0, 220.0],
            ap_scaling: vec![0.8; 5],
            ad_scaling: vec![0.0; 5],
            bonus_ad_scaling: vec![0.0; 5],
            health_scaling: vec![0.0; 5],
            value_type: ValueType::Damage,
            damage_type: None,
        }
    }

    fn ap_stats(ap: f64) -> ResolvedStats {
        ResolvedStats {
            ap,
            ..Default::default()
        }
    }

    #[test]
    fn test_worked_example() {
        let rendered = render(
            "Deals {{ e1 }} plus {{ a1 }} AP magic damage.",
            &[q_component()],
            &[],
            1,
            &ap_stats(100.0),
        );
        assert_eq!(rendered.plain_text(), "Deals 160 plus (+80) AP magic damage.");
        assert!(rendered.unresolved.is_empty());
    }

    #[test]
    fn test_plain_template_round_trips() {
        let rendered = render(
            "A fireball that burns.",
            &[],
            &[],
            1,
            &ResolvedStats::default(),
        );
        assert_eq!(rendered.plain_text(), "A fireball that burns.");
    }

    #[test]
    fn test_highlight_runs_are_grouped() {
        let rendered = render(
            "Deals <magicDamage>{{ e1 }} magic damage</magicDamage> now.",
            &[q_component()],
            &[],
            1,
            &ap_stats(100.0),
        );
        assert_eq!(rendered.lines.len(), 1);
        let line = &rendered.lines[0];
        assert_eq!(line.len(), 3);
        assert_eq!(line[0], Segment::new("Deals ".into(), None));
        assert_eq!(
            line[1],
            Segment::new("160 magic damage".into(), Some(HighlightKind::Magic))
        );
        assert_eq!(line[2], Segment::new(" now.".into(), None));
    }

    #[test]
    fn test_unresolved_placeholder_is_reported_and_echoed() {
        let rendered = render(
            "Mystery: {{ mysterykey }}",
            &[],
            &[],
            1,
            &ResolvedStats::default(),
        );
        assert_eq!(rendered.plain_text(), "Mystery: {{ mysterykey }}");
        assert_eq!(rendered.unresolved, vec!["{{ mysterykey }}".to_string()]);
    }

    #[test]
    fn test_whitespace_collapses_within_lines() {
        let rendered = render(
            "too   many\t spaces",
            &[],
            &[],
            1,
            &ResolvedStats::default(),
        );
        assert_eq!(rendered.plain_text(), "too many spaces");
    }

    #[test]
    fn test_blank_lines_collapse_to_one() {
        let rendered = render(
            "one<br /><br /><br />two",
            &[],
            &[],
            1,
            &ResolvedStats::default(),
        );
        assert_eq!(rendered.plain_text(), "one\n\ntwo");
        assert_eq!(rendered.lines.len(), 3);
        assert!(rendered.lines[1].is_empty());
    }

    #[test]
    fn test_no_space_after_line_break() {
        let rendered = render(
            "one<br /> two",
            &[],
            &[],
            1,
            &ResolvedStats::default(),
        );
        assert_eq!(rendered.plain_text(), "one\ntwo");
    }

    #[test]
    fn test_redundant_seconds_removed() {
        let vars = vec![AbilityVar {
            key: "stunduration".to_string(),
            coeff: VarCoeff::PerRank(vec![1.75]),
        }];
        let rendered = render(
            "Stuns for {{ stunduration }} seconds.",
            &[],
            &vars,
            1,
            &ResolvedStats::default(),
        );
        assert_eq!(rendered.plain_text(), "Stuns for 2s.");
    }

    #[test]
    fn test_doubled_percent_collapses() {
        let vars = vec![AbilityVar {
            key: "refundpercent".to_string(),
            coeff: VarCoeff::Scalar(50.0),
        }];
        let rendered = render(
            "Refunds {{ refundpercent }}% of the cost.",
            &[],
            &vars,
            1,
            &ResolvedStats::default(),
        );
        assert_eq!(rendered.plain_text(), "Refunds 50% of the cost.");
    }

    #[test]
    fn test_cleanups_apply_across_highlight_boundaries() {
        let vars = vec![AbilityVar {
            key: "slowpercent".to_string(),
            coeff: VarCoeff::Scalar(30.0),
        }];
        let rendered = render(
            "Slows by <speed>{{ slowpercent }}</speed>% briefly.",
            &[],
            &vars,
            1,
            &ResolvedStats::default(),
        );
        assert_eq!(rendered.plain_text(), "Slows by 30% briefly.");
        // The "%" stays outside the styled run, the duplicate is gone
        let line = &rendered.lines[0];
        assert_eq!(line[1].highlight, Some(HighlightKind::Speed));
        assert_eq!(line[1].text, "30%");
        assert_eq!(line[2].text, " briefly.");
    }

    #[test]
    fn test_system_noop_disappears() {
        let rendered = render(
            "Deals damage.{{ spellmodifierdescriptionappend }}",
            &[],
            &[],
            1,
            &ResolvedStats::default(),
        );
        assert_eq!(rendered.plain_text(), "Deals damage.");
        assert!(rendered.unresolved.is_empty());
    }

    #[test]
    fn test_rendering_is_idempotent_over_inputs() {
        let first = render(
            "Deals <magicDamage>{{ e1 }}</magicDamage>.",
            &[q_component()],
            &[],
            3,
            &ap_stats(75.0),
        );
        let second = render(
            "Deals <magicDamage>{{ e1 }}</magicDamage>.",
            &[q_component()],
            &[],
            3,
            &ap_stats(75.0),
        );
        assert_eq!(first, second);
    }
}
