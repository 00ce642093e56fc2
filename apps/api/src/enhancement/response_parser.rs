//! Normalizes free-form model output into bullet lines.

use crate::llm_client::LlmError;

const BULLETS_HEADER: &str = "BULLETS:";
const BULLET_MARKERS: [char; 3] = ['•', '-', '*'];

/// Extracts bullet lines from remote output.
///
/// Anything before a line starting with `BULLETS:` is ignored. A line counts
/// as a bullet when it starts with `•`, or with `-`, `*`, `1.` or `1)`
/// followed by whitespace; the marker and the whitespace after it are
/// removed. Output with no bullet lines is malformed.
pub fn parse_bullets(output: &str) -> Result<Vec<String>, LlmError> {
    let body = after_bullets_header(output);

    let bullets: Vec<String> = body
        .lines()
        .filter_map(|line| strip_marker(line.trim()))
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .collect();

    if bullets.is_empty() {
        return Err(LlmError::Malformed(format!(
            "no bullet lines in response: {:?}",
            output.chars().take(80).collect::<String>()
        )));
    }

    Ok(bullets)
}

/// Text after the last header line, or all of `output` when there is none.
/// The header is case-sensitive and only recognized at the start of a line.
fn after_bullets_header(output: &str) -> &str {
    let mut body = output;
    let mut offset = 0;

    for line in output.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with(BULLETS_HEADER) {
            let start = offset + (line.len() - trimmed.len()) + BULLETS_HEADER.len();
            body = &output[start..];
        }
        offset += line.len();
    }

    body
}

fn strip_marker(line: &str) -> Option<&str> {
    // Rules such as "---" or "***".
    if line
        .chars()
        .all(|c| BULLET_MARKERS.contains(&c) || c.is_whitespace())
    {
        return None;
    }

    if let Some(rest) = line.strip_prefix('•') {
        return Some(rest.trim_start());
    }

    if let Some(rest) = line.strip_prefix(['-', '*']) {
        return after_whitespace(rest);
    }

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix(['.', ')']) {
            return after_whitespace(rest);
        }
    }

    None
}

/// `rest` without its leading whitespace, provided it had some.
fn after_whitespace(rest: &str) -> Option<&str> {
    rest.starts_with(char::is_whitespace)
        .then(|| rest.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_mixed_markers() {
        let output = "• Led a team of five\n- Shipped the API\n* Cut costs by 20%";
        assert_eq!(
            parse_bullets(output).unwrap(),
            vec!["Led a team of five", "Shipped the API", "Cut costs by 20%"]
        );
    }

    #[test]
    fn test_ignores_text_before_bullets_header() {
        let output = "ENHANCED:\n- not a bullet we want\n\nBULLETS:\n• Built a compiler\n• Wrote docs";
        assert_eq!(
            parse_bullets(output).unwrap(),
            vec!["Built a compiler", "Wrote docs"]
        );
    }

    #[test]
    fn test_skips_prose_and_blank_markers() {
        let output = "Here are your bullets:\n\n•   \n• Mentored interns\nHope this helps!";
        assert_eq!(parse_bullets(output).unwrap(), vec!["Mentored interns"]);
    }

    #[test]
    fn test_numbered_lines_are_bullets() {
        let output = "1. Designed schemas\n2) Tuned queries\n2024 was a good year";
        assert_eq!(
            parse_bullets(output).unwrap(),
            vec!["Designed schemas", "Tuned queries"]
        );
    }

    #[test]
    fn test_bold_lead_in_is_not_a_marker() {
        let output = "**Highlights**\n• Ran incident reviews";
        assert_eq!(parse_bullets(output).unwrap(), vec!["Ran incident reviews"]);
    }

    #[test]
    fn test_horizontal_rule_is_not_a_bullet() {
        let output = "Here you go:\n---\n• Led the platform team\n• Shipped v2";
        assert_eq!(
            parse_bullets(output).unwrap(),
            vec!["Led the platform team", "Shipped v2"]
        );
    }

    #[test]
    fn test_decimal_prose_is_not_a_numbered_bullet() {
        let output = "3.5 years of backend work summarized below\n• Built APIs";
        assert_eq!(parse_bullets(output).unwrap(), vec!["Built APIs"]);
    }

    #[test]
    fn test_dash_needs_whitespace() {
        let output = "-not a list item\n- A list item\n•Tight bullet";
        assert_eq!(
            parse_bullets(output).unwrap(),
            vec!["A list item", "Tight bullet"]
        );
    }

    #[test]
    fn test_inline_bullets_word_is_not_a_header() {
        let output = "• Wrote release notes\n• Drafted onboarding bullets: clear and short";
        assert_eq!(
            parse_bullets(output).unwrap(),
            vec![
                "Wrote release notes",
                "Drafted onboarding bullets: clear and short"
            ]
        );
    }

    #[test]
    fn test_header_is_case_sensitive() {
        let output = "• First\nbullets:\n• Second";
        assert_eq!(parse_bullets(output).unwrap(), vec!["First", "Second"]);
    }

    #[test]
    fn test_prose_only_is_malformed() {
        let result = parse_bullets("I'm sorry, I can't help with that.");
        assert!(matches!(result, Err(LlmError::Malformed(_))));
    }
}
