//! Entity highlighting for the submitted text.
//!
//! Marks every mention of an extracted entity in the original text with a
//! colored span. Matching is plain substring search: Korean particles attach
//! directly to names ("서울대학교와"), so word-boundary matching would miss
//! most mentions. Longer names claim their spans first and claimed spans
//! never overlap, so "서울대학교" is never re-matched as "서울대" inside an
//! already highlighted run.

use crate::types::Entity;

/// Render `text` as HTML with every entity mention wrapped in a colored span.
///
/// The text itself is HTML-escaped; only the spans emitted here are markup.
pub fn highlight_entities(text: &str, entities: &[Entity]) -> String {
    let mut by_length: Vec<&Entity> = entities.iter().filter(|e| !e.name.is_empty()).collect();
    by_length.sort_by_key(|e| std::cmp::Reverse(e.name.chars().count()));

    // Claimed byte ranges of the original text, with the claiming color.
    let mut claimed: Vec<(usize, usize, &'static str)> = Vec::new();
    for entity in by_length {
        let color = entity.entity_type.color();
        for (start, matched) in text.match_indices(entity.name.as_str()) {
            let end = start + matched.len();
            let overlaps = claimed.iter().any(|&(s, e, _)| start < e && s < end);
            if !overlaps {
                claimed.push((start, end, color));
            }
        }
    }
    claimed.sort_by_key(|&(start, _, _)| start);

    let mut html = String::with_capacity(text.len() * 2);
    let mut cursor = 0;
    for (start, end, color) in claimed {
        push_escaped(&mut html, &text[cursor..start]);
        html.push_str(&format!(
            "<span style=\"background-color: {}; padding: 2px 4px; border-radius: 3px;\">",
            color
        ));
        push_escaped(&mut html, &text[start..end]);
        html.push_str("</span>");
        cursor = end;
    }
    push_escaped(&mut html, &text[cursor..]);
    html
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntityType;

    #[test]
    fn test_mentions_get_colored_spans() {
        let entities = vec![
            Entity::new("E1", "김민수", EntityType::Person),
            Entity::new("E2", "네이버", EntityType::Organization),
        ];
        let html = highlight_entities("김민수 교수가 네이버를 방문했다.", &entities);
        assert!(html.contains("background-color: #3498db"));
        assert!(html.contains("background-color: #2ecc71"));
        assert!(html.contains(">김민수</span>"));
        assert!(html.contains(">네이버</span>"));
    }

    #[test]
    fn test_mention_with_attached_particle_is_found() {
        let entities = vec![Entity::new("E1", "서울대학교", EntityType::Organization)];
        let html = highlight_entities("서울대학교와 네이버의 산학협력", &entities);
        assert!(html.contains(">서울대학교</span>와"));
    }

    #[test]
    fn test_longer_name_wins_over_contained_name() {
        let entities = vec![
            Entity::new("E1", "서울", EntityType::Location),
            Entity::new("E2", "서울대학교", EntityType::Organization),
        ];
        let html = highlight_entities("서울대학교는 서울에 있다.", &entities);
        // The university span is one unit; the city matches only the bare mention.
        assert!(html.contains(">서울대학교</span>"));
        assert!(html.contains(">서울</span>에"));
        assert!(!html.contains(">서울</span>대학교"));
    }

    #[test]
    fn test_duplicate_names_claim_once_per_mention() {
        let entities = vec![
            Entity::new("E1", "김민수", EntityType::Person),
            Entity::new("E2", "김민수", EntityType::Person),
        ];
        let html = highlight_entities("김민수", &entities);
        assert_eq!(html.matches("<span").count(), 1);
    }

    #[test]
    fn test_text_is_html_escaped() {
        let entities = vec![Entity::new("E1", "김민수", EntityType::Person)];
        let html = highlight_entities("<b>김민수</b> & 친구들", &entities);
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("&amp;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_no_entities_is_escaped_passthrough() {
        let html = highlight_entities("분석할 \"텍스트\"", &[]);
        assert_eq!(html, "분석할 &quot;텍스트&quot;");
    }
}
