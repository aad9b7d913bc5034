//! Fixed reply and analysis text.
//!
//! Replies are chosen from an exhaustive table over persona and whether a related
//! entry was found; a found entry's content is quoted verbatim.

use super::persona::Persona;
use crate::entry::stats::{count_by_category, count_by_source, top};
use crate::entry::types::{Category, Entry, Source};

pub const GREETING: &str = "안녕하세요! 저는 당신의 Momento 어시스턴트입니다. 어떻게 도와드릴까요?";

pub const NO_ENTRIES: &str =
    "아직 기록된 지혜가 없습니다. 지혜를 추가하면 분석을 제공해드릴게요.";

/// System message appended after a persona switch.
pub fn persona_switched(persona: Persona) -> String {
    format!("{}로 전환했습니다. 무엇을 도와드릴까요?", persona.label())
}

/// Reply for `persona`, quoting `related` when there is one.
pub fn reply(persona: Persona, related: Option<&Entry>) -> String {
    let Some(entry) = related else {
        return no_match_reply(persona).to_string();
    };

    let quote = &entry.content;
    match persona {
        Persona::Motivator => format!(
            "당신의 이야기를 들으니 이전에 기록하신 지혜가 생각납니다: '{quote}' 이 말을 기억하며 앞으로 나아가보는 건 어떨까요?"
        ),
        Persona::Counselor => format!(
            "당신이 이전에 기록한 지혜가 지금 상황에 도움이 될 것 같습니다: '{quote}' 이것에 대해 어떻게 생각하시나요?"
        ),
        Persona::Philosopher => format!(
            "흥미롭게도, 당신이 이전에 기록한 지혜가 이 상황과 연결됩니다: '{quote}' 이 통찰력이 지금의 상황에 어떤 의미를 가질까요?"
        ),
        Persona::Friend => format!(
            "이야기를 들으니 예전에 당신이 말했던 것이 생각나요: '{quote}' 기억나시나요?"
        ),
        Persona::Mentor => format!(
            "당신이 과거에 기록한 지혜를 되새겨볼 때입니다: '{quote}' 이 지혜를 현재 상황에 어떻게 적용할 수 있을까요?"
        ),
    }
}

/// Prompt asking the user to say more, used when nothing matched.
pub fn no_match_reply(persona: Persona) -> &'static str {
    match persona {
        Persona::Motivator => {
            "당신의 이야기를 들었습니다. 어떤 목표를 향해 나아가고 계신가요? 함께 동기부여를 해보아요!"
        }
        Persona::Counselor => {
            "그런 상황이 있으셨군요. 더 자세히 이야기해주시겠어요? 함께 해결책을 찾아보겠습니다."
        }
        Persona::Philosopher => {
            "흥미로운 질문입니다. 이것에 대해 어떤 생각을 가지고 계신가요? 함께 깊이 생각해보겠습니다."
        }
        Persona::Friend => "그렇군요! 더 이야기해주세요. 제가 들을게요.",
        Persona::Mentor => {
            "귀중한 경험을 공유해주셔서 감사합니다. 이런 상황에서 어떤 배움을 얻으셨나요?"
        }
    }
}

fn category_remark(category: Category) -> &'static str {
    match category {
        Category::Motivation => "동기부여를 중요하게 생각하시는군요. 목표를 향해 나아가는 열정이 느껴집니다.",
        Category::Reflection => "자기성찰을 중요하게 생각하시는군요. 깊이 있는 내면의 여정을 즐기시는 것 같습니다.",
        Category::Healing => "치유와 위로를 중요하게 생각하시는군요. 마음의 평화를 찾아가는 여정 중이신 것 같습니다.",
        Category::Decision => "결정과 선택에 관한 지혜를 많이 모으셨네요. 중요한 선택의 순간들을 현명하게 대처하고자 하시는군요.",
        Category::Relationship => "관계에 관한 지혜를 많이 모으셨네요. 타인과의 관계를 중요하게 생각하시는 것 같습니다.",
        Category::Growth => "성장에 관한 지혜를 많이 모으셨네요. 끊임없이 발전하고자 하는 마음이 느껴집니다.",
        Category::Happiness => "행복에 관한 지혜를 많이 모으셨네요. 삶의 기쁨을 찾고 누리는 것을 중요하게 생각하시는군요.",
        Category::Other => "다양한 주제에 관심을 가지고 계시는군요.",
    }
}

fn source_remark(source: Source) -> &'static str {
    match source {
        Source::SelfWritten => "스스로의 생각과 경험에서 지혜를 찾는 통찰력이 돋보입니다.",
        Source::Quote => "명언과 인용구에서 영감을 얻으시는군요. 선인들의 지혜를 소중히 여기시는 것 같습니다.",
        Source::Book => "책을 통해 많은 지혜를 얻으시는군요. 독서를 통한 배움을 중요하게 생각하시는 것 같습니다.",
        Source::Movie => "영화에서 많은 지혜를 발견하시는군요. 시각적 스토리텔링에서 깊은 의미를 찾아내는 능력이 있으신 것 같습니다.",
        Source::Conversation => "대화를 통해 많은 지혜를 얻으시는군요. 타인과의 소통을 중요하게 생각하시는 것 같습니다.",
        Source::Music => "음악에서 많은 지혜를 발견하시는군요. 예술적 감성이 풍부하신 것 같습니다.",
        Source::Other => "다양한 소스에서 지혜를 얻으시는 것 같습니다. 열린 마음으로 세상을 바라보고 계시는군요.",
    }
}

/// Paragraph describing the most common category and source in `entries`.
///
/// Ties go to whichever tag is declared first.
pub fn analysis(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return NO_ENTRIES.to_string();
    }

    let (category, category_count) =
        top(&count_by_category(entries)).unwrap_or((Category::Other, 0));
    let (source, _) = top(&count_by_source(entries)).unwrap_or((Source::Other, 0));

    format!(
        "현재까지 {total}개의 지혜를 기록하셨습니다.\n\n\
         가장 많이 기록하신 카테고리는 '{category_label}'({category_count}개)입니다. {category_remark}\n\n\
         주로 '{source_label}'에서 지혜를 얻으시는 것 같습니다. {source_remark}",
        total = entries.len(),
        category_label = category.label(),
        category_remark = category_remark(category),
        source_label = source.label(),
        source_remark = source_remark(source),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_persona_has_a_distinct_no_match_reply() {
        let mut replies: Vec<&str> = Persona::ALL.iter().map(|&p| no_match_reply(p)).collect();
        replies.sort_unstable();
        replies.dedup();
        assert_eq!(replies.len(), Persona::ALL.len());
    }

    #[test]
    fn reply_without_match_uses_no_match_table() {
        assert_eq!(reply(Persona::Friend, None), no_match_reply(Persona::Friend));
    }

    #[test]
    fn reply_quotes_matched_content_verbatim() {
        let entry = Entry::new("Practice makes perfect");
        for &persona in Persona::ALL {
            let text = reply(persona, Some(&entry));
            assert!(text.contains("'Practice makes perfect'"), "{persona}: {text}");
        }
    }

    #[test]
    fn persona_switch_message_names_label() {
        assert_eq!(
            persona_switched(Persona::Friend),
            "친구로 전환했습니다. 무엇을 도와드릴까요?"
        );
    }

    #[test]
    fn analysis_of_nothing() {
        assert_eq!(analysis(&[]), NO_ENTRIES);
    }

    #[test]
    fn analysis_reports_top_category_and_source() {
        let entries: Vec<Entry> = (0..3)
            .map(|i| {
                Entry::new(format!("grow {i}"))
                    .with_category(Category::Growth)
                    .with_source(Source::Music)
            })
            .collect();

        let text = analysis(&entries);
        assert!(text.starts_with("현재까지 3개의 지혜를 기록하셨습니다."));
        assert!(text.contains("'성장'(3개)"));
        assert!(text.contains(category_remark(Category::Growth)));
        assert!(text.contains("주로 '음악'에서"));
        assert!(text.contains(source_remark(Source::Music)));
    }
}
