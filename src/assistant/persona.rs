use serde::{Deserialize, Serialize};

use crate::entry::types::tag_enum;

/// The five reply styles the assistant can take on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Motivator,
    Counselor,
    Philosopher,
    Friend,
    #[default]
    Mentor,
}

tag_enum!(Persona, "persona", {
    Motivator => "motivator", "동기부여자",
    Counselor => "counselor", "상담사",
    Philosopher => "philosopher", "철학자",
    Friend => "friend", "친구",
    Mentor => "mentor", "멘토",
});

impl Persona {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Motivator => "당신에게 열정과 에너지를 불어넣어 줄 동기부여자입니다.",
            Self::Counselor => "당신의 고민을 경청하고 해결책을 함께 찾아줄 상담사입니다.",
            Self::Philosopher => "깊은 통찰력으로 삶의 의미를 함께 고민할 철학자입니다.",
            Self::Friend => "편안하게 대화할 수 있는 친구 같은 존재입니다.",
            Self::Mentor => "경험과 지혜를 바탕으로 당신의 성장을 도울 멘토입니다.",
        }
    }
}
