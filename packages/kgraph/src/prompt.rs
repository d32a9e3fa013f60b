//! LLM prompt for Korean entity and relation extraction.
//!
//! The prompt fixes the entity categories, the record shapes, and the JSON
//! envelope, and instructs the model to answer with JSON only. Parsing in
//! [`crate::parse`] still tolerates prose around the JSON.

/// Extraction prompt. `{text}` is replaced with the text under analysis.
pub const EXTRACTION_PROMPT: &str = r#"당신은 한국어 텍스트에서 개체(엔티티)와 관계를 추출하는 전문가입니다.
다음 텍스트에서 모든 중요한 개체(인물, 조직, 장소 등)와 그들 간의 관계를 추출해주세요.

다음 규칙을 반드시 따라주세요:
1. 개체는 명확한 고유명사(인물, 조직, 장소 등)만 추출하세요.
2. 일반 명사, 동사, 형용사, 부사 등은 개체로 추출하지 마세요.
3. 관계는 두 개체 간의 의미 있는 연결을 나타내야 합니다.
4. 각 개체에는 고유 ID를 부여하고, 개체명, 유형, 설명을 포함해주세요.
5. 각 관계에는 소스 개체 ID, 타겟 개체 ID, 관계 유형, 관련 문장을 포함해주세요.

개체 유형은 다음과 같이 분류해주세요:
- PERSON: 사람, 인물
- ORGANIZATION: 회사, 정부, 기관, 단체 등
- LOCATION: 국가, 도시, 지역 등
- EVENT: 행사, 사건, 회의 등
- PRODUCT: 제품, 서비스, 기술 등
- OTHER: 기타 중요 개체

다음 형식의 JSON으로 응답해주세요:
```json
{
    "entities": [
        {
            "id": "E1",
            "name": "김민수",
            "type": "PERSON",
            "description": "서울대학교 컴퓨터공학과 교수"
        },
        ...
    ],
    "relations": [
        {
            "source": "E1",
            "target": "E2",
            "relation": "소속",
            "sentence": "김민수 교수는 서울대학교 컴퓨터공학과 소속이다."
        },
        ...
    ]
}
```

분석할 텍스트:
---
{text}
---

중요: 응답은 반드시 위에 명시된 JSON 형식만 포함해야 합니다. 다른 텍스트나 설명은 포함하지 마세요."#;

/// Format the extraction prompt with the text to analyze.
pub fn format_extraction_prompt(text: &str) -> String {
    EXTRACTION_PROMPT.replace("{text}", text)
}
