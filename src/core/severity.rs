use crate::core::error::CoreError;
use crate::models::{AnswerOption, Question, SeverityResult, SeverityTier};
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

/// Highest achievable ISI total (7 items x 4)
pub const MAX_SCORE: u8 = 28;

/// Highest score per item
pub const MAX_ITEM_SCORE: i32 = 4;

/// Upper bound (inclusive) of the mild tier
const MILD_MAX: u8 = 7;

/// Upper bound (inclusive) of the moderate tier
const MODERATE_MAX: u8 = 14;

const DIFFICULTY_SCALE: [&str; 5] = ["कोई कठिनाई नहीं", "थोड़ी कठिनाई", "कुछ कठिनाई", "काफी कठिनाई", "बहुत कठिनाई"];
const PROBLEM_SCALE: [&str; 5] = ["कोई समस्या नहीं", "थोड़ी समस्या", "कुछ समस्या", "काफी समस्या", "बहुत समस्या"];
const SATISFACTION_SCALE: [&str; 5] = ["बहुत संतुष्ट", "काफी संतुष्ट", "कुछ संतुष्ट", "कुछ असंतुष्ट", "बहुत असंतुष्ट"];
const IMPACT_SCALE: [&str; 5] = ["बिल्कुल नहीं", "थोड़ा", "कुछ", "काफी", "बहुत"];

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        question("isi_1", "पिछले 2 सप्ताह में आपको सोने में कितनी कठिनाई हुई है?", &DIFFICULTY_SCALE),
        question("isi_2", "पिछले 2 सप्ताह में आपको रात में जागने में कितनी कठिनाई हुई है?", &PROBLEM_SCALE),
        question("isi_3", "पिछले 2 सप्ताह में आपको जल्दी उठने में कितनी कठिनाई हुई है?", &DIFFICULTY_SCALE),
        question("isi_4", "पिछले 2 सप्ताह में आप अपनी नींद से कितने संतुष्ट हैं?", &SATISFACTION_SCALE),
        question("isi_5", "पिछले 2 सप्ताह में आपकी नींद की समस्या दूसरों को कितनी दिखाई दी है?", &IMPACT_SCALE),
        question("isi_6", "पिछले 2 सप्ताह में आपकी नींद की समस्या ने आपके जीवन की गुणवत्ता को कितना प्रभावित किया है?", &IMPACT_SCALE),
        question("isi_7", "पिछले 2 सप्ताह में आपकी नींद की समस्या ने आपके मूड, काम या रिश्तों को कितना प्रभावित किया है?", &IMPACT_SCALE),
    ]
});

fn question(id: &str, text: &str, labels: &[&str; 5]) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: labels
            .iter()
            .enumerate()
            .map(|(score, label)| AnswerOption {
                label: label.to_string(),
                score: score as u8,
            })
            .collect(),
    }
}

/// The Insomnia Severity Index questionnaire, in presentation order
pub fn isi_questions() -> &'static [Question] {
    &QUESTIONS
}

/// Map an ISI total to its tier
///
/// Tier boundaries are inclusive at the top: 7 is mild, 14 is moderate.
pub fn tier_for_score(total: u8) -> SeverityTier {
    if total <= MILD_MAX {
        SeverityTier::Mild
    } else if total <= MODERATE_MAX {
        SeverityTier::Moderate
    } else {
        SeverityTier::Severe
    }
}

/// Canned advice shown for a tier
pub fn recommendations_for(tier: SeverityTier) -> Vec<String> {
    let lines: &[&str] = match tier {
        SeverityTier::Mild => &[
            "आपकी नींद की गुणवत्ता अच्छी है।",
            "नियमित दिनचर्या बनाए रखें।",
            "सोने से पहले रिलैक्सेशन तकनीकों का उपयोग करें।",
        ],
        SeverityTier::Moderate => &[
            "नींद की गुणवत्ता में सुधार की आवश्यकता है।",
            "CBT-I (Cognitive Behavioral Therapy for Insomnia) तकनीकों का उपयोग करें।",
            "सोने का समय निर्धारित करें और उसका पालन करें।",
            "बेडरूम को ठंडा, अंधेरा और शांत रखें।",
        ],
        SeverityTier::Severe => &[
            "तुरंत चिकित्सकीय सलाह लें।",
            "नींद विशेषज्ञ से परामर्श करें।",
            "संभावित अंतर्निहित चिकित्सा स्थितियों की जांच कराएं।",
            "दवा के विकल्पों पर चर्चा करें।",
        ],
    };
    lines.iter().map(|l| l.to_string()).collect()
}

/// Score a complete ISI response
///
/// Every question must be answered exactly once with a value in 0..=4, and no
/// unknown question ids may be present.
pub fn score_severity(responses: &HashMap<String, i32>) -> Result<SeverityResult, CoreError> {
    let questions = isi_questions();

    if let Some(unknown) = responses
        .keys()
        .find(|id| !questions.iter().any(|q| &q.id == *id))
    {
        return Err(CoreError::InvalidInput(format!("unknown question id: {}", unknown)));
    }

    let mut answers = BTreeMap::new();
    for q in questions {
        let value = *responses
            .get(&q.id)
            .ok_or_else(|| CoreError::InvalidInput(format!("missing answer for {}", q.id)))?;

        if !(0..=MAX_ITEM_SCORE).contains(&value) {
            return Err(CoreError::InvalidInput(format!(
                "answer for {} must be between 0 and {}, got {}",
                q.id, MAX_ITEM_SCORE, value
            )));
        }

        answers.insert(q.id.clone(), value as u8);
    }

    let total_score: u8 = answers.values().sum();
    let severity = tier_for_score(total_score);

    Ok(SeverityResult {
        total_score,
        max_score: MAX_SCORE,
        severity,
        severity_label: severity.label().to_string(),
        recommendations: recommendations_for(severity),
        answers,
    })
}
