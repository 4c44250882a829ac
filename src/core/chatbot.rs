use crate::models::{BotReply, ChatMessage, ChatRole};

pub const GREETING: &str = "नमस्ते! मैं आपकी नींद से जुड़ी समस्याओं में मदद कर सकता हूं। आप क्या जानना चाहते हैं?";

pub const Q_IMPROVE_SLEEP: &str = "नींद की गुणवत्ता कैसे सुधारें?";
pub const Q_CBTI: &str = "CBT-I क्या है?";
pub const Q_SYMPTOMS: &str = "अनिद्रा के लक्षण क्या हैं?";
pub const Q_SEE_DOCTOR: &str = "डॉक्टर से कब मिलना चाहिए?";
pub const Q_BOOKING: &str = "अपॉइंटमेंट कैसे बुक करें?";
pub const Q_TELECONSULT: &str = "टेलीकंसल्टेशन क्या है?";

struct KnowledgeEntry {
    question: &'static str,
    answer: &'static str,
    suggestions: &'static [&'static str],
}

const KNOWLEDGE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        question: Q_IMPROVE_SLEEP,
        answer: "नींद की गुणवत्ता सुधारने के लिए ये उपाय अपनाएं:\n\n• नियमित सोने का समय निर्धारित करें\n• सोने से 1 घंटे पहले स्क्रीन से दूर रहें\n• बेडरूम को ठंडा, अंधेरा और शांत रखें\n• कैफीन और शराब से बचें\n• रिलैक्सेशन तकनीकों का उपयोग करें\n• नियमित व्यायाम करें लेकिन सोने से 3-4 घंटे पहले नहीं",
        suggestions: &[Q_CBTI, Q_SYMPTOMS, Q_SEE_DOCTOR],
    },
    KnowledgeEntry {
        question: Q_CBTI,
        answer: "CBT-I (Cognitive Behavioral Therapy for Insomnia) नींद की समस्याओं के लिए एक प्रभावी उपचार है:\n\n• सोने के समय को नियंत्रित करना\n• बेडरूम को सिर्फ सोने के लिए उपयोग करना\n• नकारात्मक विचारों को बदलना\n• रिलैक्सेशन तकनीकें सीखना\n• नींद की स्वच्छता के नियमों का पालन करना\n\nयह दवा के बिना नींद की समस्याओं को ठीक करने का सबसे प्रभावी तरीका है।",
        suggestions: &[Q_IMPROVE_SLEEP, Q_SYMPTOMS],
    },
    KnowledgeEntry {
        question: Q_SYMPTOMS,
        answer: "अनिद्रा के मुख्य लक्षण हैं:\n\n• सोने में कठिनाई\n• रात में बार-बार जागना\n• जल्दी उठ जाना और फिर न सो पाना\n• दिन में थकान और नींद आना\n• एकाग्रता में कमी\n• मूड में बदलाव\n• चिंता और तनाव\n\nयदि ये लक्षण 3 सप्ताह से अधिक समय तक रहें तो डॉक्टर से सलाह लें।",
        suggestions: &[Q_SEE_DOCTOR, Q_CBTI],
    },
    KnowledgeEntry {
        question: Q_SEE_DOCTOR,
        answer: "नींद विशेषज्ञ से मिलने के लिए ये स्थितियां हैं:\n\n• 3 सप्ताह से अधिक समय तक नींद की समस्या\n• दिन में काम पर प्रभाव पड़ना\n• चिंता या अवसाद के लक्षण\n• नींद की गोलियों पर निर्भरता\n• सांस लेने में तकलीफ या खर्राटे\n• पैरों में बेचैनी\n\nहमारे पास डॉ. प्रिया शर्मा जैसे अनुभवी विशेषज्ञ हैं जो आपकी मदद कर सकते हैं।",
        suggestions: &[Q_BOOKING, Q_CBTI],
    },
    KnowledgeEntry {
        question: Q_BOOKING,
        answer: "अपॉइंटमेंट बुक करने के लिए:\n\n1. \"अपॉइंटमेंट\" पेज पर जाएं\n2. उपलब्ध समय स्लॉट चुनें\n3. टेलीकंसल्टेशन या क्लिनिक विजिट चुनें\n4. अपनी जानकारी भरें\n5. बुकिंग की पुष्टि करें\n\nहमारे पास सुबह 9 बजे से शाम 4 बजे तक स्लॉट उपलब्ध हैं।",
        suggestions: &[Q_SEE_DOCTOR, Q_TELECONSULT],
    },
    KnowledgeEntry {
        question: Q_TELECONSULT,
        answer: "टेलीकंसल्टेशन एक वीडियो कॉल के माध्यम से डॉक्टर से मिलने का तरीका है:\n\n• घर बैठे डॉक्टर से सलाह\n• समय और पैसे की बचत\n• सुरक्षित और सुविधाजनक\n• उतनी ही प्रभावी जितनी व्यक्तिगत मुलाकात\n• सभी जरूरी जांच और सलाह मिलती है\n\nआप अपने मोबाइल या कंप्यूटर से आसानी से जुड़ सकते हैं।",
        suggestions: &[Q_BOOKING, Q_SEE_DOCTOR],
    },
];

const FALLBACK_ANSWER: &str = "मुझे खेद है, मैं आपके सवाल को पूरी तरह समझ नहीं पाया। कृपया नीचे दिए गए विकल्पों में से कोई चुनें या अपना सवाल दोबारा पूछें।";
const FALLBACK_SUGGESTIONS: &[&str] = &[Q_IMPROVE_SLEEP, Q_CBTI, Q_SYMPTOMS, Q_SEE_DOCTOR];

/// Keyword rules, checked in order; every keyword group must match
const KEYWORD_RULES: &[(&[&[&str]], &str)] = &[
    (&[&["नींद"], &["सुधार", "बेहतर"]], Q_IMPROVE_SLEEP),
    (&[&["cbt", "थेरेपी"]], Q_CBTI),
    (&[&["लक्षण", "समस्या"]], Q_SYMPTOMS),
    (&[&["डॉक्टर", "विशेषज्ञ"]], Q_SEE_DOCTOR),
    (&[&["अपॉइंटमेंट", "बुक"]], Q_BOOKING),
    (&[&["टेली", "वीडियो"]], Q_TELECONSULT),
];

/// The canned quick questions offered before the user types anything
pub fn quick_questions() -> Vec<String> {
    FALLBACK_SUGGESTIONS.iter().map(|q| q.to_string()).collect()
}

/// Answer a user message from the knowledge base
///
/// Exact question text wins, then the first keyword rule that matches,
/// otherwise a fallback asking the user to rephrase.
pub fn bot_reply(message: &str) -> BotReply {
    let trimmed = message.trim();

    if let Some(entry) = lookup(trimmed) {
        return to_reply(entry);
    }

    let lower = trimmed.to_lowercase();
    for (groups, question) in KEYWORD_RULES {
        let matched = groups
            .iter()
            .all(|alternatives| alternatives.iter().any(|kw| lower.contains(kw)));
        if matched {
            if let Some(entry) = lookup(question) {
                return to_reply(entry);
            }
        }
    }

    BotReply {
        answer: FALLBACK_ANSWER.to_string(),
        suggestions: quick_questions(),
    }
}

/// Fresh chat history holding only the greeting
pub fn initial_history() -> Vec<ChatMessage> {
    vec![ChatMessage {
        role: ChatRole::Bot,
        content: GREETING.to_string(),
    }]
}

fn lookup(question: &str) -> Option<&'static KnowledgeEntry> {
    KNOWLEDGE.iter().find(|e| e.question == question)
}

fn to_reply(entry: &KnowledgeEntry) -> BotReply {
    BotReply {
        answer: entry.answer.to_string(),
        suggestions: entry.suggestions.iter().map(|s| s.to_string()).collect(),
    }
}
