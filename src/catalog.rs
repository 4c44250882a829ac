//! Static reference data: the doctor directory and the therapy module library.

use crate::models::{Difficulty, DoctorProfile, TherapyModule};
use std::sync::LazyLock;

static DOCTORS: LazyLock<Vec<DoctorProfile>> = LazyLock::new(|| {
    vec![
        doctor(
            "dr_rajesh_kumar",
            "डॉ. राजेश कुमार",
            "नींद चिकित्सा विशेषज्ञ",
            "MD, Sleep Medicine, AIIMS",
            "SleepCare Clinic, CP",
            &["CBT-I", "Sleep Apnea", "Insomnia"],
            &["हिंदी", "English", "पंजाबी"],
            "दिल्ली",
            4.8,
            15,
            2500,
            1500,
            &["Monday", "Wednesday", "Friday"],
            &["10:00 AM", "2:00 PM", "4:00 PM"],
            "नींद चिकित्सा में 15+ वर्ष का अनुभव। CBT-I और नींद विकारों के विशेषज्ञ।",
        ),
        doctor(
            "dr_priya_sharma",
            "डॉ. प्रिया शर्मा",
            "मनोचिकित्सक और नींद विशेषज्ञ",
            "MD Psychiatry, MBBS",
            "Mind & Sleep Center, Bandra",
            &["Anxiety & Sleep", "Depression & Insomnia", "CBT-I"],
            &["हिंदी", "English", "मराठी"],
            "मुंबई",
            4.9,
            12,
            1800,
            2000,
            &["Tuesday", "Thursday", "Saturday"],
            &["11:00 AM", "3:00 PM", "5:00 PM"],
            "मनोचिकित्सा और नींद विकारों के विशेषज्ञ। चिंता और नींद की समस्याओं में विशेषज्ञता।",
        ),
        doctor(
            "dr_amit_singh",
            "डॉ. अमित सिंह",
            "नींद चिकित्सा और श्वसन विशेषज्ञ",
            "MD Pulmonology, Sleep Medicine",
            "Respiratory & Sleep Clinic",
            &["Sleep Apnea", "Snoring", "CBT-I"],
            &["हिंदी", "English", "गुजराती"],
            "अहमदाबाद",
            4.7,
            10,
            1200,
            1200,
            &["Monday", "Wednesday", "Friday", "Sunday"],
            &["9:00 AM", "1:00 PM", "3:00 PM"],
            "श्वसन और नींद विकारों के विशेषज्ञ। स्लीप एपनिया और खर्राटों के उपचार में विशेषज्ञता।",
        ),
        doctor(
            "dr_sunita_reddy",
            "डॉ. सुनीता रेड्डी",
            "नींद चिकित्सा और मनोविज्ञान",
            "PhD Psychology, Sleep Medicine",
            "Sleep Psychology Center",
            &["Sleep Psychology", "CBT-I", "Relaxation Therapy"],
            &["हिंदी", "English", "तेलुगु", "तमिल"],
            "बैंगलोर",
            4.6,
            8,
            900,
            1800,
            &["Tuesday", "Thursday", "Saturday"],
            &["10:30 AM", "2:30 PM", "4:30 PM"],
            "नींद मनोविज्ञान में विशेषज्ञ। CBT-I और रिलैक्सेशन थेरेपी में अनुभवी।",
        ),
        doctor(
            "dr_vikram_jain",
            "डॉ. विक्रम जैन",
            "नींद चिकित्सा और न्यूरोलॉजी",
            "MD Neurology, Sleep Medicine",
            "Neuro Sleep Center",
            &["Neurological Sleep Disorders", "CBT-I", "Sleep Studies"],
            &["हिंदी", "English", "राजस्थानी"],
            "जयपुर",
            4.9,
            18,
            3000,
            2500,
            &["Monday", "Wednesday", "Friday"],
            &["9:30 AM", "1:30 PM", "3:30 PM"],
            "न्यूरोलॉजी और नींद चिकित्सा के वरिष्ठ विशेषज्ञ। जटिल नींद विकारों के उपचार में विशेषज्ञता।",
        ),
        doctor(
            "dr_meera_patel",
            "डॉ. मीरा पटेल",
            "नींद चिकित्सा और व्यवहार चिकित्सा",
            "MD, Behavioral Medicine, Sleep Therapy",
            "Behavioral Sleep Clinic",
            &["Behavioral Sleep Therapy", "CBT-I", "Sleep Hygiene"],
            &["हिंदी", "English", "गुजराती"],
            "सूरत",
            4.5,
            6,
            600,
            1000,
            &["Tuesday", "Thursday", "Saturday"],
            &["11:00 AM", "2:00 PM", "4:00 PM"],
            "व्यवहार चिकित्सा और नींद थेरेपी में विशेषज्ञ। युवा वयस्कों में नींद की समस्याओं के उपचार में अनुभवी।",
        ),
    ]
});

static THERAPY_MODULES: LazyLock<Vec<TherapyModule>> = LazyLock::new(|| {
    vec![
        module("cbti_basics", "CBT-I मूल बातें", "नींद चिकित्सा की मूल बातें और CBT-I तकनीकों का परिचय", 30, Difficulty::Beginner, "https://www.youtube.com/watch?v=GyxqKoQAxTk"),
        module("sleep_restriction", "नींद प्रतिबंध तकनीक", "सोने के समय को नियंत्रित करने की तकनीक", 25, Difficulty::Intermediate, "https://www.youtube.com/watch?v=DdtHsaZ_Xp4"),
        module("sleep_hygiene", "नींद स्वच्छता", "अच्छी नींद के लिए आदतें और वातावरण", 20, Difficulty::Beginner, "https://www.youtube.com/watch?v=s2dQPI9ZPO0"),
        module("progressive_relaxation", "प्रगतिशील मांसपेशी रिलैक्सेशन", "शरीर को आराम देने की तकनीक", 35, Difficulty::Intermediate, "https://www.youtube.com/watch?v=STPuP0kUnTo"),
        module("breathing_techniques", "गहरी सांस लेने की तकनीक", "तनाव कम करने के लिए सांस लेने के व्यायाम", 15, Difficulty::Beginner, "https://www.youtube.com/watch?v=kQUae5zodJ8"),
        module("bedroom_environment", "बेडरूम का वातावरण", "नींद के लिए आदर्श वातावरण बनाना", 20, Difficulty::Beginner, "https://www.youtube.com/watch?v=dxsR_l5bu7w"),
        module("sleep_routine", "दिनचर्या और नींद", "नियमित दिनचर्या का महत्व", 25, Difficulty::Beginner, "https://www.youtube.com/watch?v=KVfDhbFRfy0"),
        module("cognitive_restructuring", "संज्ञानात्मक पुनर्गठन", "नींद के बारे में नकारात्मक विचारों को बदलना", 40, Difficulty::Advanced, "https://www.youtube.com/watch?v=SclJBsQYI_Q"),
        module("sleep_restriction_therapy", "नींद प्रतिबंध चिकित्सा", "नींद की दक्षता बढ़ाने की तकनीक", 30, Difficulty::Advanced, "https://www.youtube.com/watch?v=7okjM6Tq14E"),
    ]
});

/// The doctor directory, in catalog order
pub fn doctors() -> &'static [DoctorProfile] {
    &DOCTORS
}

pub fn find_doctor(id: &str) -> Option<&'static DoctorProfile> {
    DOCTORS.iter().find(|d| d.id == id)
}

/// The therapy module library, in catalog order
pub fn therapy_modules() -> &'static [TherapyModule] {
    &THERAPY_MODULES
}

pub fn find_module(id: &str) -> Option<&'static TherapyModule> {
    THERAPY_MODULES.iter().find(|m| m.id == id)
}

#[allow(clippy::too_many_arguments)]
fn doctor(
    id: &str,
    name: &str,
    specialty: &str,
    qualification: &str,
    clinic: &str,
    specialties: &[&str],
    languages: &[&str],
    location: &str,
    rating: f64,
    experience_years: u32,
    patients_treated: u32,
    consultation_fee: u32,
    availability: &[&str],
    time_slots: &[&str],
    bio: &str,
) -> DoctorProfile {
    DoctorProfile {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        qualification: qualification.to_string(),
        clinic: clinic.to_string(),
        specialties: to_strings(specialties),
        languages: to_strings(languages),
        location: location.to_string(),
        rating,
        experience_years,
        patients_treated,
        consultation_fee,
        availability: to_strings(availability),
        time_slots: to_strings(time_slots),
        bio: bio.to_string(),
    }
}

fn module(
    id: &str,
    name: &str,
    description: &str,
    duration_minutes: u16,
    difficulty: Difficulty,
    video_url: &str,
) -> TherapyModule {
    TherapyModule {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        duration_minutes,
        difficulty,
        video_url: video_url.to_string(),
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
