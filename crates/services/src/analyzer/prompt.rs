//! Localized analysis prompts.

use flags_core::model::{Answer, Gender, Language, UserProfile};

fn gender_label(language: Language, gender: Gender) -> &'static str {
    match (language, gender) {
        (Language::Ru, Gender::Male) => "Мужской",
        (Language::Ru, Gender::Female) => "Женский",
        (Language::Ru, Gender::Other) => "Другой",
        (Language::Kk, Gender::Male) => "Ер",
        (Language::Kk, Gender::Female) => "Әйел",
        (Language::Kk, Gender::Other) => "Басқа",
    }
}

/// One line per answer: `- <question> -> <RED|GREEN> FLAG`.
#[must_use]
pub fn transcript(answers: &[Answer]) -> String {
    answers
        .iter()
        .map(|a| format!("- {} -> {} FLAG", a.question_text, a.choice.code()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the prompt in the respondent's language.
#[must_use]
pub fn build_prompt(profile: &UserProfile, answers: &[Answer]) -> String {
    let language = profile.language();
    let gender = gender_label(language, profile.gender());
    let age = profile.age();
    let region = profile.region();
    let count = answers.len();
    let transcript = transcript(answers);

    match language {
        Language::Ru => format!(
            "Ты опытный психолог и социолог с отличным чувством юмора и современным взглядом на отношения в Казахстане и СНГ.\n\
             \n\
             Проанализируй результаты теста \"Red Flag / Green Flag\" для следующего пользователя:\n\
             - Пол: {gender}\n\
             - Возраст: {age}\n\
             - Регион: {region}\n\
             \n\
             Вот как пользователь оценил {count} ситуаций:\n\
             {transcript}\n\
             \n\
             Твоя задача:\n\
             1. Дать общий психологический портрет (какой тип привязанности, какие ценности).\n\
             2. Отметить интересные социологические наблюдения, учитывая менталитет Казахстана и выбранного региона.\n\
             3. Дать 2-3 практических совета по отношениям.\n\
             \n\
             Стиль: Дружелюбный, немного ироничный, но профессиональный. Используй Markdown.\n\
             ОТВЕЧАЙ НА РУССКОМ ЯЗЫКЕ."
        ),
        Language::Kk => format!(
            "Сіз Қазақстан мен ТМД-дағы қарым-қатынасқа заманауи көзқарасы бар және әзіл-қалжыңы жараскан тәжірибелі психолог және әлеуметтанушысыз.\n\
             \n\
             Келесі пайдаланушы үшін \"Red Flag / Green Flag\" сынағының нәтижелерін талдаңыз:\n\
             - Жынысы: {gender}\n\
             - Жасы: {age}\n\
             - Аймағы: {region}\n\
             \n\
             Пайдаланушы {count} жағдайды қалай бағалады:\n\
             {transcript}\n\
             \n\
             Сіздің тапсырмаңыз:\n\
             1. Жалпы психологиялық портрет беріңіз (байланыс түрі қандай, қандай құндылықтар маңызды).\n\
             2. Қазақстан мен таңдалған аймақтың менталитетін ескере отырып, қызықты әлеуметтанулық байқауларды атап өтіңіз.\n\
             3. Қарым-қатынас бойынша 2-3 практикалық кеңес беріңіз.\n\
             \n\
             Стиль: Достық, аздап ирониялық, бірақ кәсіби. Markdown пайдаланыңыз.\n\
             ҚАЗАҚ ТІЛІНДЕ ЖАУАП БЕРІҢІЗ."
        ),
    }
}
