use crate::model::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSection {
    pub title: &'static str,
    pub content: &'static str,
}

/// Content of the "how it works" modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    pub title: &'static str,
    pub sections: &'static [GuideSection],
    pub close: &'static str,
}

const GUIDE_RU: Guide = Guide {
    title: "Как пройти тест",
    sections: &[
        GuideSection {
            title: "1. Расскажи о себе",
            content: "Укажи телефон, возраст, пол и регион. Эти данные помогают ИИ учесть контекст, но не публикуются.",
        },
        GuideSection {
            title: "2. Оцени ситуации",
            content: "Тебя ждут 10 жизненных ситуаций из отношений. Для каждой выбери RED FLAG, если это тревожный знак, или GREEN FLAG, если это здоровое поведение.",
        },
        GuideSection {
            title: "3. Получи анализ",
            content: "ИИ психолог составит твой портрет: ценности, тип привязанности и пару практических советов.",
        },
    ],
    close: "Понятно",
};

const GUIDE_KK: Guide = Guide {
    title: "Тестті қалай өту керек",
    sections: &[
        GuideSection {
            title: "1. Өзіңіз туралы айтыңыз",
            content: "Телефон, жас, жыныс және аймақты көрсетіңіз. Бұл деректер ЖИ-ге контекстті ескеруге көмектеседі, бірақ жарияланбайды.",
        },
        GuideSection {
            title: "2. Жағдайларды бағалаңыз",
            content: "Сізді қарым-қатынастағы 10 өмірлік жағдай күтеді. Әрқайсысы үшін алаңдатарлық белгі болса RED FLAG, ал сау мінез-құлық болса GREEN FLAG таңдаңыз.",
        },
        GuideSection {
            title: "3. Талдау алыңыз",
            content: "ЖИ психолог сіздің портретіңізді жасайды: құндылықтар, байланыс түрі және бірнеше практикалық кеңес.",
        },
    ],
    close: "Түсінікті",
};

#[must_use]
pub fn guide(language: Language) -> &'static Guide {
    match language {
        Language::Ru => &GUIDE_RU,
        Language::Kk => &GUIDE_KK,
    }
}
