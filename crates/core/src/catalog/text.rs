use crate::model::{Gender, Language};

/// Localized interface strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub phone_label: &'static str,
    pub phone_hint: &'static str,
    pub age_label: &'static str,
    pub gender_label: &'static str,
    pub male: &'static str,
    pub female: &'static str,
    pub other: &'static str,
    pub region_label: &'static str,
    pub start_btn: &'static str,
    pub guide_btn: &'static str,
    pub situation: &'static str,
    pub of: &'static str,
    pub analyzing: &'static str,
    pub analyzing_sub: &'static str,
    pub your_result: &'static str,
    pub ai_analysis: &'static str,
    pub restart: &'static str,
    pub share: &'static str,
    pub share_notice: &'static str,
    pub admin_title: &'static str,
    pub admin_total: &'static str,
    pub admin_export: &'static str,
    pub admin_clear: &'static str,
    pub admin_close: &'static str,
    pub admin_search: &'static str,
    pub admin_empty: &'static str,
    pub admin_answers: &'static str,
    pub admin_years: &'static str,
    pub export_empty: &'static str,
    pub export_saved: &'static str,
    pub confirm_clear: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
}

impl UiText {
    #[must_use]
    pub fn gender(&self, gender: Gender) -> &'static str {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Other => self.other,
        }
    }
}

const TEXT_RU: UiText = UiText {
    title: "Red Flag / Green Flag",
    subtitle: "Узнай, что ты на самом деле ценишь в отношениях",
    phone_label: "Номер телефона",
    phone_hint: "Нужен только для идентификации результата",
    age_label: "Возраст",
    gender_label: "Пол",
    male: "Мужской",
    female: "Женский",
    other: "Другой",
    region_label: "Регион",
    start_btn: "Начать тест",
    guide_btn: "Как это работает?",
    situation: "Ситуация",
    of: "из",
    analyzing: "ИИ психолог анализирует ответы...",
    analyzing_sub: "Это займёт несколько секунд",
    your_result: "Твой результат",
    ai_analysis: "Анализ ИИ психолога",
    restart: "Пройти заново",
    share: "Поделиться",
    share_notice: "Сделай скриншот и поделись результатом с друзьями!",
    admin_title: "Панель Администратора",
    admin_total: "Всего записей",
    admin_export: "Скачать Excel",
    admin_clear: "Очистить",
    admin_close: "Закрыть",
    admin_search: "Поиск по телефону, региону или дате...",
    admin_empty: "База данных пуста или по вашему запросу ничего не найдено.",
    admin_answers: "История ответов",
    admin_years: "лет",
    export_empty: "Нет данных для экспорта",
    export_saved: "Файл сохранён",
    confirm_clear: "Вы уверены, что хотите удалить ВСЕ данные? Это действие необратимо.",
    confirm: "Удалить",
    cancel: "Отмена",
};

const TEXT_KK: UiText = UiText {
    title: "Red Flag / Green Flag",
    subtitle: "Қарым-қатынаста шын мәнінде нені бағалайтыныңызды біліңіз",
    phone_label: "Телефон нөмірі",
    phone_hint: "Тек нәтижені анықтау үшін қажет",
    age_label: "Жасы",
    gender_label: "Жынысы",
    male: "Ер",
    female: "Әйел",
    other: "Басқа",
    region_label: "Аймақ",
    start_btn: "Тестті бастау",
    guide_btn: "Бұл қалай жұмыс істейді?",
    situation: "Жағдай",
    of: "/",
    analyzing: "ЖИ психолог жауаптарды талдауда...",
    analyzing_sub: "Бұл бірнеше секунд алады",
    your_result: "Сіздің нәтижеңіз",
    ai_analysis: "ЖИ психолог талдауы",
    restart: "Қайта өту",
    share: "Бөлісу",
    share_notice: "Скриншот жасап, нәтижемен достарыңызбен бөлісіңіз!",
    admin_title: "Әкімші панелі",
    admin_total: "Барлық жазбалар",
    admin_export: "Excel жүктеу",
    admin_clear: "Тазалау",
    admin_close: "Жабу",
    admin_search: "Телефон, аймақ немесе күн бойынша іздеу...",
    admin_empty: "Дерекқор бос немесе сұранысыңыз бойынша ештеңе табылмады.",
    admin_answers: "Жауаптар тарихы",
    admin_years: "жас",
    export_empty: "Экспорттауға деректер жоқ",
    export_saved: "Файл сақталды",
    confirm_clear: "БАРЛЫҚ деректерді жойғыңыз келетініне сенімдісіз бе? Бұл әрекетті болдырмау мүмкін емес.",
    confirm: "Жою",
    cancel: "Болдырмау",
};

#[must_use]
pub fn ui_text(language: Language) -> &'static UiText {
    match language {
        Language::Ru => &TEXT_RU,
        Language::Kk => &TEXT_KK,
    }
}
