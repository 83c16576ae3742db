use crate::model::Language;

const REGIONS_RU: [&str; 20] = [
    "Алматы",
    "Астана",
    "Шымкент",
    "Алматинская область",
    "Акмолинская область",
    "Актюбинская область",
    "Атырауская область",
    "Восточно-Казахстанская область",
    "Жамбылская область",
    "Западно-Казахстанская область",
    "Карагандинская область",
    "Костанайская область",
    "Кызылординская область",
    "Мангистауская область",
    "Павлодарская область",
    "Северо-Казахстанская область",
    "Туркестанская область",
    "Абайская область",
    "Жетысуская область",
    "Улытауская область",
];

const REGIONS_KK: [&str; 20] = [
    "Алматы",
    "Астана",
    "Шымкент",
    "Алматы облысы",
    "Ақмола облысы",
    "Ақтөбе облысы",
    "Атырау облысы",
    "Шығыс Қазақстан облысы",
    "Жамбыл облысы",
    "Батыс Қазақстан облысы",
    "Қарағанды облысы",
    "Қостанай облысы",
    "Қызылорда облысы",
    "Маңғыстау облысы",
    "Павлодар облысы",
    "Солтүстік Қазақстан облысы",
    "Түркістан облысы",
    "Абай облысы",
    "Жетісу облысы",
    "Ұлытау облысы",
];

#[must_use]
pub fn regions(language: Language) -> &'static [&'static str] {
    match language {
        Language::Ru => &REGIONS_RU,
        Language::Kk => &REGIONS_KK,
    }
}

/// Region preselected on the onboarding form.
#[must_use]
pub fn default_region(language: Language) -> &'static str {
    regions(language)[0]
}
