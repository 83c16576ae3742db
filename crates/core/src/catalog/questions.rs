use crate::model::{Animation, Language, Question};

const QUESTIONS_RU: [Question; 10] = [
    Question::new(
        1,
        "Во время ужина партнёр постоянно проверяет телефон и отвечает на сообщения.",
        "Первое свидание",
        Animation::Phone,
    ),
    Question::new(
        2,
        "Партнёр грубо разговаривает с официантом, когда заказ задерживается.",
        "Ресторан",
        Animation::Restaurant,
    ),
    Question::new(
        3,
        "На ваш день рождения партнёр дарит дорогой подарок, но потом напоминает, сколько он стоил.",
        "Подарки",
        Animation::Gift,
    ),
    Question::new(
        4,
        "Партнёр помнит мелочи, которые вы рассказывали месяц назад, и спрашивает, как всё прошло.",
        "Разговор",
        Animation::Listening,
    ),
    Question::new(
        5,
        "Партнёр предлагает вести общий бюджет и открыто обсуждать крупные траты.",
        "Финансы",
        Animation::Money,
    ),
    Question::new(
        6,
        "Партнёр хочет познакомить вас с родителями уже через две недели отношений.",
        "Семья",
        Animation::Family,
    ),
    Question::new(
        7,
        "Партнёр просит пароль от вашего телефона «просто чтобы доверять».",
        "Контроль",
        Animation::Control,
    ),
    Question::new(
        8,
        "Партнёр до сих пор дружит с бывшими и открыто рассказывает об этом.",
        "Бывшие",
        Animation::Ex,
    ),
    Question::new(
        9,
        "Партнёр поддерживает ваше желание сменить работу и помогает готовиться к собеседованию.",
        "Развитие",
        Animation::Growth,
    ),
    Question::new(
        10,
        "Партнёр регулярно опаздывает на встречи на 30–40 минут и не предупреждает.",
        "Время",
        Animation::Time,
    ),
];

const QUESTIONS_KK: [Question; 10] = [
    Question::new(
        1,
        "Кешкі ас кезінде серігіңіз үнемі телефонын тексеріп, хабарламаларға жауап береді.",
        "Алғашқы кездесу",
        Animation::Phone,
    ),
    Question::new(
        2,
        "Тапсырыс кешіккенде серігіңіз даяшымен дөрекі сөйлеседі.",
        "Мейрамхана",
        Animation::Restaurant,
    ),
    Question::new(
        3,
        "Туған күніңізге серігіңіз қымбат сыйлық береді, бірақ кейін оның қанша тұрғанын еске салады.",
        "Сыйлықтар",
        Animation::Gift,
    ),
    Question::new(
        4,
        "Серігіңіз бір ай бұрын айтқан ұсақ-түйегіңізді есте сақтап, бәрі қалай өткенін сұрайды.",
        "Әңгіме",
        Animation::Listening,
    ),
    Question::new(
        5,
        "Серігіңіз ортақ бюджет жүргізуді және ірі шығындарды ашық талқылауды ұсынады.",
        "Қаржы",
        Animation::Money,
    ),
    Question::new(
        6,
        "Серігіңіз қарым-қатынастың екінші аптасында-ақ сізді ата-анасымен таныстырғысы келеді.",
        "Отбасы",
        Animation::Family,
    ),
    Question::new(
        7,
        "Серігіңіз «жай сену үшін» телефоныңыздың құпия сөзін сұрайды.",
        "Бақылау",
        Animation::Control,
    ),
    Question::new(
        8,
        "Серігіңіз бұрынғы жарымен әлі де дос және бұл туралы ашық айтады.",
        "Бұрынғылар",
        Animation::Ex,
    ),
    Question::new(
        9,
        "Серігіңіз жұмысыңызды ауыстыру ниетіңізді қолдап, сұхбатқа дайындалуға көмектеседі.",
        "Даму",
        Animation::Growth,
    ),
    Question::new(
        10,
        "Серігіңіз кездесулерге үнемі 30–40 минут кешігіп келеді және ескертпейді.",
        "Уақыт",
        Animation::Time,
    ),
];

/// The fixed, ordered question set for `language`.
#[must_use]
pub fn questions(language: Language) -> &'static [Question] {
    match language {
        Language::Ru => &QUESTIONS_RU,
        Language::Kk => &QUESTIONS_KK,
    }
}
