//! Opening of a chat session: the time-of-day greeting and the suggested
//! first questions.

use chrono::{Local, Timelike};
use metal_core::i18n::{Language, Localized};
use serde::Serialize;

const MORNING: Localized = Localized::new(
    "Xayrli tong! ☀️ Men Sof - Sofmetall AI yordamchisiman. Bugun sizga qanday yordam bera olaman?",
    "Доброе утро! ☀️ Я Соф - AI-помощник Sofmetall. Чем могу помочь сегодня?",
);

const DAY: Localized = Localized::new(
    "Salom do'stim! 👋 Men Sof - sizning metall bo'yicha yordamchingiz. Qanday savollaringiz bor?",
    "Привет, друг! 👋 Я Соф - ваш помощник по металлу. Какие у вас вопросы?",
);

const EVENING: Localized = Localized::new(
    "Xayrli kech! 🌙 Men Sof - Sofmetall yordamchisi. Sizga qanday xizmat qila olaman?",
    "Добрый вечер! 🌙 Я Соф - помощник Sofmetall. Чем могу быть полезен?",
);

/// Greeting for a local hour (0-23): before noon, before 18:00, evening
pub fn greeting(language: Language, hour: u32) -> &'static str {
    let text = match hour {
        0..=11 => &MORNING,
        12..=17 => &DAY,
        _ => &EVENING,
    };
    text.get(language)
}

/// Greeting for the current local time
pub fn greeting_now(language: Language) -> &'static str {
    greeting(language, Local::now().hour())
}

/// A suggested question shown under the greeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    /// Button caption
    pub label: &'static str,
    /// Text placed in the input box
    pub query: &'static str,
}

const QUICK_ACTIONS: [(Localized, Localized); 3] = [
    (
        Localized::new("Mahsulotlar", "Товары"),
        Localized::new("Qanday mahsulotlaringiz bor?", "Какие у вас есть товары?"),
    ),
    (
        Localized::new("Og'irlik", "Вес"),
        Localized::new(
            "Armatura og'irligini hisoblashga yordam bering",
            "Помогите рассчитать вес арматуры",
        ),
    ),
    (
        Localized::new("Narxlar", "Цены"),
        Localized::new(
            "Eng ko'p sotiladigan mahsulotlar narxi qancha?",
            "Сколько стоят популярные товары?",
        ),
    ),
];

/// Products, weight and prices shortcuts, in display order
pub fn quick_actions(language: Language) -> [QuickAction; 3] {
    QUICK_ACTIONS.map(|(label, query)| QuickAction {
        label: label.get(language),
        query: query.get(language),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_boundaries() {
        assert!(greeting(Language::Uz, 0).starts_with("Xayrli tong"));
        assert!(greeting(Language::Uz, 11).starts_with("Xayrli tong"));
        assert!(greeting(Language::Uz, 12).starts_with("Salom"));
        assert!(greeting(Language::Uz, 17).starts_with("Salom"));
        assert!(greeting(Language::Uz, 18).starts_with("Xayrli kech"));
        assert!(greeting(Language::Ru, 23).starts_with("Добрый вечер"));
    }

    #[test]
    fn test_greeting_now_is_one_of_three() {
        let text = greeting_now(Language::Ru);
        assert!([MORNING.ru, DAY.ru, EVENING.ru].contains(&text));
    }

    #[test]
    fn test_quick_actions_follow_language() {
        let uz = quick_actions(Language::Uz);
        assert_eq!(uz[0].label, "Mahsulotlar");
        assert!(uz[1].query.contains("Armatura"));

        let ru = quick_actions(Language::Ru);
        assert_eq!(ru.map(|a| a.label), ["Товары", "Вес", "Цены"]);
        assert_eq!(ru[2].query, "Сколько стоят популярные товары?");
    }
}
