//! # Translations
//!
//! The storefront speaks Uzbek (default) and Russian. Labels are stored as
//! [`Localized`] pairs in a static table keyed by the identifiers the UI
//! uses.
//!
//! ```rust
//! use metal_core::i18n::{tr, Language};
//!
//! let label = tr("weight").unwrap();
//! assert_eq!(label.get(Language::Ru), "Вес");
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{MetalError, MetalResult};

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Uzbek (Latin script)
    #[default]
    Uz,
    /// Russian
    Ru,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Uz, Language::Ru];

    /// Two-letter tag (`uz` / `ru`)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Uz => "uz",
            Language::Ru => "ru",
        }
    }
}

impl FromStr for Language {
    type Err = MetalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uz" | "uzb" | "uzbek" => Ok(Language::Uz),
            "ru" | "rus" | "russian" => Ok(Language::Ru),
            _ => Err(MetalError::invalid_input("language", s, "Expected 'uz' or 'ru'")),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A string in both storefront languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized {
    pub uz: &'static str,
    pub ru: &'static str,
}

impl Localized {
    pub const fn new(uz: &'static str, ru: &'static str) -> Self {
        Self { uz, ru }
    }

    /// Pick the text for a language
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Uz => self.uz,
            Language::Ru => self.ru,
        }
    }
}

static TRANSLATIONS: Lazy<HashMap<&'static str, Localized>> = Lazy::new(|| {
    HashMap::from([
        ("catalog", Localized::new("Katalog", "Каталог")),
        ("calculator", Localized::new("Kalkulyator", "Калькулятор")),
        ("searchPlaceholder", Localized::new("Mahsulotni qidirish...", "Поиск продукта...")),
        ("addToCart", Localized::new("Savatga qo'shish", "В корзину")),
        ("price", Localized::new("Narxi", "Цена")),
        ("som", Localized::new("so'm", "сум")),
        ("aiHelper", Localized::new("AI Yordamchi", "AI Помощник")),
        ("cart", Localized::new("Savat", "Корзина")),
        ("total", Localized::new("Jami", "Итого")),
        ("checkout", Localized::new("Buyurtma berish", "Оформить заказ")),
        ("emptyCart", Localized::new("Savatingiz bo'sh", "Ваша корзина пуста")),
        ("calcTitle", Localized::new("Metall Kalkulyatori", "Калькулятор Металла")),
        (
            "calcDesc",
            Localized::new(
                "Mahsulot turini tanlang va o'lchamlarni kiriting. Biz sizga aniq og'irlikni hisoblab beramiz.",
                "Выберите тип продукта и введите размеры. Мы рассчитаем точный вес.",
            ),
        ),
        ("diameter", Localized::new("Diametr D (mm)", "Диаметр D (мм)")),
        ("length", Localized::new("Uzunlik L (m)", "Длина L (м)")),
        ("width", Localized::new("Kenglik A (mm)", "Ширина A (мм)")),
        ("thickness", Localized::new("Qalinlik S (mm)", "Толщина S (мм)")),
        ("height", Localized::new("Balandlik B (mm)", "Высота B (мм)")),
        ("wall", Localized::new("Devor qalinligi S", "Толщина стенки S")),
        ("weight", Localized::new("Og'irlik", "Вес")),
        ("result", Localized::new("Natija", "Результат")),
        ("askAnything", Localized::new("Istalgan narsani so'rang", "Спросите что угодно")),
    ])
});

/// Look up a translated label.
pub fn tr(key: &str) -> MetalResult<&'static Localized> {
    TRANSLATIONS
        .get(key)
        .ok_or_else(|| MetalError::translation_missing(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("uz".parse::<Language>().unwrap(), Language::Uz);
        assert_eq!(" RU ".parse::<Language>().unwrap(), Language::Ru);
        assert!("en".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serialization() {
        assert_eq!(serde_json::to_string(&Language::Ru).unwrap(), "\"ru\"");
        let lang: Language = serde_json::from_str("\"uz\"").unwrap();
        assert_eq!(lang, Language::Uz);
    }

    #[test]
    fn test_default_language_is_uzbek() {
        assert_eq!(Language::default(), Language::Uz);
    }

    #[test]
    fn test_lookup() {
        let total = tr("total").unwrap();
        assert_eq!(total.get(Language::Uz), "Jami");
        assert_eq!(total.get(Language::Ru), "Итого");
    }

    #[test]
    fn test_missing_key() {
        let err = tr("doesNotExist").unwrap_err();
        assert_eq!(err.error_code(), "TRANSLATION_MISSING");
    }

    #[test]
    fn test_every_entry_has_both_languages() {
        for (key, text) in TRANSLATIONS.iter() {
            assert!(!text.uz.is_empty(), "{} missing uz", key);
            assert!(!text.ru.is_empty(), "{} missing ru", key);
        }
    }
}
