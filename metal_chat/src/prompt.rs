//! Assistant instruction text.
//!
//! The model is primed with one instruction turn (shop facts, the live
//! catalog with prices, the weight formulas) and a short acknowledgement
//! turn, in the user's language.

use metal_core::cart::format_som;
use metal_core::catalog::{count_in_category, products, Category};
use metal_core::equations::formulas_markdown;
use metal_core::i18n::{tr, Language, Localized};

/// Shop phone number quoted in replies and fallbacks
pub const SHOP_PHONE: &str = "+998 90 123 45 67";

const ACKNOWLEDGEMENT: Localized = Localized::new(
    "Tushundim! Men Sof - Sofmetall AI yordamchisiman. Sizga yordam berishga tayyorman!",
    "Понял! Я Соф - AI-помощник Sofmetall. Готов помочь!",
);

/// Model's reply to the instruction turn
pub fn acknowledgement(language: Language) -> &'static str {
    ACKNOWLEDGEMENT.get(language)
}

fn catalog_section(language: Language) -> String {
    let som = tr("som").map(|l| l.get(language)).unwrap_or("so'm");
    products()
        .iter()
        .map(|p| {
            let mut line = format!(
                "- {} ({}): {} {}/{}, {}",
                p.name(language),
                p.category.id(),
                format_som(p.price),
                som,
                p.unit.symbol(),
                p.specs
            );
            if let Some(kg) = p.unit_weight() {
                line.push_str(&format!(", ~{}/{}", kg, p.unit.symbol()));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn categories_section(language: Language) -> String {
    Category::ALL
        .iter()
        .map(|c| format!("- {}: {} ({})", c.id(), c.label(language), count_in_category(*c)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the instruction turn for a language
pub fn system_instruction(language: Language) -> String {
    let catalog = catalog_section(language);
    let categories = categories_section(language);
    let formulas = formulas_markdown();

    match language {
        Language::Uz => format!(
            "Sen \"Sofmetall\" kompaniyasining do'stona AI yordamchisisan. Isming Sof.\n\n\
             SOFMETALL HAQIDA:\n\
             - O'zbekistondagi metall mahsulotlari yetkazib beruvchi, Toshkent, Sergeli tumani\n\
             - Telefon: {phone}\n\
             - Toshkent bo'ylab bepul yetkazib berish, 24 soat ichida\n\n\
             MAHSULOTLAR:\n{catalog}\n\n\
             KATEGORIYALAR:\n{categories}\n\n\
             OG'IRLIK FORMULALARI (D, W, T, H, S - mm; L - m):\n{formulas}\n\n\
             QOIDALAR:\n\
             1. Samimiy bo'l, javoblar qisqa va aniq bo'lsin.\n\
             2. Narx so'ralsa, katalogdagi narxni ayt; jami = narx x miqdor.\n\
             3. Og'irlik so'ralsa, yuqoridagi formulalar bilan hisoblab ko'rsat.\n\
             4. Mahsulot bo'lmasa, o'xshash alternativ taklif qil.\n\
             5. Buyurtma uchun {phone} raqamiga qo'ng'iroq qilishni tavsiya et.",
            phone = SHOP_PHONE,
        ),
        Language::Ru => format!(
            "Ты дружелюбный AI-помощник компании \"Sofmetall\". Твоё имя Соф.\n\n\
             О SOFMETALL:\n\
             - Поставщик металлопроката в Узбекистане, Ташкент, район Сергели\n\
             - Телефон: {phone}\n\
             - Бесплатная доставка по Ташкенту в течение 24 часов\n\n\
             ТОВАРЫ:\n{catalog}\n\n\
             КАТЕГОРИИ:\n{categories}\n\n\
             ФОРМУЛЫ ВЕСА (D, W, T, H, S - мм; L - м):\n{formulas}\n\n\
             ПРАВИЛА:\n\
             1. Будь дружелюбным, отвечай кратко и точно.\n\
             2. Называй цену из каталога; итого = цена x количество.\n\
             3. При расчёте веса используй формулы выше и покажи расчёт.\n\
             4. Если товара нет, предложи похожую альтернативу.\n\
             5. Для заказа предложи позвонить по номеру {phone}.",
            phone = SHOP_PHONE,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_embeds_catalog_and_formulas() {
        let text = system_instruction(Language::Ru);
        assert!(text.contains("Арматура А500С Ø12мм"));
        assert!(text.contains("450 000 сум/don"));
        assert!(text.contains("D² / 162 × L"));
        assert!(text.contains(SHOP_PHONE));
    }

    #[test]
    fn test_instruction_lists_unit_weights() {
        let text = system_instruction(Language::Uz);
        assert!(text.contains("Profil truba 40x40x2mm"));
        assert!(text.contains("~2.51 kg/m"));
    }

    #[test]
    fn test_categories_section_counts() {
        let text = categories_section(Language::Uz);
        assert!(text.contains("- armatura: Armatura (4)"));
        assert!(text.contains("- shveller: Shveller (2)"));
    }

    #[test]
    fn test_acknowledgement_language() {
        assert!(acknowledgement(Language::Uz).starts_with("Tushundim"));
        assert!(acknowledgement(Language::Ru).starts_with("Понял"));
    }
}
