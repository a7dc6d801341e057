// Terminal fact card rendering

use crate::facts::NutritionFacts;
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFormat {
    Text,
    Json,
}

impl CardFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "card" => Some(CardFormat::Text),
            "json" => Some(CardFormat::Json),
            _ => None,
        }
    }
}

const CARD_WIDTH: usize = 60;

fn section(title: &str) -> String {
    format!("{}\n", title.bright_green().bold())
}

pub fn render_card(facts: &NutritionFacts) -> String {
    let rule = "═".repeat(CARD_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{}\n", rule.green()));
    out.push_str(&format!("  {}\n", facts.name.bright_white().bold()));
    if let Some(category) = &facts.category {
        out.push_str(&format!("  {}\n", format!("[{}]", category).cyan()));
    }
    out.push_str(&format!(
        "  {}\n",
        "Nutritional values per 100g (USDA standard)".dimmed()
    ));
    out.push_str(&format!("{}\n\n", rule.green()));

    out.push_str(&section("Macronutrients"));
    out.push_str(&format!("  • Calories: {} kcal\n", facts.calories));
    out.push_str(&format!("  • Protein: {}g\n", facts.protein));
    out.push_str(&format!("  • Carbs: {}g\n", facts.carbs));
    out.push_str(&format!("  • Fat: {}g\n", facts.fat));
    out.push_str(&format!("  • Fiber: {}g\n", facts.fiber));
    out.push('\n');

    out.push_str(&section("Vitamins & Minerals"));
    if facts.vitamins.is_empty() {
        out.push_str(&format!("  {}\n", "No vitamin data available".dimmed()));
    } else {
        for line in &facts.vitamins {
            out.push_str(&format!("  • {}\n", line));
        }
    }

    if !facts.benefits.is_empty() {
        out.push('\n');
        out.push_str(&section("Health Benefits"));
        out.push_str(&format!("  {}\n", facts.benefits));
    }

    out.push_str(&format!("\n{}\n", rule.green()));
    out.push_str(&format!(
        "  {}\n",
        "Powered by USDA FoodData Central".dimmed()
    ));
    out
}

pub fn render(facts: &NutritionFacts, format: CardFormat) -> serde_json::Result<String> {
    match format {
        CardFormat::Text => Ok(render_card(facts)),
        CardFormat::Json => serde_json::to_string_pretty(facts),
    }
}
