//! Plain-text rendering of chips and recipe cards
//!
//! Pure functions of state: everything is re-rendered on each change.

use crate::generator::RecipeIdea;
use crate::ingredients::IngredientList;
use crate::session::Session;

pub const EMPTY_RESULTS: &str = "No ideas yet — add ingredients and click Generate.";
pub const EMPTY_CHIPS: &str = "No ingredients yet.";

/// Render every ingredient as a removable chip.
pub fn render_chips(ingredients: &IngredientList) -> String {
    if ingredients.is_empty() {
        return EMPTY_CHIPS.to_string();
    }

    ingredients
        .iter()
        .map(|i| format!("[{} ×]", i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one recipe card.
pub fn render_card(idea: &RecipeIdea) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", idea.title));

    let mut badges = vec![format!("[{}]", idea.time)];
    badges.extend(idea.tags.iter().map(|t| format!("[{}]", t)));
    out.push_str(&format!("  {}\n", badges.join(" ")));

    let uses = if idea.uses.is_empty() {
        "—".to_string()
    } else {
        idea.uses.join(", ")
    };
    let missing = if idea.missing.is_empty() {
        "none".to_string()
    } else {
        idea.missing.join(", ")
    };
    out.push_str(&format!("  Uses: {}\n", uses));
    out.push_str(&format!("  Missing: {}\n", missing));

    for (n, step) in idea.steps.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", n + 1, step));
    }

    out
}

/// Render all cards, or the empty-state message.
pub fn render_results(ideas: &[RecipeIdea]) -> String {
    if ideas.is_empty() {
        return format!("{}\n", EMPTY_RESULTS);
    }

    ideas
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Status line, results and chips for the whole session.
pub fn render_session(session: &Session) -> String {
    let mut out = String::new();
    if !session.status().is_empty() {
        out.push_str(session.status());
        out.push_str("\n\n");
    }
    out.push_str(&render_results(session.results()));
    out
}
