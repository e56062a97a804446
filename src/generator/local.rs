//! Local heuristic generator
//!
//! Keyword matching plus canned templates. No scoring, no randomness: the
//! same ingredient list and options always give the same ideas.

use log::debug;

use super::catalog::{Category, Picks, BASE_PLACEHOLDER};
use super::idea::RecipeIdea;
use super::options::{Diet, GenerateOptions};
use super::IdeaGenerator;
use crate::error::Result;
use crate::ingredients::IngredientList;

/// Only the first few ingredients go into the soup
const SOUP_BASE_LIMIT: usize = 6;

/// Upper bound on the soup's time estimate
const SOUP_MAX_MINUTES: u32 = 60;

/// Lower bound on the bowl's time estimate
const BOWL_MIN_MINUTES: u32 = 15;

const STEAMED_MINUTES: u32 = 35;

const CHICKEN_WORDS: &[&str] = &["chicken", "thigh", "breast"];
const MUSHROOM_WORDS: &[&str] = &["shiitake", "mushroom"];

/// Generate ideas from the ingredient list.
///
/// Always returns the stir-fry, soup and bowl ideas. The steamed chicken idea
/// is added when chicken or mushrooms are on hand and the diet allows meat.
pub fn generate_local_recipes(
    ingredients: &IngredientList,
    options: &GenerateOptions,
) -> Vec<RecipeIdea> {
    let picks = Picks::from_ingredients(ingredients);
    debug!(
        "Category picks: protein={:?} carb={:?} vegetable={:?}",
        picks.protein, picks.carb, picks.vegetable
    );

    let mut ideas = vec![
        stir_fry(&picks, options),
        soup(ingredients, &picks, options),
        bowl(&picks, options),
    ];

    if let Some(idea) = steamed_chicken(ingredients, options) {
        ideas.push(idea);
    }

    ideas
}

fn stir_fry(picks: &Picks, options: &GenerateOptions) -> RecipeIdea {
    let title = if options.diet == Diet::Vegan {
        "Quick veggie stir-fry"
    } else {
        "Quick stir-fry"
    };

    RecipeIdea::new(title, options.time_minutes)
        .with_tags([options.diet.tag(), Some("one-pan")])
        .with_uses([picks.protein, picks.vegetable, picks.carb])
        .with_missing(picks.gaps())
        .with_steps([
            "Chop ingredients; heat oil in a pan.".to_string(),
            format!(
                "Cook {} until done.",
                picks.protein.unwrap_or("your main ingredient")
            ),
            format!(
                "Add {} and stir-fry 3–5 min.",
                picks.vegetable.unwrap_or("vegetables")
            ),
            format!(
                "Add {} and season; toss to combine.",
                picks.carb.unwrap_or("a cooked carb")
            ),
        ])
}

fn soup(ingredients: &IngredientList, picks: &Picks, options: &GenerateOptions) -> RecipeIdea {
    let title = if options.diet == Diet::Vegan {
        "Cozy pantry soup"
    } else {
        "Cozy soup"
    };
    let minutes = options.time_minutes.saturating_add(15).min(SOUP_MAX_MINUTES);

    RecipeIdea::new(title, minutes)
        .with_tags([options.diet.tag(), Some("batch-friendly")])
        .with_uses(ingredients.iter().take(SOUP_BASE_LIMIT).map(Some))
        .with_missing(picks.gaps())
        .with_missing(["broth/stock (or water + seasoning)"])
        .with_steps([
            "Sauté onion/garlic (or any aromatics) in a pot.",
            "Add chopped ingredients and cover with broth/water.",
            "Simmer until tender; adjust seasoning.",
            "Optional: blend part of it for thickness.",
        ])
}

fn bowl(picks: &Picks, options: &GenerateOptions) -> RecipeIdea {
    let title = if options.diet == Diet::Vegan {
        "Loaded grain bowl"
    } else {
        "Loaded bowl"
    };
    let minutes = options.time_minutes.saturating_sub(5).max(BOWL_MIN_MINUTES);

    RecipeIdea::new(title, minutes)
        .with_tags([options.diet.tag(), Some("mix-and-match")])
        .with_uses([picks.carb, picks.protein, picks.vegetable])
        .with_missing(picks.unmatched().into_iter().map(|c| match c {
            Category::Carb => BASE_PLACEHOLDER,
            other => other.placeholder(),
        }))
        .with_missing(["a sauce (yogurt, vinaigrette, salsa, tahini)"])
        .with_steps([
            "Choose a base (grain, greens, or bread).",
            "Add cooked protein/beans and chopped veggies.",
            "Top with a sauce + crunch (nuts/seeds/croutons).",
            "Taste and adjust (salt/acid/heat).",
        ])
}

fn steamed_chicken(ingredients: &IngredientList, options: &GenerateOptions) -> Option<RecipeIdea> {
    let has_chicken = ingredients.has_any(CHICKEN_WORDS);
    let has_mushroom = ingredients.has_any(MUSHROOM_WORDS);
    if !(has_chicken || has_mushroom) || !options.diet.allows_meat() {
        return None;
    }

    let has_ginger = ingredients.has("ginger");
    let has_soy = ingredients.has("soy sauce");
    let present = |found: bool, label: &'static str| found.then_some(label);

    let idea = RecipeIdea::new("Steamed chicken with mushrooms", STEAMED_MINUTES)
        .with_tags([Some("comforting"), Some("simple"), Some("healthy")])
        .with_uses([
            present(has_chicken, "chicken"),
            present(has_mushroom, "shiitake/mushrooms"),
            present(has_soy, "soy sauce"),
            present(ingredients.has("garlic"), "garlic"),
            present(ingredients.has("scallion"), "scallion"),
            present(ingredients.has("rice"), "rice"),
        ])
        .with_missing(
            [
                present(!has_chicken, "chicken"),
                present(!has_mushroom, "shiitake (or any mushrooms)"),
                present(!has_ginger, "ginger (recommended)"),
                present(!options.pantry_basics, "salt + oil"),
                present(!has_soy, "soy sauce (or tamari)"),
            ]
            .into_iter()
            .flatten(),
        )
        .with_steps([
            "Slice chicken into bite-size pieces; season with a pinch of salt (and a little soy sauce if you have it).",
            "Slice mushrooms and scatter over the chicken with ginger/garlic if using.",
            "Steam on high until chicken is cooked through (about 12–18 min depending on thickness).",
            "Finish with scallions and a splash of soy sauce; serve over rice or with veggies.",
        ]);

    Some(idea)
}

/// `IdeaGenerator` backed by `generate_local_recipes`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalRecipeGenerator;

impl IdeaGenerator for LocalRecipeGenerator {
    fn name(&self) -> &str {
        "local"
    }

    fn generate(
        &self,
        ingredients: &IngredientList,
        options: &GenerateOptions,
    ) -> Result<Vec<RecipeIdea>> {
        Ok(generate_local_recipes(ingredients, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list(items: &[&str]) -> IngredientList {
        items.iter().collect()
    }

    #[test]
    fn test_stir_fry_uses_protein_veggie_carb() {
        let ideas = generate_local_recipes(
            &list(&["chicken", "rice", "broccoli"]),
            &GenerateOptions::default(),
        );

        assert_eq!(ideas[0].title, "Quick stir-fry");
        assert_eq!(ideas[0].uses, vec!["chicken", "broccoli", "rice"]);
        assert!(ideas[0].missing.is_empty());
        assert_eq!(ideas[0].steps[1], "Cook chicken until done.");
    }

    #[test]
    fn test_bowl_uses_carb_protein_veggie() {
        let ideas = generate_local_recipes(
            &list(&["chicken", "rice", "broccoli"]),
            &GenerateOptions::default(),
        );
        assert_eq!(ideas[2].uses, vec!["rice", "chicken", "broccoli"]);
        assert_eq!(
            ideas[2].missing,
            vec!["a sauce (yogurt, vinaigrette, salsa, tahini)"]
        );
    }

    #[test]
    fn test_bowl_suggests_a_base_when_no_carb() {
        let ideas = generate_local_recipes(
            &list(&["tofu", "spinach"]),
            &GenerateOptions::default(),
        );
        assert_eq!(
            ideas[2].missing,
            vec![BASE_PLACEHOLDER, "a sauce (yogurt, vinaigrette, salsa, tahini)"]
        );
        assert!(ideas[0].missing.contains(&Category::Carb.placeholder().to_string()));
    }

    #[test]
    fn test_local_strings_keep_cooking_times() {
        let ideas = generate_local_recipes(
            &list(&["chicken", "broccoli"]),
            &GenerateOptions::default(),
        );
        assert_eq!(ideas[0].steps[2], "Add broccoli and stir-fry 3–5 min.");
        assert_eq!(ideas[1].steps[0], "Sauté onion/garlic (or any aromatics) in a pot.");
        assert!(ideas[3].steps.iter().any(|s| s.contains("about 12–18 min")));
    }

    #[test]
    fn test_no_matches_lists_every_category() {
        let ideas = generate_local_recipes(
            &list(&["flour", "sugar"]),
            &GenerateOptions::default(),
        );

        assert_eq!(ideas.len(), 3);
        for idea in &ideas {
            for category in [Category::Protein, Category::Carb, Category::Vegetable] {
                assert!(
                    idea.missing
                        .iter()
                        .any(|m| category.suggestions().contains(&m.as_str())),
                    "{} should list {:?} as missing",
                    idea.title,
                    category
                );
            }
        }
        assert_eq!(ideas[0].steps[1], "Cook your main ingredient until done.");
    }

    #[test]
    fn test_soup_uses_first_six() {
        let items = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let ideas = generate_local_recipes(&list(&items), &GenerateOptions::default());
        assert_eq!(ideas[1].uses, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_time_estimates() {
        let ingredients = list(&["tofu", "spinach"]);

        let ideas = generate_local_recipes(&ingredients, &GenerateOptions::default().with_time(30));
        assert_eq!(ideas[0].time, "30 min");
        assert_eq!(ideas[1].time, "45 min");
        assert_eq!(ideas[2].time, "25 min");

        let ideas = generate_local_recipes(&ingredients, &GenerateOptions::default().with_time(15));
        assert_eq!(ideas[1].time, "30 min");
        assert_eq!(ideas[2].time, "15 min");

        let ideas = generate_local_recipes(&ingredients, &GenerateOptions::default().with_time(60));
        assert_eq!(ideas[1].time, "60 min");
    }

    #[test]
    fn test_vegan_titles_and_tags() {
        let options = GenerateOptions::default().with_diet(Diet::Vegan);
        let ideas = generate_local_recipes(&list(&["tofu", "noodles"]), &options);

        let titles: Vec<_> = ideas.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Quick veggie stir-fry", "Cozy pantry soup", "Loaded grain bowl"]
        );
        assert_eq!(ideas[0].tags, vec!["vegan", "one-pan"]);
    }

    #[test]
    fn test_steamed_chicken_added_for_chicken() {
        let options = GenerateOptions::default().with_pantry_basics(false);
        let ideas = generate_local_recipes(&list(&["chicken thigh", "rice", "garlic"]), &options);

        assert_eq!(ideas.len(), 4);
        let steamed = &ideas[3];
        assert_eq!(steamed.time, "35 min");
        assert_eq!(steamed.uses, vec!["chicken", "garlic", "rice"]);
        assert_eq!(
            steamed.missing,
            vec![
                "shiitake (or any mushrooms)",
                "ginger (recommended)",
                "salt + oil",
                "soy sauce (or tamari)",
            ]
        );
    }

    #[test]
    fn test_steamed_chicken_respects_pantry_basics() {
        let ideas = generate_local_recipes(
            &list(&["shiitake mushrooms", "ginger", "soy sauce"]),
            &GenerateOptions::default(),
        );
        let steamed = &ideas[3];
        assert_eq!(steamed.uses, vec!["shiitake/mushrooms", "soy sauce"]);
        assert_eq!(steamed.missing, vec!["chicken"]);
    }

    #[test]
    fn test_steamed_chicken_skipped_for_vegetarians() {
        let options = GenerateOptions::default().with_diet(Diet::Vegetarian);
        let ideas = generate_local_recipes(&list(&["mushroom", "rice"]), &options);
        assert_eq!(ideas.len(), 3);
    }

    #[test]
    fn test_deterministic() {
        let ingredients = list(&["salmon", "quinoa", "zucchini", "ginger"]);
        let options = GenerateOptions::default();
        assert_eq!(
            generate_local_recipes(&ingredients, &options),
            generate_local_recipes(&ingredients, &options)
        );
    }
}
