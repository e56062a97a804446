//! Recipe Tests
//!
//! End-to-end checks of ingredient handling, generation and rendering
//! through the public API.

use larder::generator::{
    generate_local_recipes, Category, Diet, GenerateOptions, Picks, RecipeIdea,
};
use larder::ingredients::{normalize_ingredient, IngredientList};
use larder::render::{render_results, render_session, EMPTY_RESULTS};
use larder::session::{Session, STATUS_NEED_MORE};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn ingredients(items: &[&str]) -> IngredientList {
    items.iter().collect()
}

// === Ingredient List Tests ===

#[test]
fn test_double_add_leaves_list_unchanged() {
    let mut list = IngredientList::new();
    list.add("Broccoli");
    let before = list.clone();

    list.add("  broccoli ");
    assert_eq!(list, before);
}

#[test_case("Chicken   Thigh")]
#[test_case("\tsoy sauce\n")]
#[test_case("RICE")]
fn test_normalization_idempotent(raw: &str) {
    let once = normalize_ingredient(raw);
    assert_eq!(normalize_ingredient(&once), once);
}

#[test]
fn test_remove_nonexistent_is_noop() {
    let mut list = ingredients(&["eggs", "bread"]);
    let before = list.clone();
    list.remove("tofu");
    assert_eq!(list, before);
}

// === Generator Tests ===

#[test]
fn test_chicken_rice_broccoli() {
    let list = ingredients(&["chicken", "rice", "broccoli"]);

    let picks = Picks::from_ingredients(&list);
    assert_eq!(picks.get(Category::Protein), Some("chicken"));
    assert_eq!(picks.get(Category::Carb), Some("rice"));
    assert_eq!(picks.get(Category::Vegetable), Some("broccoli"));

    let ideas = generate_local_recipes(&list, &GenerateOptions::default());
    assert_eq!(ideas[0].uses, vec!["chicken", "broccoli", "rice"]);
}

#[test]
fn test_zero_matches_still_produces_ideas() {
    let ideas = generate_local_recipes(
        &ingredients(&["flour", "butter", "sugar"]),
        &GenerateOptions::default(),
    );

    assert!((3..=4).contains(&ideas.len()));
    for idea in &ideas {
        for category in [Category::Protein, Category::Vegetable, Category::Carb] {
            assert!(
                idea.missing
                    .iter()
                    .any(|m| category.suggestions().contains(&m.as_str())),
                "'{}' is missing the {:?} suggestion: {:?}",
                idea.title,
                category,
                idea.missing
            );
        }
    }
}

#[test_case(Diet::None, 4 ; "no diet keeps steamed chicken")]
#[test_case(Diet::GlutenFree, 4 ; "gluten free keeps steamed chicken")]
#[test_case(Diet::Vegetarian, 3 ; "vegetarian drops steamed chicken")]
#[test_case(Diet::Vegan, 3 ; "vegan drops steamed chicken")]
fn test_idea_count_by_diet(diet: Diet, expected: usize) {
    let options = GenerateOptions::default().with_diet(diet);
    let ideas = generate_local_recipes(&ingredients(&["chicken", "mushroom"]), &options);
    assert_eq!(ideas.len(), expected);
}

#[test]
fn test_ideas_round_trip_through_json() {
    let ideas = generate_local_recipes(
        &ingredients(&["salmon", "quinoa", "spinach"]),
        &GenerateOptions::default(),
    );

    let json = serde_json::to_string(&ideas).unwrap();
    let back: Vec<RecipeIdea> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ideas);
}

// === Session Tests ===

#[test]
fn test_session_refuses_with_one_ingredient() {
    let mut session = Session::default();
    session.add("rice");
    session.generate();

    assert_eq!(session.status(), STATUS_NEED_MORE);
    assert_eq!(render_results(session.results()), format!("{}\n", EMPTY_RESULTS));
}

#[test]
fn test_clear_restores_empty_state() {
    let mut session = Session::default();
    session.add_many("chicken, rice, broccoli");
    session.generate();
    assert_eq!(session.results().len(), 4);

    session.clear();
    assert!(session.ingredients().is_empty());
    assert_eq!(render_session(&session), format!("{}\n", EMPTY_RESULTS));
}

#[test]
fn test_session_options_flow_into_ideas() {
    let options = GenerateOptions::default()
        .with_time(20)
        .with_diet(Diet::Vegan)
        .with_pantry_basics(false);
    let mut session = Session::new(options);
    session.add_many("tofu, noodles, carrot");
    session.generate();

    let first = &session.results()[0];
    assert_eq!(first.title, "Quick veggie stir-fry");
    assert_eq!(first.time, "20 min");
    assert_eq!(first.uses, vec!["tofu", "carrot", "noodles"]);
}
