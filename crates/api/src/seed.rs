//! Static sample data loaded at startup.
//!
//! Records go through the validating service path: a seed record that
//! fails validation is a programming error and aborts startup rather than
//! being skipped silently.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use spudstock_core::{Difficulty, DomainResult, Potato, Quality, Recipe};
use spudstock_registry::Registry;
use spudstock_service::{PotatoService, RecipeService};

pub fn load_sample_data<R>(registry: R) -> DomainResult<()>
where
    R: Registry + Clone,
{
    let potatoes = PotatoService::new(registry.clone());
    let recipes = RecipeService::new(registry);

    for potato in sample_potatoes() {
        potatoes.create(potato)?;
    }
    for recipe in sample_recipes() {
        recipes.create(recipe)?;
    }

    info!("sample data loaded");
    Ok(())
}

fn harvested(days_ago: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days_ago)
}

fn potato(
    id: &str,
    variety: &str,
    origin: &str,
    weight: f64,
    quality: Quality,
    days_ago: i64,
    price: f64,
) -> Potato {
    Potato {
        id: id.to_string(),
        variety: variety.to_string(),
        origin: origin.to_string(),
        weight,
        quality,
        harvest_date: harvested(days_ago),
        price,
    }
}

fn sample_potatoes() -> Vec<Potato> {
    vec![
        potato("p001", "Russet", "Idaho", 0.45, Quality::Premium, 5, 2.99),
        potato("p002", "Yukon Gold", "Canada", 0.38, Quality::Premium, 3, 3.49),
        potato("p003", "Red Potato", "Maine", 0.32, Quality::Standard, 10, 2.49),
        potato("p004", "Fingerling", "California", 0.25, Quality::Premium, 2, 4.99),
        potato(
            "p005",
            "Sweet Potato",
            "North Carolina",
            0.50,
            Quality::Standard,
            7,
            3.29,
        ),
        potato("p006", "Purple Potato", "Peru", 0.28, Quality::Premium, 4, 5.49),
        potato("p007", "Russet", "Washington", 0.52, Quality::Standard, 15, 2.79),
        potato("p008", "Yukon Gold", "Quebec", 0.41, Quality::Economy, 20, 1.99),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "r001".to_string(),
            name: "Classic Baked Potato".to_string(),
            variety: "Russet".to_string(),
            cooking_time: 60,
            difficulty: Difficulty::Easy,
            ingredients: strings(&[
                "1 large Russet potato",
                "2 tbsp butter",
                "Salt and pepper",
                "Sour cream",
                "Chives",
            ]),
            instructions: strings(&[
                "Preheat oven to 400°F (200°C)",
                "Wash and dry potato thoroughly",
                "Pierce potato several times with a fork",
                "Rub with oil and sprinkle with salt",
                "Bake for 50-60 minutes until tender",
                "Cut open and add butter, salt, and toppings",
            ]),
            servings: 1,
        },
        Recipe {
            id: "r002".to_string(),
            name: "Garlic Yukon Gold Mash".to_string(),
            variety: "Yukon Gold".to_string(),
            cooking_time: 30,
            difficulty: Difficulty::Easy,
            ingredients: strings(&[
                "2 lbs Yukon Gold potatoes",
                "4 cloves garlic",
                "1/2 cup milk",
                "4 tbsp butter",
                "Salt and pepper",
            ]),
            instructions: strings(&[
                "Peel and cube potatoes",
                "Boil potatoes with garlic cloves for 20 minutes",
                "Drain and return to pot",
                "Add butter and milk",
                "Mash until smooth",
                "Season with salt and pepper",
            ]),
            servings: 4,
        },
        Recipe {
            id: "r003".to_string(),
            name: "Roasted Red Potatoes".to_string(),
            variety: "Red Potato".to_string(),
            cooking_time: 45,
            difficulty: Difficulty::Easy,
            ingredients: strings(&[
                "2 lbs Red potatoes",
                "3 tbsp olive oil",
                "2 tsp rosemary",
                "1 tsp thyme",
                "Salt and pepper",
            ]),
            instructions: strings(&[
                "Preheat oven to 425°F (220°C)",
                "Cut potatoes into quarters",
                "Toss with oil and herbs",
                "Spread on baking sheet",
                "Roast for 40-45 minutes, turning once",
                "Serve hot",
            ]),
            servings: 6,
        },
        Recipe {
            id: "r004".to_string(),
            name: "Fancy Fingerling Medley".to_string(),
            variety: "Fingerling".to_string(),
            cooking_time: 35,
            difficulty: Difficulty::Medium,
            ingredients: strings(&[
                "1.5 lbs Fingerling potatoes",
                "3 tbsp butter",
                "2 cloves garlic minced",
                "Fresh thyme",
                "Lemon zest",
                "Sea salt",
            ]),
            instructions: strings(&[
                "Halve fingerlings lengthwise",
                "Boil in salted water for 10 minutes",
                "Drain and pat dry",
                "Sauté in butter with garlic",
                "Add thyme and lemon zest",
                "Cook until golden brown",
            ]),
            servings: 4,
        },
        Recipe {
            id: "r005".to_string(),
            name: "Sweet Potato Fries".to_string(),
            variety: "Sweet Potato".to_string(),
            cooking_time: 30,
            difficulty: Difficulty::Easy,
            ingredients: strings(&[
                "2 large Sweet potatoes",
                "2 tbsp olive oil",
                "1 tsp paprika",
                "1/2 tsp garlic powder",
                "Salt",
            ]),
            instructions: strings(&[
                "Preheat oven to 425°F (220°C)",
                "Cut potatoes into fry shapes",
                "Toss with oil and seasonings",
                "Arrange in single layer on baking sheet",
                "Bake for 25-30 minutes, flipping halfway",
                "Serve immediately",
            ]),
            servings: 3,
        },
        Recipe {
            id: "r006".to_string(),
            name: "Purple Potato Salad".to_string(),
            variety: "Purple Potato".to_string(),
            cooking_time: 25,
            difficulty: Difficulty::Medium,
            ingredients: strings(&[
                "2 lbs Purple potatoes",
                "1/4 cup olive oil",
                "2 tbsp white wine vinegar",
                "1 tbsp Dijon mustard",
                "Red onion",
                "Fresh dill",
            ]),
            instructions: strings(&[
                "Boil whole potatoes until tender",
                "Cool and cut into bite-sized pieces",
                "Whisk together oil, vinegar, and mustard",
                "Toss potatoes with dressing",
                "Add chopped onion and dill",
                "Refrigerate for 1 hour before serving",
            ]),
            servings: 6,
        },
    ]
}
