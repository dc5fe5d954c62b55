//! Fixed pools the generator tasks draw from.

use spudstock_core::{Difficulty, Quality};

pub const ORIGINS: [&str; 8] = [
    "Idaho",
    "Washington",
    "Maine",
    "California",
    "North Carolina",
    "Quebec",
    "Peru",
    "Colorado",
];

pub const QUALITIES: [Quality; 3] = [Quality::Premium, Quality::Standard, Quality::Economy];

pub const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

pub const INGREDIENT_EXTRAS: [&str; 8] = [
    "Salt and pepper",
    "Olive oil",
    "Butter",
    "Garlic cloves",
    "Fresh herbs",
    "Heavy cream",
    "Cheese",
    "Onions",
];

pub const INSTRUCTIONS: [&str; 6] = [
    "Prepare all ingredients",
    "Wash and prepare potatoes",
    "Follow cooking method appropriate for the dish",
    "Season to taste",
    "Cook until golden and tender",
    "Serve hot and enjoy",
];

/// Recipe names per variety.
pub fn recipe_names(variety: &str) -> &'static [&'static str] {
    match variety {
        "Russet" => &[
            "Loaded Baked Potato",
            "Perfect French Fries",
            "Potato Wedges",
            "Russet Gratin",
        ],
        "Yukon Gold" => &[
            "Creamy Potato Soup",
            "Golden Potato Pancakes",
            "Yukon Scalloped Potatoes",
        ],
        "Red Potato" => &[
            "Red Potato Hash",
            "Potato Salad Deluxe",
            "Herbed Red Potatoes",
        ],
        "Fingerling" => &[
            "Crispy Fingerlings",
            "Fingerling Confit",
            "Fancy Fingerling Salad",
        ],
        "Sweet Potato" => &[
            "Sweet Potato Casserole",
            "Sweet Potato Chips",
            "Candied Sweet Potatoes",
        ],
        "Purple Potato" => &[
            "Purple Potato Mash",
            "Colorful Potato Medley",
            "Purple Potato Gnocchi",
        ],
        _ => &["Rustic Potato Bake"],
    }
}
