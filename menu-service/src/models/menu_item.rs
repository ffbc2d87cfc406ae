use serde::{de, Deserialize, Deserializer, Serialize};

/// Collection holding every menu item.
pub const MENU_ITEM_COLLECTION: &str = "menuitem";

/// A menu item as returned by the API. Store bookkeeping fields (`_id`,
/// timestamps) are never part of this shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "deserialize_whole_number")]
    pub calories: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_whole_number")]
    pub spicy_level: Option<i32>,
}

/// Other writers may store counts as doubles (`550.0`). Integral values are
/// accepted; fractional or out-of-range ones are not.
fn deserialize_whole_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let whole = match number {
        Number::Int(n) => n,
        Number::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            f as i64
        }
        Number::Float(f) => {
            return Err(de::Error::custom(format!("expected a whole number, got {}", f)));
        }
    };

    T::try_from(whole)
        .map(Some)
        .map_err(|_| de::Error::custom(format!("{} is out of range", whole)))
}

impl MenuItem {
    #[allow(clippy::too_many_arguments)]
    fn sample(
        name: &str,
        description: &str,
        price: f64,
        category: &str,
        image: &str,
        is_featured: bool,
        calories: i64,
        spicy_level: i32,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: Some(description.to_string()),
            price,
            category: category.to_string(),
            image: Some(image.to_string()),
            is_featured,
            calories: Some(calories),
            spicy_level: Some(spicy_level),
        }
    }

    /// Fixed sample menu inserted by the seed endpoint.
    pub fn samples() -> Vec<MenuItem> {
        vec![
            Self::sample(
                "Big Mac",
                "Two 100% beef patties, special sauce, lettuce, cheese, pickles, onions on a sesame seed bun.",
                5.99,
                "Burgers",
                "https://images.unsplash.com/photo-1550547660-d9450f859349?w=1200",
                true,
                550,
                0,
            ),
            Self::sample(
                "McChicken",
                "Crispy chicken topped with shredded lettuce and mayonnaise on a toasted bun.",
                3.49,
                "Chicken",
                "https://images.unsplash.com/photo-1561758033-d89a9ad46330?w=1200",
                false,
                400,
                0,
            ),
            Self::sample(
                "World-Famous Fries",
                "Golden, crispy and perfectly salted fries.",
                2.29,
                "Sides",
                "https://images.unsplash.com/photo-1550547660-31633d40d0a0?w=1200",
                true,
                230,
                0,
            ),
            Self::sample(
                "Spicy McNuggets (10 pc)",
                "Tender, juicy chicken with a spicy tempura coating.",
                4.99,
                "Chicken",
                "https://images.unsplash.com/photo-1608039829579-8790f8d5a1f7?w=1200",
                true,
                420,
                3,
            ),
            Self::sample(
                "McFlurry Oreo",
                "Vanilla soft serve blended with Oreo cookie pieces.",
                2.99,
                "Desserts",
                "https://images.unsplash.com/photo-1461009683693-342af2f2d6ce?w=1200",
                false,
                510,
                0,
            ),
            Self::sample(
                "Caramel Iced Coffee",
                "Premium roast coffee over ice with caramel flavor and cream.",
                2.49,
                "Drinks",
                "https://images.unsplash.com/photo-1511920170033-f8396924c348?w=1200",
                false,
                180,
                0,
            ),
        ]
    }
}
