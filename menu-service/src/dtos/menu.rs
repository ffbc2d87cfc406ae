use crate::models::MenuItem;
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct MenuListParams {
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub featured: Option<bool>,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

/// Query flags accept the usual spellings, case-insensitive:
/// `true/false`, `1/0`, `yes/no`, `on/off`, `t/f`, `y/n`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(Some(true)),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(Some(false)),
        _ => Err(de::Error::custom(format!(
            "invalid boolean `{}`, expected one of true/false, 1/0, yes/no, on/off",
            raw
        ))),
    }
}

/// Body of `POST /api/menu`: every menu item field, `is_featured` optional.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMenuItemRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: String,
    pub image: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[validate(range(min = 0, message = "Calories cannot be negative"))]
    pub calories: Option<i64>,
    pub spicy_level: Option<i32>,
}

impl From<CreateMenuItemRequest> for MenuItem {
    fn from(req: CreateMenuItemRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            category: req.category,
            image: req.image,
            is_featured: req.is_featured,
            calories: req.calories,
            spicy_level: req.spicy_level,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMenuItemResponse {
    pub id: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeedStatus {
    Exists,
    Seeded,
}

impl SeedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedStatus::Exists => "exists",
            SeedStatus::Seeded => "seeded",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    pub status: SeedStatus,
    pub count: u64,
}
