//! Menu Categories
//!
//! Fixed category set, the card containers they render into, and the
//! named views (`all` plus one per category).

use serde::{Deserialize, Serialize};

/// A menu category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Pizza,
    Papadias,
    #[serde(rename = "salat")]
    Salad,
    Pasta,
    #[serde(rename = "souses")]
    Sauces,
    Drinks,
    Desserts,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::Pizza,
        Category::Papadias,
        Category::Salad,
        Category::Pasta,
        Category::Sauces,
        Category::Drinks,
        Category::Desserts,
    ];

    /// Key used for selectors, container ids and the store
    pub fn key(&self) -> &'static str {
        match self {
            Category::Pizza => "pizza",
            Category::Papadias => "papadias",
            Category::Salad => "salat",
            Category::Pasta => "pasta",
            Category::Sauces => "souses",
            Category::Drinks => "drinks",
            Category::Desserts => "desserts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Pizza => "Pizza",
            Category::Papadias => "Papadias",
            Category::Salad => "Salad",
            Category::Pasta => "Pasta",
            Category::Sauces => "Sauces",
            Category::Drinks => "Drinks",
            Category::Desserts => "Desserts",
        }
    }

    /// REST path segment for this category
    pub fn resource(&self) -> &'static str {
        match self {
            Category::Drinks => "icki",
            Category::Desserts => "desertlar",
            other => other.key(),
        }
    }

    pub fn container(&self) -> Container {
        match self {
            Category::Pizza | Category::Papadias => Container::Cards,
            Category::Salad => Container::Salad,
            Category::Pasta => Container::Pasta,
            Category::Sauces => Container::Sauces,
            Category::Drinks => Container::Drinks,
            Category::Desserts => Container::Desserts,
        }
    }

    /// Reverse lookup from a REST path segment
    pub fn from_resource(resource: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.resource() == resource)
    }

    /// Parse free text (key, label or English alias), case-insensitive
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim().to_lowercase();
        match text.as_str() {
            "salad" => return Some(Category::Salad),
            "sauces" | "sauce" => return Some(Category::Sauces),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|c| c.key() == text || c.label().to_lowercase() == text)
    }
}

/// Physical card container on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// Shared by pizza and papadias
    Cards,
    Salad,
    Pasta,
    Sauces,
    Drinks,
    Desserts,
}

impl Container {
    pub const ALL: [Container; 6] = [
        Container::Cards,
        Container::Salad,
        Container::Pasta,
        Container::Sauces,
        Container::Drinks,
        Container::Desserts,
    ];

    /// DOM id of the container element
    pub fn dom_id(&self) -> &'static str {
        match self {
            Container::Cards => "cards",
            Container::Salad => "salat-cards",
            Container::Pasta => "pasta-cards",
            Container::Sauces => "souses-cards",
            Container::Drinks => "drinks-cards",
            Container::Desserts => "desserts-cards",
        }
    }

    /// Categories rendered into this container, in render order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(move |c| c.container() == *self)
    }
}

/// A named view: everything, or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    All,
    Only(Category),
}

impl View {
    /// Every selectable view, in selector order
    pub fn selectors() -> impl Iterator<Item = View> {
        std::iter::once(View::All).chain(Category::ALL.into_iter().map(View::Only))
    }

    /// Selector class name (`all` or the category key)
    pub fn name(&self) -> &'static str {
        match self {
            View::All => "all",
            View::Only(category) => category.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::All => "All",
            View::Only(category) => category.label(),
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().trim_start_matches('#');
        if name.eq_ignore_ascii_case("all") {
            return Some(View::All);
        }
        Category::parse(name).map(View::Only)
    }

    /// View for a page URL hash; empty or unknown opens `all`
    pub fn from_hash(hash: &str) -> Self {
        if hash.trim_start_matches('#').is_empty() {
            return View::All;
        }
        View::parse(hash).unwrap_or_else(|| {
            log::warn!("[MENU] No view for URL hash {:?}, showing all", hash);
            View::All
        })
    }

    pub fn includes(&self, category: Category) -> bool {
        match self {
            View::All => true,
            View::Only(only) => *only == category,
        }
    }

    /// Whether the container is displayed in this view
    pub fn shows(&self, container: Container) -> bool {
        match self {
            View::All => true,
            View::Only(category) => category.container() == container,
        }
    }

    /// Category treated as current while this view is active
    pub fn current_category(&self) -> Category {
        match self {
            View::All => Category::Pizza,
            View::Only(category) => *category,
        }
    }
}
