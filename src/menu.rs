use crate::types::{MenuCategory, MenuItem, MenuSection};

pub const DRINKS: [MenuItem; 4] = [
    MenuItem { name: "House Lager", price_cents: 500 },
    MenuItem { name: "Classic Margarita", price_cents: 750 },
    MenuItem { name: "Old Fashioned", price_cents: 900 },
    MenuItem { name: "House Red Wine", price_cents: 650 },
];

pub const FOOD: [MenuItem; 4] = [
    MenuItem { name: "Loaded Nachos", price_cents: 899 },
    MenuItem { name: "Buffalo Wings", price_cents: 1050 },
    MenuItem { name: "Beef Sliders", price_cents: 925 },
    MenuItem { name: "Truffle Fries", price_cents: 675 },
];

pub fn items(section: MenuSection) -> &'static [MenuItem] {
    match section {
        MenuSection::Drinks => &DRINKS,
        MenuSection::Food => &FOOD,
    }
}

/// Catalog sections selected by `category`, in display order
pub fn sections_for(category: MenuCategory) -> Vec<(MenuSection, &'static [MenuItem])> {
    category
        .sections()
        .iter()
        .map(|section| (*section, items(*section)))
        .collect()
}
