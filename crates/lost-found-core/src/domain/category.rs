/// Categories offered by the post form and the category filter
pub const CATEGORIES: &[&str] = &[
    "Electronics",
    "Keys",
    "Wallets",
    "Bags",
    "Clothing",
    "Documents",
    "Jewelry",
    "Pets",
    "Other",
];

pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}
