//! Filter/Search Engine
//!
//! Derives the displayed subset of the cache. Pure: same inputs, same output.

use crate::domain::{CategoryFilter, Filter, Item, TypeFilter};

fn matches_search(item: &Item, needle: &str) -> bool {
    needle.is_empty()
        || item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.location.to_lowercase().contains(needle)
}

/// Whether `item` passes `filter` for an already lowercased, trimmed needle
pub fn matches(item: &Item, filter: &Filter, needle: &str) -> bool {
    let kind_ok = match filter.kind() {
        TypeFilter::All => true,
        TypeFilter::Only(kind) => item.kind == kind,
    };
    let category_ok = match filter.category() {
        CategoryFilter::All => true,
        CategoryFilter::Named(name) => item.category == *name,
    };
    kind_ok
        && category_ok
        && (!filter.active_only() || item.is_active())
        && matches_search(item, needle)
}

/// Items passing `filter` and `search`, in cache order.
///
/// Search is a case-insensitive substring match on title, description and
/// location; a blank term matches everything.
pub fn visible<'a>(items: &'a [Item], filter: &Filter, search: &str) -> Vec<&'a Item> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|item| matches(item, filter, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemKind, ItemStatus};
    use crate::testing::item;

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    fn sample() -> Vec<Item> {
        let mut wallet = item("1", ItemKind::Lost, "Wallets", ItemStatus::Active);
        wallet.title = "Lost Wallet".to_string();
        let mut keys = item("2", ItemKind::Found, "Keys", ItemStatus::Resolved);
        keys.title = "Found Keys".to_string();
        let mut phone = item("3", ItemKind::Lost, "Electronics", ItemStatus::Active);
        phone.location = "Main Street Cafe".to_string();
        let mut dog = item("4", ItemKind::Found, "Pets", ItemStatus::Other("archived".to_string()));
        dog.description = "Small brown dog with a WALLET-shaped tag".to_string();
        vec![wallet, keys, phone, dog]
    }

    #[test]
    fn test_active_only_scenario() {
        let items = vec![
            item("1", ItemKind::Lost, "Electronics", ItemStatus::Active),
            item("2", ItemKind::Found, "Keys", ItemStatus::Resolved),
        ];
        let filter = Filter::new(TypeFilter::All, CategoryFilter::All, true);
        assert_eq!(ids(&visible(&items, &filter, "")), vec!["1"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = sample();
        let filter = Filter::default();
        assert_eq!(ids(&visible(&items, &filter, "wallet")), vec!["1", "4"]);
        assert_eq!(ids(&visible(&items, &filter, "  WALLET ")), vec!["1", "4"]);
        assert_eq!(ids(&visible(&items, &filter, "cafe")), vec!["3"]);
        assert!(visible(&items, &filter, "umbrella").is_empty());
        assert_eq!(visible(&items, &filter, "   ").len(), items.len());
    }

    #[test]
    fn test_type_filters_partition_by_kind() {
        let items = sample();
        let lost = visible(&items, &Filter::new(TypeFilter::Only(ItemKind::Lost), CategoryFilter::All, false), "");
        let found = visible(&items, &Filter::new(TypeFilter::Only(ItemKind::Found), CategoryFilter::All, false), "");
        assert_eq!(lost.len() + found.len(), items.len());
        assert!(lost.iter().all(|i| i.kind == ItemKind::Lost));
        assert!(found.iter().all(|i| i.kind == ItemKind::Found));
        assert!(lost.iter().all(|l| found.iter().all(|f| f.id != l.id)));
    }

    #[test]
    fn test_category_is_exact() {
        let items = sample();
        let filter = Filter::new(TypeFilter::All, CategoryFilter::Named("Keys".to_string()), false);
        assert_eq!(ids(&visible(&items, &filter, "")), vec!["2"]);
        let filter = Filter::new(TypeFilter::All, CategoryFilter::Named("keys".to_string()), false);
        assert!(visible(&items, &filter, "").is_empty());
    }

    #[test]
    fn test_unknown_status_is_not_active() {
        let items = sample();
        let filter = Filter::new(TypeFilter::Only(ItemKind::Found), CategoryFilter::All, true);
        assert!(visible(&items, &filter, "").is_empty());
    }

    #[test]
    fn test_subsequence_and_deterministic() {
        let items = sample();
        let filters = [
            Filter::default(),
            Filter::new(TypeFilter::Only(ItemKind::Lost), CategoryFilter::All, true),
            Filter::new(TypeFilter::All, CategoryFilter::Named("Pets".to_string()), false),
        ];
        for filter in &filters {
            for term in ["", "a", "wallet", "zzz"] {
                let first = visible(&items, filter, term);
                let second = visible(&items, filter, term);
                assert_eq!(ids(&first), ids(&second));

                let positions: Vec<usize> = first
                    .iter()
                    .map(|v| items.iter().position(|i| i.id == v.id).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
