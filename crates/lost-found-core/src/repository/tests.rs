//! Repository Tests
//!
//! Item cache and board behaviour without any backend.

#[cfg(test)]
mod tests {
    use crate::coordinator::Confirmed;
    use crate::domain::{ItemKind, ItemStatus};
    use crate::lifetime::ViewLifetime;
    use crate::repository::{Board, ItemRepository};
    use crate::testing::item;

    fn repo_with(ids: &[&str]) -> ItemRepository {
        let mut repo = ItemRepository::new();
        repo.replace_all(
            ids.iter()
                .map(|id| item(id, ItemKind::Lost, "Keys", ItemStatus::Active))
                .collect(),
        );
        repo
    }

    fn ids(repo: &ItemRepository) -> Vec<&str> {
        repo.items().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_insert_goes_first() {
        let mut repo = repo_with(&["1", "2"]);
        repo.insert(item("3", ItemKind::Found, "Bags", ItemStatus::Active));
        assert_eq!(ids(&repo), vec!["3", "1", "2"]);

        let mut empty = ItemRepository::new();
        empty.insert(item("9", ItemKind::Found, "Bags", ItemStatus::Active));
        assert_eq!(ids(&empty), vec!["9"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut repo = repo_with(&["1", "2"]);
        let before = repo.clone();
        assert!(repo.remove_by_id("nope").is_none());
        assert_eq!(repo, before);
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut repo = repo_with(&["1", "2", "3"]);
        let removed = repo.remove_by_id("2").unwrap();
        assert_eq!(removed.id, "2");
        assert_eq!(ids(&repo), vec!["1", "3"]);
    }

    #[test]
    fn test_replace_all_is_authoritative() {
        let mut repo = repo_with(&["1", "2"]);
        repo.replace_all(vec![item("7", ItemKind::Lost, "Pets", ItemStatus::Active)]);
        assert_eq!(ids(&repo), vec!["7"]);
        repo.replace_all(Vec::new());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_board_select_ignores_unknown_ids() {
        let mut board = Board::new();
        board.apply(Confirmed::Loaded(repo_with(&["1"]).items().to_vec()));
        board.select(Some("1"));
        assert_eq!(board.selected().map(|i| i.id.as_str()), Some("1"));
        board.select(Some("404"));
        assert_eq!(board.selected_id(), None);
    }

    #[test]
    fn test_reload_drops_stale_selection() {
        let mut board = Board::new();
        board.apply(Confirmed::Loaded(repo_with(&["1", "2"]).items().to_vec()));
        board.select(Some("2"));
        board.apply(Confirmed::Loaded(repo_with(&["1"]).items().to_vec()));
        assert_eq!(board.selected_id(), None);

        board.select(Some("1"));
        board.apply(Confirmed::Loaded(repo_with(&["3", "1"]).items().to_vec()));
        assert_eq!(board.selected_id(), Some("1"));
    }

    #[test]
    fn test_apply_while_alive() {
        let lifetime = ViewLifetime::new();
        let mut board = Board::new();
        let created = item("5", ItemKind::Found, "Keys", ItemStatus::Active);
        assert!(board.apply_while(&lifetime, Confirmed::Created(created)));
        assert_eq!(board.items().len(), 1);
    }
}
