//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The plain
//! [`CategoryStore`] and [`UiState`] types hold the logic so it can be
//! exercised without a reactive runtime.

use std::collections::BTreeMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::category::{Category, Container, View};
use crate::models::{Item, ItemForm, ItemId, NavLink};

/// Issued before a category refresh; only the newest ticket may apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub category: Category,
    seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Entry {
    items: Vec<Item>,
    latest_ticket: u64,
}

/// Last known item list per category
///
/// Lists are only ever replaced wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryStore {
    entries: BTreeMap<Category, Entry>,
}

impl CategoryStore {
    pub fn items(&self, category: Category) -> &[Item] {
        self.entries
            .get(&category)
            .map(|e| e.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn find(&self, category: Category, id: &ItemId) -> Option<&Item> {
        self.items(category).iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(|e| e.items.len()).sum()
    }

    /// Take a ticket for a refresh about to be issued
    pub fn begin_refresh(&mut self, category: Category) -> RefreshTicket {
        let entry = self.entries.entry(category).or_default();
        entry.latest_ticket += 1;
        RefreshTicket {
            category,
            seq: entry.latest_ticket,
        }
    }

    /// Replace the category's list if the ticket is still the newest.
    /// Returns false when a newer refresh was issued meanwhile.
    pub fn apply_refresh(&mut self, ticket: RefreshTicket, items: Vec<Item>) -> bool {
        let entry = self.entries.entry(ticket.category).or_default();
        if ticket.seq != entry.latest_ticket {
            log::debug!(
                "[STORE] Dropping stale {} refresh ({} < {})",
                ticket.category.key(),
                ticket.seq,
                entry.latest_ticket
            );
            return false;
        }
        entry.items = items;
        true
    }

    /// Items rendered into `container` while `view` is active, in order
    pub fn container_items(&self, view: View, container: Container) -> Vec<(Category, Item)> {
        if !view.shows(container) {
            return Vec::new();
        }
        container
            .categories()
            .filter(|category| view.includes(*category))
            .flat_map(|category| {
                self.items(category)
                    .iter()
                    .cloned()
                    .map(move |item| (category, item))
            })
            .collect()
    }
}

/// Item being edited (id, category)
#[derive(Debug, Clone, PartialEq)]
pub struct EditTarget {
    pub id: ItemId,
    pub category: Category,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub active_view: View,
    /// Fallback category for blank form fields
    pub current: Category,
    pub editing: Option<EditTarget>,
    pub form_open: bool,
}

impl UiState {
    pub fn show(&mut self, view: View) {
        self.active_view = view;
        self.current = view.current_category();
    }

    pub fn is_active(&self, view: View) -> bool {
        self.active_view == view
    }

    /// View to re-render after `category` changed: `all` stays `all`
    pub fn view_after_change(&self, category: Category) -> View {
        match self.active_view {
            View::All => View::All,
            View::Only(_) => View::Only(category),
        }
    }

    pub fn begin_edit(&mut self, target: EditTarget) {
        self.editing = Some(target);
        self.form_open = true;
    }

    /// Open a blank form, dropping any edit in progress
    pub fn open_new(&mut self) {
        self.editing = None;
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.editing = None;
        self.form_open = false;
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Items per category
    pub catalog: CategoryStore,
    /// View selection and edit tracking
    pub ui: UiState,
    /// Create/edit form fields
    pub form: ItemForm,
    /// Links for the navigation bar
    pub nav_links: Vec<NavLink>,
    /// User-visible error message
    pub banner: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<MenuState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a category refresh to the store
pub fn store_apply_refresh(store: &AppStore, ticket: RefreshTicket, items: Vec<Item>) -> bool {
    store.catalog().write().apply_refresh(ticket, items)
}

/// Take a refresh ticket for a category
pub fn store_begin_refresh(store: &AppStore, category: Category) -> RefreshTicket {
    store.catalog().write().begin_refresh(category)
}

/// Show an error message in the banner
pub fn store_report(store: &AppStore, message: impl Into<String>) {
    store.banner().set(Some(message.into()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::item;
    use std::collections::HashSet;

    fn loaded() -> CategoryStore {
        let mut store = CategoryStore::default();
        let fixtures = [
            (Category::Pizza, vec![item(1, "Margherita"), item(2, "Diavola")]),
            (Category::Papadias, vec![item(3, "Chicken")]),
            (Category::Salad, vec![item(4, "Caesar")]),
            (Category::Drinks, vec![item(5, "Cola"), item(6, "Ayran")]),
        ];
        for (category, items) in fixtures {
            let ticket = store.begin_refresh(category);
            assert!(store.apply_refresh(ticket, items));
        }
        store
    }

    #[test]
    fn test_all_view_is_union_without_duplicates() {
        let store = loaded();
        let shown: Vec<(Category, ItemId)> = Container::ALL
            .into_iter()
            .flat_map(|c| store.container_items(View::All, c))
            .map(|(category, item)| (category, item.id))
            .collect();
        let unique: HashSet<_> = shown.iter().cloned().collect();

        assert_eq!(shown.len(), store.len());
        assert_eq!(unique.len(), shown.len());
    }

    #[test]
    fn test_shared_container_concatenates_pizza_then_papadias() {
        let store = loaded();
        let names: Vec<String> = store
            .container_items(View::All, Container::Cards)
            .into_iter()
            .map(|(_, item)| item.display_title().to_string())
            .collect();
        assert_eq!(names, vec!["Margherita", "Diavola", "Chicken"]);

        let only_papadias = store.container_items(View::Only(Category::Papadias), Container::Cards);
        assert_eq!(only_papadias.len(), 1);
        assert!(store.container_items(View::Only(Category::Papadias), Container::Salad).is_empty());
    }

    #[test]
    fn test_stale_ticket_never_overwrites_newer() {
        let mut store = CategoryStore::default();
        let first = store.begin_refresh(Category::Pasta);
        let second = store.begin_refresh(Category::Pasta);

        assert!(store.apply_refresh(second, vec![item(2, "newer")]));
        assert!(!store.apply_refresh(first, vec![item(1, "older")]));
        assert_eq!(store.items(Category::Pasta)[0].display_title(), "newer");
    }

    #[test]
    fn test_tickets_are_per_category() {
        let mut store = CategoryStore::default();
        let pasta = store.begin_refresh(Category::Pasta);
        let _salad = store.begin_refresh(Category::Salad);
        assert!(store.apply_refresh(pasta, vec![item(1, "Penne")]));
    }

    #[test]
    fn test_exactly_one_selector_active() {
        let mut ui = UiState::default();
        for view in View::selectors() {
            ui.show(view);
            assert_eq!(View::selectors().filter(|v| ui.is_active(*v)).count(), 1);
            assert!(ui.is_active(view));
        }
    }

    #[test]
    fn test_current_category_follows_view() {
        let mut ui = UiState::default();
        assert_eq!(ui.active_view, View::All);
        assert_eq!(ui.current, Category::Pizza);

        ui.show(View::Only(Category::Drinks));
        assert_eq!(ui.current, Category::Drinks);
        assert_eq!(ui.view_after_change(Category::Salad), View::Only(Category::Salad));

        ui.show(View::All);
        assert_eq!(ui.current, Category::Pizza);
        assert_eq!(ui.view_after_change(Category::Salad), View::All);
    }

    #[test]
    fn test_open_new_drops_edit_target() {
        let mut ui = UiState::default();
        ui.begin_edit(EditTarget { id: ItemId::from(1), category: Category::Pizza });
        assert!(ui.form_open);
        ui.open_new();
        assert!(ui.form_open);
        assert_eq!(ui.editing, None);
        ui.close_form();
        assert!(!ui.form_open);
    }
}
