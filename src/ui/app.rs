use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::list::{self, coalesce, ListSynchronizer, SelectionError, SyncTrigger, TriggerSender};
use crate::model::{Domain, Item, ItemId, Period, RepoModel, SubscriptionId};
use crate::strings::Strings;
use crate::ui::detail::{DetailIntent, DetailPaneState, DetailReducer};
use crate::ui::events::AppEvent;
use crate::ui::list_view::ListView;
use crate::ui::mvi::Reducer;
use crate::ui::search::{SearchBarState, SearchIntent, SearchReducer};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// UI-thread state: the synchronizer, its surface and the panes around it.
pub struct App {
    should_quit: bool,
    strings: Strings,
    sync: ListSynchronizer,
    list: ListView,
    search: SearchBarState,
    detail: DetailPaneState,
    refreshing: bool,
    event_sender: Option<Sender<AppEvent>>,
}

impl App {
    pub fn new(model: Arc<dyn RepoModel>, strings: Strings) -> Self {
        Self {
            should_quit: false,
            strings,
            sync: ListSynchronizer::new(model),
            list: ListView::new(),
            search: SearchBarState::default(),
            detail: DetailPaneState::default(),
            refreshing: false,
            event_sender: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn search(&self) -> &SearchBarState {
        &self.search
    }

    pub fn detail(&self) -> &DetailPaneState {
        &self.detail
    }

    pub fn synchronizer(&self) -> &ListSynchronizer {
        &self.sync
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn period(&self) -> Period {
        self.sync.model().period()
    }

    pub fn domain(&self) -> Domain {
        self.sync.model().domain()
    }

    /// Item data for a rendered row.
    pub fn row_item(&self, id: ItemId) -> Option<&Item> {
        self.sync.item(id)
    }

    pub fn is_favourite(&self, id: ItemId) -> bool {
        self.sync.model().is_favourite(id)
    }

    /// Where `load_more_items` completions are posted.
    pub fn set_event_sender(&mut self, sender: Sender<AppEvent>) {
        self.event_sender = Some(sender);
    }

    pub fn attach(&self, triggers: &TriggerSender) -> SubscriptionId {
        self.sync.attach(triggers)
    }

    pub fn detach(&self, subscription: SubscriptionId) -> bool {
        self.sync.detach(subscription)
    }

    // ========================================================================
    // List synchronization
    // ========================================================================

    pub fn sync_now(&mut self) {
        self.sync.on_model_changed(&mut self.list);
    }

    /// Handle a burst of triggers drained from the event channel.
    pub fn on_triggers(&mut self, triggers: Vec<SyncTrigger>) {
        for trigger in coalesce(triggers) {
            self.sync.handle(trigger, &mut self.list);
        }
    }

    pub fn set_scope(&mut self, period: Period) {
        if period == self.period() {
            return;
        }
        self.sync.set_scope(period, &mut self.list);
    }

    pub fn next_scope(&mut self) {
        self.set_scope(self.period().next());
    }

    pub fn previous_scope(&mut self) {
        self.set_scope(self.period().previous());
    }

    /// Flip the tab. The model fires `changed`, which arrives as a trigger.
    pub fn switch_domain(&mut self) {
        let model = Arc::clone(self.sync.model());
        model.set_domain(model.domain().toggle());
    }

    pub fn reload(&mut self) {
        self.sync.model().reload();
    }

    // ========================================================================
    // Search bar (MVI)
    // ========================================================================

    pub fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
        if self.search.text != self.sync.query() {
            let query = self.search.text.clone();
            self.sync.set_query(query, &mut self.list);
        }
    }

    // ========================================================================
    // Selection and detail pane (MVI)
    // ========================================================================

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    pub fn move_selection(&mut self, delta: isize) {
        self.list.move_selection(delta);
    }

    pub fn select_first(&mut self) {
        self.list.select_first();
    }

    pub fn select_last(&mut self) {
        self.list.select_last();
    }

    /// Resolve the selected row and show it in the detail pane.
    pub fn open_selected(&mut self) {
        let Some(index) = self.list.selected() else {
            return;
        };
        match list::resolve(index, self.sync.snapshot(), self.sync.model().as_ref()) {
            Ok(item) => {
                let favourite = self.is_favourite(item.id);
                self.dispatch_detail(DetailIntent::Show { item, favourite });
            }
            Err(SelectionError::Stale { id }) => {
                tracing::debug!(%id, "Selected repository disappeared before opening");
                self.dispatch_detail(DetailIntent::Stale { id });
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.dispatch_detail(DetailIntent::Clear);
    }

    pub fn toggle_favourite(&mut self) {
        let Some(id) = self.list.selected_id() else {
            return;
        };
        let model = Arc::clone(self.sync.model());
        let favourite = model.toggle_favourite(id);
        self.dispatch_detail(DetailIntent::FavouriteChanged { id, favourite });
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Ask the model for the next page unless a request is already pending.
    pub fn request_load_more(&mut self) {
        if self.refreshing {
            return;
        }
        let Some(sender) = self.event_sender.clone() else {
            return;
        };
        self.refreshing = true;
        self.sync.model().load_more_items(Box::new(move || {
            let _ = sender.send(AppEvent::LoadMoreFinished);
        }));
    }

    pub fn on_load_more_finished(&mut self) {
        self.refreshing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemoryModel;
    use std::sync::mpsc;

    fn make_app(items: Vec<Item>) -> (App, Arc<MemoryModel>) {
        let model = Arc::new(MemoryModel::new(items));
        let mut app = App::new(model.clone(), Strings::default());
        app.sync_now();
        (app, model)
    }

    fn rows(app: &App) -> Vec<u64> {
        app.list().rows().iter().map(|id| id.0).collect()
    }

    #[test]
    fn typing_in_search_filters_rows() {
        let (mut app, _) = make_app(vec![Item::new(1, "alpha"), Item::new(2, "beta")]);
        app.dispatch_search(SearchIntent::Focus);
        app.dispatch_search(SearchIntent::Insert('b'));
        assert_eq!(rows(&app), vec![2]);

        app.dispatch_search(SearchIntent::Cancel);
        assert_eq!(rows(&app), vec![1, 2]);
        assert_eq!(app.synchronizer().query(), "");
    }

    #[test]
    fn open_selected_shows_detail() {
        let (mut app, _) = make_app(vec![Item::new(1, "alpha"), Item::new(2, "beta")]);
        app.move_selection(1);
        app.open_selected();
        assert_eq!(app.detail().item().map(|i| i.id), Some(ItemId(2)));
    }

    #[test]
    fn open_selected_reports_stale_row() {
        let (mut app, model) = make_app(vec![Item::new(1, "alpha")]);
        model.replace_items(Vec::new());
        app.open_selected();
        assert_eq!(app.detail(), &DetailPaneState::Stale { id: ItemId(1) });
    }

    #[test]
    fn favourite_toggle_updates_detail() {
        let (mut app, _) = make_app(vec![Item::new(1, "alpha")]);
        app.open_selected();
        app.toggle_favourite();
        assert!(matches!(app.detail(), DetailPaneState::Showing { favourite: true, .. }));
        assert!(app.is_favourite(ItemId(1)));
    }

    #[test]
    fn load_more_posts_completion_once() {
        let (mut app, model) = make_app(Vec::new());
        let (tx, rx) = mpsc::channel();
        app.set_event_sender(tx);

        app.request_load_more();
        assert!(app.is_refreshing());
        assert!(matches!(rx.try_recv(), Ok(AppEvent::LoadMoreFinished)));
        app.request_load_more();
        assert_eq!(model.load_requests(), 1);

        app.on_load_more_finished();
        assert!(!app.is_refreshing());
    }

    #[test]
    fn scope_change_reaches_model() {
        let (mut app, model) = make_app(vec![Item::new(1, "alpha")]);
        app.next_scope();
        assert_eq!(model.period(), Period::Month);
        app.previous_scope();
        assert_eq!(app.period(), Period::Day);
    }
}
