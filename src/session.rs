use crate::{
    domain::{
        board::{project, Group},
        view_state::{GroupBy, OrderBy, ViewState},
    },
    loader::{self, LoadState, SnapshotSource},
    storage::{KeyValueStore, ViewStateStore},
};
use tracing::{debug, warn};

/// What the presentation layer should show right now
#[derive(Debug, PartialEq, Eq)]
pub enum Board<'a> {
    Loading,
    Failed(&'a str),
    Ready(Vec<Group<'a>>),
}

/// State owned by one running board: the snapshot lifecycle, the current
/// view and the display menu
///
/// Every board is projected on demand from the current snapshot and view, so
/// a view change needs no invalidation.
pub struct Session<S> {
    load_state: LoadState,
    view: ViewState,
    display_menu_open: bool,
    store: ViewStateStore<S>,
}

impl<S: KeyValueStore> Session<S> {
    /// Opens a session with the view state restored from `store`
    pub async fn open(store: S) -> Self {
        let store = ViewStateStore::new(store);
        let view = store.restore().await;
        debug!(grouping = %view.grouping, sorting = %view.sorting, "session opened");

        Self {
            load_state: LoadState::Loading,
            view,
            display_menu_open: false,
            store,
        }
    }

    /// Runs the session's single snapshot load
    ///
    /// Once the lifecycle has settled, further calls do not touch the source.
    /// Dropping the returned future before it completes leaves the session
    /// in `Loading`.
    pub async fn start<L: SnapshotSource + ?Sized>(&mut self, source: &L) {
        if !self.load_state.is_loading() {
            debug!("snapshot already settled, skipping load");
            return;
        }
        self.load_state = loader::load(source).await;
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub async fn set_grouping(&mut self, grouping: GroupBy) {
        self.set_view(ViewState::new(grouping, self.view.sorting))
            .await;
    }

    pub async fn set_ordering(&mut self, sorting: OrderBy) {
        self.set_view(ViewState::new(self.view.grouping, sorting))
            .await;
    }

    /// Replaces the view and persists it
    ///
    /// A failed write is logged; the new view stays in effect for this
    /// session either way.
    pub async fn set_view(&mut self, view: ViewState) {
        self.view = view;
        if let Err(e) = self.store.persist(&view).await {
            warn!(error = %e, "failed to persist view state");
        }
    }

    pub fn toggle_display_menu(&mut self) {
        self.display_menu_open = !self.display_menu_open;
    }

    pub fn is_display_menu_open(&self) -> bool {
        self.display_menu_open
    }

    /// Projects the current snapshot with the current view
    pub fn board(&self) -> Board<'_> {
        match &self.load_state {
            LoadState::Loading => Board::Loading,
            LoadState::Failed(reason) => Board::Failed(reason),
            LoadState::Ready(snapshot) => Board::Ready(project(snapshot, &self.view)),
        }
    }

    pub fn store(&self) -> &ViewStateStore<S> {
        &self.store
    }
}
