use std::io::{self, Stdout};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::ConfigStore;
use crate::list::{SyncTrigger, TriggerSender};
use crate::model::RepoModel;
use crate::strings::Strings;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::search::SearchIntent;
use crate::ui::terminal_guard::setup_terminal;

/// Run the browser until the user quits.
///
/// `model` should not have been loaded yet: the first page is requested
/// after the synchronizer is attached so its `changed` signal is not missed.
pub fn run(
    model: Arc<dyn RepoModel>,
    config: &ConfigStore,
    initial_query: Option<String>,
) -> io::Result<()> {
    let settings = config.get();
    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms);

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(model, Strings::new(settings.ui.uppercase_strings));
    app.set_event_sender(events.sender());

    let sync_tx = events.sender();
    let triggers = TriggerSender::new(move |trigger| sync_tx.send(AppEvent::Sync(trigger)).is_ok());
    let subscription = app.attach(&triggers);

    app.sync_now();
    if let Some(query) = initial_query.filter(|query| !query.is_empty()) {
        app.dispatch_search(SearchIntent::Focus);
        for ch in query.chars() {
            app.dispatch_search(SearchIntent::Insert(ch));
        }
        app.dispatch_search(SearchIntent::Submit);
    }
    app.reload();
    tracing::info!(period = ?app.period(), "UI started");

    let result = event_loop(&mut terminal, &events, &mut app, tick_rate);

    app.detach(subscription);
    drop(guard);
    tracing::info!("UI stopped");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    events: &EventHandler,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, &*app))?;
        if app.should_quit() {
            return Ok(());
        }

        let first = match events.next(tick_rate) {
            Ok(event) => event,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        };

        // Everything that piled up while drawing is handled in one pass so a
        // burst of model notifications costs a single recompute.
        let mut pending: Vec<SyncTrigger> = Vec::new();
        for event in std::iter::once(first).chain(events.drain()) {
            match event {
                AppEvent::Key(key) => handle_key(app, key),
                AppEvent::Tick | AppEvent::Resize(_, _) => {}
                AppEvent::Sync(trigger) => pending.push(trigger),
                AppEvent::LoadMoreFinished => app.on_load_more_finished(),
            }
            if app.should_quit() {
                break;
            }
        }
        if !pending.is_empty() {
            app.on_triggers(pending);
        }
    }
}
