// src/app.rs
use std::sync::Arc;

use chrono::Local;
use eframe::egui;

use crate::api::{BreweryApi, FetchTask, Notify};
use crate::config::{BreweryList, BreweryRecord, Settings};
use crate::state::{AppState, DashboardEvent, DetailEvent, DetailState, Route};
use crate::ui::UiAction;

pub struct BreweryApp {
    state: AppState,
    api: Arc<dyn BreweryApi>,
    repaint: Option<egui::Context>,

    // One slot per screen; replacing or clearing a slot cancels its fetch.
    list_task: Option<FetchTask<BreweryList>>,
    detail_task: Option<FetchTask<BreweryRecord>>,
}

impl BreweryApp {
    pub fn new(settings: Settings, api: Arc<dyn BreweryApi>, repaint: Option<egui::Context>) -> Self {
        let start_path = settings.start_path.clone();
        let mut app = Self {
            state: AppState::new(settings),
            api,
            repaint,
            list_task: None,
            detail_task: None,
        };
        app.refresh();
        app.navigate_to_path(&start_path);
        app
    }

    pub fn is_busy(&self) -> bool {
        self.list_task.is_some() || self.detail_task.is_some()
    }

    fn notifier(&self) -> Option<Notify> {
        self.repaint.clone().map(|ctx| Box::new(move || ctx.request_repaint()) as Notify)
    }

    pub fn refresh(&mut self) {
        let api = Arc::clone(&self.api);
        let per_page = self.state.settings.page_size;

        tracing::info!(per_page, "loading brewery list");
        self.state.dispatch(DashboardEvent::FetchStarted);
        self.list_task = Some(FetchTask::spawn(
            "list",
            move || api.fetch_breweries(per_page),
            self.notifier(),
        ));
    }

    pub fn navigate(&mut self, route: Route) {
        match route {
            Route::List => self.back_to_list(),
            Route::Detail { id } => self.open_detail(id),
        }
    }

    // Unknown paths land on the list
    pub fn navigate_to_path(&mut self, path: &str) {
        match Route::parse(path) {
            Some(route) => self.navigate(route),
            None => {
                tracing::warn!(path, "unknown route, showing the list");
                self.navigate(Route::List);
            }
        }
    }

    pub fn open_detail(&mut self, id: String) {
        tracing::debug!(%id, "opening detail view");
        self.state.route = Route::detail(id.clone());
        self.state.detail = Some(DetailState::new(id.clone()));
        self.start_detail_fetch(id);
    }

    fn start_detail_fetch(&mut self, id: String) {
        let api = Arc::clone(&self.api);
        self.detail_task = Some(FetchTask::spawn(
            format!("detail-{}", id),
            move || api.fetch_brewery(&id),
            self.notifier(),
        ));
    }

    pub fn retry_detail(&mut self) {
        if let Some(id) = self.state.detail.as_ref().map(|d| d.id().to_string()) {
            self.state.dispatch_detail(DetailEvent::Retry);
            self.start_detail_fetch(id);
        }
    }

    pub fn back_to_list(&mut self) {
        self.detail_task = None;
        self.state.detail = None;
        self.state.route = Route::List;
    }

    // Called once per frame
    pub fn poll_tasks(&mut self) {
        if let Some(result) = self.list_task.as_mut().and_then(FetchTask::poll) {
            self.list_task = None;
            match result {
                Ok(breweries) => {
                    self.state.dispatch(DashboardEvent::FetchSucceeded(breweries, Local::now()));
                }
                Err(e) => {
                    tracing::warn!(kind = e.kind(), error = %e, "brewery list fetch failed");
                    self.state.dispatch(DashboardEvent::FetchFailed(e.to_string()));
                }
            }
        }

        if let Some(result) = self.detail_task.as_mut().and_then(FetchTask::poll) {
            self.detail_task = None;
            match result {
                Ok(brewery) => self.state.dispatch_detail(DetailEvent::Loaded(brewery)),
                Err(e) => {
                    tracing::warn!(kind = e.kind(), error = %e, "brewery detail fetch failed");
                    self.state.dispatch_detail(DetailEvent::Failed(e.to_string()));
                }
            }
        }
    }

    fn handle(&mut self, action: UiAction) {
        match action {
            UiAction::Dashboard(event) => self.state.dispatch(event),
            UiAction::OpenDetail(id) => self.navigate(Route::detail(id)),
            UiAction::Back => self.navigate(Route::List),
            UiAction::Refresh => self.refresh(),
            UiAction::RetryDetail => self.retry_detail(),
        }
    }

    fn show_menu(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("View", |ui| {
                let refresh = egui::Button::new("⟳ Refresh");
                if ui.add_enabled(!self.state.dashboard.is_loading(), refresh).clicked() {
                    actions.push(UiAction::Refresh);
                    ui.close_menu();
                }
            });

            ui.separator();

            let on_list = self.state.route == Route::List;
            if ui.selectable_label(on_list, "Breweries").clicked() && !on_list {
                actions.push(UiAction::Back);
            }
            if let Route::Detail { .. } = self.state.route {
                ui.add_enabled(false, egui::SelectableLabel::new(true, "Detail"));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.monospace(self.state.route.path());
                if self.is_busy() {
                    ui.spinner();
                }
            });
        });
    }
}

impl eframe::App for BreweryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_tasks();

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui, &mut actions);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.state.route {
                Route::List => {
                    crate::ui::dashboard::show_dashboard_view(
                        ui,
                        &self.state.dashboard,
                        self.state.settings.top_states,
                        &mut actions,
                    );
                }
                Route::Detail { .. } => {
                    crate::ui::detail::show_detail_view(ui, self.state.detail.as_ref(), &mut actions);
                }
            }
        });

        for action in actions {
            self.handle(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::sample_records;
    use crate::api::FetchError;
    use crate::state::{DetailStatus, LoadStatus};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;
    use std::time::{Duration, Instant};

    // Serves the sample records until told to fail
    #[derive(Default)]
    struct StubApi {
        failing: AtomicBool,
    }

    impl StubApi {
        fn failing() -> Self {
            Self { failing: AtomicBool::new(true) }
        }
    }

    impl BreweryApi for StubApi {
        fn fetch_breweries(&self, per_page: usize) -> Result<Vec<BreweryRecord>, FetchError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(FetchError::Interrupted);
            }
            Ok(sample_records().into_iter().take(per_page).collect())
        }

        fn fetch_brewery(&self, id: &str) -> Result<BreweryRecord, FetchError> {
            sample_records().into_iter()
                .find(|r| r.id == id && !self.failing.load(Ordering::SeqCst))
                .ok_or_else(|| FetchError::HttpStatus {
                    status: reqwest::StatusCode::NOT_FOUND,
                    url: format!("http://stub/breweries/{}", id),
                })
        }
    }

    fn settle(app: &mut BreweryApp) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.is_busy() {
            assert!(Instant::now() < deadline, "fetches never settled");
            app.poll_tasks();
            thread::sleep(Duration::from_millis(2));
        }
    }

    fn app_with(api: Arc<StubApi>) -> BreweryApp {
        BreweryApp::new(Settings::default(), api, None)
    }

    fn app_starting_at(path: &str) -> BreweryApp {
        let settings = Settings {
            start_path: path.to_string(),
            ..Settings::default()
        };
        BreweryApp::new(settings, Arc::new(StubApi::default()), None)
    }

    #[test]
    fn initial_fetch_populates_dashboard() {
        let mut app = app_with(Arc::new(StubApi::default()));
        assert!(app.state.dashboard.is_loading());

        settle(&mut app);
        assert_eq!(app.state.dashboard.status(), &LoadStatus::Loaded);
        assert_eq!(app.state.dashboard.summary(10).total, 3);
    }

    #[test]
    fn failed_initial_fetch_is_visible_and_empty() {
        let mut app = app_with(Arc::new(StubApi::failing()));
        settle(&mut app);

        let dashboard = &app.state.dashboard;
        assert!(matches!(dashboard.status(), LoadStatus::Failed(_)));
        let summary = dashboard.summary(10);
        assert_eq!((summary.total, summary.filtered_count(), summary.type_count()), (0, 0, 0));
    }

    #[test]
    fn failed_refresh_keeps_previous_list() {
        let api = Arc::new(StubApi::default());
        let mut app = app_with(Arc::clone(&api));
        settle(&mut app);

        api.failing.store(true, Ordering::SeqCst);
        app.handle(UiAction::Refresh);
        settle(&mut app);

        assert!(matches!(app.state.dashboard.status(), LoadStatus::Failed(_)));
        assert_eq!(app.state.dashboard.breweries().len(), 3);
    }

    #[test]
    fn filter_actions_update_the_dashboard() {
        let mut app = app_with(Arc::new(StubApi::default()));
        settle(&mut app);

        app.handle(UiAction::Dashboard(DashboardEvent::SearchChanged("hop".to_string())));
        let ids: Vec<String> = app.state.dashboard.summary(10).filtered.iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn detail_navigation_loads_record() {
        let mut app = app_with(Arc::new(StubApi::default()));
        settle(&mut app);

        app.handle(UiAction::OpenDetail("2".to_string()));
        assert_eq!(app.state.route.path(), "/brewery/2");
        assert!(app.state.detail.as_ref().is_some_and(DetailState::is_loading));

        settle(&mut app);
        match app.state.detail.as_ref().map(DetailState::status) {
            Some(DetailStatus::Loaded(record)) => assert_eq!(record.display_name(), "Big Brewery"),
            other => panic!("expected loaded detail, got {:?}", other),
        }
    }

    #[test]
    fn missing_detail_shows_error_and_can_go_back() {
        let mut app = app_with(Arc::new(StubApi::default()));
        settle(&mut app);

        app.handle(UiAction::OpenDetail("nope".to_string()));
        settle(&mut app);
        assert!(matches!(
            app.state.detail.as_ref().map(DetailState::status),
            Some(DetailStatus::Failed(_))
        ));

        app.handle(UiAction::RetryDetail);
        assert!(app.state.detail.as_ref().is_some_and(DetailState::is_loading));
        settle(&mut app);

        app.handle(UiAction::Back);
        assert_eq!(app.state.route, Route::List);
        assert!(app.state.detail.is_none());
    }

    #[test]
    fn leaving_detail_drops_its_fetch() {
        let mut app = app_with(Arc::new(StubApi::default()));
        settle(&mut app);

        app.handle(UiAction::OpenDetail("1".to_string()));
        app.handle(UiAction::Back);
        assert!(!app.is_busy());

        thread::sleep(Duration::from_millis(20));
        app.poll_tasks();
        assert!(app.state.detail.is_none());
        assert_eq!(app.state.route, Route::List);
    }

    #[test]
    fn start_path_opens_detail_route() {
        let mut app = app_starting_at("/brewery/3");
        assert_eq!(app.state.route, Route::detail("3"));

        settle(&mut app);
        assert_eq!(app.state.dashboard.status(), &LoadStatus::Loaded);
        match app.state.detail.as_ref().map(DetailState::status) {
            Some(DetailStatus::Loaded(record)) => assert_eq!(record.display_name(), "Hop House"),
            other => panic!("expected loaded detail, got {:?}", other),
        }
    }

    #[test]
    fn unknown_start_path_falls_back_to_list() {
        let mut app = app_starting_at("/breweries/3/extra");
        assert_eq!(app.state.route, Route::List);
        assert!(app.state.detail.is_none());

        settle(&mut app);
        assert_eq!(app.state.dashboard.summary(10).total, 3);
    }

    #[test]
    fn navigating_by_path_matches_ui_actions() {
        let mut app = app_with(Arc::new(StubApi::default()));
        settle(&mut app);

        app.navigate_to_path("/brewery/1");
        assert_eq!(app.state.route.path(), "/brewery/1");
        assert!(app.state.detail.as_ref().is_some_and(DetailState::is_loading));

        app.navigate_to_path("/");
        assert_eq!(app.state.route, Route::List);
        assert!(app.state.detail.is_none());
        assert!(!app.is_busy());
    }
}
