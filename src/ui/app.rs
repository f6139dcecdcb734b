use crate::configurator::{Action, Configurator};
use crate::error::SubmitError;
use crate::model::{CatalogItem, CategoryId, Flag};
use crate::submit::{
    dispatch, ContactDetails, ContactField, FieldError, PendingSubmission, SubmissionEndpoint,
    SubmissionOutcome, SubmissionRequest,
};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use std::sync::Arc;
use std::time::Duration;

/// How often the loop wakes while a submission is in flight.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Builder,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Categories,
    Options,
}

pub enum SubmitState {
    Editing,
    Sending(PendingSubmission),
    Sent,
    Failed(String),
}

pub struct App {
    pub configurator: Configurator,
    pub endpoint: Option<Arc<dyn SubmissionEndpoint>>,
    pub view: View,
    pub focus_panel: FocusPanel,
    pub selected_category: usize,
    pub selected_option: usize,
    pub contact: ContactDetails,
    pub contact_field: usize,
    pub field_errors: Vec<FieldError>,
    pub submit_state: SubmitState,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(configurator: Configurator) -> Self {
        Self {
            configurator,
            endpoint: None,
            view: View::Builder,
            focus_panel: FocusPanel::Categories,
            selected_category: 0,
            selected_option: 0,
            contact: ContactDetails::default(),
            contact_field: 0,
            field_errors: Vec::new(),
            submit_state: SubmitState::Editing,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Arc<dyn SubmissionEndpoint>) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
            self.poll_submission();
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Builder => super::dashboard::draw_builder(frame, self),
            View::Contact => super::dashboard::draw_contact(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        // Only block on input when nothing is running in the background.
        if matches!(self.submit_state, SubmitState::Sending(_)) && !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            self.handle_key(key.code);
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match self.view {
            View::Builder => self.handle_builder_keys(code),
            View::Contact => self.handle_contact_keys(code),
        }
    }

    fn handle_builder_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Left | KeyCode::Char('h') => self.focus_panel = FocusPanel::Categories,
            KeyCode::Right | KeyCode::Char('l') => self.focus_panel = FocusPanel::Options,
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Char('b') => self.flip_flag(Flag::Bed),
            KeyCode::Char('s') => self.flip_flag(Flag::Seats),
            KeyCode::Char('o') => {
                let owns = self.configurator.state().owns_van;
                self.configurator.apply(Action::SetOwnsVan(!owns));
            }
            KeyCode::Char('r') => {
                self.configurator.apply(Action::Reset);
                self.selected_category = 0;
                self.selected_option = 0;
                self.focus_panel = FocusPanel::Categories;
            }
            KeyCode::Char('e') => self.open_contact(),
            _ => {}
        }
    }

    fn handle_contact_keys(&mut self, code: KeyCode) {
        if matches!(self.submit_state, SubmitState::Sent) {
            if matches!(code, KeyCode::Esc | KeyCode::Enter) {
                self.close_contact();
            }
            return;
        }

        match code {
            KeyCode::Esc => self.close_contact(),
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.previous_field(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.contact.get_mut(self.current_field()).pop();
            }
            KeyCode::Char(c) => self.contact.get_mut(self.current_field()).push(c),
            _ => {}
        }
    }

    fn navigate_up(&mut self) {
        match self.focus_panel {
            FocusPanel::Categories => {
                if self.selected_category > 0 {
                    self.selected_category -= 1;
                    self.selected_option = 0;
                }
            }
            FocusPanel::Options => {
                self.selected_option = self.selected_option.saturating_sub(1);
            }
        }
    }

    fn navigate_down(&mut self) {
        match self.focus_panel {
            FocusPanel::Categories => {
                if self.selected_category < CategoryId::ALL.len() - 1 {
                    self.selected_category += 1;
                    self.selected_option = 0;
                }
            }
            FocusPanel::Options => {
                let count = self.visible_options().len();
                if self.selected_option < count.saturating_sub(1) {
                    self.selected_option += 1;
                }
            }
        }
    }

    fn activate(&mut self) {
        match self.focus_panel {
            FocusPanel::Categories => {
                if self.is_unlocked(self.selected_category()) {
                    self.focus_panel = FocusPanel::Options;
                }
            }
            FocusPanel::Options => {
                let id = match self.get_selected_option() {
                    Some(item) => item.id.clone(),
                    None => return,
                };
                self.configurator.select(&id);
            }
        }
    }

    fn flip_flag(&mut self, flag: Flag) {
        let current = self.configurator.state().flag(flag);
        self.configurator.apply(Action::SetFlag(flag, !current));
    }

    fn open_contact(&mut self) {
        self.view = View::Contact;
        self.contact_field = 0;
        self.field_errors.clear();
        self.submit_state = SubmitState::Editing;
    }

    /// Leaving the dialog drops any pending handle, so a late reply is ignored.
    fn close_contact(&mut self) {
        self.view = View::Builder;
        self.field_errors.clear();
        self.submit_state = SubmitState::Editing;
    }

    fn next_field(&mut self) {
        self.contact_field = (self.contact_field + 1) % ContactField::ALL.len();
    }

    fn previous_field(&mut self) {
        self.contact_field =
            (self.contact_field + ContactField::ALL.len() - 1) % ContactField::ALL.len();
    }

    fn submit(&mut self) {
        if matches!(self.submit_state, SubmitState::Sending(_)) {
            return;
        }

        if let Err(errors) = self.contact.validate() {
            self.field_errors = errors;
            return;
        }
        self.field_errors.clear();

        let endpoint = match &self.endpoint {
            Some(endpoint) => Arc::clone(endpoint),
            None => {
                self.submit_state = SubmitState::Failed(SubmitError::NotConfigured.to_string());
                return;
            }
        };

        let request = SubmissionRequest::new(self.contact.clone(), self.configurator.summary());
        self.submit_state = SubmitState::Sending(dispatch(endpoint, request));
    }

    pub fn poll_submission(&mut self) {
        let outcome = match &self.submit_state {
            SubmitState::Sending(pending) => pending.poll(),
            _ => None,
        };

        match outcome {
            Some(SubmissionOutcome::Sent) => {
                self.submit_state = SubmitState::Sent;
                self.contact = ContactDetails::default();
            }
            Some(SubmissionOutcome::Failed(message)) => {
                self.submit_state = SubmitState::Failed(message);
            }
            None => {}
        }
    }

    #[must_use]
    pub fn selected_category(&self) -> CategoryId {
        CategoryId::ALL[self.selected_category.min(CategoryId::ALL.len() - 1)]
    }

    #[must_use]
    pub fn is_unlocked(&self, category: CategoryId) -> bool {
        self.configurator.gate().is_unlocked(category)
    }

    #[must_use]
    pub fn current_field(&self) -> ContactField {
        ContactField::ALL[self.contact_field % ContactField::ALL.len()]
    }

    #[must_use]
    pub fn field_error(&self, field: ContactField) -> Option<&'static str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    /// Entries of the highlighted category. Models are narrowed to the
    /// chosen chassis once there is one.
    #[must_use]
    pub fn visible_options(&self) -> Vec<&CatalogItem> {
        let catalog = self.configurator.catalog();
        let category = self.selected_category();
        let items = catalog.options_in(category);

        match (category, self.configurator.state().chassis_id.as_deref()) {
            (CategoryId::Model, Some(chassis)) => {
                let fits = catalog.models_for_chassis(chassis);
                items
                    .into_iter()
                    .filter(|item| fits.iter().any(|m| m.id == item.id))
                    .collect()
            }
            _ => items,
        }
    }

    #[must_use]
    pub fn get_selected_option(&self) -> Option<&CatalogItem> {
        self.visible_options().get(self.selected_option).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{builtin_assets, builtin_catalog};
    use pretty_assertions::assert_eq;

    struct AlwaysSent;

    impl SubmissionEndpoint for AlwaysSent {
        fn submit(&self, _: &SubmissionRequest) -> std::result::Result<bool, SubmitError> {
            Ok(true)
        }
    }

    fn app() -> App {
        let configurator =
            Configurator::new(builtin_catalog().unwrap(), builtin_assets().unwrap());
        App::new(configurator)
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn locked_category_keeps_focus() {
        let mut app = app();
        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);

        assert_eq!(app.selected_category(), CategoryId::Model);
        assert_eq!(app.focus_panel, FocusPanel::Categories);
    }

    #[test]
    fn picks_chassis_then_narrowed_model() {
        let mut app = app();
        // Chassis panel, second entry (Sprinter 170).
        press(&mut app, &[KeyCode::Enter, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(
            app.configurator.state().chassis_id.as_deref(),
            Some("sprinter170")
        );

        press(&mut app, &[KeyCode::Left, KeyCode::Down, KeyCode::Enter]);
        let ids: Vec<&str> = app.visible_options().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["pedernales", "rio-grande"]);

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(
            app.configurator.state().model_id.as_deref(),
            Some("pedernales")
        );
    }

    #[test]
    fn flag_keys_flip_state() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('b'), KeyCode::Char('o')]);

        assert!(app.configurator.state().has_bed);
        assert!(app.configurator.state().owns_van);

        press(&mut app, &[KeyCode::Char('r')]);
        assert!(!app.configurator.state().owns_van);
    }

    #[test]
    fn invalid_contact_reports_fields() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('e'), KeyCode::Enter]);

        assert_eq!(app.view, View::Contact);
        assert_eq!(app.field_error(ContactField::Name), Some("Please enter your name"));
        assert!(matches!(app.submit_state, SubmitState::Editing));
    }

    #[test]
    fn typing_fills_current_field_and_tab_moves_on() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyCode::Char('e'),
                KeyCode::Char('S'),
                KeyCode::Char('x'),
                KeyCode::Backspace,
                KeyCode::Tab,
                KeyCode::Char('q'),
            ],
        );

        assert_eq!(app.contact.name, "S");
        assert_eq!(app.contact.email, "q");
        assert!(!app.should_quit);
    }

    #[test]
    fn missing_endpoint_fails_without_sending() {
        let mut app = app();
        app.contact = ContactDetails {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            phone: "555".to_string(),
            ..ContactDetails::default()
        };
        press(&mut app, &[KeyCode::Char('e'), KeyCode::Enter]);

        assert!(matches!(app.submit_state, SubmitState::Failed(_)));
    }

    #[test]
    fn successful_submission_clears_form() {
        let mut app = app().with_endpoint(Arc::new(AlwaysSent));
        app.contact = ContactDetails {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            phone: "555".to_string(),
            ..ContactDetails::default()
        };
        press(&mut app, &[KeyCode::Char('e'), KeyCode::Enter]);
        assert!(matches!(app.submit_state, SubmitState::Sending(_)));

        for _ in 0..200 {
            app.poll_submission();
            if !matches!(app.submit_state, SubmitState::Sending(_)) {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        assert!(matches!(app.submit_state, SubmitState::Sent));
        assert_eq!(app.contact, ContactDetails::default());
    }

    #[test]
    fn escape_stops_listening() {
        let mut app = app().with_endpoint(Arc::new(AlwaysSent));
        app.contact = ContactDetails {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            phone: "555".to_string(),
            ..ContactDetails::default()
        };
        press(&mut app, &[KeyCode::Char('e'), KeyCode::Enter, KeyCode::Esc]);

        assert_eq!(app.view, View::Builder);
        assert!(matches!(app.submit_state, SubmitState::Editing));
    }
}
