//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use chrono::Local;

use crate::config::settings::Settings;
use crate::display::messages;
use crate::error::BudgetError;
use crate::models::{Transaction, DATE_FORMAT};
use crate::services::BudgetStore;
use crate::storage::KeyValueStore;

use super::widgets::{Notification, NotificationQueue, NotificationType, TextInput};

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Income,
    #[default]
    Category,
    Amount,
    Date,
    Transactions,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Income,
        Focus::Category,
        Focus::Amount,
        Focus::Date,
        Focus::Transactions,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// The next focus target in tab order
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// The previous focus target in tab order
    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Main application state
pub struct App<S: KeyValueStore> {
    /// The budget being edited
    pub store: BudgetStore<S>,

    /// Application settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which input or panel has focus
    pub focus: Focus,

    pub income_input: TextInput,
    pub category_input: TextInput,
    pub amount_input: TextInput,
    pub date_input: TextInput,

    /// Selected row in the transaction table
    pub selected_transaction_index: usize,

    /// Messages on the notification line
    pub notifications: NotificationQueue,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new App instance
    pub fn new(store: BudgetStore<S>, settings: Settings) -> Self {
        let today = Local::now().date_naive().format(DATE_FORMAT).to_string();

        let mut app = Self {
            store,
            settings,
            should_quit: false,
            focus: Focus::default(),
            income_input: TextInput::new().label("Income").placeholder("0.00"),
            category_input: TextInput::new().label("Category").placeholder("e.g. Food"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            date_input: TextInput::new().label("Date").content(today),
            selected_transaction_index: 0,
            notifications: NotificationQueue::new(),
        };
        app.sync_focus();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Move focus to `focus`
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.sync_focus();
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    fn sync_focus(&mut self) {
        self.income_input.focused = self.focus == Focus::Income;
        self.category_input.focused = self.focus == Focus::Category;
        self.amount_input.focused = self.focus == Focus::Amount;
        self.date_input.focused = self.focus == Focus::Date;
    }

    /// The text input that has focus, if focus is on one
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Income => Some(&mut self.income_input),
            Focus::Category => Some(&mut self.category_input),
            Focus::Amount => Some(&mut self.amount_input),
            Focus::Date => Some(&mut self.date_input),
            Focus::Transactions => None,
        }
    }

    /// Show a message on the notification line
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationType) {
        let duration = self.settings.notification_duration();
        self.notifications
            .push(Notification::new(message, kind, duration));
    }

    /// Periodic update: hide expired notifications
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Set income from the income field
    pub fn submit_income(&mut self) {
        match self.store.set_income_from_input(self.income_input.value()) {
            Ok(income) => {
                self.income_input.clear();
                let message = messages::income_set(income, &self.settings.currency_symbol);
                self.notify(message, NotificationType::Success);
                self.warn_if_over_budget();
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Add an expense from the category, amount and date fields
    pub fn submit_transaction(&mut self) {
        let fields = [
            self.category_input.value(),
            self.amount_input.value(),
            self.date_input.value(),
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            self.notify(messages::MISSING_FIELDS, NotificationType::Warning);
            return;
        }

        let result = self.store.add_transaction_from_input(
            self.category_input.value(),
            self.amount_input.value(),
            self.date_input.value(),
        );

        match result {
            Ok(txn) => {
                self.category_input.clear();
                self.amount_input.clear();
                self.set_focus(Focus::Category);
                self.selected_transaction_index = self.store.transactions().len() - 1;

                let message = messages::expense_added(txn.amount, &self.settings.currency_symbol);
                self.notify(message, NotificationType::Success);
                self.warn_if_over_budget();
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Delete the selected transaction
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_transaction().map(|t| t.id) else {
            return;
        };

        match self.store.delete_transaction(id) {
            Ok(removed) => {
                let message =
                    messages::expense_deleted(removed.amount, &self.settings.currency_symbol);
                self.notify(message, NotificationType::Success);
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => self.report_error(e),
        }

        self.clamp_selection();
    }

    /// The transaction under the table cursor
    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.store
            .transactions()
            .get(self.selected_transaction_index)
    }

    /// Move selection up in the transaction table
    pub fn move_up(&mut self) {
        self.selected_transaction_index = self.selected_transaction_index.saturating_sub(1);
    }

    /// Move selection down in the transaction table
    pub fn move_down(&mut self) {
        let max = self.store.transactions().len();
        if self.selected_transaction_index < max.saturating_sub(1) {
            self.selected_transaction_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.store.transactions().len();
        self.selected_transaction_index = self.selected_transaction_index.min(len.saturating_sub(1));
    }

    fn warn_if_over_budget(&mut self) {
        if self.store.is_over_budget() {
            self.notify(messages::OVER_BUDGET, NotificationType::Warning);
        }
    }

    fn report_error(&mut self, error: BudgetError) {
        let kind = if error.is_validation() {
            NotificationType::Warning
        } else {
            NotificationType::Error
        };
        self.notify(error.to_string(), kind);
    }
}
