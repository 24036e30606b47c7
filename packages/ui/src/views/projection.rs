//! Store-to-props mapping for the expense list.

use store::{selectors, AppState, ErrorBag, Expense, ExpenseFilters, ExpenseId, UserId};

pub const ADD_LABEL: &str = "Add expense";
pub const UPDATE_LABEL: &str = "Update expense";

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseRowView {
    pub expense: Expense,
    pub edit: bool,
}

/// Everything the list renders, derived from [`AppState`] for one user.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpensesView {
    pub rows: Vec<ExpenseRowView>,
    pub editing_focus: Option<ExpenseId>,
    /// The focused record, when it is on the loaded page.
    pub editing: Option<Expense>,
    pub loading: bool,
    pub current_page: u32,
    pub total_pages: u32,
    pub filters: ExpenseFilters,
    pub general_errors: Vec<String>,
    pub field_errors: ErrorBag,
    pub save_generation: u32,
}

impl ExpensesView {
    pub fn project(state: &AppState, user_id: &UserId) -> Self {
        let focus = selectors::editing_focus(state, user_id).cloned();
        let rows = selectors::expenses_for(state, user_id)
            .iter()
            .map(|expense| ExpenseRowView {
                edit: focus.as_ref() == Some(&expense.id),
                expense: expense.clone(),
            })
            .collect();
        let errors = selectors::errors(state);

        Self {
            rows,
            editing: selectors::editing_expense(state, user_id).cloned(),
            editing_focus: focus,
            loading: selectors::is_loading(state),
            current_page: selectors::current_page(state),
            total_pages: selectors::total_pages(state, user_id),
            filters: selectors::filters(state).clone(),
            general_errors: errors.general().to_vec(),
            field_errors: errors.fields(),
            save_generation: selectors::save_generation(state),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether to offer going back to create-mode.
    pub fn show_new(&self) -> bool {
        !self.is_empty() && self.editing_focus.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing_focus.is_some() {
            UPDATE_LABEL
        } else {
            ADD_LABEL
        }
    }

    /// Key for the edit form; changes with the focus and after every save,
    /// so the form re-seeds instead of keeping submitted text.
    pub fn form_key(&self) -> String {
        match &self.editing_focus {
            Some(id) => format!("edit-{id}-{}", self.save_generation),
            None => format!("new-{}", self.save_generation),
        }
    }
}
