mod projection;
pub use projection::{ExpenseRowView, ExpensesView, ADD_LABEL, UPDATE_LABEL};

mod expenses;
pub use expenses::{start_new, Expenses, ExpensesList};
