mod login;
pub use login::Login;

mod expenses;
pub use expenses::UserExpenses;
