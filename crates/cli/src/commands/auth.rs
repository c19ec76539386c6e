//! Account commands.
//!
//! # Usage
//!
//! ```bash
//! ob-cli auth register -n Alice -e alice@x.com
//! ob-cli auth login -e admin@example.com
//! ```

use openbasket_app::AuthViewModel;
use openbasket_core::model::User;

use super::{BackendChoice, CliError, ensure_ok};

/// Register a new account and print the result.
pub async fn register(backend: &BackendChoice, name: &str, email: &str) -> Result<(), CliError> {
    let vm = AuthViewModel::new(backend.users());
    vm.register(name, email).await;

    match vm.user().get() {
        Some(user) => {
            print_user("registered", &user);
            Ok(())
        }
        None => ensure_ok(vm.error().get()),
    }
}

/// Log in and print the account.
pub async fn login(backend: &BackendChoice, email: &str) -> Result<(), CliError> {
    let vm = AuthViewModel::new(backend.users());
    vm.login(email).await;

    match vm.user().get() {
        Some(user) => {
            print_user("logged in", &user);
            Ok(())
        }
        None => ensure_ok(vm.error().get()),
    }
}

#[allow(clippy::print_stdout)]
fn print_user(verb: &str, user: &User) {
    let id = user
        .id
        .map_or_else(|| "unassigned".to_owned(), |id| id.to_string());
    let role = if user.is_admin { "admin" } else { "customer" };
    println!("{verb}: {} <{}> (id {id}, {role})", user.name, user.email);
}
