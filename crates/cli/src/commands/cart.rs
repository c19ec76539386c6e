//! Cart commands.
//!
//! Against a server, each command logs in with the given email first so the
//! cart calls ride an authenticated session. Offline, the fixture cart
//! answers without authentication (and reads back empty, like the
//! development placeholder it is).
//!
//! # Usage
//!
//! ```bash
//! ob-cli cart add -e alice@x.com -p 1 -q 2
//! ob-cli cart update -e alice@x.com -p 1 -q 5
//! ob-cli cart show -e alice@x.com
//! ```

use openbasket_app::{AuthViewModel, CartViewModel};
use openbasket_core::model::Cart;
use openbasket_core::types::ProductId;

use super::{BackendChoice, CliError, ensure_ok};

/// Show the cart.
pub async fn show(backend: &BackendChoice, email: &str) -> Result<(), CliError> {
    let vm = signed_in_cart(backend, email).await?;
    vm.refresh().await;
    finish(&vm)
}

/// Add units of a product.
pub async fn add(
    backend: &BackendChoice,
    email: &str,
    product: i32,
    quantity: u32,
) -> Result<(), CliError> {
    let vm = signed_in_cart(backend, email).await?;
    vm.add(ProductId::new(product), quantity).await;
    finish(&vm)
}

/// Replace a line's quantity.
pub async fn update(
    backend: &BackendChoice,
    email: &str,
    product: i32,
    quantity: u32,
) -> Result<(), CliError> {
    let vm = signed_in_cart(backend, email).await?;
    vm.update_quantity(ProductId::new(product), quantity).await;
    finish(&vm)
}

/// Remove a line.
pub async fn remove(backend: &BackendChoice, email: &str, product: i32) -> Result<(), CliError> {
    let vm = signed_in_cart(backend, email).await?;
    vm.remove(ProductId::new(product)).await;
    finish(&vm)
}

/// Empty the cart.
pub async fn clear(backend: &BackendChoice, email: &str) -> Result<(), CliError> {
    let vm = signed_in_cart(backend, email).await?;
    vm.clear().await;
    finish(&vm)
}

/// Build a cart view-model, logging in first when a server is involved.
async fn signed_in_cart(backend: &BackendChoice, email: &str) -> Result<CartViewModel, CliError> {
    if let BackendChoice::Remote(_) = backend {
        let auth = AuthViewModel::new(backend.users());
        auth.login(email).await;
        if auth.user().get().is_none() {
            ensure_ok(auth.error().get())?;
        }
        tracing::debug!(email, "logged in for cart operation");
    }
    Ok(CartViewModel::new(backend.cart()))
}

/// Print the published cart, or fail with the published error.
fn finish(vm: &CartViewModel) -> Result<(), CliError> {
    ensure_ok(vm.error().get())?;
    print_cart(&vm.cart().get());
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("cart is empty");
        return;
    }

    for item in cart.items() {
        println!(
            "#{} {} x{} @ {} = {}",
            item.product.id,
            item.product.name,
            item.quantity(),
            item.product.price,
            item.subtotal(),
        );
    }
    println!(
        "total: {} ({} items)",
        cart.total(),
        cart.total_quantity()
    );
}
