//! Catalog commands.
//!
//! # Usage
//!
//! ```bash
//! ob-cli products
//! ob-cli products --offline
//! ```

use openbasket_app::ProductViewModel;

use super::{BackendChoice, CliError, ensure_ok};

/// List the catalog.
#[allow(clippy::print_stdout)]
pub async fn list(backend: &BackendChoice) -> Result<(), CliError> {
    let vm = ProductViewModel::new(backend.products());
    vm.refresh().await;
    ensure_ok(vm.error().get())?;

    let products = vm.products().get();
    if products.is_empty() {
        println!("catalog is empty");
        return Ok(());
    }

    for product in &products {
        println!(
            "#{} {} - {} [{}] stock {} - {}",
            product.id, product.name, product.price, product.category, product.stock,
            product.description,
        );
    }
    Ok(())
}
