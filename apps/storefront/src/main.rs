//! # Món Ngon Storefront Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration
//! 3. Create the storefront handle
//! 4. Run the console shell

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // The actual setup is in lib.rs for testability
    monngon_storefront::run().await;
}
