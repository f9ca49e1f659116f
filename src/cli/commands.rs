use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Select};
use tracing::info;

use crate::{
    cli::args::Args,
    models::{
        item::AddItemRequest,
        notification::Notification,
        product::{default_catalog, load_catalog, Product},
        view::CartView,
    },
    services::{CartDisplay, CartNotifier, CartService, CartServiceError},
    utils::{
        config::Config,
        formatting::{format_cart_table, format_product_table},
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static CART: Emoji<'_, '_> = Emoji("🛒 ", "");

/// Terminal stand-in for the storefront's blocking alerts.
struct TerminalNotifier;

impl CartNotifier for TerminalNotifier {
    fn notify(&self, notification: &Notification) {
        if notification.is_warning() {
            println!("{} {}", WARNING, style(notification).yellow());
        } else {
            println!("{} {}", CHECKMARK, style(notification).green());
        }
    }
}

/// Terminal cart surface. Each render replaces the previous listing with a
/// fresh table; the dismiss signal closes the cart submenu.
struct TerminalDisplay {
    cart_open: AtomicBool,
}

impl TerminalDisplay {
    fn new() -> Self {
        Self {
            cart_open: AtomicBool::new(false),
        }
    }

    fn open(&self) {
        self.cart_open.store(true, Ordering::SeqCst);
    }

    fn is_open(&self) -> bool {
        self.cart_open.load(Ordering::SeqCst)
    }
}

impl CartDisplay for TerminalDisplay {
    fn render(&self, view: &CartView) {
        if view.is_empty() {
            println!("{} Your cart is empty", INFO);
        } else {
            println!("{}", format_cart_table(view));
        }
    }

    fn dismiss(&self) {
        self.cart_open.store(false, Ordering::SeqCst);
    }
}

pub struct CliApp {
    products: Vec<Product>,
    cart: CartService,
    display: Arc<TerminalDisplay>,
}

impl CliApp {
    pub fn new(config: &Config, args: &Args) -> Result<Self> {
        let catalog_path = args.catalog.clone().or_else(|| config.catalog_path.clone());

        let products = match catalog_path {
            Some(path) => load_catalog(Path::new(&path))
                .context("Failed to load the product catalog")?,
            None => default_catalog(),
        };
        info!("Catalog loaded with {} products", products.len());

        let notifier = Arc::new(TerminalNotifier);
        let display = Arc::new(TerminalDisplay::new());
        let cart = CartService::new(notifier, display.clone());

        Ok(Self {
            products,
            cart,
            display,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{} {}", CART, style("Storefront").bold().cyan());

        let theme = ColorfulTheme::default();
        loop {
            let choice = Select::with_theme(&theme)
                .with_prompt("What would you like to do?")
                .items(&[
                    "Browse products",
                    "View cart",
                    "Clear cart",
                    "Checkout",
                    "Quit",
                ])
                .default(0)
                .interact()?;

            match choice {
                0 => self.handle_browse(&theme)?,
                1 => self.handle_view_cart(&theme)?,
                2 => self.cart.clear(),
                3 => self.cart.checkout(),
                _ => break,
            }
        }

        println!("{} Thanks for visiting!", INFO);
        Ok(())
    }

    fn handle_browse(&mut self, theme: &ColorfulTheme) -> Result<()> {
        println!("{}", format_product_table(&self.products));

        let mut labels: Vec<String> = self
            .products
            .iter()
            .map(|p| format!("{} ({})", p.name, p.price))
            .collect();
        labels.push("Back".to_string());

        let choice = Select::with_theme(theme)
            .with_prompt("Add a product to your cart")
            .items(&labels)
            .default(0)
            .interact()?;

        if choice == self.products.len() {
            return Ok(());
        }

        let product = &self.products[choice];
        let request = AddItemRequest::new(&product.name, &product.price);

        match self.cart.add_item(request) {
            Ok(()) => {}
            Err(CartServiceError::InvalidPrice(e)) => {
                println!(
                    "{} This product cannot be added right now: {}",
                    CROSS,
                    style(&e).red()
                );
            }
            Err(e) => {
                println!("{} Failed to add product: {}", CROSS, style(&e).red());
            }
        }

        Ok(())
    }

    fn handle_view_cart(&mut self, theme: &ColorfulTheme) -> Result<()> {
        self.display.open();
        self.display.render(&self.cart.view());

        while self.display.is_open() && !self.cart.is_empty() {
            let mut labels: Vec<String> = self
                .cart
                .view()
                .lines
                .iter()
                .map(|line| format!("{} (x{})", line.name, line.quantity))
                .collect();
            labels.push("Back".to_string());

            let line = Select::with_theme(theme)
                .with_prompt("Pick a line item")
                .items(&labels)
                .default(0)
                .interact()?;

            if line == labels.len() - 1 {
                break;
            }

            let action = Select::with_theme(theme)
                .with_prompt("Action")
                .items(&["Increase quantity", "Decrease quantity", "Delete", "Back"])
                .default(0)
                .interact()?;

            match action {
                0 => self.cart.increment(line),
                1 => self.cart.decrement(line),
                2 => self.cart.remove_item(line),
                _ => {}
            }
        }

        Ok(())
    }
}
