use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::models::item::{AddItemRequest, LineItem};
use crate::models::notification::Notification;
use crate::models::view::CartView;
use crate::utils::validation::{parse_price, PriceParseError};

#[derive(Error, Debug)]
pub enum CartServiceError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceParseError),
}

/// Channel for user-facing cart messages. The hosting UI subscribes by
/// injecting an implementation; the cart never talks to the screen itself.
pub trait CartNotifier {
    fn notify(&self, notification: &Notification);
}

/// The display surface the cart renders into. `render` replaces the whole
/// listing each call; `dismiss` asks the host to close the cart view after
/// a completed checkout.
pub trait CartDisplay {
    fn render(&self, view: &CartView);
    fn dismiss(&self);
}

/// The cart store: an ordered list of line items, one per distinct product
/// name, with insertion order as display order. Every mutation notifies
/// (where the operation calls for it) and then re-renders, synchronously.
pub struct CartService {
    items: Vec<LineItem>,
    notifier: Arc<dyn CartNotifier>,
    display: Arc<dyn CartDisplay>,
}

impl CartService {
    pub fn new(notifier: Arc<dyn CartNotifier>, display: Arc<dyn CartDisplay>) -> Self {
        Self {
            items: Vec::new(),
            notifier,
            display,
        }
    }

    /// Add a product to the cart. If a line with this name already exists
    /// its quantity goes up by one; otherwise a new line is appended with
    /// the price parsed from the displayed price text.
    ///
    /// A malformed price rejects the whole add and leaves the cart
    /// untouched.
    pub fn add_item(&mut self, request: AddItemRequest) -> Result<(), CartServiceError> {
        request
            .validate()
            .map_err(|e| CartServiceError::ValidationError {
                message: format!("Add to cart validation failed: {}", e),
            })?;

        let unit_price = parse_price(&request.price_text)?;
        let name = request.name;

        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                item.quantity += 1;
                debug!(
                    "Quantity for '{}' increased to {}",
                    item.name, item.quantity
                );
            }
            None => {
                info!("Adding '{}' to cart at {}", name, unit_price);
                self.items.push(LineItem::new(name.clone(), unit_price));
            }
        }

        self.notifier.notify(&Notification::ItemAdded { name });
        self.render();
        Ok(())
    }

    /// Remove the line at `index` and notify with its name.
    ///
    /// Panics if `index` is out of range: indices come from the latest
    /// render, so an out-of-range value is a caller bug, not user input.
    pub fn remove_item(&mut self, index: usize) {
        let item = self.items.remove(index);
        info!("Removed '{}' from cart", item.name);

        self.notifier
            .notify(&Notification::ItemRemoved { name: item.name });
        self.render();
    }

    /// Raise the quantity of the line at `index` by one. Emits no
    /// notification, matching the storefront behavior.
    ///
    /// Panics if `index` is out of range.
    pub fn increment(&mut self, index: usize) {
        let item = &mut self.items[index];
        item.quantity += 1;
        debug!("Quantity for '{}' increased to {}", item.name, item.quantity);

        self.render();
    }

    /// Lower the quantity of the line at `index` by one. At quantity 1 this
    /// is exactly `remove_item`, removal notification included; a line never
    /// stays in the cart at quantity 0.
    ///
    /// Panics if `index` is out of range.
    pub fn decrement(&mut self, index: usize) {
        if self.items[index].quantity == 1 {
            self.remove_item(index);
            return;
        }

        let item = &mut self.items[index];
        item.quantity -= 1;
        debug!("Quantity for '{}' decreased to {}", item.name, item.quantity);

        self.render();
    }

    /// Empty the cart. On an already-empty cart only the empty-cart warning
    /// goes out and nothing else happens.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            warn!("Clear requested on an empty cart");
            self.notifier.notify(&Notification::EmptyCart);
            return;
        }

        info!("Clearing cart ({} lines)", self.items.len());
        self.items.clear();
        self.notifier.notify(&Notification::CartCleared);
        self.render();
    }

    /// Complete the purchase: confirm, empty the cart, re-render, then ask
    /// the host to dismiss the cart view. On an empty cart only the warning
    /// goes out; no dismiss signal is sent.
    pub fn checkout(&mut self) {
        if self.items.is_empty() {
            warn!("Checkout requested on an empty cart");
            self.notifier.notify(&Notification::EmptyCart);
            return;
        }

        info!("Checkout completed ({} lines)", self.items.len());
        self.notifier.notify(&Notification::CheckoutCompleted);
        self.items.clear();
        self.render();
        self.display.dismiss();
    }

    /// Project current state into the display list.
    pub fn view(&self) -> CartView {
        CartView::project(&self.items)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn render(&self) {
        self.display.render(&self.view());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Recording collaborators standing in for the hosting UI.
    #[derive(Default)]
    struct RecordingNotifier {
        notifications: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        fn all(&self) -> Vec<Notification> {
            self.notifications.lock().unwrap().clone()
        }
    }

    impl CartNotifier for RecordingNotifier {
        fn notify(&self, notification: &Notification) {
            self.notifications.lock().unwrap().push(notification.clone());
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        renders: Mutex<Vec<CartView>>,
        dismissed: Mutex<bool>,
    }

    impl RecordingDisplay {
        fn last_render(&self) -> Option<CartView> {
            self.renders.lock().unwrap().last().cloned()
        }

        fn render_count(&self) -> usize {
            self.renders.lock().unwrap().len()
        }

        fn was_dismissed(&self) -> bool {
            *self.dismissed.lock().unwrap()
        }
    }

    impl CartDisplay for RecordingDisplay {
        fn render(&self, view: &CartView) {
            self.renders.lock().unwrap().push(view.clone());
        }

        fn dismiss(&self) {
            *self.dismissed.lock().unwrap() = true;
        }
    }

    fn setup() -> (CartService, Arc<RecordingNotifier>, Arc<RecordingDisplay>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let display = Arc::new(RecordingDisplay::default());
        let service = CartService::new(notifier.clone(), display.clone());
        (service, notifier, display)
    }

    fn add(service: &mut CartService, name: &str, price_text: &str) {
        service
            .add_item(AddItemRequest::new(name, price_text))
            .unwrap();
    }

    #[test]
    fn adding_same_product_twice_merges_into_one_line() {
        let (mut service, _, _) = setup();

        add(&mut service, "Shoe A", "Rs. 1,000");
        add(&mut service, "Shoe A", "Rs. 1,000");

        assert_eq!(service.len(), 1);
        assert_eq!(service.items()[0].name, "Shoe A");
        assert_eq!(service.items()[0].unit_price, 1000.0);
        assert_eq!(service.items()[0].quantity, 2);
    }

    #[test]
    fn unit_price_is_captured_on_first_add() {
        let (mut service, _, _) = setup();

        add(&mut service, "Shoe A", "Rs. 1,000");
        // The displayed price changed between clicks; the line keeps the
        // price it was inserted at.
        add(&mut service, "Shoe A", "Rs. 9,999");

        assert_eq!(service.items()[0].unit_price, 1000.0);
        assert_eq!(service.items()[0].quantity, 2);
    }

    #[test]
    fn increment_then_decrement_returns_to_original_quantity() {
        let (mut service, _, _) = setup();

        add(&mut service, "Shoe A", "Rs. 1,000");
        service.increment(0);
        service.decrement(0);

        assert_eq!(service.len(), 1);
        assert_eq!(service.items()[0].quantity, 1);
    }

    #[test]
    fn decrement_at_quantity_one_removes_the_line() {
        let (mut service, notifier, _) = setup();

        add(&mut service, "Shoe A", "Rs. 1,000");
        service.decrement(0);

        assert!(service.is_empty());
        assert!(notifier.all().contains(&Notification::ItemRemoved {
            name: "Shoe A".to_string()
        }));
    }

    #[test]
    fn removal_shifts_remaining_lines() {
        let (mut service, _, _) = setup();

        add(&mut service, "A", "Rs. 500");
        add(&mut service, "B", "Rs. 1,500");
        service.remove_item(0);

        assert_eq!(service.len(), 1);
        assert_eq!(service.items()[0].name, "B");
        assert_eq!(service.items()[0].unit_price, 1500.0);
        assert_eq!(service.items()[0].quantity, 1);
        assert_eq!(service.view().lines[0].index, 0);
    }

    #[test]
    fn increment_emits_no_notification() {
        let (mut service, notifier, _) = setup();

        add(&mut service, "Shoe A", "Rs. 1,000");
        let before = notifier.all().len();
        service.increment(0);

        assert_eq!(notifier.all().len(), before);
        assert_eq!(service.items()[0].quantity, 2);
    }

    #[test]
    fn malformed_price_rejects_the_add_and_leaves_cart_untouched() {
        let (mut service, notifier, display) = setup();

        let result = service.add_item(AddItemRequest::new("Shoe A", "free!"));

        assert!(matches!(result, Err(CartServiceError::InvalidPrice(_))));
        assert!(service.is_empty());
        assert!(notifier.all().is_empty());
        assert_eq!(display.render_count(), 0);
    }

    #[test]
    fn blank_name_rejects_the_add() {
        let (mut service, _, _) = setup();

        let result = service.add_item(AddItemRequest::new("  ", "Rs. 1,000"));

        assert!(matches!(
            result,
            Err(CartServiceError::ValidationError { .. })
        ));
        assert!(service.is_empty());
    }

    #[test]
    fn clear_on_empty_cart_warns_and_does_nothing_else() {
        let (mut service, notifier, display) = setup();

        service.clear();

        assert!(service.is_empty());
        assert_eq!(notifier.all(), vec![Notification::EmptyCart]);
        assert_eq!(display.render_count(), 0);
    }

    #[test]
    fn clear_empties_a_populated_cart() {
        let (mut service, notifier, _) = setup();

        add(&mut service, "Shoe A", "Rs. 1,000");
        add(&mut service, "Shoe B", "Rs. 2,000");
        service.clear();

        assert!(service.is_empty());
        assert!(notifier.all().contains(&Notification::CartCleared));
    }

    #[test]
    fn checkout_on_empty_cart_warns_and_sends_no_dismiss() {
        let (mut service, notifier, display) = setup();

        service.checkout();

        assert!(service.is_empty());
        assert_eq!(notifier.all(), vec![Notification::EmptyCart]);
        assert!(!display.was_dismissed());
    }

    #[test]
    fn checkout_confirms_empties_and_dismisses() {
        let (mut service, notifier, display) = setup();

        add(&mut service, "Shoe A", "Rs. 1,000");
        service.checkout();

        assert!(service.is_empty());
        assert!(notifier.all().contains(&Notification::CheckoutCompleted));
        assert!(display.was_dismissed());
        // The empty cart was re-rendered before the dismiss.
        assert!(display.last_render().unwrap().is_empty());
    }

    #[test]
    fn every_mutation_rerenders_the_current_state() {
        let (mut service, _, display) = setup();

        add(&mut service, "Shoe A", "Rs. 1,000");
        assert_eq!(display.last_render().unwrap(), service.view());

        service.increment(0);
        assert_eq!(display.last_render().unwrap(), service.view());

        add(&mut service, "Shoe B", "Rs. 2,500");
        assert_eq!(display.last_render().unwrap(), service.view());

        service.decrement(0);
        assert_eq!(display.last_render().unwrap(), service.view());

        service.remove_item(0);
        assert_eq!(display.last_render().unwrap(), service.view());
        assert_eq!(display.render_count(), 5);
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_is_a_contract_violation() {
        let (mut service, _, _) = setup();
        service.remove_item(0);
    }
}
