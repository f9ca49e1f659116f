use serde::Serialize;

/// A user-facing message emitted by the cart. The original storefront
/// surfaced these as blocking alerts; here they travel over an explicit
/// channel the hosting UI subscribes to.
///
/// Increment emits no notification. Add, remove, clear and checkout do.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Notification {
    ItemAdded { name: String },
    ItemRemoved { name: String },
    CartCleared,
    EmptyCart,
    CheckoutCompleted,
}

impl Notification {
    /// Warnings get different styling than confirmations in the UI.
    pub fn is_warning(&self) -> bool {
        matches!(self, Notification::EmptyCart)
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::ItemAdded { name } => {
                write!(f, "{} has been added to your cart!", name)
            }
            Notification::ItemRemoved { name } => {
                write!(f, "{} has been removed from your cart.", name)
            }
            Notification::CartCleared => write!(f, "Your cart has been cleared."),
            Notification::EmptyCart => write!(f, "Your cart is empty! Add something first."),
            Notification::CheckoutCompleted => write!(f, "Thank you for your purchase!"),
        }
    }
}
