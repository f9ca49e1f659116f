pub mod item;
pub mod notification;
pub mod product;
pub mod view;

pub use item::*;
pub use notification::*;
pub use product::*;
pub use view::*;
