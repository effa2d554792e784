pub mod order;
pub mod pageable;
pub mod sort;

pub use order::{Direction, Order};
pub use pageable::{PageRequest, Pageable};
pub use sort::Sort;
