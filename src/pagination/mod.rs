mod iterator;
mod urls;

pub use iterator::{IteratorView, PAGE_SIZE, Reconciled, Step, UserIterator};
pub use urls::build_url;
