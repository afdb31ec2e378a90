pub mod browse;
pub mod lookup;

pub use browse::BrowseService;
pub use lookup::LookupService;
