pub mod advanced_statistics;
pub mod fixture;
pub mod headings;
pub mod row_layout;
pub mod season_totals;
pub mod selections;

pub use advanced_statistics::*;
pub use fixture::*;
pub use headings::*;
pub use row_layout::*;
pub use season_totals::*;
pub use selections::*;
