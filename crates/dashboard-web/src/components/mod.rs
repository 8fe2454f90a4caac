mod bar_chart;
mod card;
mod range_filter;
mod style;
mod summary_cards;
mod theme_switcher;

pub use bar_chart::BarChart;
pub use card::Card;
pub use range_filter::RangeFilter;
pub use style::themed;
pub use summary_cards::SummaryCards;
pub use theme_switcher::{ThemeSwitcher, preferred_theme};
