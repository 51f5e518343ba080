pub mod banner;
pub mod footer;
pub mod header;
pub mod results_panel;
pub mod search_form;
pub mod weather_search;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use banner::{Banner, BannerProps};
pub use footer::{Footer, FooterProps};
pub use header::{Header, HeaderProps};
pub use results_panel::{ResultsPanel, ResultsPanelProps};
pub use search_form::{SearchForm, SearchFormProps};
pub use weather_search::{APP_TITLE, FOOTER_MESSAGE, WeatherSearch, WeatherSearchProps};
