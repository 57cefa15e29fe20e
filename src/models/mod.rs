pub mod pageview;

pub use pageview::Pageview;
