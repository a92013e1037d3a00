//! ビューモジュール

pub mod results_view;
pub mod session_loader;

pub use results_view::{ResultsContext, ResultsView};
pub use session_loader::SessionLoader;
