pub mod config;
pub mod controls;
pub mod dispatch;
pub mod error;
pub mod state;
pub mod tree;
pub mod view;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        pub mod dom;
    }
}

pub use config::PaginationConfig;
pub use controls::{Control, Direction, PageControls};
pub use dispatch::{ClickDispatcher, NavTarget};
pub use error::{ConfigError, NavigateError, PageError};
pub use state::PageState;
pub use view::PaginationView;
