pub mod ai;
pub mod chat;
pub mod content;
pub mod presentation;
pub mod router;
pub mod scrollspy;
pub mod storage;
pub mod theme;
pub mod types;
#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub mod ui;
#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub mod views;
