pub mod config;
pub mod csv;
pub mod dashboard;
pub mod format;
pub mod input;
pub mod platform;
pub mod quality;
pub mod readings;
pub mod series;
pub mod storage;
pub mod theme;
pub mod timing;
pub mod toast;
