//! Shared UI crate for the quality dashboard. Logic, views and localization
//! live here; the `web` and `desktop` crates only launch it.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Brand, theme toggle and locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
