pub mod business;
pub mod customer;
pub mod login;
pub mod myfin;
pub mod products_hub;

/// Top level pages of the portal application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Products,
    MyFin,
}

impl Page {
    /// Absolute path of the page, usable for navigation and redirects
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Products => "/products",
            Self::MyFin => "/myfin",
        }
    }

    /// Route segment of the page relative to its parent route
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Login => "login",
            Self::Products => "products",
            Self::MyFin => "myfin",
        }
    }
}
