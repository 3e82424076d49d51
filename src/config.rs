use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose widget lifecycle logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Id of the pricing section, target of every "buy now" scroll.
pub const PRICING_ANCHOR: &str = "pricing";

pub const COUNTDOWN_SECONDS: u32 = 15 * 60;

pub const CUSTOMER_COUNT: u64 = 10_000;
pub const CUSTOMER_COUNT_DURATION_MS: u32 = 3_000;

pub const TOAST_INITIAL_DELAY_MS: u32 = 5_000;
pub const TOAST_DISPLAY_MS: u32 = 5_000;
pub const TOAST_PERIOD_MS: u32 = 20_000;

pub const TOAST_NAMES: &[&str] = &[
    "Juliana", "Mariana", "Carla", "Beatriz", "Fernanda",
    "Patrícia", "Aline", "Camila", "Débora", "Erika",
];

pub const TOAST_CITIES: &[&str] = &[
    "São Paulo", "Rio de Janeiro", "Belo Horizonte", "Curitiba",
    "Porto Alegre", "Salvador", "Fortaleza", "Brasília",
];

/// External checkout pages. Opaque to the page, we only link to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Checkout {
    /// Essential plan only, reached by declining the upsell.
    Essential,
    /// Complete pack at the upsell price.
    UpsellComplete,
    /// Complete pack from the featured pricing card.
    Complete,
}

impl Checkout {
    pub fn url(self) -> &'static str {
        match self {
            Checkout::Essential => "https://go.tribopay.com.br/npr6yerlcl",
            Checkout::UpsellComplete => "https://go.tribopay.com.br/iaf95",
            Checkout::Complete => "https://go.tribopay.com.br/jauv3ds3cw",
        }
    }
}
