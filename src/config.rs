use std::time::Duration;

// ---------------------------------------------------------------------------
// Compile-time settings
// ---------------------------------------------------------------------------

/// Published catalogue spreadsheet.
pub const CATALOG_URL: &str = "https://raw.githubusercontent.com/brnftn/aidan/c2244f21864d428ae8d03cb6e758a1631eecb420/ESTOQUE%20AIDAN%20(dash)%20-%20BASE.csv";

/// Upper bound for the whole catalogue download.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of equal-width bins in the price histogram.
pub const PRICE_BINS: usize = 10;

/// The only payment method the shop accepts.
pub const PAYMENT_METHOD: &str = "Pix";

pub const WINDOW_TITLE: &str = "@memoraidan";
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 860.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [720.0, 480.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_carries_the_shop_handle() {
        assert_eq!(WINDOW_TITLE, "@memoraidan");
    }
}
