
#[cfg(debug_assertions)]
pub fn get_razorpay_key() -> &'static str {
    "rzp_test_demo"  // Test key while running locally
}

#[cfg(not(debug_assertions))]
pub fn get_razorpay_key() -> &'static str {
    match option_env!("RAZORPAY_KEY_ID") {
        Some(key) => key,
        None => "rzp_test_demo",
    }
}

pub const BUSINESS_NAME: &str = "Fingard Partners";
pub const THEME_COLOR: &str = "#002147";
pub const CURRENCY: &str = "INR";
pub const CURRENCY_SYMBOL: &str = "₹";

/// Flat GST rate applied on top of every service amount.
pub const GST_RATE: f64 = 0.18;

pub const LOGO_DATA_URI: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAiIGhlaWdodD0iNDAiIHZpZXdCb3g9IjAgMCA0MCA0MCIgZmlsbD0ibm9uZSIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj4KPHJlY3Qgd2lkdGg9IjQwIiBoZWlnaHQ9IjQwIiByeD0iOCIgZmlsbD0iIzAwMjE0NyIvPgo8dGV4dCB4PSIyMCIgeT0iMjciIGZvbnQtZmFtaWx5PSJQb3BwaW5zLCBzYW5zLXNlcmlmIiBmb250LXdlaWdodD0iNzAwIiBmb250LXNpemU9IjE2IiBmaWxsPSIjQzE5QTZCIiB0ZXh0LWFuY2hvcj0ibWlkZGxlIj5GUDwvdGV4dD4KPC9zdmc+";
