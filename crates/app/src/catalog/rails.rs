//! Home page product rails.

/// One horizontal product rail on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeRail {
    /// Category slug sent to the backend
    pub category: &'static str,

    /// Heading shown above the rail
    pub heading: &'static str,
}

const fn rail(category: &'static str, heading: &'static str) -> HomeRail {
    HomeRail { category, heading }
}

/// Rails shown on the home page, top to bottom.
pub const HOME_RAILS: [HomeRail; 10] = [
    rail("Headphones", "Top's Headphones"),
    rail("watches", "Popular's Watches"),
    rail("mobiles", "New Arrivals in Mobiles"),
    rail("Mouse", "Mouse"),
    rail("televisions", "Must have Televisions"),
    rail("camera", "Latest Camera's"),
    rail("earphones", "Wired Earphones"),
    rail("speakers", "Bluetooth Speakers"),
    rail("refrigerator", "Refrigerator"),
    rail("Laptops", "Best Selling Laptops"),
];
