use rand::seq::SliceRandom;
use rand::Rng;

pub const BRANDS: [&str; 30] = [
    "Anker",
    "Samsung",
    "Sony",
    "Logitech",
    "Amazon Basics",
    "Apple",
    "HP",
    "Dell",
    "ASUS",
    "Lenovo",
    "Bose",
    "Philips",
    "Nike",
    "Adidas",
    "Under Armour",
    "Instant Pot",
    "Shark",
    "Dyson",
    "Fitbit",
    "Ring",
    "TP-Link",
    "Roku",
    "JBL",
    "Belkin",
    "Xiaomi",
    "Spigen",
    "Hydro Flask",
    "Brita",
    "KitchenAid",
    "LEGO",
];

pub const QUALIFIERS: [&str; 14] = [
    "New",
    "2026 Model",
    "Upgraded",
    "Premium",
    "Ultra",
    "Pro",
    "Compact",
    "Lightweight",
    "Heavy Duty",
    "High Performance",
    "Fast Charging",
    "Waterproof",
    "Wireless",
    "Rechargeable",
];

// empty entries make a suffix appear only part of the time
pub const BUNDLES: [&str; 7] = ["", "", "", " (2 Pack)", " (3 Pack)", " (4 Pack)", " Bundle"];

pub const COLORS: [&str; 8] = [
    "", "", "", " - Black", " - White", " - Blue", " - Gray", " - Red",
];

pub const SIZES: [&str; 13] = [
    "", "", "", "", " Small", " Medium", " Large", " XL", " 1TB", " 2TB", " 64GB", " 128GB",
    " 20000mAh",
];

const QUALIFIER_PROBABILITY: f64 = 0.75;

fn pick<R: Rng>(rng: &mut R, values: &'static [&'static str]) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}

/// Assembles a marketplace-style title around `base`, e.g.
/// `Anker Upgraded Wireless Bluetooth Earbuds - Black (2 Pack)`.
///
/// The draw order is brand, qualifier coin, qualifier, size, color, bundle.
/// Changing it changes every generated dataset.
pub fn make_title<R: Rng>(rng: &mut R, base: &str) -> String {
    let brand = pick(rng, &BRANDS);
    let qualifier = if rng.gen::<f64>() < QUALIFIER_PROBABILITY {
        pick(rng, &QUALIFIERS)
    } else {
        ""
    };
    let size = pick(rng, &SIZES);
    let color = pick(rng, &COLORS);
    let bundle = pick(rng, &BUNDLES);

    let head = format!("{base}{size}");
    let title = [brand, qualifier, head.as_str()]
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    normalize_whitespace(&format!("{title}{color}{bundle}"))
}

pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
