use enum_iterator::all;
use enum_iterator::cardinality;
use enum_iterator::Sequence;
use strum_macros::Display;

use crate::error::CatalogGenError;
use crate::error::Result;

pub const CATEGORIES_COUNT: usize = 20;

/// Product categories in catalog order. The position of a variant is the
/// round-robin slot used when ids are assigned to categories.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, Sequence)]
pub enum Category {
    #[strum(serialize = "Electronics")]
    Electronics,
    #[strum(serialize = "Computers & Accessories")]
    ComputersAccessories,
    #[strum(serialize = "Smart Home")]
    SmartHome,
    #[strum(serialize = "Home & Kitchen")]
    HomeKitchen,
    #[strum(serialize = "Furniture")]
    Furniture,
    #[strum(serialize = "Tools & Home Improvement")]
    ToolsHomeImprovement,
    #[strum(serialize = "Sports & Outdoors")]
    SportsOutdoors,
    #[strum(serialize = "Clothing")]
    Clothing,
    #[strum(serialize = "Shoes")]
    Shoes,
    #[strum(serialize = "Beauty & Personal Care")]
    BeautyPersonalCare,
    #[strum(serialize = "Health & Household")]
    HealthHousehold,
    #[strum(serialize = "Baby")]
    Baby,
    #[strum(serialize = "Pet Supplies")]
    PetSupplies,
    #[strum(serialize = "Toys & Games")]
    ToysGames,
    #[strum(serialize = "Books")]
    Books,
    #[strum(serialize = "Office Products")]
    OfficeProducts,
    #[strum(serialize = "Video Games")]
    VideoGames,
    #[strum(serialize = "Automotive")]
    Automotive,
    #[strum(serialize = "Industrial & Scientific")]
    IndustrialScientific,
    #[strum(serialize = "Arts, Crafts & Sewing")]
    ArtsCraftsSewing,
}

impl Category {
    /// Base product phrases a title is built around.
    pub fn products(&self) -> &'static [&'static str] {
        match self {
            Category::Electronics => &[
                "Wireless Bluetooth Earbuds",
                "Noise Cancelling Headphones",
                "Portable Power Bank 20000mAh",
                "USB-C Fast Charger 65W",
                "4K Streaming Stick",
                "Smart Speaker with Alexa",
                "1080p USB Webcam",
                "Mechanical Gaming Keyboard",
                "Ergonomic Wireless Mouse",
                "27-inch 4K Monitor",
                "Wi-Fi 6 Router",
                "External SSD 1TB",
            ],
            Category::ComputersAccessories => &[
                "Laptop Stand Adjustable Aluminum",
                "USB-C Hub Multiport Adapter",
                "HDMI Cable 6ft 4K",
                "Bluetooth Keyboard for Tablet",
                "Gaming Mouse Pad Extended",
                "Webcam Privacy Cover (Pack of 3)",
                "Portable Laptop Charger",
                "DisplayPort Cable 8K",
                "NVMe SSD Enclosure USB-C",
                "Ethernet Adapter USB 3.0",
            ],
            Category::SmartHome => &[
                "Smart Plug Mini (4 Pack)",
                "Smart LED Light Bulb Color Changing",
                "Video Doorbell Camera",
                "Indoor Security Camera 1080p",
                "Smart Thermostat",
                "Smart Light Switch",
                "Robot Vacuum Cleaner",
                "Smart Smoke Detector",
                "Smart Motion Sensor",
                "Smart Door Lock Keyless Entry",
            ],
            Category::HomeKitchen => &[
                "Stainless Steel Water Bottle 32oz",
                "Nonstick Frying Pan 12-inch",
                "Air Fryer 6 Quart",
                "Electric Kettle Temperature Control",
                "Memory Foam Pillow",
                "Vacuum Storage Bags (10 Pack)",
                "Kitchen Knife Set with Block",
                "Dish Drying Rack",
                "Bamboo Cutting Board Set",
                "LED Desk Lamp Dimmable",
            ],
            Category::Furniture => &[
                "Ergonomic Office Chair with Lumbar Support",
                "Standing Desk Converter",
                "Bookshelf 5-Tier Industrial",
                "Storage Ottoman Bench",
                "Side Table with Charging Station",
                "Adjustable Bar Stools Set of 2",
                "Computer Desk with Shelves",
                "Accent Chair Modern",
            ],
            Category::ToolsHomeImprovement => &[
                "Cordless Drill Driver Kit",
                "Digital Laser Measuring Tool",
                "Socket Wrench Set 108-Piece",
                "Utility Knife Retractable",
                "Heavy Duty Extension Cord 25ft",
                "LED Work Light Rechargeable",
                "Stud Finder with Deep Scan",
                "Smart Tape Measure",
                "Screwdriver Set Magnetic",
            ],
            Category::SportsOutdoors => &[
                "Yoga Mat Non-Slip",
                "Adjustable Dumbbells Pair",
                "Resistance Bands Set",
                "Insulated Water Bottle",
                "Camping Lantern LED",
                "Hiking Backpack 40L",
                "Trekking Poles Collapsible",
                "Fitness Tracker Watch",
                "Inflatable Sleeping Pad",
                "Bike Phone Mount",
            ],
            Category::Clothing => &[
                "Men's Performance T-Shirt",
                "Women's High-Waisted Leggings",
                "Unisex Hoodie Fleece",
                "Men's Slim Fit Jeans",
                "Women's Summer Dress",
                "Athletic Socks Cushioned (6 Pack)",
                "Winter Beanie Knit",
                "Rain Jacket Lightweight",
            ],
            Category::Shoes => &[
                "Men's Running Shoes Breathable",
                "Women's Walking Shoes",
                "Slip-On Sneakers",
                "Hiking Boots Waterproof",
                "Casual Loafers",
                "Training Shoes Lightweight",
            ],
            Category::BeautyPersonalCare => &[
                "Electric Toothbrush Rechargeable",
                "Facial Cleanser Gentle",
                "Vitamin C Serum for Face",
                "Hair Dryer Ionic",
                "Beard Trimmer Kit",
                "Sunscreen SPF 50",
                "Moisturizing Body Lotion",
                "Makeup Brush Set",
            ],
            Category::HealthHousehold => &[
                "Digital Thermometer",
                "Blood Pressure Monitor",
                "First Aid Kit 200 Piece",
                "Hand Sanitizer Gel",
                "Air Purifier HEPA",
                "Laundry Detergent Pods",
                "Disinfecting Wipes",
                "Pain Relief Patches",
            ],
            Category::Baby => &[
                "Baby Diapers Size 3 (120 Count)",
                "Baby Wipes Sensitive (8 Pack)",
                "Convertible Car Seat",
                "Baby Monitor with Camera",
                "Portable Changing Pad",
                "Silicone Baby Bibs (3 Pack)",
            ],
            Category::PetSupplies => &[
                "Dry Dog Food 20lb",
                "Cat Litter Clumping 40lb",
                "Dog Training Pads (100 Count)",
                "Interactive Cat Toy",
                "Pet Grooming Brush",
                "Dog Leash Heavy Duty",
                "Cat Water Fountain",
            ],
            Category::ToysGames => &[
                "Building Blocks Set 500pcs",
                "Remote Control Car",
                "Puzzle 1000 Pieces",
                "Board Game Family Edition",
                "STEM Science Kit",
                "Dollhouse Furniture Set",
                "Kids Art Supplies Kit",
            ],
            Category::Books => &[
                "Hardcover Notebook Dotted",
                "Cookbook: Quick & Easy Meals",
                "Science Fiction Novel Bestseller",
                "Children's Picture Book",
                "Productivity Planner Weekly",
                "Language Learning Workbook",
            ],
            Category::OfficeProducts => &[
                "Ballpoint Pens Black (12 Pack)",
                "Wireless Label Maker",
                "Desk Organizer Mesh",
                "Sticky Notes Assorted Colors",
                "Printer Paper 500 Sheets",
                "Ergonomic Wrist Rest",
                "Whiteboard Markers Set",
            ],
            Category::VideoGames => &[
                "Gaming Controller Wireless",
                "Gaming Headset Surround Sound",
                "Mechanical Keyboard RGB",
                "Console Charging Dock",
                "Gaming Chair Mat",
            ],
            Category::Automotive => &[
                "Car Phone Mount Magnetic",
                "Jump Starter Battery Pack",
                "Tire Inflator Portable Air Compressor",
                "Windshield Sun Shade",
                "Car Vacuum Cleaner Handheld",
                "OBD2 Scanner Diagnostic Tool",
            ],
            Category::IndustrialScientific => &[
                "Safety Glasses Anti-Fog",
                "Nitrile Gloves Box of 100",
                "Digital Caliper Stainless Steel",
                "Labeling Tape Refill",
                "ESD Anti-Static Wrist Strap",
                "Infrared Thermometer Gun",
            ],
            Category::ArtsCraftsSewing => &[
                "Acrylic Paint Set 24 Colors",
                "Sketchbook Hardcover A4",
                "Hot Glue Gun Kit",
                "Knitting Needles Set",
                "Craft Scissors Titanium",
                "Sewing Thread Set 60 Spools",
            ],
        }
    }
}

/// Returns the categories in round-robin order, checking the table is intact.
pub fn categories() -> Result<Vec<Category>> {
    let categories = all::<Category>().collect::<Vec<_>>();
    if categories.len() != CATEGORIES_COUNT || cardinality::<Category>() != CATEGORIES_COUNT {
        return Err(CatalogGenError::Internal(format!(
            "expected {CATEGORIES_COUNT} categories, got {}",
            categories.len()
        )));
    }

    Ok(categories)
}

/// Category of product `id` (1-based).
pub fn category_for_id(categories: &[Category], id: i64) -> Category {
    categories[((id - 1) as usize) % categories.len()]
}
