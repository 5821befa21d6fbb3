//! Component Category
//!
//! The fixed set of PC component kinds a build slot can hold. Serialized
//! as the lowercase identifier (`"cpu"`, `"vga"`, ...), which is also the
//! key format of a build's components map.

use serde::{Deserialize, Serialize};

/// PC component kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Vga,
    Mainboard,
    Psu,
    Cooler,
    Ram,
    Case,
    Ssd,
    Hdd,
    Monitor,
    Fan,
    Mouse,
    Keyboard,
    Headset,
}

impl Category {
    /// All categories in build-configurator display order
    pub const ALL: [Category; 14] = [
        Category::Cpu,
        Category::Vga,
        Category::Mainboard,
        Category::Psu,
        Category::Cooler,
        Category::Ram,
        Category::Case,
        Category::Ssd,
        Category::Hdd,
        Category::Monitor,
        Category::Fan,
        Category::Mouse,
        Category::Keyboard,
        Category::Headset,
    ];

    /// Lowercase identifier used on the wire and as a map key
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Vga => "vga",
            Category::Mainboard => "mainboard",
            Category::Psu => "psu",
            Category::Cooler => "cooler",
            Category::Ram => "ram",
            Category::Case => "case",
            Category::Ssd => "ssd",
            Category::Hdd => "hdd",
            Category::Monitor => "monitor",
            Category::Fan => "fan",
            Category::Mouse => "mouse",
            Category::Keyboard => "keyboard",
            Category::Headset => "headset",
        }
    }

    /// Human label for selection UIs
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Vga => "VGA - Graphics Card",
            Category::Mainboard => "Mainboard",
            Category::Psu => "PSU - Power Supply",
            Category::Cooler => "CPU Cooler",
            Category::Ram => "RAM",
            Category::Case => "Case",
            Category::Ssd => "SSD",
            Category::Hdd => "HDD",
            Category::Monitor => "Monitor",
            Category::Fan => "Case Fan",
            Category::Mouse => "Mouse",
            Category::Keyboard => "Keyboard",
            Category::Headset => "Headset",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
