//! Catalog seed data
//!
//! The catalog is seeded once at process start; products are immutable
//! afterwards. Prices are minor-unit-free VND amounts.

use std::collections::BTreeMap;

use shared::models::{Category, ProductCreate, ProductSpecs};

use super::ProductStore;

/// Seed the catalog with the stock component lineup
pub fn seed_catalog(store: &ProductStore) {
    for product in seed_products() {
        store.create(product);
    }
    tracing::info!(products = store.len(), "Catalog seeded");
}

fn seed_products() -> Vec<ProductCreate> {
    let mut products = Vec::new();

    // CPUs
    products.push(ProductCreate {
        name: "Intel Core Ultra 7 265KF (up to 5.5GHz, 20 cores 20 threads, 30MB cache, 125W)"
            .into(),
        category: Category::Cpu,
        brand: "Intel".into(),
        price: 7_350_000,
        image: "https://images.unsplash.com/photo-1555617981-dac3880eac6e?auto=format&fit=crop&w=300&h=200".into(),
        description: Some(
            "Latest-generation Intel CPU, 20 cores 20 threads with a 5.5GHz boost clock".into(),
        ),
        specs: Some(ProductSpecs::Cpu {
            cores: 20,
            threads: 20,
            base_freq: "3.8GHz".into(),
            boost_freq: "5.5GHz".into(),
            cache: "30MB".into(),
            tdp: "125W".into(),
        }),
        socket: Some("lga1700".into()),
        wattage: Some(125),
        in_stock: None,
    });
    products.push(ProductCreate {
        name: "Intel Core i7 14700K (up to 5.6GHz, 20 cores 28 threads, 33MB cache, 125W)".into(),
        category: Category::Cpu,
        brand: "Intel".into(),
        price: 8_490_000,
        image: "https://images.unsplash.com/photo-1591488320449-011701bb6704?auto=format&fit=crop&w=300&h=200".into(),
        description: None,
        specs: Some(ProductSpecs::Cpu {
            cores: 20,
            threads: 28,
            base_freq: "3.4GHz".into(),
            boost_freq: "5.6GHz".into(),
            cache: "33MB".into(),
            tdp: "125W".into(),
        }),
        socket: Some("lga1700".into()),
        wattage: Some(125),
        in_stock: None,
    });
    products.push(ProductCreate {
        name: "Intel Core i5 13600K (up to 5.1GHz, 14 cores 20 threads, 24MB cache, 125W)".into(),
        category: Category::Cpu,
        brand: "Intel".into(),
        price: 6_450_000,
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?auto=format&fit=crop&w=300&h=200".into(),
        description: None,
        specs: Some(ProductSpecs::Cpu {
            cores: 14,
            threads: 20,
            base_freq: "3.5GHz".into(),
            boost_freq: "5.1GHz".into(),
            cache: "24MB".into(),
            tdp: "125W".into(),
        }),
        socket: Some("lga1700".into()),
        wattage: Some(125),
        in_stock: None,
    });
    products.push(ProductCreate {
        name: "AMD Ryzen 7 7700X (up to 5.4GHz, 8 cores 16 threads, 32MB cache, 105W)".into(),
        category: Category::Cpu,
        brand: "AMD".into(),
        price: 7_890_000,
        image: "https://images.unsplash.com/photo-1587202372775-e229f172b9d7?auto=format&fit=crop&w=300&h=200".into(),
        description: None,
        specs: Some(ProductSpecs::Cpu {
            cores: 8,
            threads: 16,
            base_freq: "4.5GHz".into(),
            boost_freq: "5.4GHz".into(),
            cache: "32MB".into(),
            tdp: "105W".into(),
        }),
        socket: Some("am5".into()),
        wattage: Some(105),
        in_stock: None,
    });
    products.push(ProductCreate {
        name: "Intel Core i9 14900K (up to 6.0GHz, 24 cores 32 threads, 36MB cache, 125W)".into(),
        category: Category::Cpu,
        brand: "Intel".into(),
        price: 12_990_000,
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?auto=format&fit=crop&w=300&h=200".into(),
        description: None,
        specs: Some(ProductSpecs::Cpu {
            cores: 24,
            threads: 32,
            base_freq: "3.2GHz".into(),
            boost_freq: "6.0GHz".into(),
            cache: "36MB".into(),
            tdp: "125W".into(),
        }),
        socket: Some("lga1700".into()),
        wattage: Some(125),
        in_stock: None,
    });
    products.push(ProductCreate {
        name: "AMD Ryzen 9 7900X (up to 5.6GHz, 12 cores 24 threads, 64MB cache, 170W)".into(),
        category: Category::Cpu,
        brand: "AMD".into(),
        price: 11_450_000,
        image: "https://images.unsplash.com/photo-1595617795501-9661aafda72a?auto=format&fit=crop&w=300&h=200".into(),
        description: None,
        specs: Some(ProductSpecs::Cpu {
            cores: 12,
            threads: 24,
            base_freq: "4.7GHz".into(),
            boost_freq: "5.6GHz".into(),
            cache: "64MB".into(),
            tdp: "170W".into(),
        }),
        socket: Some("am5".into()),
        wattage: Some(170),
        in_stock: None,
    });

    // Graphics cards
    products.push(ProductCreate {
        name: "NVIDIA GeForce RTX 4070 (12GB GDDR6X, 2610MHz)".into(),
        category: Category::Vga,
        brand: "NVIDIA".into(),
        price: 15_900_000,
        image: "https://images.unsplash.com/photo-1591488320449-011701bb6704?auto=format&fit=crop&w=300&h=200".into(),
        description: None,
        specs: Some(ProductSpecs::Gpu {
            memory: "12GB GDDR6X".into(),
            core_clock: "2610MHz".into(),
            memory_bus: "192-bit".into(),
            ports: "HDMI 2.1, DP 1.4a".into(),
        }),
        socket: None,
        wattage: Some(200),
        in_stock: None,
    });
    products.push(ProductCreate {
        name: "AMD Radeon RX 7800 XT (16GB GDDR6, 2430MHz)".into(),
        category: Category::Vga,
        brand: "AMD".into(),
        price: 13_500_000,
        image: "https://images.unsplash.com/photo-1591488320449-011701bb6704?auto=format&fit=crop&w=300&h=200".into(),
        description: None,
        specs: Some(ProductSpecs::Gpu {
            memory: "16GB GDDR6".into(),
            core_clock: "2430MHz".into(),
            memory_bus: "256-bit".into(),
            ports: "HDMI 2.1, DP 2.1".into(),
        }),
        socket: None,
        wattage: Some(263),
        in_stock: None,
    });

    // Mainboards
    products.push(ProductCreate {
        name: "ASUS ROG Strix Z690-E Gaming WiFi (LGA1700, DDR5, PCIe 5.0)".into(),
        category: Category::Mainboard,
        brand: "ASUS".into(),
        price: 9_500_000,
        image: "https://images.unsplash.com/photo-1518717758536-85ae29035b6d?auto=format&fit=crop&w=300&h=200".into(),
        description: None,
        specs: Some(ProductSpecs::Mainboard {
            chipset: "Z690".into(),
            memory_type: "DDR5".into(),
            max_memory: "128GB".into(),
            slots: "4x DIMM".into(),
            expansion: "PCIe 5.0".into(),
        }),
        socket: Some("lga1700".into()),
        wattage: Some(50),
        in_stock: None,
    });
    products.push(ProductCreate {
        name: "MSI MAG B650 Tomahawk WiFi (AM5, DDR5, PCIe 5.0)".into(),
        category: Category::Mainboard,
        brand: "MSI".into(),
        price: 6_800_000,
        image: "https://images.unsplash.com/photo-1518717758536-85ae29035b6d?auto=format&fit=crop&w=300&h=200".into(),
        description: None,
        specs: Some(ProductSpecs::Mainboard {
            chipset: "B650".into(),
            memory_type: "DDR5".into(),
            max_memory: "128GB".into(),
            slots: "4x DIMM".into(),
            expansion: "PCIe 5.0".into(),
        }),
        socket: Some("am5".into()),
        wattage: Some(45),
        in_stock: None,
    });

    // Power supplies
    products.push(ProductCreate {
        name: "Corsair RM650e 650W 80 Plus Gold".into(),
        category: Category::Psu,
        brand: "Corsair".into(),
        price: 2_190_000,
        image: "https://images.unsplash.com/photo-1587202372634-32705e3bf49c?auto=format&fit=crop&w=300&h=200".into(),
        description: None,
        specs: Some(ProductSpecs::Psu {
            wattage: Some(650),
            efficiency: Some("80 Plus Gold".into()),
            modular: Some("Fully modular".into()),
        }),
        socket: None,
        wattage: None,
        in_stock: None,
    });
    products.push(ProductCreate {
        name: "Seasonic Focus GX-1000 1000W 80 Plus Gold".into(),
        category: Category::Psu,
        brand: "Seasonic".into(),
        price: 3_590_000,
        image: "https://images.unsplash.com/photo-1587202372634-32705e3bf49c?auto=format&fit=crop&w=300&h=200".into(),
        description: None,
        specs: Some(ProductSpecs::Psu {
            wattage: Some(1000),
            efficiency: Some("80 Plus Gold".into()),
            modular: Some("Fully modular".into()),
        }),
        socket: None,
        wattage: None,
        in_stock: None,
    });

    // Memory
    products.push(ProductCreate {
        name: "Corsair Vengeance 32GB (2x16GB) DDR5-6000".into(),
        category: Category::Ram,
        brand: "Corsair".into(),
        price: 2_890_000,
        image: "https://images.unsplash.com/photo-1562976540-1502c2145186?auto=format&fit=crop&w=300&h=200".into(),
        description: None,
        specs: Some(ProductSpecs::Other(BTreeMap::from([
            ("capacity".into(), "32GB (2x16GB)".into()),
            ("memoryType".into(), "DDR5".into()),
            ("speed".into(), "6000MHz".into()),
        ]))),
        socket: None,
        wattage: Some(12),
        in_stock: None,
    });
    products.push(ProductCreate {
        name: "Kingston Fury Beast 16GB (2x8GB) DDR4-3200".into(),
        category: Category::Ram,
        brand: "Kingston".into(),
        price: 1_190_000,
        image: "https://images.unsplash.com/photo-1562976540-1502c2145186?auto=format&fit=crop&w=300&h=200".into(),
        description: None,
        specs: Some(ProductSpecs::Other(BTreeMap::from([
            ("capacity".into(), "16GB (2x8GB)".into()),
            ("memoryType".into(), "DDR4".into()),
            ("speed".into(), "3200MHz".into()),
        ]))),
        socket: None,
        wattage: Some(10),
        in_stock: None,
    });

    products
}
