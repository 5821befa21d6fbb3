use std::collections::BTreeMap;

use shared::models::{BuildCreate, BuildUpdate, Category, ProductCreate};

use super::*;

fn cpu(name: &str, brand: &str, price: i64, socket: &str) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        category: Category::Cpu,
        brand: brand.to_string(),
        price,
        image: "img".to_string(),
        description: None,
        specs: None,
        socket: Some(socket.to_string()),
        wattage: Some(125),
        in_stock: None,
    }
}

fn case(name: &str, brand: &str, price: i64) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        category: Category::Case,
        brand: brand.to_string(),
        price,
        image: "img".to_string(),
        description: None,
        specs: None,
        socket: None,
        wattage: None,
        in_stock: None,
    }
}

#[test]
fn test_create_then_get_roundtrip() {
    let store = ProductStore::new();
    let created = store.create(cpu("Ryzen 5 7600", "AMD", 5_000_000, "am5"));

    let fetched = store.get(&created.id).expect("product should exist");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Ryzen 5 7600");
    assert_eq!(fetched.brand, "AMD");
    assert_eq!(fetched.price, 5_000_000);
    assert_eq!(fetched.socket.as_deref(), Some("am5"));
    assert!(fetched.in_stock);
}

#[test]
fn test_get_unknown_id_returns_none() {
    let store = ProductStore::new();
    assert!(store.get("no-such-id").is_none());
}

#[test]
fn test_list_category_filter_excludes_other_kinds() {
    let store = ProductStore::new();
    store.create(cpu("CPU A", "Intel", 1000, "lga1700"));
    store.create(case("Case A", "NZXT", 500));

    let cpus = store.list(Some(Category::Cpu), &ProductFilter::default());
    assert_eq!(cpus.len(), 1);
    assert!(cpus.iter().all(|p| p.category == Category::Cpu));
}

#[test]
fn test_filters_are_conjunctive() {
    let store = ProductStore::new();
    store.create(cpu("CPU A", "Intel", 1000, "lga1700"));
    store.create(cpu("CPU B", "AMD", 1000, "am5"));
    store.create(cpu("CPU C", "AMD", 9000, "am5"));

    // Brand AND price range must both hold
    let filter = ProductFilter {
        brand: Some(vec!["AMD".to_string()]),
        max_price: Some(5000),
        ..Default::default()
    };
    let result = store.list(Some(Category::Cpu), &filter);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "CPU B");
}

#[test]
fn test_price_bounds_are_inclusive() {
    let store = ProductStore::new();
    store.create(cpu("At min", "Intel", 1000, "lga1700"));
    store.create(cpu("At max", "Intel", 2000, "lga1700"));
    store.create(cpu("Below", "Intel", 999, "lga1700"));
    store.create(cpu("Above", "Intel", 2001, "lga1700"));

    let filter = ProductFilter {
        min_price: Some(1000),
        max_price: Some(2000),
        ..Default::default()
    };
    let result = store.list(None, &filter);
    let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["At min", "At max"]);
}

#[test]
fn test_socket_filter_requires_socket() {
    let store = ProductStore::new();
    store.create(cpu("Socketed", "AMD", 1000, "am5"));
    store.create(case("Socketless", "AMD", 1000));

    let filter = ProductFilter {
        socket: Some(vec!["am5".to_string()]),
        ..Default::default()
    };
    let result = store.list(None, &filter);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Socketed");
}

#[test]
fn test_search_matches_name_or_brand_case_insensitive() {
    let store = ProductStore::new();
    store.create(cpu("Core i5 13600K", "Intel", 1000, "lga1700"));
    store.create(cpu("Ryzen 7 7700X", "AMD", 1000, "am5"));

    let by_name = store.list(
        None,
        &ProductFilter {
            search: Some("ryzen".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].brand, "AMD");

    let by_brand = store.list(
        None,
        &ProductFilter {
            search: Some("INTEL".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(by_brand.len(), 1);
    assert_eq!(by_brand[0].brand, "Intel");
}

#[test]
fn test_list_preserves_insertion_order() {
    let store = ProductStore::new();
    store.create(cpu("First", "Intel", 1, "lga1700"));
    store.create(cpu("Second", "Intel", 2, "lga1700"));
    store.create(cpu("Third", "Intel", 3, "lga1700"));

    let names: Vec<String> = store
        .list(None, &ProductFilter::default())
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn test_seeded_catalog_has_all_core_categories() {
    let store = ProductStore::new();
    seed::seed_catalog(&store);

    for category in [
        Category::Cpu,
        Category::Vga,
        Category::Mainboard,
        Category::Psu,
        Category::Ram,
    ] {
        assert!(
            !store.list(Some(category), &ProductFilter::default()).is_empty(),
            "seed catalog missing {category}"
        );
    }
}

#[test]
fn test_build_create_then_get() {
    let store = BuildStore::new();
    let components = BTreeMap::from([(Category::Cpu, "cpu-1".to_string())]);
    let created = store.create(BuildCreate {
        name: "Gaming rig".to_string(),
        components: components.clone(),
        total_price: 25_000_000,
    });

    let fetched = store.get(&created.id).expect("build should exist");
    assert_eq!(fetched.name, "Gaming rig");
    assert_eq!(fetched.components, components);
    assert_eq!(fetched.total_price, 25_000_000);
    assert_eq!(fetched.created_at, created.created_at);
}

#[test]
fn test_build_update_missing_id_does_not_create() {
    let store = BuildStore::new();
    let result = store.update(
        "missing",
        BuildUpdate {
            name: Some("nope".to_string()),
            ..Default::default()
        },
    );
    assert!(result.is_none());
    assert!(store.is_empty());
}

#[test]
fn test_build_update_preserves_omitted_fields() {
    let store = BuildStore::new();
    let components = BTreeMap::from([(Category::Cpu, "cpu-1".to_string())]);
    let created = store.create(BuildCreate {
        name: "Original".to_string(),
        components: components.clone(),
        total_price: 1000,
    });

    let updated = store
        .update(
            &created.id,
            BuildUpdate {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .expect("update should succeed");

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.components, components);
    assert_eq!(updated.total_price, 1000);
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn test_build_update_does_not_recompute_total_price() {
    let store = BuildStore::new();
    let created = store.create(BuildCreate {
        name: "Build".to_string(),
        components: BTreeMap::new(),
        total_price: 1000,
    });

    // Changing components alone leaves the stored total untouched
    let updated = store
        .update(
            &created.id,
            BuildUpdate {
                components: Some(BTreeMap::from([(Category::Vga, "vga-1".to_string())])),
                ..Default::default()
            },
        )
        .expect("update should succeed");
    assert_eq!(updated.total_price, 1000);
}
