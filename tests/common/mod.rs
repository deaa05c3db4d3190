use pgmastery::catalog::Catalog;

pub fn load_catalog() -> Catalog {
    Catalog::load().expect("catalog should load and validate")
}
