fn main() {
    println!("cargo::rerun-if-env-changed=DATABASE_URL");
    println!("cargo::rustc-check-cfg=cfg(database_test)");
    if std::env::var("DATABASE_URL").is_ok_and(|s| !s.is_empty()) {
        println!("cargo::rustc-cfg=database_test");
    }
}
