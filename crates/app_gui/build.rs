use std::env;

fn main() {
    let default_url =
        env::var("FLOWER_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    println!("cargo:rustc-env=FLOWER_API_URL_DEFAULT={default_url}");
    println!("cargo:rerun-if-env-changed=FLOWER_API_URL");
}
