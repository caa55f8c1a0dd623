const RELAY_DEFAULTS: [(&str, &str); 3] = [
    ("CONTACT_RELAY_SERVICE_ID", "service_portfolio"),
    ("CONTACT_RELAY_TEMPLATE_ID", "template_5vmuowg"),
    ("CONTACT_RELAY_PUBLIC_KEY", "UuFcWfx_5WsieXEtJ"),
];

fn main() {
    // footer year
    println!("cargo:rustc-env=BUILD_TIME={}", chrono::Utc::now().to_rfc3339());

    // email relay settings, overridable per deployment
    for (key, default) in RELAY_DEFAULTS {
        let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
        println!("cargo:rustc-env={key}={value}");
        println!("cargo:rerun-if-env-changed={key}");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
