/// Get the version string for pushmi and libpushmi
pub fn get_version_string() -> String {
    format!(
        "pushmi {}\nlibpushmi {}",
        env!("CARGO_PKG_VERSION"),
        libpushmi::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
