//! Platforms command: the per-family path table

use aodh_meta::OsFamily;
use colored::Colorize;
use serde_json::{Value, json};

use crate::error::Result;

/// Path table as JSON, keyed by family.
pub fn platforms_json() -> Value {
    let mut map = serde_json::Map::new();
    for family in OsFamily::ALL {
        map.insert(family.to_string(), json!(family.params()));
    }
    Value::Object(map)
}

/// Run the platforms command
pub fn run_platforms(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&platforms_json())?);
        return Ok(());
    }

    println!("{}", "Supported Platforms".bold());
    println!();
    for family in OsFamily::ALL {
        let params = family.params();
        println!("{}:", family.as_str().cyan().bold());
        println!("  {:<20} {}", "httpd service".green(), params.httpd_service_name);
        println!("  {:<20} {}", "ports file".green(), params.httpd_ports_file.dimmed());
        println!("  {:<20} {}", "wsgi script dir".green(), params.wsgi_script_path);
        println!("  {:<20} {}", "wsgi script source".green(), params.wsgi_script_source);
        println!();
    }
    Ok(())
}
