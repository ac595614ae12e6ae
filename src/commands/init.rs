use crate::config::CONFIG_FILE;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# HRlytics Configuration

[import]
# Reject employees whose departmentId matches no declared department entry.
# When false, undeclared ids get their own rollup bucket on first sight.
reject_unknown_departments = false

[export]
# Directory spreadsheet and document exports are written into.
output_dir = "."
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE} configuration file");

    Ok(())
}
