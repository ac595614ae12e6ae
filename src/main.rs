use anyhow::Result;
use clap::Parser;
use hrlytics::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            path,
            format,
            output,
            department,
            joined_after,
            joined_before,
            search,
            config,
        } => {
            let report_config = hrlytics::commands::report::ReportConfig {
                path,
                format: format.into(),
                output,
                department,
                joined_after,
                joined_before,
                search,
                config,
            };
            hrlytics::commands::report::handle_report(report_config)
        }
        Commands::Employees {
            path,
            department,
            search,
            sort_by,
            direction,
            config,
        } => {
            let employees_config = hrlytics::commands::employees::EmployeesConfig {
                path,
                department,
                search,
                sort_by: sort_by.map(Into::into),
                direction: direction.into(),
                config,
            };
            hrlytics::commands::employees::handle_employees(employees_config)
        }
        Commands::Export {
            path,
            format,
            output_dir,
            config,
        } => {
            let export_config = hrlytics::commands::export::ExportConfig {
                path,
                format: format.into(),
                output_dir,
                config,
            };
            hrlytics::commands::export::handle_export(export_config)
        }
        Commands::Validate { path, config } => {
            let validate_config = hrlytics::commands::validate::ValidateConfig { path, config };
            hrlytics::commands::validate::handle_validate(validate_config)
        }
        Commands::Init { force } => hrlytics::commands::init::init_config(force),
    }
}
