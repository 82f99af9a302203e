pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::{CliConfig, Command};

#[cfg(feature = "cli")]
mod args {
    use super::toml_config::ServiceConfig;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, validate_range, Validate};
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "nestable-gen")]
    #[command(about = "Generate five-step B2B outreach campaigns from a contact CSV")]
    pub struct CliConfig {
        #[arg(long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Path to a TOML configuration file")]
        pub config: Option<String>,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Run the HTTP service
        Serve {
            #[arg(long, help = "Address to listen on, e.g. 0.0.0.0:8000")]
            bind: Option<String>,

            #[arg(long, help = "Maximum upload size in megabytes")]
            max_upload_mb: Option<usize>,

            #[arg(long, help = "Emit logs as JSON lines")]
            json_logs: bool,
        },
        /// Process a contact CSV file without starting the server
        Generate {
            #[arg(long)]
            input: String,

            #[arg(long, default_value = "./output")]
            output_path: String,

            #[arg(long, help = "Pretend the current month is this one (1-12)")]
            month: Option<u32>,
        },
    }

    impl CliConfig {
        /// 先讀設定檔，再以命令列參數覆寫
        pub fn load_service_config(&self) -> Result<ServiceConfig> {
            let mut config = match &self.config {
                Some(path) => ServiceConfig::from_file(path)?,
                None => ServiceConfig::default(),
            };

            if let Command::Serve {
                bind,
                max_upload_mb,
                json_logs,
            } = &self.command
            {
                if let Some(bind) = bind {
                    config.server.bind = bind.clone();
                }
                if let Some(max_upload_mb) = max_upload_mb {
                    config.server.max_upload_mb = *max_upload_mb;
                }
                if *json_logs {
                    config.logging.format = "json".to_string();
                }
            }

            if self.verbose {
                config.logging.level = "debug".to_string();
            }

            Ok(config)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                validate_path("config", path)?;
            }
            if let Command::Generate {
                input,
                output_path,
                month,
            } = &self.command
            {
                validate_path("input", input)?;
                validate_path("output_path", output_path)?;
                if let Some(month) = month {
                    validate_range("month", *month, 1, 12)?;
                }
            }
            Ok(())
        }
    }

}
