//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the signal handler, validates the
//! target directory, and runs the allocation (and creation, unless dry-run).

use anyhow::{Context, Result};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};

use createfile::cli::Args;
use createfile::output as out;
use createfile::{
    Allocator, Config, DirStore, NameStore, config_path, create_template_config, create_unique,
    load_config, shutdown,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let cfg_path = config_path();

    // --print-config / --init-config run before logging init
    if args.print_config {
        match (std::env::var_os(createfile::config::CONFIG_ENV), cfg_path.as_deref()) {
            (Some(v), _) if !v.is_empty() => {
                out::print_info(&format!(
                    "Using CREATEFILE_CONFIG (explicit):\n  {}",
                    v.to_string_lossy()
                ));
            }
            (_, Some(p)) => {
                out::print_info(&format!("Default createfile config path:\n  {}", p.display()));
                if p.exists() {
                    out::print_info("A config file exists at that location.");
                } else {
                    out::print_info("No config file there yet; built-in defaults apply. Run with --init-config to create a template.");
                }
            }
            (_, None) => out::print_error("Could not determine a default config path."),
        }
        return Ok(());
    }

    if args.init_config {
        let path = cfg_path.context("could not determine a config path; set CREATEFILE_CONFIG")?;
        create_template_config(&path)?;
        out::print_success(&format!("A template createfile config was written to: {}", path.display()));
        return Ok(());
    }

    // Defaults <- XML <- CLI
    let mut cfg: Config = load_config(cfg_path.as_deref())?;
    args.apply_overrides(&mut cfg);

    // Initialize logging and capture the guard so we can drop it on signal
    let guard_opt: Option<tracing_appender::non_blocking::WorkerGuard> =
        init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
            out::print_error(&format!("Failed to initialize logging: {}", e));
            e
        })?;

    // Guard is dropped on SIGINT to flush file logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        if let Err(e) = ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; shutting down...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        }) {
            warn!(error = %e, "failed to install signal handler");
        }
    }

    debug!("Starting createfile: {:?}", args);

    let result = (|| -> Result<()> {
        cfg.validate()?;
        let desired = args.desired_name(&cfg);
        let store = DirStore::new(&cfg.directory);
        let allocator = Allocator::from_config(&cfg);

        if cfg.dry_run {
            let name = allocator.allocate(&desired, |n| store.exists(n))?;
            out::print_info(&format!("Dry-run: would create '{}'", store.path_of(&name).display()));
            return Ok(());
        }

        match create_unique(&store, &allocator, &desired) {
            Ok(created) => {
                info!(
                    desired = %desired,
                    name = %created.name,
                    numbered = created.renamed_from(&desired),
                    path = %store.path_of(&created.name).display(),
                    "Created file"
                );
                out::print_user(&format!("Created: {}", created.name));
                Ok(())
            }
            Err(e) => {
                error!(code = e.code(), kind = e.kind(), name = e.name().unwrap_or(desired.as_str()), error = %e, "Create failed");
                Err(e.into())
            }
        }
    })();

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}
