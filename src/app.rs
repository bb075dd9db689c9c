//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the signal handler,
//! validates paths, and runs the selected mode.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use media_sort::cli::Args;
use media_sort::config::load_config_from_xml;
use media_sort::output as out;
use media_sort::{CONFIG_ENV, DateResolver, MediaSortError, default_config_path, organize, shutdown, validate_and_normalize};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {}\n", explicit.to_string_lossy()));
            return Ok(());
        }
        match default_config_path() {
            Some(p) => {
                out::print_info(&format!("Default media_sort config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file exists at that location.");
                } else {
                    out::print_info("No config file exists there; built-in defaults are used.");
                }
            }
            None => out::print_error("Could not determine a default config path"),
        }
        return Ok(());
    }

    let Some(mut cfg) = args.base_config() else {
        out::print_error("Nothing to do: pass `sweep SOURCE [ROOT]` or `reconcile IMPORT ROOT` (see --help).");
        anyhow::bail!("no subcommand given");
    };

    // XML settings first, CLI wins.
    let loaded = load_config_from_xml().inspect_err(|e| out::print_error(&format!("{e:#}")))?;
    if let Some((_, settings)) = &loaded {
        settings.apply_to(&mut cfg);
    }
    args.apply_overrides(&mut cfg);

    // Initialize logging and capture the guard so we can drop it on signal
    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        if let Err(e) = ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; finishing in-flight files and stopping...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take(); // drop guard here to flush tracing_appender
            }
        }) {
            error!(error = %e, "failed to install signal handler; ctrl-c will abort immediately");
        }
    }

    if let Some((path, _)) = &loaded {
        info!(path = %path.display(), "Loaded config file");
    }
    debug!("Starting media_sort: {:?}", args);

    let result = (|| -> Result<()> {
        validate_and_normalize(&mut cfg)?;
        let resolver = DateResolver::with_exiftool(cfg.exiftool.clone());
        let summary = organize::run(&cfg, &resolver)?;
        out::print_summary(&summary, cfg.dry_run);
        Ok(())
    })();

    if let Err(e) = &result {
        if let Some(ms) = e.downcast_ref::<MediaSortError>() {
            error!(code = ms.code(), kind = ms.kind(), error = %ms, "Run aborted");
        } else {
            error!(error = ?e, "Run aborted");
        }
        out::print_error(&format!("{e:#}"));
    }

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}
