use crate::error::Result;
use crate::fs::Transaction;
use crate::ops::{DEFAULT_VERSION, Fragments, resolve_manifest, substitute};
use crate::validation::validate_version;
use clap::Args;
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Default)]
pub struct UpdateArgs {
    /// New version to write in place of `version = "0.0.0"`
    ///
    /// Taken verbatim, even when it starts with `-`. Options must come
    /// before VERSION; anything after it is ignored.
    #[arg(
        value_name = "VERSION",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub positional: Vec<String>,

    /// Project root containing Cargo.toml
    ///
    /// Defaults to the parent of the directory holding this executable.
    #[arg(long, value_name = "DIR", env = "UPDATE_VERSION_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to the manifest to rewrite (overrides --root)
    #[arg(long, value_name = "FILE")]
    pub manifest_path: Option<PathBuf>,

    /// Reject versions that are not valid semantic versions
    #[arg(long)]
    pub strict: bool,

    /// Show what would change without writing the manifest or a backup
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

impl UpdateArgs {
    /// The supplied version, if any.
    pub fn new_version(&self) -> Option<&str> {
        self.positional.first().map(String::as_str)
    }

    /// Arguments after the version.
    pub fn extra(&self) -> &[String] {
        self.positional.get(1..).unwrap_or_default()
    }

    /// The version to write, falling back to `0.0.0`.
    pub fn resolved_version(&self) -> &str {
        self.new_version().unwrap_or(DEFAULT_VERSION)
    }
}

pub fn execute(args: UpdateArgs) -> Result<()> {
    let location = resolve_manifest(args.manifest_path.as_deref(), args.root.as_deref())?;
    log::debug!(
        "Manifest resolved via {:?}: {}",
        location.source,
        location.path.display()
    );

    if !args.extra().is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", args.extra());
    }

    let version = args.resolved_version();
    if args.strict {
        validate_version(version)?;
    }

    let fragments = Fragments::for_version(version);
    print_plan(&mut io::stdout().lock(), &location.path, &fragments)?;

    let mut replacements = 0;
    let mut txn = Transaction::new(args.dry_run);
    txn.update_file_with(location.path.clone(), |original| {
        let out = substitute(original, &fragments);
        replacements = out.replacements;
        out.content
    })?;

    txn.commit()?;

    if args.dry_run {
        println!(
            "{} {} replacement(s) would be made in {}",
            "Dry run:".yellow().bold(),
            replacements,
            location.path.display()
        );
    }

    log::debug!(
        "Rewrote {} ({} replacement(s))",
        location.path.display(),
        replacements
    );

    Ok(())
}

/// Writes the two status lines announcing the rewrite.
pub fn print_plan<W: Write>(
    out: &mut W,
    manifest: &Path,
    fragments: &Fragments,
) -> io::Result<()> {
    writeln!(out, "Updating version in {}", manifest.display())?;
    writeln!(out, "  from {} to {}", fragments.find, fragments.replace)?;
    out.flush()
}
