mod locate;
mod substitute;

pub use locate::{
    MANIFEST_FILE, ManifestLocation, RootSource, resolve_manifest, root_from_executable,
};
pub use substitute::{DEFAULT_VERSION, Fragments, Substitution, substitute};
