//! Linter binary installation resource.
//!
//! Installs `golangci-lint` through an ordered chain of package-manager
//! backends. The chain for a platform is fixed and documented on
//! [`backend_chain`]; each attempt is independent and the chain stops at the
//! first success. A backend whose program is not on PATH counts as a failed
//! attempt. Nothing is ever retried.
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use super::{Resource, ResourceChange, ResourceState};
use crate::error::InstallError;
use crate::exec::Executor;
use crate::platform::{Distro, Os, Platform};

/// Name of the linter binary this tool installs.
pub const LINTER: &str = "golangci-lint";

/// Upstream installer script used by the [`Backend::Script`] fallback.
const INSTALL_SCRIPT_URL: &str =
    "https://raw.githubusercontent.com/golangci/golangci-lint/HEAD/install.sh";

/// Installation backends, attempted in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Homebrew (macOS, unprivileged).
    Brew,
    /// apt-get (Debian family).
    Apt,
    /// dnf (Fedora family).
    Dnf,
    /// yum (older Red Hat family).
    Yum,
    /// pacman (Arch family).
    Pacman,
    /// snapd (distro-independent).
    Snap,
    /// Flatpak (distro-independent, per-user).
    Flatpak,
    /// Upstream install script fetched over HTTPS and run with `sh`.
    Script,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Brew => write!(f, "brew"),
            Self::Apt => write!(f, "apt"),
            Self::Dnf => write!(f, "dnf"),
            Self::Yum => write!(f, "yum"),
            Self::Pacman => write!(f, "pacman"),
            Self::Snap => write!(f, "snap"),
            Self::Flatpak => write!(f, "flatpak"),
            Self::Script => write!(f, "script"),
        }
    }
}

impl Backend {
    /// Program invoked for this backend.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Brew => "brew",
            Self::Apt => "apt-get",
            Self::Dnf => "dnf",
            Self::Yum => "yum",
            Self::Pacman => "pacman",
            Self::Snap => "snap",
            Self::Flatpak => "flatpak",
            Self::Script => "sh",
        }
    }

    /// Whether this backend requires elevated privileges.
    ///
    /// Privileged backends are run through `sudo` when it is available;
    /// otherwise the unprivileged form is attempted and allowed to fail.
    #[must_use]
    pub const fn needs_root(self) -> bool {
        matches!(
            self,
            Self::Apt | Self::Dnf | Self::Yum | Self::Pacman | Self::Snap
        )
    }

    /// Arguments for the package-manager install command.
    const fn install_args(self) -> &'static [&'static str] {
        match self {
            Self::Brew => &["install", LINTER],
            Self::Apt | Self::Dnf | Self::Yum => &["install", "-y", LINTER],
            Self::Pacman => &["-S", "--needed", "--noconfirm", LINTER],
            Self::Snap => &["install", LINTER, "--classic"],
            Self::Flatpak => &["install", "-y", LINTER],
            Self::Script => &[],
        }
    }
}

/// The fixed backend order for a platform tag.
///
/// - macos: brew, script
/// - ubuntu/debian (native or WSL): apt, snap, flatpak, script
/// - fedora: dnf, yum, snap, flatpak, script
/// - rhel/centos: yum, dnf, snap, flatpak, script
/// - arch/manjaro: pacman, flatpak, script
/// - linux with unknown distro: apt, dnf, yum, pacman, snap, flatpak, script
/// - windows: script
/// - unknown: brew, apt, dnf, yum, pacman, snap, flatpak, script
#[must_use]
pub fn backend_chain(platform: &Platform) -> Vec<Backend> {
    match platform.os {
        Os::Macos => vec![Backend::Brew, Backend::Script],
        Os::Linux | Os::Wsl => match platform.distro {
            Distro::Ubuntu | Distro::Debian => {
                vec![Backend::Apt, Backend::Snap, Backend::Flatpak, Backend::Script]
            }
            Distro::Fedora => vec![
                Backend::Dnf,
                Backend::Yum,
                Backend::Snap,
                Backend::Flatpak,
                Backend::Script,
            ],
            Distro::Rhel | Distro::Centos => vec![
                Backend::Yum,
                Backend::Dnf,
                Backend::Snap,
                Backend::Flatpak,
                Backend::Script,
            ],
            Distro::Arch | Distro::Manjaro => {
                vec![Backend::Pacman, Backend::Flatpak, Backend::Script]
            }
            Distro::Unknown => vec![
                Backend::Apt,
                Backend::Dnf,
                Backend::Yum,
                Backend::Pacman,
                Backend::Snap,
                Backend::Flatpak,
                Backend::Script,
            ],
        },
        Os::Windows => vec![Backend::Script],
        Os::Unknown => vec![
            Backend::Brew,
            Backend::Apt,
            Backend::Dnf,
            Backend::Yum,
            Backend::Pacman,
            Backend::Snap,
            Backend::Flatpak,
            Backend::Script,
        ],
    }
}

/// The `golangci-lint` binary as a check+apply resource.
pub struct LinterResource<'a> {
    chain: Vec<Backend>,
    /// Install prefix for the script backend (`<dir>/golangci-lint`).
    bin_dir: PathBuf,
    executor: &'a dyn Executor,
}

impl std::fmt::Debug for LinterResource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinterResource")
            .field("chain", &self.chain)
            .field("bin_dir", &self.bin_dir)
            .field("executor", &"<dyn Executor>")
            .finish()
    }
}

impl<'a> LinterResource<'a> {
    /// Create a resource with the backend chain for `platform`.
    #[must_use]
    pub fn new(platform: &Platform, bin_dir: PathBuf, executor: &'a dyn Executor) -> Self {
        Self {
            chain: backend_chain(platform),
            bin_dir,
            executor,
        }
    }

    /// The backend order this resource will attempt.
    #[must_use]
    pub fn chain(&self) -> &[Backend] {
        &self.chain
    }

    /// Run the backend chain until one backend succeeds.
    ///
    /// Returns the backend that performed the installation.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::AllBackendsFailed`] when every backend in the
    /// chain has been attempted without success.
    pub fn install(&self) -> Result<Backend, InstallError> {
        for backend in &self.chain {
            tracing::debug!("attempting backend: {backend}");
            if self.attempt(*backend) {
                return Ok(*backend);
            }
        }
        Err(InstallError::AllBackendsFailed {
            attempted: self.chain.iter().map(ToString::to_string).collect(),
        })
    }

    fn attempt(&self, backend: Backend) -> bool {
        match backend {
            Backend::Script => self.attempt_script(),
            _ => self.attempt_package_manager(backend),
        }
    }

    fn attempt_package_manager(&self, backend: Backend) -> bool {
        let program = backend.program();
        if !self.executor.which(program) {
            tracing::debug!("{program} not on PATH, skipping {backend}");
            return false;
        }

        let args = backend.install_args();
        let result = if backend.needs_root() && self.executor.which("sudo") {
            let mut full = vec![program];
            full.extend_from_slice(args);
            self.executor.run_unchecked("sudo", &full)
        } else {
            self.executor.run_unchecked(program, args)
        };

        match result {
            Ok(r) if r.success => true,
            Ok(r) => {
                tracing::debug!("{backend} failed: {}", r.detail());
                false
            }
            Err(e) => {
                tracing::debug!("{backend} could not be invoked: {e:#}");
                false
            }
        }
    }

    /// Fetch the upstream installer script, stage it in a temporary file,
    /// and run it with `sh -s -- -b <bin_dir>` semantics.
    fn attempt_script(&self) -> bool {
        if !self.executor.which("sh") {
            tracing::debug!("sh not on PATH, skipping script backend");
            return false;
        }

        let script = match fetch_install_script(INSTALL_SCRIPT_URL) {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("fetching installer script failed: {e:#}");
                return false;
            }
        };

        let staged = match stage_script(&script) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!("staging installer script failed: {e:#}");
                return false;
            }
        };

        let script_path = staged.path().to_string_lossy().to_string();
        let bin_dir = self.bin_dir.to_string_lossy().to_string();
        match self
            .executor
            .run_unchecked("sh", &[&script_path, "-b", &bin_dir])
        {
            Ok(r) if r.success => true,
            Ok(r) => {
                tracing::debug!("installer script failed: {}", r.detail());
                false
            }
            Err(e) => {
                tracing::debug!("installer script could not be run: {e:#}");
                false
            }
        }
    }
}

impl Resource for LinterResource<'_> {
    fn description(&self) -> String {
        LINTER.to_string()
    }

    fn current_state(&self) -> Result<ResourceState> {
        if self.executor.which(LINTER) || self.bin_dir.join(LINTER).is_file() {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Missing)
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        self.install()?;
        Ok(ResourceChange::Applied)
    }
}

/// The directory the script backend installs into.
///
/// `$(go env GOPATH)/bin` when a Go toolchain is available, otherwise
/// `<project-root>/bin` (the upstream installer's own default prefix).
#[must_use]
pub fn script_bin_dir(project_root: &Path, executor: &dyn Executor) -> PathBuf {
    if executor.which("go")
        && let Ok(result) = executor.run_unchecked("go", &["env", "GOPATH"])
        && result.success
    {
        let gopath = result.stdout.trim();
        if !gopath.is_empty() {
            return PathBuf::from(gopath).join("bin");
        }
    }
    project_root.join("bin")
}

fn fetch_install_script(url: &str) -> Result<String> {
    let mut response = ureq::get(url)
        .call()
        .with_context(|| format!("fetching installer script from {url}"))?;
    let body = response
        .body_mut()
        .read_to_string()
        .context("reading installer script body")?;
    Ok(body)
}

fn stage_script(content: &str) -> Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new().context("creating temporary script file")?;
    file.write_all(content.as_bytes())
        .context("writing temporary script file")?;
    Ok(file)
}
