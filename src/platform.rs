//! Host platform classification.
//!
//! The platform is probed once at startup and is immutable for the rest of
//! the run. Detection never fails: anything unrecognised collapses into the
//! `Unknown` tags, which select the generic backend chain.
use std::fmt;
use std::path::Path;

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    /// macOS (Darwin).
    Macos,
    /// Native Linux.
    Linux,
    /// Windows Subsystem for Linux.
    Wsl,
    /// Windows (expected to run under an sh-capable emulation layer).
    Windows,
    /// Anything else.
    Unknown,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Macos => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
            Self::Wsl => write!(f, "wsl"),
            Self::Windows => write!(f, "windows"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Detected Linux distribution family.
///
/// Only meaningful when the OS tag is [`Os::Linux`] or [`Os::Wsl`]; on every
/// other platform the distro is [`Distro::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distro {
    Ubuntu,
    Debian,
    Fedora,
    Rhel,
    Centos,
    Arch,
    Manjaro,
    Unknown,
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ubuntu => write!(f, "ubuntu"),
            Self::Debian => write!(f, "debian"),
            Self::Fedora => write!(f, "fedora"),
            Self::Rhel => write!(f, "rhel"),
            Self::Centos => write!(f, "centos"),
            Self::Arch => write!(f, "arch"),
            Self::Manjaro => write!(f, "manjaro"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Platform information for the current system.
#[derive(Debug, Clone)]
pub struct Platform {
    pub os: Os,
    pub distro: Distro,
}

impl Platform {
    /// Detect the current platform.
    #[must_use]
    pub fn detect() -> Self {
        let os = Self::detect_os();
        let distro = if matches!(os, Os::Linux | Os::Wsl) {
            Self::detect_distro()
        } else {
            Distro::Unknown
        };
        Self { os, distro }
    }

    /// Create a platform with explicit values (for testing and simulation).
    #[must_use]
    pub const fn new(os: Os, distro: Distro) -> Self {
        Self { os, distro }
    }

    /// Whether the platform installs software through a Linux distribution.
    #[must_use]
    pub const fn is_linux_like(&self) -> bool {
        matches!(self.os, Os::Linux | Os::Wsl)
    }

    fn detect_os() -> Os {
        match std::env::consts::OS {
            "macos" => Os::Macos,
            "windows" => Os::Windows,
            "linux" => {
                if is_wsl() {
                    Os::Wsl
                } else {
                    Os::Linux
                }
            }
            _ => classify_ostype(std::env::var("OSTYPE").ok().as_deref()),
        }
    }

    fn detect_distro() -> Distro {
        if let Ok(content) = std::fs::read_to_string("/etc/os-release") {
            let distro = distro_from_os_release(&content);
            if distro != Distro::Unknown {
                return distro;
            }
        }
        distro_from_fallback_files(
            Path::new("/etc/redhat-release"),
            Path::new("/etc/arch-release"),
        )
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_linux_like() {
            write!(f, "{} ({})", self.os, self.distro)
        } else {
            write!(f, "{}", self.os)
        }
    }
}

/// Whether the current Linux host is actually WSL.
///
/// Either marker alone is sufficient: `WSL_DISTRO_NAME` is set by the WSL
/// init process, and `/proc/version` carries a Microsoft vendor string.
fn is_wsl() -> bool {
    if std::env::var("WSL_DISTRO_NAME").is_ok_and(|v| !v.is_empty()) {
        return true;
    }
    std::fs::read_to_string("/proc/version").is_ok_and(|v| proc_version_is_microsoft(&v))
}

/// Check a `/proc/version` string for the WSL Microsoft marker.
#[must_use]
pub fn proc_version_is_microsoft(content: &str) -> bool {
    let lower = content.to_lowercase();
    lower.contains("microsoft") || lower.contains("wsl")
}

/// Map an `/etc/os-release` `ID` value to a distribution tag.
#[must_use]
pub fn distro_from_id(id: &str) -> Distro {
    match id.trim().to_lowercase().as_str() {
        "ubuntu" => Distro::Ubuntu,
        "debian" => Distro::Debian,
        "fedora" => Distro::Fedora,
        "rhel" => Distro::Rhel,
        "centos" => Distro::Centos,
        "arch" => Distro::Arch,
        "manjaro" => Distro::Manjaro,
        _ => Distro::Unknown,
    }
}

/// Parse `/etc/os-release` content and return the distribution tag.
///
/// Looks for the `ID=` line; surrounding quotes are stripped. Content with
/// no recognisable `ID` yields [`Distro::Unknown`].
#[must_use]
pub fn distro_from_os_release(content: &str) -> Distro {
    for line in content.lines() {
        if let Some(id) = line.strip_prefix("ID=") {
            return distro_from_id(id.trim_matches('"'));
        }
    }
    Distro::Unknown
}

/// Classify the distribution from legacy release files when `/etc/os-release`
/// is absent or unhelpful.
fn distro_from_fallback_files(redhat_release: &Path, arch_release: &Path) -> Distro {
    if let Ok(content) = std::fs::read_to_string(redhat_release) {
        return distro_from_redhat_release(&content);
    }
    if arch_release.exists() {
        return Distro::Arch;
    }
    Distro::Unknown
}

/// Classify `/etc/redhat-release` content.
#[must_use]
pub fn distro_from_redhat_release(content: &str) -> Distro {
    let lower = content.to_lowercase();
    if lower.contains("centos") {
        Distro::Centos
    } else if lower.contains("fedora") {
        Distro::Fedora
    } else {
        Distro::Rhel
    }
}

/// Classify an `OSTYPE` value for hosts whose compile-time target is not one
/// of the recognised systems.
fn classify_ostype(ostype: Option<&str>) -> Os {
    match ostype {
        Some(v) if v.starts_with("darwin") => Os::Macos,
        Some(v) if v.starts_with("linux") => Os::Linux,
        Some(v) if v.starts_with("msys") || v.starts_with("cygwin") || v.starts_with("win") => {
            Os::Windows
        }
        _ => Os::Unknown,
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn platform_detect_returns_valid() {
        // On any host the probes must produce a tag without panicking.
        let p = Platform::detect();
        let _ = p.to_string();
    }

    #[test]
    fn distro_from_id_all_supported_values() {
        assert_eq!(distro_from_id("ubuntu"), Distro::Ubuntu);
        assert_eq!(distro_from_id("debian"), Distro::Debian);
        assert_eq!(distro_from_id("fedora"), Distro::Fedora);
        assert_eq!(distro_from_id("rhel"), Distro::Rhel);
        assert_eq!(distro_from_id("centos"), Distro::Centos);
        assert_eq!(distro_from_id("arch"), Distro::Arch);
        assert_eq!(distro_from_id("manjaro"), Distro::Manjaro);
    }

    #[test]
    fn distro_from_id_unrecognized_is_unknown() {
        assert_eq!(distro_from_id("nixos"), Distro::Unknown);
        assert_eq!(distro_from_id(""), Distro::Unknown);
    }

    #[test]
    fn distro_from_id_is_case_insensitive() {
        assert_eq!(distro_from_id("Ubuntu"), Distro::Ubuntu);
        assert_eq!(distro_from_id("CENTOS"), Distro::Centos);
    }

    #[test]
    fn os_release_quoted_id() {
        let content = "NAME=\"Ubuntu\"\nID=\"ubuntu\"\nVERSION_ID=\"24.04\"\n";
        assert_eq!(distro_from_os_release(content), Distro::Ubuntu);
    }

    #[test]
    fn os_release_unquoted_id() {
        let content = "NAME=Fedora\nID=fedora\n";
        assert_eq!(distro_from_os_release(content), Distro::Fedora);
    }

    #[test]
    fn os_release_without_id_is_unknown() {
        let content = "NAME=Something\nVERSION=1\n";
        assert_eq!(distro_from_os_release(content), Distro::Unknown);
    }

    #[test]
    fn os_release_unrecognized_id_is_unknown() {
        // ID_LIKE alone must not satisfy the lookup.
        let content = "NAME=Pop!_OS\nID_LIKE=\"ubuntu debian\"\nID=pop\n";
        assert_eq!(distro_from_os_release(content), Distro::Unknown);
    }

    #[test]
    fn proc_version_microsoft_marker() {
        assert!(proc_version_is_microsoft(
            "Linux version 5.15.90.1-microsoft-standard-WSL2"
        ));
        assert!(proc_version_is_microsoft("Linux version 4.4.0-Microsoft"));
    }

    #[test]
    fn proc_version_native_kernel_is_not_wsl() {
        assert!(!proc_version_is_microsoft(
            "Linux version 6.8.0-41-generic (buildd@lcy02) #41-Ubuntu"
        ));
    }

    #[test]
    fn redhat_release_centos() {
        assert_eq!(
            distro_from_redhat_release("CentOS Linux release 7.9.2009 (Core)"),
            Distro::Centos
        );
    }

    #[test]
    fn redhat_release_rhel() {
        assert_eq!(
            distro_from_redhat_release("Red Hat Enterprise Linux release 9.3 (Plow)"),
            Distro::Rhel
        );
    }

    #[test]
    fn fallback_files_arch_release() {
        let dir = tempfile::tempdir().unwrap();
        let arch = dir.path().join("arch-release");
        std::fs::write(&arch, "").unwrap();
        assert_eq!(
            distro_from_fallback_files(&dir.path().join("redhat-release"), &arch),
            Distro::Arch
        );
    }

    #[test]
    fn fallback_files_redhat_release_wins_over_arch() {
        let dir = tempfile::tempdir().unwrap();
        let redhat = dir.path().join("redhat-release");
        let arch = dir.path().join("arch-release");
        std::fs::write(&redhat, "CentOS Stream release 9\n").unwrap();
        std::fs::write(&arch, "").unwrap();
        assert_eq!(distro_from_fallback_files(&redhat, &arch), Distro::Centos);
    }

    #[test]
    fn fallback_files_none_present_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            distro_from_fallback_files(
                &dir.path().join("redhat-release"),
                &dir.path().join("arch-release")
            ),
            Distro::Unknown
        );
    }

    #[test]
    fn classify_ostype_values() {
        assert_eq!(classify_ostype(Some("darwin23")), Os::Macos);
        assert_eq!(classify_ostype(Some("linux-gnu")), Os::Linux);
        assert_eq!(classify_ostype(Some("msys")), Os::Windows);
        assert_eq!(classify_ostype(Some("cygwin")), Os::Windows);
        assert_eq!(classify_ostype(Some("freebsd")), Os::Unknown);
        assert_eq!(classify_ostype(None), Os::Unknown);
    }

    #[test]
    fn os_display() {
        assert_eq!(Os::Macos.to_string(), "macos");
        assert_eq!(Os::Linux.to_string(), "linux");
        assert_eq!(Os::Wsl.to_string(), "wsl");
        assert_eq!(Os::Windows.to_string(), "windows");
        assert_eq!(Os::Unknown.to_string(), "unknown");
    }

    #[test]
    fn platform_display_includes_distro_on_linux() {
        let p = Platform::new(Os::Linux, Distro::Debian);
        assert_eq!(p.to_string(), "linux (debian)");
        let p = Platform::new(Os::Macos, Distro::Unknown);
        assert_eq!(p.to_string(), "macos");
    }
}
