//! # Download Links
//!
//! Slides can carry one download link. Some targets have per-platform
//! artifacts, picked by substring matches on a lowercased
//! `"<os> <arch>"` platform string (e.g. `"macos aarch64"`).

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadTarget {
    VsCode,
    FlutterSdk,
    Extensions,
    Git,
    AndroidStudio,
    AndroidCmdlineTools,
    Jdk,
}

impl DownloadTarget {
    pub const ALL: [DownloadTarget; 7] = [
        DownloadTarget::VsCode,
        DownloadTarget::FlutterSdk,
        DownloadTarget::Extensions,
        DownloadTarget::Git,
        DownloadTarget::AndroidStudio,
        DownloadTarget::AndroidCmdlineTools,
        DownloadTarget::Jdk,
    ];

    /// Key used in deck directives (`<!-- download: vscode -->`).
    pub fn key(self) -> &'static str {
        match self {
            DownloadTarget::VsCode => "vscode",
            DownloadTarget::FlutterSdk => "flutter-sdk",
            DownloadTarget::Extensions => "extensions",
            DownloadTarget::Git => "git",
            DownloadTarget::AndroidStudio => "android-studio",
            DownloadTarget::AndroidCmdlineTools => "android-cmdline-tools",
            DownloadTarget::Jdk => "jdk",
        }
    }

    /// Resolve the URL to open for the given platform string.
    pub fn url(self, platform: &str) -> &'static str {
        let platform = platform.to_ascii_lowercase();
        match self {
            DownloadTarget::VsCode => {
                if platform.contains("win") {
                    "https://code.visualstudio.com/sha/download?build=stable&os=win32-x64-user"
                } else if platform.contains("mac") {
                    "https://code.visualstudio.com/sha/download?build=stable&os=darwin-universal"
                } else if platform.contains("linux") {
                    "https://code.visualstudio.com/sha/download?build=stable&os=linux-deb-x64"
                } else {
                    "https://code.visualstudio.com/download"
                }
            }
            DownloadTarget::FlutterSdk => {
                if platform.contains("win") {
                    "https://storage.googleapis.com/flutter_infra_release/releases/stable/windows/flutter_windows_3.16.0-stable.zip"
                } else if platform.contains("mac") {
                    if ["arm64", "aarch64", "m1", "m2"]
                        .iter()
                        .any(|arch| platform.contains(arch))
                    {
                        "https://storage.googleapis.com/flutter_infra_release/releases/stable/macos/flutter_macos_arm64_3.16.0-stable.zip"
                    } else {
                        "https://storage.googleapis.com/flutter_infra_release/releases/stable/macos/flutter_macos_3.16.0-stable.zip"
                    }
                } else if platform.contains("linux") {
                    "https://storage.googleapis.com/flutter_infra_release/releases/stable/linux/flutter_linux_3.16.0-stable.tar.xz"
                } else {
                    "https://docs.flutter.dev/get-started/install"
                }
            }
            DownloadTarget::Extensions => {
                "https://marketplace.visualstudio.com/items?itemName=Dart-Code.flutter"
            }
            DownloadTarget::Git => "https://git-scm.com/downloads",
            DownloadTarget::AndroidStudio => "https://developer.android.com/studio",
            DownloadTarget::AndroidCmdlineTools => {
                "https://developer.android.com/studio#command-line-tools-only"
            }
            DownloadTarget::Jdk => "https://www.oracle.com/java/technologies/downloads/#java17",
        }
    }

    /// Notification shown when the link is opened.
    pub fn message(self) -> &'static str {
        match self {
            DownloadTarget::VsCode => "Opening VS Code download page...",
            DownloadTarget::FlutterSdk => "Downloading Flutter SDK...",
            DownloadTarget::Extensions => "Opening Flutter extension in the marketplace...",
            DownloadTarget::Git => "Opening Git download page...",
            DownloadTarget::AndroidStudio => "Opening Android Studio download page...",
            DownloadTarget::AndroidCmdlineTools => {
                "Opening Android SDK command-line tools page..."
            }
            DownloadTarget::Jdk => "Opening JDK 17 download page...",
        }
    }
}

impl fmt::Display for DownloadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DownloadTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DownloadTarget::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.trim().to_string())
    }
}

/// Platform string of the running host, e.g. `"linux x86_64"`.
pub fn host_platform() -> String {
    format!("{} {}", std::env::consts::OS, std::env::consts::ARCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vscode_per_platform() {
        assert!(DownloadTarget::VsCode.url("windows x86_64").ends_with("os=win32-x64-user"));
        assert!(DownloadTarget::VsCode.url("macos aarch64").ends_with("os=darwin-universal"));
        assert!(DownloadTarget::VsCode.url("linux x86_64").ends_with("os=linux-deb-x64"));
        assert_eq!(
            DownloadTarget::VsCode.url("freebsd x86_64"),
            "https://code.visualstudio.com/download"
        );
    }

    #[test]
    fn test_flutter_sdk_distinguishes_apple_silicon() {
        assert!(DownloadTarget::FlutterSdk.url("macos aarch64").contains("macos_arm64"));
        assert!(DownloadTarget::FlutterSdk.url("Macintosh ARM64").contains("macos_arm64"));
        assert!(DownloadTarget::FlutterSdk.url("macos x86_64").ends_with("flutter_macos_3.16.0-stable.zip"));
        assert!(DownloadTarget::FlutterSdk.url("linux x86_64").ends_with(".tar.xz"));
        assert!(DownloadTarget::FlutterSdk.url("windows x86_64").contains("windows"));
        assert_eq!(
            DownloadTarget::FlutterSdk.url("haiku"),
            "https://docs.flutter.dev/get-started/install"
        );
    }

    #[test]
    fn test_fixed_targets_ignore_platform() {
        assert_eq!(
            DownloadTarget::Git.url("windows"),
            DownloadTarget::Git.url("linux")
        );
        assert_eq!(
            DownloadTarget::Jdk.url("macos"),
            "https://www.oracle.com/java/technologies/downloads/#java17"
        );
    }

    #[test]
    fn test_keys_round_trip_through_from_str() {
        for target in DownloadTarget::ALL {
            assert_eq!(target.key().parse::<DownloadTarget>(), Ok(target));
        }
        assert!("emacs".parse::<DownloadTarget>().is_err());
    }

    #[test]
    fn test_host_platform_has_os_and_arch() {
        let platform = host_platform();
        assert!(platform.starts_with(std::env::consts::OS));
        assert!(platform.ends_with(std::env::consts::ARCH));
    }
}
