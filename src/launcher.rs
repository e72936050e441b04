use anyhow::Context;
use std::path::Path;

/// Capability for handing a path to the operating system.
pub trait Launcher {
    /// Open `path` with its default handler. Returns once the request has
    /// been handed off; never waits for the opened application.
    fn open(&self, path: &Path) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    MacOs,
    OtherUnix,
}

impl HostPlatform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            HostPlatform::Windows
        } else if cfg!(target_os = "macos") {
            HostPlatform::MacOs
        } else {
            HostPlatform::OtherUnix
        }
    }

    /// External opener program, `None` where the shell API is used directly.
    pub fn opener_program(self) -> Option<&'static str> {
        match self {
            HostPlatform::Windows => None,
            HostPlatform::MacOs => Some("open"),
            HostPlatform::OtherUnix => Some("xdg-open"),
        }
    }
}

/// Launcher backed by the host's native open facility.
#[derive(Debug, Clone, Copy)]
pub struct NativeLauncher {
    platform: HostPlatform,
}

impl NativeLauncher {
    pub fn for_host() -> Self {
        Self::new(HostPlatform::current())
    }

    pub fn new(platform: HostPlatform) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> HostPlatform {
        self.platform
    }
}

impl Launcher for NativeLauncher {
    fn open(&self, path: &Path) -> anyhow::Result<()> {
        match self.platform.opener_program() {
            None => open::that_detached(path)
                .with_context(|| format!("failed to open {}", path.display())),
            Some(program) => open_with(program, path),
        }
    }
}

/// Hand `path` to `program`, detached from this process.
fn open_with(program: &str, path: &Path) -> anyhow::Result<()> {
    open::with_detached(path, program)
        .with_context(|| format!("failed to run {program} for {}", path.display()))
}
