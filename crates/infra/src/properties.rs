// crates/infra/src/properties.rs
//! Host-backed property snapshot.
//!
//! The snapshot is the inherited environment plus a handful of host properties
//! under their conventional dotted names (`user.dir`, `os.name`, ...). Host
//! properties replace environment variables of the same name.

use std::{env, ffi::OsString, path::MAIN_SEPARATOR};

use sandbox_probe_ports::properties::PropertySource;
use sandbox_probe_shared_kernel::{InfrastructureError, PropertySnapshot, Result, escape_line_breaks};

#[cfg(windows)]
const PATH_SEPARATOR: &str = ";";
#[cfg(not(windows))]
const PATH_SEPARATOR: &str = ":";

/// `PropertySource` reading the current process and host.
#[derive(Debug, Clone, Default)]
pub struct HostPropertySource {
    /// Overrides the inherited environment; `None` reads the live process environment.
    env: Option<Vec<(OsString, OsString)>>,
}

impl HostPropertySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `vars` in place of the process environment.
    pub fn with_env<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self { env: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()) }
    }

    fn environment(&self) -> Vec<(String, String)> {
        let lossy = |(k, v): (OsString, OsString)| (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned());
        match &self.env {
            Some(vars) => vars.iter().cloned().map(lossy).collect(),
            None => env::vars_os().map(lossy).collect(),
        }
    }
}

impl PropertySource for HostPropertySource {
    fn snapshot(&self) -> Result<PropertySnapshot> {
        let environment = self.environment();
        let host = host_properties(&environment)?;
        tracing::debug!(env = environment.len(), host = host.len(), "captured property snapshot");

        Ok(environment
            .into_iter()
            .chain(host.into_iter().map(|(k, v)| (k.to_string(), v)))
            .map(|(k, v)| (escape_line_breaks(&k).into_owned(), escape_line_breaks(&v).into_owned()))
            .collect())
    }
}

fn host_properties(environment: &[(String, String)]) -> Result<Vec<(&'static str, String)>> {
    let user_dir = env::current_dir()
        .map_err(|source| InfrastructureError::PropertyUnavailable { key: "user.dir".to_string(), source })?;

    let mut props = vec![
        ("user.dir", user_dir.to_string_lossy().into_owned()),
        ("os.name", env::consts::OS.to_string()),
        ("os.arch", env::consts::ARCH.to_string()),
        ("os.family", env::consts::FAMILY.to_string()),
        ("file.separator", MAIN_SEPARATOR.to_string()),
        ("path.separator", PATH_SEPARATOR.to_string()),
        ("tmp.dir", env::temp_dir().to_string_lossy().into_owned()),
    ];

    if let Some(home) = lookup(environment, &["HOME", "USERPROFILE"]) {
        props.push(("user.home", home));
    }
    if let Some(name) = lookup(environment, &["USER", "USERNAME"]) {
        props.push(("user.name", name));
    }
    match env::current_exe() {
        Ok(exe) => props.push(("process.exe", exe.to_string_lossy().into_owned())),
        Err(err) => tracing::trace!(error = %err, "process.exe unavailable"),
    }

    Ok(props)
}

/// First non-empty value among `keys`, in order.
fn lookup(environment: &[(String, String)], keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        environment.iter().find(|(k, v)| k.as_str() == *key && !v.is_empty()).map(|(_, v)| v.clone())
    })
}
