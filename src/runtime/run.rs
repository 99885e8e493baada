// ABOUTME: Parameters and argument assembly for one-shot `run --rm` containers.
// ABOUTME: Injects host uid/gid, volumes, working dir and wraps the command in `bash -c`.

/// Host platform, which decides whether uid/gid are forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    Unix,
}

impl HostOs {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Unix
        }
    }
}

/// A command to run in a throwaway container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSpec {
    /// Shell command, passed to `bash -c` inside the container.
    pub command: String,
    /// Working directory inside the container.
    pub work_dir: Option<String>,
    pub image: String,
    /// Host user ID, exported as `HOST_UID`.
    pub uid: Option<String>,
    /// Host group ID, exported as `HOST_GID`.
    pub gid: Option<String>,
    /// Volume mounts in the engine's `-v` syntax.
    pub volumes: Vec<String>,
    /// Extra `run` options, inserted verbatim before the image.
    pub extra_options: Vec<String>,
    /// Print the assembled command line before running it.
    pub debug: bool,
}

impl RunSpec {
    pub fn new(image: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            command: command.into(),
            ..Default::default()
        }
    }

    pub fn work_dir(mut self, dir: impl Into<String>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    pub fn host_ids(mut self, uid: impl Into<String>, gid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self.gid = Some(gid.into());
        self
    }

    pub fn volume(mut self, mount: impl Into<String>) -> Self {
        self.volumes.push(mount.into());
        self
    }

    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.extra_options.push(option.into());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Operation tokens for this run, before global flags are added.
    pub fn operation_args(&self, host: HostOs) -> Vec<String> {
        let mut args = vec!["run".to_string(), "--rm".to_string()];

        if host != HostOs::Windows {
            if let Some(uid) = forwarded_id(self.uid.as_deref()) {
                args.push("-e".to_string());
                args.push(format!("HOST_UID={uid}"));
            }
            if let Some(gid) = forwarded_id(self.gid.as_deref()) {
                args.push("-e".to_string());
                args.push(format!("HOST_GID={gid}"));
            }
        }

        for volume in &self.volumes {
            args.push("-v".to_string());
            args.push(volume.clone());
        }

        if let Some(dir) = self.work_dir.as_deref().filter(|d| !d.is_empty()) {
            args.push("-w".to_string());
            args.push(dir.to_string());
        }

        args.extend(self.extra_options.iter().cloned());
        args.push(self.image.clone());
        args.extend(["bash".to_string(), "-c".to_string(), self.command.clone()]);
        args
    }
}

/// Root (`0`) and empty IDs are not forwarded.
fn forwarded_id(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.is_empty() && *id != "0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_run() {
        let spec = RunSpec::new("alpine:3", "echo hi");
        assert_eq!(
            spec.operation_args(HostOs::Unix),
            vec!["run", "--rm", "alpine:3", "bash", "-c", "echo hi"]
        );
    }

    #[test]
    fn full_run_order() {
        let spec = RunSpec::new("builder:latest", "make all")
            .host_ids("1000", "1001")
            .volume("/src:/work")
            .volume("cache:/root/.cache")
            .work_dir("/work")
            .option("--network")
            .option("host");

        assert_eq!(
            spec.operation_args(HostOs::Unix),
            vec![
                "run",
                "--rm",
                "-e",
                "HOST_UID=1000",
                "-e",
                "HOST_GID=1001",
                "-v",
                "/src:/work",
                "-v",
                "cache:/root/.cache",
                "-w",
                "/work",
                "--network",
                "host",
                "builder:latest",
                "bash",
                "-c",
                "make all",
            ]
        );
    }

    #[test]
    fn root_and_empty_ids_are_not_forwarded() {
        let spec = RunSpec::new("alpine", "id").host_ids("0", "");
        let args = spec.operation_args(HostOs::Unix);
        assert!(!args.iter().any(|a| a.starts_with("HOST_")));
    }

    #[test]
    fn ids_are_independent() {
        let spec = RunSpec::new("alpine", "id").host_ids("0", "1000");
        let args = spec.operation_args(HostOs::Unix);
        assert!(!args.iter().any(|a| a.starts_with("HOST_UID")));
        assert!(args.contains(&"HOST_GID=1000".to_string()));
    }

    #[test]
    fn windows_hosts_never_forward_ids() {
        let spec = RunSpec::new("alpine", "id").host_ids("1000", "1000");
        let args = spec.operation_args(HostOs::Windows);
        assert!(!args.iter().any(|a| a.starts_with("HOST_")));
    }

    #[test]
    fn command_stays_a_single_token() {
        let spec = RunSpec::new("alpine", "cd /tmp && ls -la | wc -l");
        let args = spec.operation_args(HostOs::Unix);
        assert_eq!(args.last().unwrap(), "cd /tmp && ls -la | wc -l");
    }
}
