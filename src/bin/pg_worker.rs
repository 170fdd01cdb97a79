//! Runs embedded `PostgreSQL` lifecycle steps on behalf of a root test run.
//!
//! Usage:
//!
//! ```text
//! pg_worker <setup|start|stop> <config-path>
//! ```
//!
//! The file at `config-path` holds a JSON [`WorkerPayload`]: the cluster
//! settings plus environment overrides. When started as root the worker
//! re-executes itself as `nobody`, because `initdb` and `postgres` refuse to
//! run with superuser privileges. The integration test harness points
//! `PG_EMBEDDED_WORKER` at this binary.

#[cfg(unix)]
use camino::{Utf8Path, Utf8PathBuf};
#[cfg(unix)]
use nix::unistd::{Uid, User, initgroups, setgid, setuid};
#[cfg(unix)]
use pg_embedded_setup_unpriv::ambient_dir_and_path;
#[cfg(unix)]
use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
#[cfg(unix)]
use postgresql_embedded::{PostgreSQL, Status};
#[cfg(unix)]
use std::env;
#[cfg(unix)]
use std::ffi::CString;
#[cfg(unix)]
use std::io::Read;
#[cfg(unix)]
use std::process::Command;
#[cfg(unix)]
use thiserror::Error;
#[cfg(unix)]
use tokio::runtime::Builder;

#[cfg(unix)]
const REEXEC_MARKER: &str = "PG_WORKER_REEXEC";
#[cfg(unix)]
const TRUSTED_PATH: &str = "/usr/sbin:/usr/bin:/sbin:/bin";
#[cfg(unix)]
const UNPRIVILEGED_USER: &str = "nobody";

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while running a lifecycle step.
#[cfg(unix)]
#[derive(Debug, Error)]
enum WorkerError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to read worker config: {0}")]
    ConfigRead(#[source] BoxError),
    #[error("failed to parse worker config: {0}")]
    ConfigParse(#[source] serde_json::Error),
    #[error("settings conversion failed: {0}")]
    Settings(String),
    #[error("runtime init failed: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to drop privileges: {0}")]
    PrivilegeDrop(String),
    #[error("postgres {step} failed: {message}")]
    Postgres { step: &'static str, message: String },
}

#[cfg(unix)]
#[derive(Debug, Clone, Copy)]
enum Step {
    Setup,
    Start,
    Stop,
}

#[cfg(unix)]
impl Step {
    fn parse(arg: &str) -> Result<Self, WorkerError> {
        match arg {
            "setup" => Ok(Self::Setup),
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            other => Err(WorkerError::InvalidArgs(format!(
                "unknown step '{other}'; expected setup, start, or stop"
            ))),
        }
    }
}

#[cfg(unix)]
fn main() -> Result<(), BoxError> {
    let args = collect_args()?;
    reexec_unprivileged(&args)?;
    run(&args).map_err(Into::into)
}

#[cfg(not(unix))]
fn main() -> Result<(), BoxError> {
    Err("pg_worker is only supported on Unix platforms".into())
}

#[cfg(unix)]
fn collect_args() -> Result<Vec<Utf8PathBuf>, WorkerError> {
    env::args_os()
        .map(|arg| {
            arg.into_string()
                .map(Utf8PathBuf::from)
                .map_err(|_| WorkerError::InvalidArgs("argument is not valid UTF-8".into()))
        })
        .collect()
}

#[cfg(unix)]
fn parse_args(args: &[Utf8PathBuf]) -> Result<(Step, &Utf8Path), WorkerError> {
    match args {
        [_, step, config] => Ok((Step::parse(step.as_str())?, config.as_path())),
        [_] | [_, _] => Err(WorkerError::InvalidArgs(
            "expected a step and a config path".into(),
        )),
        _ => Err(WorkerError::InvalidArgs("too many arguments".into())),
    }
}

#[cfg(unix)]
fn run(args: &[Utf8PathBuf]) -> Result<(), WorkerError> {
    let (step, config_path) = parse_args(args)?;
    let payload = load_payload(config_path)?;
    drop_privileges(UNPRIVILEGED_USER)?;
    let settings = payload
        .settings
        .into_settings()
        .map_err(|err| WorkerError::Settings(err.to_string()))?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(WorkerError::Runtime)?;
    apply_environment(&payload.environment);

    let mut postgres = PostgreSQL::new(settings);
    runtime.block_on(async move {
        match step {
            Step::Setup => {
                postgres
                    .setup()
                    .await
                    .map_err(|err| postgres_failure("setup", &err))?;
                start(&mut postgres).await
            }
            Step::Start => {
                start(&mut postgres).await?;
                // The server must outlive this process.
                let _running = std::mem::ManuallyDrop::new(postgres);
                Ok(())
            }
            Step::Stop => postgres
                .stop()
                .await
                .map_err(|err| postgres_failure("stop", &err)),
        }
    })
}

#[cfg(unix)]
async fn start(postgres: &mut PostgreSQL) -> Result<(), WorkerError> {
    if matches!(postgres.status(), Status::Started) {
        return Ok(());
    }
    postgres
        .start()
        .await
        .map_err(|err| postgres_failure("start", &err))
}

#[cfg(unix)]
fn postgres_failure(step: &'static str, err: &impl std::fmt::Display) -> WorkerError {
    WorkerError::Postgres {
        step,
        message: err.to_string(),
    }
}

#[cfg(unix)]
fn load_payload(config_path: &Utf8Path) -> Result<WorkerPayload, WorkerError> {
    let bytes = read_file(config_path).map_err(WorkerError::ConfigRead)?;
    serde_json::from_slice(&bytes).map_err(WorkerError::ConfigParse)
}

#[cfg(unix)]
fn read_file(path: &Utf8Path) -> Result<Vec<u8>, BoxError> {
    let (dir, relative) = ambient_dir_and_path(path)?;
    let mut file = dir.open(relative.as_std_path())?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Re-runs the worker as the unprivileged user when invoked as root.
///
/// Returns only when no re-execution is needed; otherwise the process exits
/// with the child's status.
#[cfg(unix)]
fn reexec_unprivileged(args: &[Utf8PathBuf]) -> Result<(), WorkerError> {
    if !Uid::effective().is_root() || env::var_os(REEXEC_MARKER).is_some() {
        return Ok(());
    }

    let exe = env::current_exe()
        .map_err(WorkerError::Runtime)?
        .into_os_string()
        .into_string()
        .map_err(|_| WorkerError::Runtime(std::io::Error::other("executable path is not UTF-8")))?;
    let forwarded: Vec<&str> = args.iter().skip(1).map(|arg| arg.as_str()).collect();

    let status = match Command::new("runuser")
        .args(["-u", UNPRIVILEGED_USER, "--", exe.as_str()])
        .args(&forwarded)
        .env(REEXEC_MARKER, "1")
        .env("PATH", TRUSTED_PATH)
        .status()
    {
        Ok(status) => status,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let mut command = format!("{REEXEC_MARKER}=1 exec {}", shell_quote(&exe));
            for arg in &forwarded {
                command.push(' ');
                command.push_str(&shell_quote(arg));
            }
            Command::new("/bin/su")
                .args(["-s", "/bin/sh", UNPRIVILEGED_USER, "-c", command.as_str()])
                .env("PATH", TRUSTED_PATH)
                .status()
                .map_err(|su_err| WorkerError::PrivilegeDrop(su_err.to_string()))?
        }
        Err(err) => return Err(WorkerError::PrivilegeDrop(err.to_string())),
    };

    std::process::exit(status.code().unwrap_or(1));
}

#[cfg(unix)]
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

#[cfg(unix)]
fn drop_privileges(username: &str) -> Result<(), WorkerError> {
    if !Uid::effective().is_root() {
        return Ok(());
    }

    let user = User::from_name(username)
        .map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?
        .ok_or_else(|| WorkerError::PrivilegeDrop(format!("user '{username}' not found")))?;
    let name = CString::new(user.name.clone())
        .map_err(|err| WorkerError::PrivilegeDrop(format!("invalid user name: {err}")))?;
    initgroups(&name, user.gid).map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;
    setgid(user.gid).map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;
    setuid(user.uid).map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;

    // SAFETY: the worker is single-threaded until the runtime is built.
    unsafe {
        env::set_var("HOME", user.dir);
        env::set_var("USER", &user.name);
        env::set_var("LOGNAME", &user.name);
    }
    Ok(())
}

#[cfg(unix)]
fn apply_environment(environment: &[(String, Option<PlainSecret>)]) {
    for (key, value) in environment {
        // SAFETY: the current-thread runtime has no worker threads reading
        // the environment concurrently.
        unsafe {
            match value {
                Some(plain) => env::set_var(key, plain.expose()),
                None => env::remove_var(key),
            }
        }
    }
}
