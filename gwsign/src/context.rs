use gwsign_core::{Context, OsEnv};
use gwsign_file_read_tokio::TokioFileRead;
use gwsign_http_send_reqwest::ReqwestHttpSend;

/// Create a [`Context`] wired with the default capabilities.
///
/// The default context reads files through tokio, sends HTTP requests
/// through a shared reqwest client and exposes the process environment.
pub fn default_context() -> Context {
    Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
