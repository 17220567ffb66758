use heaptrim_core::{trace, warn};
use tokio::signal;

/// Wait for a request to stop; returns the name of the signal received.
#[cfg(unix)]
#[tracing::instrument(skip_all)]
pub(super) async fn signal() -> &'static str {
	use signal::unix;
	use unix::SignalKind;

	let mut quit = unix::signal(SignalKind::quit()).expect("SIGQUIT handler");
	let mut term = unix::signal(SignalKind::terminate()).expect("SIGTERM handler");

	trace!("Installed signal handlers");
	let sig: &'static str;
	tokio::select! {
		_ = signal::ctrl_c() => { sig = "SIGINT"; },
		_ = quit.recv() => { sig = "SIGQUIT"; },
		_ = term.recv() => { sig = "SIGTERM"; },
	}

	warn!("Received {sig}");
	sig
}

#[cfg(not(unix))]
#[tracing::instrument(skip_all)]
pub(super) async fn signal() -> &'static str {
	signal::ctrl_c().await.ok();
	warn!("Received Ctrl+C");
	"SIGINT"
}
