//! HTTP listener handle
//!
//! Launches Rocket on its own task and hands back a [`RunningListener`]
//! once the socket is bound. Shutdown is bounded: Rocket is notified,
//! gets the grace period to drain, and is aborted if it is still running
//! when the period elapses.

use std::net::SocketAddr;
use std::time::Duration;

use cpumon_domain::error::{Error, Result};
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

type LaunchResult = std::result::Result<(), String>;

/// Rocket application waiting to be launched
pub struct MetricsListener {
    rocket: Rocket<Build>,
    grace: Duration,
}

impl MetricsListener {
    /// Wrap a configured Rocket with the shutdown grace period
    pub fn new(rocket: Rocket<Build>, grace: Duration) -> Self {
        Self { rocket, grace }
    }

    /// Bind and start serving
    ///
    /// Resolves once Rocket has lifted off, or with [`Error::Listener`] if
    /// ignition or binding fails.
    pub async fn start(self) -> Result<RunningListener> {
        let (bound_tx, bound_rx) = oneshot::channel::<SocketAddr>();

        let rocket = self
            .rocket
            .attach(AdHoc::on_liftoff("Listener bound", move |rocket| {
                Box::pin(async move {
                    let config = rocket.config();
                    let _ = bound_tx.send(SocketAddr::new(config.address, config.port));
                })
            }))
            .ignite()
            .await
            .map_err(|e| Error::listener(format!("Rocket ignite failed: {e}")))?;

        let shutdown = rocket.shutdown();
        let mut task: JoinHandle<LaunchResult> = tokio::spawn(async move {
            rocket
                .launch()
                .await
                .map(|_| ())
                .map_err(|e| e.to_string())
        });

        tokio::select! {
            bound = bound_rx => match bound {
                Ok(local_addr) => {
                    info!(address = %local_addr, "Listening for metrics requests");
                    Ok(RunningListener {
                        local_addr,
                        shutdown,
                        task,
                        grace: self.grace,
                    })
                }
                // Liftoff never fired, so launch is failing
                Err(_) => Err(launch_failure(task.await)),
            },
            outcome = &mut task => Err(launch_failure(outcome)),
        }
    }
}

fn launch_failure(outcome: std::result::Result<LaunchResult, tokio::task::JoinError>) -> Error {
    match outcome {
        Ok(Ok(())) => Error::listener("Rocket exited before it started listening"),
        Ok(Err(message)) => Error::listener(format!("Rocket launch failed: {message}")),
        Err(e) => Error::listener_with_source("Listener task failed", e),
    }
}

/// A bound, serving listener
pub struct RunningListener {
    local_addr: SocketAddr,
    shutdown: rocket::Shutdown,
    task: JoinHandle<LaunchResult>,
    grace: Duration,
}

impl RunningListener {
    /// Address the listener is bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Resolves with the cause when the listener task ends on its own
    ///
    /// Cancel-safe. Once this has resolved the listener is gone and must
    /// not be shut down.
    pub async fn exited(&mut self) -> Error {
        match (&mut self.task).await {
            Ok(Ok(())) => Error::listener("Listener stopped unexpectedly"),
            other => launch_failure(other),
        }
    }

    /// Stop accepting connections and drain within the grace period
    ///
    /// Returns once the listener is gone. An `Err` means the drain did not
    /// finish cleanly; the listener is still torn down.
    pub async fn shutdown(mut self) -> Result<()> {
        info!(grace_secs = self.grace.as_secs(), "Shutting down listener");
        self.shutdown.clone().notify();

        match tokio::time::timeout(self.grace, &mut self.task).await {
            Ok(Ok(Ok(()))) => {
                debug!("Listener drained");
                Ok(())
            }
            Ok(Ok(Err(message))) => Err(Error::shutdown(message)),
            Ok(Err(e)) => Err(Error::shutdown(format!("Listener task failed: {e}"))),
            Err(_) => {
                warn!("Grace period elapsed, aborting listener");
                self.task.abort();
                // Wait for the abort so the socket is closed on return
                let _ = (&mut self.task).await;
                Err(Error::shutdown(format!(
                    "listener did not drain within {}s",
                    self.grace.as_secs()
                )))
            }
        }
    }
}

impl std::fmt::Debug for RunningListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunningListener")
            .field("local_addr", &self.local_addr)
            .field("grace", &self.grace)
            .finish_non_exhaustive()
    }
}
