// Teleop host loop: terminal keys in, velocity commands out
// Key capture runs on a blocking thread and feeds a channel; this task is the
// only one touching the controller, so events are applied strictly in order.
// A command is published once per key press, never on a timer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::{self, Event, KeyEvent};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

// local imports
use crate::config::{KEY_POLL_INTERVAL, TeleopConfig};
use crate::messages::VelocityCommand;
use crate::teleop::keys::is_interrupt;
use crate::teleop::{KeyInput, KeyOutcome, VelocityController};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub struct Teleop {
    controller: VelocityController,
}

impl Teleop {
    pub fn new(config: &TeleopConfig) -> Self {
        Self {
            controller: VelocityController::new(config.limits, config.steps),
        }
    }

    /// Process one terminal key event. `None` means nothing to publish
    /// (key release).
    pub fn handle(&mut self, event: &KeyEvent) -> Option<KeyOutcome> {
        if is_interrupt(event) {
            return Some(KeyOutcome::RequestShutdown);
        }
        let key = KeyInput::from_key_event(event)?;

        let was_stopped = self.controller.command().is_stopped();
        let outcome = self.controller.apply_key_event(key);
        if let KeyOutcome::Continue(cmd) = outcome {
            if cmd.is_stopped() && !was_stopped {
                info!("Stop!");
            }
        }
        Some(outcome)
    }

    /// Drop the command to zero
    pub fn stop(&mut self) {
        self.controller.reset();
    }

    pub fn command(&self) -> VelocityCommand {
        self.controller.command()
    }
}

/// Leaves raw mode when dropped, including on early return
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}

pub async fn run(config: TeleopConfig) -> Result<(), BoxError> {
    print_banner(&config);

    info!("Opening Zenoh session...");
    let session = zenoh::open(zenoh::Config::default()).await?;
    let publisher = session.declare_publisher(config.topic.clone()).await?;
    info!("Publishing to: {}", config.topic);

    let mut teleop = Teleop::new(&config);
    let stop_capture = Arc::new(AtomicBool::new(false));
    let (tx, mut rx) = mpsc::unbounded_channel();

    let raw_mode = RawModeGuard::enable()?;
    let capture = tokio::task::spawn_blocking({
        let stop_capture = Arc::clone(&stop_capture);
        move || capture_keys(tx, &stop_capture)
    });

    let result = drive(&mut teleop, &mut rx, &publisher).await;

    // Whatever ended the loop, leave the robot stopped
    teleop.stop();
    let final_stop = publish(&publisher, teleop.command()).await;

    stop_capture.store(true, Ordering::Relaxed);
    drop(rx);
    if let Err(e) = capture.await {
        warn!("Key capture thread failed: {}", e);
    }
    drop(raw_mode);

    info!("Closing Zenoh session...");
    session.close().await?;

    result?;
    final_stop
}

/// Apply key events until shutdown is requested
async fn drive(
    teleop: &mut Teleop,
    rx: &mut mpsc::UnboundedReceiver<KeyEvent>,
    publisher: &zenoh::pubsub::Publisher<'_>,
) -> Result<(), BoxError> {
    loop {
        let event = tokio::select! {
            event = rx.recv() => match event {
                Some(event) => event,
                None => {
                    warn!("Key capture ended, shutting down");
                    return Ok(());
                }
            },
            signal = tokio::signal::ctrl_c() => {
                signal?;
                info!("Interrupted, shutting down");
                return Ok(());
            }
        };

        match teleop.handle(&event) {
            None => {}
            Some(KeyOutcome::RequestShutdown) => {
                info!("Quit requested, shutting down");
                return Ok(());
            }
            Some(KeyOutcome::Continue(cmd)) => publish(publisher, cmd).await?,
        }
    }
}

async fn publish(publisher: &zenoh::pubsub::Publisher<'_>, cmd: VelocityCommand) -> Result<(), BoxError> {
    debug!("Publishing command: {:?}", cmd);
    let cmd_json = serde_json::to_string(&cmd)?;
    publisher.put(cmd_json).await?;
    Ok(())
}

/// Blocking key reader. Polls with a timeout so it can notice shutdown.
fn capture_keys(tx: mpsc::UnboundedSender<KeyEvent>, stop: &AtomicBool) {
    while !stop.load(Ordering::Relaxed) {
        match event::poll(KEY_POLL_INTERVAL) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(key).is_err() {
                        // Receiver gone
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("Failed to read key event: {}", e);
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                warn!("Failed to poll key events: {}", e);
                break;
            }
        }
    }
}

fn print_banner(config: &TeleopConfig) {
    info!(
        "Incremental keyboard teleop: every key press increases or decreases the respective speed"
    );
    info!("Controls: WASD or arrows = change speed, any other key = stop, q or Ctrl-C = quit");
    info!(
        "Increment per key press: {} m/s linear, {} rad/s angular",
        config.steps.linear_step, config.steps.angular_step
    );
    info!(
        "Max linear speed: {} m/s (forward only), max angular speed: +/-{} rad/s",
        config.limits.linear_max, config.limits.angular_max
    );
}
