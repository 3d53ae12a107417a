//! Push channel listener
//!
//! Connects to the backend WebSocket and forwards every recognized push
//! notification into the application event channel. The listener never
//! touches model state itself; ordering is preserved by the single consumer
//! draining the channel.

use std::time::Duration;

use futures_util::StreamExt;
use log::{debug, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::models::events::{AppEvent, PushEvent};

/// Run the push listener until the event channel closes. Reconnects with a
/// fixed delay whenever the connection drops.
pub async fn run_push_listener(
    ws_url: String,
    reconnect_seconds: u64,
    tx: UnboundedSender<AppEvent>,
) {
    loop {
        match connect_async(ws_url.as_str()).await {
            Ok((ws_stream, _)) => {
                debug!("Push channel connected: {}", ws_url);
                let _ = tx.send(AppEvent::PushConnected);

                let (_, mut read) = ws_stream.split();
                let reason = loop {
                    match read.next().await {
                        Some(Ok(Message::Text(text))) => handle_frame(&text, &tx),
                        Some(Ok(Message::Close(_))) => break "closed by server".to_string(),
                        Some(Err(e)) => break e.to_string(),
                        None => break "stream ended".to_string(),
                        _ => {}
                    }
                };
                let _ = tx.send(AppEvent::PushDisconnected(reason));
            }
            Err(e) => {
                warn!("Push channel connection failed: {}", e);
                let _ = tx.send(AppEvent::PushDisconnected(e.to_string()));
            }
        }

        if tx.is_closed() {
            return;
        }
        tokio::time::sleep(Duration::from_secs(reconnect_seconds)).await;
    }
}

fn handle_frame(text: &str, tx: &UnboundedSender<AppEvent>) {
    match serde_json::from_str::<PushEvent>(text) {
        Ok(event) => forward(event, tx),
        // Events this client does not consume (e.g. update progress) are
        // skipped without tearing the connection down
        Err(e) => debug!("Ignoring unrecognized push frame: {}", e),
    }
}

fn forward(event: PushEvent, tx: &UnboundedSender<AppEvent>) {
    let app_event = match event {
        PushEvent::LibraryUpdated(_) => AppEvent::LibraryChanged,
        PushEvent::ScanComplete(_) => AppEvent::ScanFinished,
        PushEvent::GameUpdated(entry) => AppEvent::GameUpdated(entry),
    };
    let _ = tx.send(app_event);
}
