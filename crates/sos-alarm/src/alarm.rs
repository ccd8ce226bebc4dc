//! The combined alarm: background sound plus a notification.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::AlarmError;
use crate::notifier::{DesktopNotifier, Notifier};
use crate::player::{default_player, AlertPlayer};

/// Sound and notification collaborators chosen once at startup.
#[derive(Clone)]
pub struct Alarm {
    player: Arc<dyn AlertPlayer>,
    notifier: Arc<dyn Notifier>,
}

impl Alarm {
    pub fn new(player: Arc<dyn AlertPlayer>, notifier: Arc<dyn Notifier>) -> Self {
        Self { player, notifier }
    }

    /// Native player for this platform and desktop notifications.
    pub fn platform_default() -> Self {
        Self::new(default_player(), Arc::new(DesktopNotifier::new()))
    }

    /// Raises the alarm for `message`.
    ///
    /// The sound is started on a detached task and is not awaited. The
    /// notification is shown before this returns. Collaborator failures are
    /// logged and never returned.
    pub async fn trigger(&self, message: &str) {
        self.spawn_sound();
        self.show_notification(message).await;
    }

    /// Starts the alert sound on its own task.
    ///
    /// The task is never joined and cannot be cancelled: its handle is
    /// dropped here, so it may outlive the request that started it and
    /// interleave with sounds from other requests. Players terminate on
    /// their own.
    fn spawn_sound(&self) {
        let player = Arc::clone(&self.player);
        tokio::spawn(async move {
            match player.play_alert().await {
                Ok(()) => debug!("Alert sound finished"),
                Err(e) => warn!("Error playing sound: {}", e),
            }
        });
    }

    async fn show_notification(&self, message: &str) {
        let notifier = Arc::clone(&self.notifier);
        let message = message.to_string();

        let result = tokio::task::spawn_blocking(move || notifier.notify(&message))
            .await
            .map_err(|e| AlarmError::Join(e.to_string()))
            .and_then(|r| r);

        if let Err(e) = result {
            warn!("Error showing notification: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) -> Result<(), AlarmError> {
            self.messages.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn notify(&self, _message: &str) -> Result<(), AlarmError> {
            Err(AlarmError::Notification("no notification daemon".into()))
        }
    }

    struct PanickingNotifier;

    impl Notifier for PanickingNotifier {
        fn notify(&self, _message: &str) -> Result<(), AlarmError> {
            panic!("notifier exploded");
        }
    }

    #[derive(Default)]
    struct CountingPlayer {
        plays: AtomicUsize,
    }

    #[async_trait]
    impl AlertPlayer for CountingPlayer {
        async fn play_alert(&self) -> Result<(), AlarmError> {
            self.plays.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct SlowPlayer(Duration);

    #[async_trait]
    impl AlertPlayer for SlowPlayer {
        async fn play_alert(&self) -> Result<(), AlarmError> {
            tokio::time::sleep(self.0).await;
            Ok(())
        }
    }

    struct FailingPlayer;

    #[async_trait]
    impl AlertPlayer for FailingPlayer {
        async fn play_alert(&self) -> Result<(), AlarmError> {
            Err(AlarmError::Join("speaker unplugged".into()))
        }
    }

    async fn wait_for_plays(player: &CountingPlayer, expected: usize) -> bool {
        for _ in 0..100 {
            if player.plays.load(Ordering::SeqCst) >= expected {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        false
    }

    #[tokio::test]
    async fn test_trigger_notifies_and_plays() {
        let player = Arc::new(CountingPlayer::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let alarm = Alarm::new(player.clone(), notifier.clone());

        alarm.trigger("help at gate 3").await;

        assert_eq!(*notifier.messages.lock().unwrap(), vec!["help at gate 3".to_string()]);
        assert!(wait_for_plays(&player, 1).await);
    }

    #[tokio::test]
    async fn test_trigger_does_not_wait_for_sound() {
        let alarm = Alarm::new(
            Arc::new(SlowPlayer(Duration::from_secs(30))),
            Arc::new(RecordingNotifier::default()),
        );

        let start = Instant::now();
        alarm.trigger("slow").await;
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_collaborator_failures_are_swallowed() {
        let alarm = Alarm::new(Arc::new(FailingPlayer), Arc::new(FailingNotifier));
        alarm.trigger("still fine").await;
    }

    #[tokio::test]
    async fn test_notifier_panic_is_swallowed() {
        let player = Arc::new(CountingPlayer::default());
        let alarm = Alarm::new(player.clone(), Arc::new(PanickingNotifier));

        alarm.trigger("boom").await;
        assert!(wait_for_plays(&player, 1).await);
    }

    #[tokio::test]
    async fn test_each_trigger_spawns_its_own_sound() {
        let player = Arc::new(CountingPlayer::default());
        let alarm = Alarm::new(player.clone(), Arc::new(RecordingNotifier::default()));

        for i in 0..3 {
            alarm.trigger(&format!("sos {i}")).await;
        }
        assert!(wait_for_plays(&player, 3).await);
    }
}
