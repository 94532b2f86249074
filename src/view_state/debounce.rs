//! Debounce para la búsqueda por texto libre
//!
//! Solo el último valor tras un periodo de silencio dispara la búsqueda.

use std::time::Duration;

use tokio::sync::mpsc;

/// Extremo emisor: la UI envía cada pulsación
#[derive(Debug, Clone)]
pub struct DebounceSender<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T> DebounceSender<T> {
    /// Devuelve false si el receptor ya no existe
    pub fn send(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}

/// Extremo receptor: entrega valores estables
#[derive(Debug)]
pub struct Debounced<T> {
    rx: mpsc::UnboundedReceiver<T>,
    quiet: Duration,
}

pub fn debounce_channel<T>(quiet: Duration) -> (DebounceSender<T>, Debounced<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DebounceSender { tx }, Debounced { rx, quiet })
}

impl<T> Debounced<T> {
    /// Esperar el siguiente valor estable
    ///
    /// `None` cuando todos los emisores se cerraron y no queda nada pendiente.
    pub async fn next(&mut self) -> Option<T> {
        let mut latest = self.rx.recv().await?;
        loop {
            match tokio::time::timeout(self.quiet, self.rx.recv()).await {
                Ok(Some(value)) => latest = value,
                Ok(None) | Err(_) => return Some(latest),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_value_after_quiet_period() {
        let (tx, mut rx) = debounce_channel(Duration::from_millis(300));

        let typing = tokio::spawn(async move {
            for term in ["g", "gl", "glv"] {
                tx.send(term.to_string());
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            tokio::time::sleep(Duration::from_millis(500)).await;
            tx.send("glv-lat".to_string());
        });

        assert_eq!(rx.next().await.as_deref(), Some("glv"));
        assert_eq!(rx.next().await.as_deref(), Some("glv-lat"));
        typing.await.unwrap();
        assert_eq!(rx.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_sender_flushes_pending_value() {
        let (tx, mut rx) = debounce_channel(Duration::from_millis(400));
        tx.send(1);
        tx.send(2);
        drop(tx);
        assert_eq!(rx.next().await, Some(2));
        assert_eq!(rx.next().await, None);
    }
}
