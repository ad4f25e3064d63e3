use std::future::Future;
use std::pin::Pin;
use std::thread::JoinHandle;

/// Type alias for async task results
pub type AsyncTaskResult<T> = Result<T, String>;

/// Type alias for boxed async tasks
pub type AsyncTask<T> = Pin<Box<dyn Future<Output = AsyncTaskResult<T>> + Send + 'static>>;

/// Spawns a background thread that runs an async task and sends the result via a channel
///
/// The UI thread polls the receiver from the update loop; the worker thread
/// exits after sending the result.
///
/// # Example
/// ```ignore
/// let (tx, rx) = std::sync::mpsc::channel();
/// spawn_and_send(
///     move || Box::pin(async move {
///         api::tracks::fetch_tracks(&config, &query, 20).await
///             .map_err(|e| e.to_string())
///     }),
///     tx
/// );
/// // Later: let result = rx.try_recv();
/// ```
pub fn spawn_and_send<F, T>(
    task_factory: F,
    tx: std::sync::mpsc::Sender<AsyncTaskResult<T>>,
) -> JoinHandle<()>
where
    F: FnOnce() -> AsyncTask<T> + Send + 'static,
    T: Send + 'static,
{
    std::thread::spawn(move || {
        let rt = match crate::utils::error_handling::create_runtime() {
            Ok(r) => r,
            Err(e) => {
                log::error!("[AsyncHelper] Failed to create runtime: {}", e);
                let _ = tx.send(Err(e));
                return;
            }
        };

        let result = rt.block_on(task_factory());
        let _ = tx.send(result);
    })
}

/// Fire-and-forget spawn for tasks where you don't need the result
///
/// Used for best-effort writes like play-history logging: failures are the
/// task's problem to log, and the caller never blocks on them.
///
/// # Example
/// ```ignore
/// spawn_fire_and_forget(move || {
///     Box::pin(async move {
///         store.record_play(uid, &event).map_err(|e| e.to_string())
///     })
/// });
/// ```
pub fn spawn_fire_and_forget<F, T>(task_factory: F)
where
    F: FnOnce() -> AsyncTask<T> + Send + 'static,
    T: Send + 'static,
{
    std::thread::spawn(move || {
        let rt = match crate::utils::error_handling::create_runtime() {
            Ok(r) => r,
            Err(e) => {
                log::error!("[AsyncHelper] Failed to create runtime: {}", e);
                return;
            }
        };

        let _ = rt.block_on(task_factory());
    });
}
