use super::FormScreen;

impl FormScreen {
    /// Dispatch every async result that has already arrived.
    pub fn poll_action_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            any = true;
        }
        any
    }

    /// Wait for one async result and dispatch it.
    pub async fn next_action_message(&mut self) -> bool {
        match self.action_rx.recv().await {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Wait for the background post load to finish and merge its result.
    pub async fn wait_for_load(&mut self) {
        if let Some(handle) = self.load_task.take() {
            if let Err(err) = handle.await
                && !err.is_cancelled()
            {
                log::error!("post load task failed: {err}");
            }
            self.load_cancel_token = None;
        }
        self.poll_action_messages();
    }
}
