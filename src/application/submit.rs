//! Submit reporting: walks the store in display order and hands each post to a sink.

use std::io::Write;

use anyhow::Context;

use crate::domain::{Post, PostStore, SubmitError};

/// Destination for submitted posts.
pub trait SubmitSink: Send {
    fn send(&mut self, id: &str, post: &Post) -> anyhow::Result<()>;
}

/// Collected posts in store order. Nothing is consumed until iterated.
pub fn submit(store: &PostStore) -> impl Iterator<Item = (&str, &Post)> {
    store.iter()
}

/// Push every post through `sink`, stopping at the first failure.
pub fn report(store: &PostStore, sink: &mut dyn SubmitSink) -> Result<usize, SubmitError> {
    let mut sent = 0;
    for (id, post) in submit(store) {
        sink.send(id, post).map_err(|source| SubmitError::Sink {
            post_id: id.to_string(),
            source,
        })?;
        sent += 1;
    }
    Ok(sent)
}

/// Writes each post to the diagnostic log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmitSink for LogSink {
    fn send(&mut self, id: &str, post: &Post) -> anyhow::Result<()> {
        log::info!(target: "postform::submit", "{id}: {post:?}");
        Ok(())
    }
}

/// One JSON document per line.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> SubmitSink for JsonLinesSink<W> {
    fn send(&mut self, id: &str, post: &Post) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, post)
            .with_context(|| format!("serializing post {id}"))?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
