//! Line pump feeding the converter stage: reads a byte stream in chunks
//! and sends each complete line as one token into the input channel.

use tokio::io::AsyncReadExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::StageError;

pub fn spawn_source<R>(
    mut rd: R,
    token_tx: mpsc::Sender<String>,
) -> JoinHandle<Result<u64, StageError>>
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = vec![0u8; 16 * 1024];
        let mut total = 0u64;
        let mut line_buf: Vec<u8> = Vec::with_capacity(8 * 1024);

        loop {
            let n = rd.read(&mut buf).await.map_err(|e| StageError::StreamIo {
                stream: "input",
                source: e,
            })?;
            if n == 0 {
                break;
            }
            total += n as u64;

            line_buf.extend_from_slice(&buf[..n]);
            while let Some(pos) = line_buf.iter().position(|&b| b == b'\n') {
                let mut one = line_buf.drain(..=pos).collect::<Vec<u8>>();
                trim_newline(&mut one);
                let token = String::from_utf8_lossy(&one).to_string();
                if token_tx.send(token).await.is_err() {
                    // stage gone, stop reading
                    return Ok(total);
                }
            }
        }

        // EOF flush: deliver the last partial line if it doesn't end with '\n'.
        if !line_buf.is_empty() {
            trim_newline(&mut line_buf);
            if !line_buf.is_empty() {
                let token = String::from_utf8_lossy(&line_buf).to_string();
                let _ = token_tx.send(token).await;
            }
        }

        Ok(total)
    })
}

fn trim_newline(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
}
